//! Reference tables for solar magnitudes and effective wavelengths
//!
//! Both tables are plain whitespace-delimited numeric text with one row per
//! catalog filter, in declared-index order:
//!
//! * `data/magsun.dat` - `[reference_id, M_sun(AB), M_sun(Vega)]`
//! * `data/filter_lambda_eff.dat` - `[reference_id, lambda_eff (Angstrom)]`
//!
//! Each table is read at most once per [`ReferenceTables`] and then kept for
//! the life of that cache.

use std::fmt;
use std::path::Path;

use ndarray::Array2;
use once_cell::sync::OnceCell;

use crate::config::ReferenceConfig;
use crate::error::FilterError;

/// Column holding the AB-system solar absolute magnitude
pub(crate) const AB_COLUMN: usize = 1;

/// Column holding the Vega-system solar absolute magnitude
pub(crate) const VEGA_COLUMN: usize = 2;

/// Column holding the effective wavelength in Angstroms
pub(crate) const LAMBDA_EFF_COLUMN: usize = 1;

/// The two reference tables a filter can read from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TableKind {
    /// Solar absolute magnitudes (AB and Vega zeropoints)
    SolarMagnitude,
    /// Effective wavelengths in Angstroms
    EffectiveWavelength,
}

impl TableKind {
    pub const ALL: [TableKind; 2] = [TableKind::SolarMagnitude, TableKind::EffectiveWavelength];

    /// Path of the table relative to the SPS data root
    pub fn relative_path(self) -> &'static str {
        match self {
            TableKind::SolarMagnitude => "data/magsun.dat",
            TableKind::EffectiveWavelength => "data/filter_lambda_eff.dat",
        }
    }

    /// Minimum column count a well-formed table of this kind carries
    pub fn required_columns(self) -> usize {
        match self {
            TableKind::SolarMagnitude => VEGA_COLUMN + 1,
            TableKind::EffectiveWavelength => LAMBDA_EFF_COLUMN + 1,
        }
    }
}

impl fmt::Display for TableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableKind::SolarMagnitude => write!(f, "solar magnitude"),
            TableKind::EffectiveWavelength => write!(f, "effective wavelength"),
        }
    }
}

/// Parse a whitespace-delimited numeric table.
///
/// Blank lines are skipped and `#` starts a comment running to end of line.
/// Every data row must have the same number of columns. `path` is only used
/// to label errors.
pub fn parse_table(text: &str, path: &Path) -> Result<Array2<f64>, FilterError> {
    let mut rows: Vec<Vec<f64>> = Vec::new();

    for (line_no, line) in text.lines().enumerate() {
        let content = match line.split_once('#') {
            Some((before, _)) => before,
            None => line,
        };

        let mut row = Vec::new();
        for token in content.split_whitespace() {
            let value = token.parse::<f64>().map_err(|_| FilterError::Parse {
                path: path.to_path_buf(),
                line: line_no + 1,
                token: token.to_string(),
            })?;
            row.push(value);
        }

        if row.is_empty() {
            continue;
        }

        if let Some(first) = rows.first() {
            if first.len() != row.len() {
                return Err(FilterError::Ragged {
                    path: path.to_path_buf(),
                    line: line_no + 1,
                    expected: first.len(),
                    found: row.len(),
                });
            }
        }

        rows.push(row);
    }

    let columns = match rows.first() {
        Some(first) => first.len(),
        None => {
            return Err(FilterError::Empty {
                path: path.to_path_buf(),
            })
        }
    };

    let mut data = Array2::zeros((rows.len(), columns));
    for (i, row) in rows.iter().enumerate() {
        for (j, &val) in row.iter().enumerate() {
            data[[i, j]] = val;
        }
    }

    Ok(data)
}

/// Where reference tables come from.
///
/// [`FileTableSource`] reads the files under the SPS data root. Tests can
/// plug in their own source to count or fake loads.
pub trait TableSource: Send + Sync {
    fn read_table(&self, kind: TableKind) -> Result<Array2<f64>, FilterError>;
}

/// Reads reference tables from disk
#[derive(Debug, Clone)]
pub struct FileTableSource {
    config: ReferenceConfig,
}

impl FileTableSource {
    pub fn new(config: ReferenceConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ReferenceConfig {
        &self.config
    }
}

impl TableSource for FileTableSource {
    fn read_table(&self, kind: TableKind) -> Result<Array2<f64>, FilterError> {
        let path = self.config.table_path(kind);
        let text = std::fs::read_to_string(&path).map_err(|source| FilterError::Io {
            path: path.clone(),
            source,
        })?;
        parse_table(&text, &path)
    }
}

/// Lazily loaded, shared reference tables.
///
/// Each table sits behind a one-time-initialization cell. Concurrent first
/// accesses block on a single load instead of racing to read the file twice.
/// A failed load leaves the cell empty, so a later access will try again.
pub struct ReferenceTables {
    source: Box<dyn TableSource>,
    solar_magnitude: OnceCell<Array2<f64>>,
    effective_wavelength: OnceCell<Array2<f64>>,
}

impl ReferenceTables {
    pub fn new(source: impl TableSource + 'static) -> Self {
        Self {
            source: Box::new(source),
            solar_magnitude: OnceCell::new(),
            effective_wavelength: OnceCell::new(),
        }
    }

    /// Tables read from the files under `config`'s root
    pub fn from_config(config: ReferenceConfig) -> Self {
        Self::new(FileTableSource::new(config))
    }

    fn cell(&self, kind: TableKind) -> &OnceCell<Array2<f64>> {
        match kind {
            TableKind::SolarMagnitude => &self.solar_magnitude,
            TableKind::EffectiveWavelength => &self.effective_wavelength,
        }
    }

    /// Whether `kind` has already been loaded into the cache
    pub fn is_loaded(&self, kind: TableKind) -> bool {
        self.cell(kind).get().is_some()
    }

    /// Get the table for `kind`, loading it on first use
    pub fn table(&self, kind: TableKind) -> Result<&Array2<f64>, FilterError> {
        self.cell(kind).get_or_try_init(|| {
            log::debug!("Loading {kind} table");
            let table = self.source.read_table(kind)?;
            log::debug!(
                "Loaded {kind} table with {} rows and {} columns",
                table.nrows(),
                table.ncols()
            );
            Ok(table)
        })
    }

    /// Read a single cell, loading the table on first use
    pub fn value(&self, kind: TableKind, row: usize, column: usize) -> Result<f64, FilterError> {
        let table = self.table(kind)?;
        let (rows, columns) = table.dim();

        if row >= rows {
            return Err(FilterError::RowOutOfRange {
                table: kind,
                row,
                rows,
            });
        }
        if column >= columns {
            return Err(FilterError::ColumnOutOfRange {
                table: kind,
                column,
                columns,
            });
        }

        Ok(table[[row, column]])
    }
}

impl fmt::Debug for ReferenceTables {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReferenceTables")
            .field("solar_magnitude_loaded", &self.is_loaded(TableKind::SolarMagnitude))
            .field(
                "effective_wavelength_loaded",
                &self.is_loaded(TableKind::EffectiveWavelength),
            )
            .finish()
    }
}
