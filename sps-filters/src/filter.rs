//! A single named photometric bandpass

use std::fmt;
use std::sync::Arc;

use serde::Serialize;

use crate::error::FilterError;
use crate::tables::{ReferenceTables, TableKind, AB_COLUMN, LAMBDA_EFF_COLUMN, VEGA_COLUMN};

/// One entry of the filter catalog.
///
/// The record itself is immutable. The calibration constants are read from
/// the reference tables shared by every filter of the same catalog, which are
/// loaded on first use.
#[derive(Clone)]
pub struct Filter {
    /// Zero-based row in the reference tables
    index: usize,
    /// Lowercased short name, unique within a catalog
    name: String,
    /// Free-text description of the bandpass
    fullname: String,
    tables: Arc<ReferenceTables>,
}

impl Filter {
    /// Create a filter from its one-based catalog position.
    ///
    /// Nothing is validated here; a position past the end of the reference
    /// tables only shows up when a calibration value is requested.
    pub fn new(
        declared_index: usize,
        name: &str,
        fullname: &str,
        tables: Arc<ReferenceTables>,
    ) -> Self {
        Self {
            index: declared_index.saturating_sub(1),
            name: name.to_lowercase(),
            fullname: fullname.to_string(),
            tables,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn fullname(&self) -> &str {
        &self.fullname
    }

    /// Solar absolute magnitude in this filter, AB zeropoint
    pub fn solar_magnitude_ab(&self) -> Result<f64, FilterError> {
        self.tables.value(TableKind::SolarMagnitude, self.index, AB_COLUMN)
    }

    /// Solar absolute magnitude in this filter, Vega zeropoint
    pub fn solar_magnitude_vega(&self) -> Result<f64, FilterError> {
        self.tables.value(TableKind::SolarMagnitude, self.index, VEGA_COLUMN)
    }

    /// Effective wavelength of this filter in Angstroms
    pub fn effective_wavelength(&self) -> Result<f64, FilterError> {
        self.tables.value(TableKind::EffectiveWavelength, self.index, LAMBDA_EFF_COLUMN)
    }

    /// Snapshot of the metadata and calibration constants
    pub fn summary(&self) -> Result<FilterSummary, FilterError> {
        Ok(FilterSummary {
            index: self.index,
            name: self.name.clone(),
            fullname: self.fullname.clone(),
            solar_magnitude_ab: Some(self.solar_magnitude_ab()?),
            solar_magnitude_vega: Some(self.solar_magnitude_vega()?),
            effective_wavelength: Some(self.effective_wavelength()?),
        })
    }

    /// Metadata only, without touching the reference tables
    pub fn metadata(&self) -> FilterSummary {
        FilterSummary {
            index: self.index,
            name: self.name.clone(),
            fullname: self.fullname.clone(),
            solar_magnitude_ab: None,
            solar_magnitude_vega: None,
            effective_wavelength: None,
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<Filter({})>", self.name)
    }
}

impl fmt::Debug for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

/// Serializable view of a [`Filter`]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilterSummary {
    pub index: usize,
    pub name: String,
    pub fullname: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub solar_magnitude_ab: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub solar_magnitude_vega: Option<f64>,
    /// Angstroms
    #[serde(skip_serializing_if = "Option::is_none")]
    pub effective_wavelength: Option<f64>,
}
