//! End-to-end checks of the filter catalog against reference tables on disk

use std::fs;
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use approx::assert_relative_eq;
use ndarray::Array2;
use sps_filters::{
    FileTableSource, FilterCatalog, FilterError, ReferenceConfig, TableKind, TableSource,
    FILTER_DEFINITIONS,
};
use tempfile::TempDir;

fn magsun_row(i: usize) -> (f64, f64) {
    (4.0 + i as f64 * 0.01, 4.5 + i as f64 * 0.02)
}

fn lambda_row(i: usize) -> f64 {
    1000.0 + i as f64 * 250.0
}

/// Write both reference tables with `rows` rows under `<root>/data`
fn write_tables(root: &Path, rows: usize) {
    let data = root.join("data");
    fs::create_dir_all(&data).unwrap();

    let mut magsun = String::from("# id   M_AB   M_Vega\n");
    let mut lambda = String::from("# id   lambda_eff\n");
    for i in 0..rows {
        let (ab, vega) = magsun_row(i);
        magsun.push_str(&format!("{} {ab:.4} {vega:.4}\n", i + 1));
        lambda.push_str(&format!("{}  {:.2}\n", i + 1, lambda_row(i)));
    }

    fs::write(data.join("magsun.dat"), magsun).unwrap();
    fs::write(data.join("filter_lambda_eff.dat"), lambda).unwrap();
}

/// Wraps the file source and counts how often each table is read
struct CountingFiles {
    inner: FileTableSource,
    loads: Arc<AtomicUsize>,
}

impl TableSource for CountingFiles {
    fn read_table(&self, kind: TableKind) -> Result<Array2<f64>, FilterError> {
        self.loads.fetch_add(1, Ordering::SeqCst);
        self.inner.read_table(kind)
    }
}

#[test]
fn test_values_match_file_rows() {
    let dir = TempDir::new().unwrap();
    write_tables(dir.path(), FILTER_DEFINITIONS.len());
    let catalog = FilterCatalog::with_config(ReferenceConfig::with_root(dir.path()));

    for filter in &catalog {
        let (ab, vega) = magsun_row(filter.index());
        assert_relative_eq!(filter.solar_magnitude_ab().unwrap(), ab, epsilon = 1e-9);
        assert_relative_eq!(filter.solar_magnitude_vega().unwrap(), vega, epsilon = 1e-9);
        assert_relative_eq!(
            filter.effective_wavelength().unwrap(),
            lambda_row(filter.index()),
            epsilon = 1e-9
        );
    }

    assert!(catalog.verify_reference_tables().is_ok());
}

#[test]
fn test_each_table_is_read_once() {
    let dir = TempDir::new().unwrap();
    write_tables(dir.path(), FILTER_DEFINITIONS.len());

    let loads = Arc::new(AtomicUsize::new(0));
    let catalog = FilterCatalog::with_source(CountingFiles {
        inner: FileTableSource::new(ReferenceConfig::with_root(dir.path())),
        loads: loads.clone(),
    });
    assert_eq!(loads.load(Ordering::SeqCst), 0);

    catalog["sdss_g"].solar_magnitude_ab().unwrap();
    assert_eq!(loads.load(Ordering::SeqCst), 1);

    catalog["sdss_g"].solar_magnitude_ab().unwrap();
    catalog["2mass_j"].solar_magnitude_vega().unwrap();
    assert_eq!(loads.load(Ordering::SeqCst), 1);

    catalog["v"].effective_wavelength().unwrap();
    catalog["jwst_f444w"].effective_wavelength().unwrap();
    assert_eq!(loads.load(Ordering::SeqCst), 2);
}

#[test]
fn test_cached_table_ignores_later_file_changes() {
    let dir = TempDir::new().unwrap();
    write_tables(dir.path(), FILTER_DEFINITIONS.len());
    let catalog = FilterCatalog::with_config(ReferenceConfig::with_root(dir.path()));

    let before = catalog["v"].effective_wavelength().unwrap();
    fs::write(dir.path().join("data/filter_lambda_eff.dat"), "1 99999.0\n").unwrap();
    assert_relative_eq!(catalog["v"].effective_wavelength().unwrap(), before);
}

#[test]
fn test_short_table_fails_for_last_filter() {
    let dir = TempDir::new().unwrap();
    write_tables(dir.path(), FILTER_DEFINITIONS.len() - 2);
    let catalog = FilterCatalog::with_config(ReferenceConfig::with_root(dir.path()));

    assert!(catalog["v"].solar_magnitude_ab().is_ok());
    assert!(matches!(
        catalog["jwst_f444w"].solar_magnitude_ab(),
        Err(FilterError::RowOutOfRange {
            table: TableKind::SolarMagnitude,
            row: 121,
            rows: 120,
        })
    ));
    assert!(matches!(
        catalog["jwst_f444w"].effective_wavelength(),
        Err(FilterError::RowOutOfRange { row: 121, rows: 120, .. })
    ));

    match catalog.verify_reference_tables() {
        Err(FilterError::Inconsistent {
            table,
            rows,
            filters,
        }) => {
            assert_eq!(table, TableKind::SolarMagnitude);
            assert_eq!(rows, 120);
            assert_eq!(filters, vec!["jwst_f356w", "jwst_f444w"]);
        }
        other => panic!("expected consolidated inconsistency, got {other:?}"),
    }
}

#[test]
fn test_missing_root_fails_as_not_found() {
    let catalog = FilterCatalog::with_config(ReferenceConfig::with_root("$SPS_HOME"));
    match catalog["sdss_r"].solar_magnitude_ab() {
        Err(FilterError::Io { path, source }) => {
            assert_eq!(path, Path::new("$SPS_HOME/data/magsun.dat"));
            assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
        }
        other => panic!("expected Io error, got {other:?}"),
    }
    assert!(!catalog.tables().is_loaded(TableKind::SolarMagnitude));
}

#[test]
fn test_malformed_table_is_a_parse_error() {
    let dir = TempDir::new().unwrap();
    write_tables(dir.path(), FILTER_DEFINITIONS.len());
    fs::write(
        dir.path().join("data/magsun.dat"),
        "1 4.52 4.81\n2 6.34 n/a\n",
    )
    .unwrap();
    let catalog = FilterCatalog::with_config(ReferenceConfig::with_root(dir.path()));

    match catalog["v"].solar_magnitude_vega() {
        Err(FilterError::Parse { line, token, .. }) => {
            assert_eq!(line, 2);
            assert_eq!(token, "n/a");
        }
        other => panic!("expected parse error, got {other:?}"),
    }

    // The wavelength table is independent and still loads
    assert!(catalog["v"].effective_wavelength().is_ok());
}

#[test]
fn test_failed_load_is_retried_on_next_access() {
    let dir = TempDir::new().unwrap();
    let catalog = FilterCatalog::with_config(ReferenceConfig::with_root(dir.path()));

    assert!(matches!(
        catalog["u"].solar_magnitude_ab(),
        Err(FilterError::Io { .. })
    ));

    write_tables(dir.path(), FILTER_DEFINITIONS.len());
    let (ab, _) = magsun_row(1);
    assert_relative_eq!(catalog["u"].solar_magnitude_ab().unwrap(), ab, epsilon = 1e-9);
}

#[test]
fn test_narrow_magsun_table_reports_missing_column() {
    let dir = TempDir::new().unwrap();
    write_tables(dir.path(), FILTER_DEFINITIONS.len());
    let two_columns: String = (1..=FILTER_DEFINITIONS.len())
        .map(|i| format!("{i} 4.5\n"))
        .collect();
    fs::write(dir.path().join("data/magsun.dat"), two_columns).unwrap();
    let catalog = FilterCatalog::with_config(ReferenceConfig::with_root(dir.path()));

    assert!(catalog["v"].solar_magnitude_ab().is_ok());
    assert!(matches!(
        catalog["v"].solar_magnitude_vega(),
        Err(FilterError::ColumnOutOfRange { column: 2, columns: 2, .. })
    ));
    assert!(matches!(
        catalog.verify_reference_tables(),
        Err(FilterError::ColumnOutOfRange { column: 2, columns: 2, .. })
    ));
}
