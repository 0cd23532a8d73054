//! Name-keyed catalog of photometric filters

use std::collections::HashMap;
use std::ops::Index;
use std::sync::Arc;

use once_cell::sync::Lazy;

use crate::config::ReferenceConfig;
use crate::definitions::FILTER_DEFINITIONS;
use crate::error::FilterError;
use crate::filter::Filter;
use crate::tables::{ReferenceTables, TableKind, TableSource};

/// Process-wide catalog, with reference data resolved from `SPS_HOME`
pub static FILTERS: Lazy<FilterCatalog> = Lazy::new(FilterCatalog::from_env);

/// Find the catalog names containing `band` (case-insensitive) in [`FILTERS`].
///
/// ```
/// let names = sps_filters::find_filter("F555W");
/// assert_eq!(names, ["wfpc2_f555w", "wfc_acs_f555w", "wfc3_uvis_f555w"]);
/// ```
pub fn find_filter(band: &str) -> Vec<&'static str> {
    Lazy::force(&FILTERS).find(band)
}

/// Mapping from lowercased filter name to [`Filter`].
///
/// Iteration follows declaration order. All filters share one
/// [`ReferenceTables`] cache.
#[derive(Debug)]
pub struct FilterCatalog {
    filters: Vec<Filter>,
    by_name: HashMap<String, usize>,
    tables: Arc<ReferenceTables>,
}

impl FilterCatalog {
    /// The built-in filter set, reading reference data under `SPS_HOME`
    pub fn from_env() -> Self {
        Self::with_config(ReferenceConfig::from_env())
    }

    /// The built-in filter set, reading reference data under `config`'s root
    pub fn with_config(config: ReferenceConfig) -> Self {
        Self::from_tables(&FILTER_DEFINITIONS, ReferenceTables::from_config(config))
    }

    /// The built-in filter set backed by an arbitrary table source
    pub fn with_source(source: impl TableSource + 'static) -> Self {
        Self::from_definitions(&FILTER_DEFINITIONS, source)
    }

    /// Build a catalog from `(one-based index, name, description)` triples.
    ///
    /// A name that appears twice (after lowercasing) keeps its first position
    /// but takes the later definition.
    pub fn from_definitions(
        definitions: &[(usize, &str, &str)],
        source: impl TableSource + 'static,
    ) -> Self {
        Self::from_tables(definitions, ReferenceTables::new(source))
    }

    fn from_tables(definitions: &[(usize, &str, &str)], tables: ReferenceTables) -> Self {
        let tables = Arc::new(tables);
        let mut filters: Vec<Filter> = Vec::with_capacity(definitions.len());
        let mut by_name = HashMap::with_capacity(definitions.len());

        for &(index, name, fullname) in definitions {
            let filter = Filter::new(index, name, fullname, tables.clone());
            let existing = by_name.get(filter.name()).copied();
            match existing {
                Some(pos) => filters[pos] = filter,
                None => {
                    by_name.insert(filter.name().to_string(), filters.len());
                    filters.push(filter);
                }
            }
        }

        log::debug!("Built filter catalog with {} entries", filters.len());

        Self {
            filters,
            by_name,
            tables,
        }
    }

    /// Look up a filter by name, ignoring case
    pub fn get(&self, name: &str) -> Option<&Filter> {
        self.by_name
            .get(&name.to_lowercase())
            .map(|&pos| &self.filters[pos])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(&name.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Filters in declaration order
    pub fn iter(&self) -> impl Iterator<Item = &Filter> {
        self.filters.iter()
    }

    /// Catalog keys in declaration order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.filters.iter().map(|f| f.name())
    }

    /// The reference table cache shared by every filter in this catalog
    pub fn tables(&self) -> &ReferenceTables {
        &self.tables
    }

    /// Every key containing `band` as a substring, in declaration order.
    ///
    /// The match is case-insensitive and unanchored, so an empty `band`
    /// returns every key.
    pub fn find(&self, band: &str) -> Vec<&str> {
        let band = band.to_lowercase();
        self.names().filter(|name| name.contains(&band)).collect()
    }

    /// Load both reference tables and check every filter has a row in each.
    ///
    /// Out-of-range filters are reported together in one
    /// [`FilterError::Inconsistent`] per table, instead of one bounds error
    /// per property access.
    pub fn verify_reference_tables(&self) -> Result<(), FilterError> {
        for kind in TableKind::ALL {
            let table = self.tables.table(kind)?;
            let (rows, columns) = table.dim();

            if columns < kind.required_columns() {
                return Err(FilterError::ColumnOutOfRange {
                    table: kind,
                    column: kind.required_columns() - 1,
                    columns,
                });
            }

            let filters: Vec<String> = self
                .filters
                .iter()
                .filter(|f| f.index() >= rows)
                .map(|f| f.name().to_string())
                .collect();

            if !filters.is_empty() {
                return Err(FilterError::Inconsistent {
                    table: kind,
                    rows,
                    filters,
                });
            }
        }

        Ok(())
    }
}

impl Index<&str> for FilterCatalog {
    type Output = Filter;

    fn index(&self, name: &str) -> &Filter {
        match self.get(name) {
            Some(filter) => filter,
            None => panic!("unknown filter '{name}'"),
        }
    }
}

impl<'a> IntoIterator for &'a FilterCatalog {
    type Item = &'a Filter;
    type IntoIter = std::slice::Iter<'a, Filter>;

    fn into_iter(self) -> Self::IntoIter {
        self.filters.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::Array2;
    use std::collections::HashSet;

    /// Source that never finds anything; metadata tests must not touch it
    struct NoTables;

    impl TableSource for NoTables {
        fn read_table(&self, kind: TableKind) -> Result<Array2<f64>, FilterError> {
            Err(FilterError::Io {
                path: kind.relative_path().into(),
                source: std::io::Error::from(std::io::ErrorKind::NotFound),
            })
        }
    }

    fn catalog() -> FilterCatalog {
        FilterCatalog::with_source(NoTables)
    }

    #[test]
    fn test_entries_match_definitions() {
        let catalog = catalog();
        for &(index, name, fullname) in FILTER_DEFINITIONS.iter() {
            let filter = &catalog[name];
            assert_eq!(filter.name(), name.to_lowercase());
            assert_eq!(filter.index(), index - 1);
            assert_eq!(filter.fullname(), fullname);
        }
    }

    #[test]
    fn test_keys_unique_and_complete() {
        let catalog = catalog();
        let keys: HashSet<&str> = catalog.names().collect();
        assert_eq!(keys.len(), FILTER_DEFINITIONS.len());
        assert_eq!(catalog.len(), 122);
        assert!(!catalog.is_empty());
    }

    #[test]
    fn test_iteration_follows_declaration_order() {
        let catalog = catalog();
        let indices: Vec<usize> = catalog.iter().map(|f| f.index()).collect();
        let expected: Vec<usize> = (0..122).collect();
        assert_eq!(indices, expected);
    }

    #[test]
    fn test_get_is_case_insensitive() {
        let catalog = catalog();
        assert_eq!(catalog.get("SDSS_G").unwrap().name(), "sdss_g");
        assert_eq!(catalog.get("2mass_ks").unwrap().index(), 11);
        assert!(catalog.contains("Galex_NUV"));
        assert!(catalog.get("sdss_q").is_none());
    }

    #[test]
    #[should_panic(expected = "unknown filter")]
    fn test_index_missing_panics() {
        let _ = &catalog()["not_a_filter"];
    }

    #[test]
    fn test_find_empty_returns_everything() {
        let catalog = catalog();
        let all: Vec<&str> = catalog.names().collect();
        assert_eq!(catalog.find(""), all);
    }

    #[test]
    fn test_find_substring() {
        let catalog = catalog();
        assert_eq!(
            catalog.find("F555W"),
            vec!["wfpc2_f555w", "wfc_acs_f555w", "wfc3_uvis_f555w"]
        );
        assert_eq!(
            catalog.find("sdss"),
            vec!["sdss_u", "sdss_g", "sdss_r", "sdss_i", "sdss_z"]
        );
        assert_eq!(catalog.find("irac_1"), vec!["irac_1"]);
    }

    #[test]
    fn test_find_query_must_be_inside_key() {
        let catalog = catalog();
        assert!(catalog.find("nonexistent_xyz").is_empty());
        // The key does not match just because it is contained in the query
        assert!(catalog.find("sdss_g_extra").is_empty());
    }

    #[test]
    fn test_duplicate_names_keep_first_position() {
        let catalog = FilterCatalog::from_definitions(
            &[(1, "V", "first"), (2, "U", "u band"), (3, "v", "second")],
            NoTables,
        );
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.find(""), vec!["v", "u"]);
        assert_eq!(catalog["v"].fullname(), "second");
        assert_eq!(catalog["v"].index(), 2);
    }

    #[test]
    fn test_metadata_access_does_not_load_tables() {
        let catalog = catalog();
        let _ = catalog.find("wise");
        let _ = catalog["wise_w1"].fullname();
        assert!(!catalog.tables().is_loaded(TableKind::SolarMagnitude));
        assert!(!catalog.tables().is_loaded(TableKind::EffectiveWavelength));
    }

    #[test]
    fn test_missing_tables_surface_io_error() {
        let catalog = catalog();
        assert!(matches!(
            catalog["v"].solar_magnitude_ab(),
            Err(FilterError::Io { .. })
        ));
        assert!(matches!(
            catalog.verify_reference_tables(),
            Err(FilterError::Io { .. })
        ));
    }

    #[test]
    fn test_find_filter_uses_default_catalog() {
        assert_eq!(find_filter("2MASS"), vec!["2mass_j", "2mass_h", "2mass_ks"]);
        assert_eq!(find_filter("").len(), FILTERS.len());
    }
}
