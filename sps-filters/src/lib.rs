//! Photometric filter catalog for stellar population synthesis
//!
//! Maps FSPS filter names such as `sdss_g` or `2mass_j` to their catalog
//! metadata and to calibration constants (solar absolute magnitudes and
//! effective wavelengths). The constants come from reference tables under
//! `$SPS_HOME/data/`, which are read on first use.

pub mod catalog;
pub mod config;
pub mod definitions;
pub mod error;
pub mod filter;
pub mod tables;

pub use catalog::{find_filter, FilterCatalog, FILTERS};
pub use config::{ReferenceConfig, SPS_HOME_VAR};
pub use definitions::FILTER_DEFINITIONS;
pub use error::FilterError;
pub use filter::{Filter, FilterSummary};
pub use tables::{parse_table, FileTableSource, ReferenceTables, TableKind, TableSource};
