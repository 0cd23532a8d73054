//! Location of the SPS reference data files.
//!
//! The tables live under `$SPS_HOME/data/`. The root is resolved once when a
//! [`ReferenceConfig`] is built, so callers (and tests) can inject a fixture
//! directory instead of touching the process environment.

use std::path::{Path, PathBuf};

use crate::tables::TableKind;

/// Environment variable naming the SPS data root
pub const SPS_HOME_VAR: &str = "SPS_HOME";

/// Root used when `SPS_HOME` is unset; left unexpanded so the load fails as not-found
const UNEXPANDED_ROOT: &str = "$SPS_HOME";

/// Paths to the reference tables consumed by the filter catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceConfig {
    /// Root directory that contains `data/`
    root: PathBuf,
}

impl ReferenceConfig {
    /// Resolve the data root from `SPS_HOME`.
    ///
    /// An unset variable is not an error here. The literal `$SPS_HOME` segment
    /// is kept, and the first table access reports the resulting missing file.
    pub fn from_env() -> Self {
        match std::env::var_os(SPS_HOME_VAR) {
            Some(root) => Self::with_root(root),
            None => {
                log::warn!("{SPS_HOME_VAR} is not set; reference tables will not resolve");
                Self::with_root(UNEXPANDED_ROOT)
            }
        }
    }

    /// Use an explicit data root
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Get the data root directory
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Full path of the file backing `kind`
    pub fn table_path(&self, kind: TableKind) -> PathBuf {
        self.root.join(kind.relative_path())
    }
}

impl Default for ReferenceConfig {
    fn default() -> Self {
        Self::from_env()
    }
}
