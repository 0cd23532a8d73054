//! Errors raised while loading reference tables and reading filter calibration values

use std::path::PathBuf;

use thiserror::Error;

use crate::tables::TableKind;

/// Errors that can occur when loading reference tables or indexing into them
#[derive(Debug, Error)]
pub enum FilterError {
    #[error("Failed to read reference table {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid number '{token}' on line {line} of {}", .path.display())]
    Parse {
        path: PathBuf,
        line: usize,
        token: String,
    },

    #[error("Line {line} of {} has {found} columns, expected {expected}", .path.display())]
    Ragged {
        path: PathBuf,
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("Reference table {} contains no data rows", .path.display())]
    Empty { path: PathBuf },

    #[error("Row {row} is out of range for the {table} table ({rows} rows)")]
    RowOutOfRange {
        table: TableKind,
        row: usize,
        rows: usize,
    },

    #[error("Column {column} is out of range for the {table} table ({columns} columns)")]
    ColumnOutOfRange {
        table: TableKind,
        column: usize,
        columns: usize,
    },

    #[error(
        "The {table} table has {rows} rows but {} filters point past it: {}",
        .filters.len(),
        .filters.join(", ")
    )]
    Inconsistent {
        table: TableKind,
        rows: usize,
        filters: Vec<String>,
    },
}
