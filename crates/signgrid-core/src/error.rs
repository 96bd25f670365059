use thiserror::Error;

use crate::cursor::CellAddress;

/// Errors reported by grid mutations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// Resize called with a zero row or column count; the buffer is left unchanged
    #[error("grid dimensions must be at least 1x1, got {rows}x{columns}")]
    InvalidDimension { rows: usize, columns: usize },

    /// Selection requested for an address outside the current grid
    #[error("cell ({}, {}) is outside the {rows}x{columns} grid", .addr.col, .addr.row)]
    OutOfBounds {
        addr: CellAddress,
        rows: usize,
        columns: usize,
    },
}
