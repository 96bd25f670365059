use serde::{Deserialize, Serialize};

use crate::cell::Cell;
use crate::cursor::{CellAddress, Cursor};
use crate::error::GridError;
use crate::navigate::{step, Direction};
use crate::snapshot::GridSnapshot;

/// Default grid dimensions for a fresh session
pub const DEFAULT_ROWS: usize = 8;
pub const DEFAULT_COLUMNS: usize = 10;

/// The addressable 2-D store of per-cell symbol text
///
/// Owns exactly `rows * columns` cells in flat row-major order plus the
/// single active-cell cursor. Every instance owns its own state; nothing
/// is shared between grids.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridBuffer {
    rows: usize,
    columns: usize,
    cells: Vec<Cell>,
    cursor: Cursor,
}

impl Default for GridBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl GridBuffer {
    /// Create a grid with the default session dimensions
    pub fn new() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            columns: DEFAULT_COLUMNS,
            cells: vec![Cell::default(); DEFAULT_ROWS * DEFAULT_COLUMNS],
            cursor: Cursor::Unselected,
        }
    }

    /// Create a grid with the given dimensions
    pub fn with_size(rows: usize, columns: usize) -> Result<Self, GridError> {
        if rows == 0 || columns == 0 {
            return Err(GridError::InvalidDimension { rows, columns });
        }
        Ok(Self {
            rows,
            columns,
            cells: vec![Cell::default(); rows * columns],
            cursor: Cursor::Unselected,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// The active cell address, if one is selected
    pub fn active_cell(&self) -> Option<CellAddress> {
        self.cursor.active()
    }

    pub fn cell_text(&self, addr: CellAddress) -> Option<&str> {
        if !self.in_bounds(addr) {
            return None;
        }
        Some(self.cells[addr.flat_index(self.columns)].as_str())
    }

    /// True when every cell is empty
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(Cell::is_empty)
    }

    fn in_bounds(&self, addr: CellAddress) -> bool {
        addr.col < self.columns && addr.row < self.rows
    }

    /// Replace the grid with fresh empty cells of the given dimensions
    ///
    /// All existing text is discarded and the cursor is reset, even when
    /// the dimensions are unchanged. Zero dimensions are rejected without
    /// touching the buffer.
    pub fn resize(&mut self, rows: usize, columns: usize) -> Result<(), GridError> {
        if rows == 0 || columns == 0 {
            return Err(GridError::InvalidDimension { rows, columns });
        }
        self.rows = rows;
        self.columns = columns;
        self.cells = vec![Cell::default(); rows * columns];
        self.cursor = Cursor::Unselected;
        Ok(())
    }

    /// Select, move to, or deselect a cell
    ///
    /// A click on the already-active cell deselects it; a click anywhere
    /// else makes that cell active. This is the complete selection state
    /// machine.
    pub fn toggle_select(&mut self, addr: CellAddress) -> Result<(), GridError> {
        if !self.in_bounds(addr) {
            return Err(GridError::OutOfBounds {
                addr,
                rows: self.rows,
                columns: self.columns,
            });
        }
        self.cursor = match self.cursor {
            Cursor::Selected(current) if current == addr => Cursor::Unselected,
            _ => Cursor::Selected(addr),
        };
        Ok(())
    }

    /// Append text to the active cell; no-op when nothing is selected
    pub fn append_to_active(&mut self, text: &str) {
        if let Cursor::Selected(addr) = self.cursor {
            self.cells[addr.flat_index(self.columns)].append(text);
        }
    }

    /// Remove the last scalar value of the active cell; no-op when
    /// nothing is selected or the cell is empty
    pub fn backspace(&mut self) {
        if let Cursor::Selected(addr) = self.cursor {
            self.cells[addr.flat_index(self.columns)].backspace();
        }
    }

    /// Move the cursor one step in the given direction
    ///
    /// No-op when nothing is selected. Movement never deselects: on a
    /// 1x1 grid, where every step lands on the current cell, the
    /// selection stays put instead of toggling off.
    pub fn move_cursor(&mut self, direction: Direction) {
        if let Cursor::Selected(addr) = self.cursor {
            let next = step(direction, addr, self.rows, self.columns);
            self.cursor = Cursor::Selected(next);
        }
    }

    /// Immutable flat row-major copy of the grid for export
    pub fn snapshot(&self) -> GridSnapshot {
        GridSnapshot::new(
            self.rows,
            self.columns,
            self.cells
                .iter()
                .map(|cell| cell.as_str().to_owned())
                .collect(),
        )
    }
}
