use serde::{Deserialize, Serialize};

/// Address of a single cell in the grid
///
/// The canonical order is `(col, row)`, matching the way the palette UI
/// reports clicks. Row-major flattening uses `row * columns + col`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CellAddress {
    pub col: usize,
    pub row: usize,
}

impl CellAddress {
    pub fn new(col: usize, row: usize) -> Self {
        Self { col, row }
    }

    pub fn origin() -> Self {
        Self { col: 0, row: 0 }
    }

    /// Index of this address in a flat row-major cell list
    pub fn flat_index(&self, columns: usize) -> usize {
        self.row * columns + self.col
    }
}

/// The single active-cell cursor
///
/// Either no cell is active, or exactly one in-bounds cell is. A resize
/// always resets the cursor to `Unselected`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cursor {
    #[default]
    Unselected,
    Selected(CellAddress),
}

impl Cursor {
    /// The active address, if any cell is selected
    pub fn active(&self) -> Option<CellAddress> {
        match self {
            Cursor::Unselected => None,
            Cursor::Selected(addr) => Some(*addr),
        }
    }

    pub fn is_selected(&self) -> bool {
        matches!(self, Cursor::Selected(_))
    }
}
