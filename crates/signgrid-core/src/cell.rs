use serde::{Deserialize, Serialize};

/// The accumulated text content of one grid position
///
/// A cell holds an ordered sequence of Unicode scalar values: visible
/// symbols, plain spaces, and explicit `\n` line-break markers. There is
/// no length limit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cell {
    text: String,
}

impl Cell {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Append one or more scalar values to the end of the cell
    pub fn append(&mut self, text: &str) {
        self.text.push_str(text);
    }

    /// Remove exactly the last scalar value, if any
    ///
    /// Operates on scalar values, not grapheme clusters: erasing the tail
    /// of a multi-scalar composite symbol leaves its base behind. This
    /// matches the reference editor.
    pub fn backspace(&mut self) {
        self.text.pop();
    }
}

impl From<Cell> for String {
    fn from(cell: Cell) -> Self {
        cell.text
    }
}
