use serde::{Deserialize, Serialize};

use crate::cursor::CellAddress;

/// Immutable point-in-time copy of a grid's contents
///
/// Cell texts are stored flat in row-major order. A snapshot never
/// aliases the live buffer, so layout can run while the host keeps
/// editing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridSnapshot {
    rows: usize,
    columns: usize,
    cells: Vec<String>,
}

impl GridSnapshot {
    pub(crate) fn new(rows: usize, columns: usize, cells: Vec<String>) -> Self {
        debug_assert_eq!(cells.len(), rows * columns);
        Self {
            rows,
            columns,
            cells,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    /// The flat row-major cell texts
    pub fn cells(&self) -> &[String] {
        &self.cells
    }

    pub fn cell(&self, addr: CellAddress) -> Option<&str> {
        if addr.col >= self.columns || addr.row >= self.rows {
            return None;
        }
        Some(self.cells[addr.flat_index(self.columns)].as_str())
    }

    /// Total scalar-value count across all cells, for export cost bounds
    pub fn total_chars(&self) -> usize {
        self.cells.iter().map(|text| text.chars().count()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_lookup() {
        let snapshot = GridSnapshot::new(
            2,
            2,
            vec!["a".into(), "b".into(), "c".into(), "d".into()],
        );
        assert_eq!(snapshot.cell(CellAddress::new(0, 0)), Some("a"));
        assert_eq!(snapshot.cell(CellAddress::new(1, 0)), Some("b"));
        assert_eq!(snapshot.cell(CellAddress::new(0, 1)), Some("c"));
        assert_eq!(snapshot.cell(CellAddress::new(1, 1)), Some("d"));
        assert_eq!(snapshot.cell(CellAddress::new(2, 0)), None);
        assert_eq!(snapshot.cell(CellAddress::new(0, 2)), None);
    }

    #[test]
    fn test_total_chars() {
        let snapshot = GridSnapshot::new(1, 2, vec!["ab".into(), "\u{1D800}".into()]);
        assert_eq!(snapshot.total_chars(), 3);
    }

    #[test]
    fn test_serialization() {
        let snapshot = GridSnapshot::new(1, 2, vec!["x".into(), "y".into()]);
        let serialized = serde_json::to_string(&snapshot).unwrap();
        let deserialized: GridSnapshot = serde_json::from_str(&serialized).unwrap();
        assert_eq!(snapshot, deserialized);
    }
}
