use serde::{Deserialize, Serialize};

use signgrid_core::GridSnapshot;

/// Delimiter joining a row's columns in the intermediate textual form
pub const COLUMN_DELIMITER: char = '|';
/// Separator between rows in the intermediate textual form
pub const ROW_SEPARATOR: &str = "\n\n";

/// Read-only row/column reshaping of a grid snapshot
///
/// The structured 2-D form is the primary representation; the delimited
/// text form exists only as a compatibility surface. A document is built
/// fresh per export and never mutated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    rows: Vec<Vec<String>>,
}

/// A cell whose text collides with the delimited intermediate format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DelimiterConflict {
    pub row: usize,
    pub col: usize,
}

impl Document {
    pub fn new(rows: Vec<Vec<String>>) -> Self {
        Self { rows }
    }

    /// Reshape a flat row-major snapshot into rows of column strings
    pub fn from_snapshot(snapshot: &GridSnapshot) -> Self {
        Self {
            rows: snapshot
                .cells()
                .chunks(snapshot.columns())
                .map(|row| row.to_vec())
                .collect(),
        }
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Cells whose text embeds the column delimiter or row separator
    ///
    /// Such cells make the delimited text form ambiguous: splitting it
    /// back into rows and columns cannot recover the original shape. The
    /// structured form is unaffected.
    pub fn delimiter_conflicts(&self) -> Vec<DelimiterConflict> {
        let mut conflicts = Vec::new();
        for (row, columns) in self.rows.iter().enumerate() {
            for (col, text) in columns.iter().enumerate() {
                if text.contains(COLUMN_DELIMITER) || text.contains(ROW_SEPARATOR) {
                    conflicts.push(DelimiterConflict { row, col });
                }
            }
        }
        conflicts
    }

    /// Render the canonical delimited intermediate text
    ///
    /// Conflicting cells are written through unchanged, matching the
    /// reference behavior, but each one is reported via a warning so the
    /// corruption hazard is observable.
    pub fn to_delimited(&self) -> String {
        for conflict in self.delimiter_conflicts() {
            tracing::warn!(
                row = conflict.row,
                col = conflict.col,
                "cell text contains the intermediate format delimiter; \
                 delimited output will not round-trip"
            );
        }
        self.rows
            .iter()
            .map(|columns| columns.join(&COLUMN_DELIMITER.to_string()))
            .collect::<Vec<_>>()
            .join(ROW_SEPARATOR)
    }

    /// Reconstruct rows and columns from the delimited intermediate text
    ///
    /// Only faithful for text produced from conflict-free documents; an
    /// empty input yields a single row holding one empty column, as the
    /// split-based format cannot express an empty document.
    pub fn from_delimited(text: &str) -> Self {
        Self {
            rows: text
                .split(ROW_SEPARATOR)
                .map(|row| {
                    row.split(COLUMN_DELIMITER)
                        .map(str::to_owned)
                        .collect()
                })
                .collect(),
        }
    }
}
