use serde::{Deserialize, Serialize};

/// Ordered map from a palette symbol to the text recorded when it is chosen
///
/// Only composite glyphs appear here: palette entries whose displayed form
/// differs from the sequence that must land in the cell. Every other symbol
/// inserts itself literally, so lookup is total and never fails. Keys are
/// pairwise distinct; the first match wins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymbolMap {
    entries: Vec<(String, String)>,
}

impl SymbolMap {
    pub fn new(entries: Vec<(String, String)>) -> Self {
        Self { entries }
    }

    pub fn empty() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Resolve the text to insert for a chosen palette symbol
    pub fn translate<'a>(&'a self, symbol: &'a str) -> &'a str {
        self.entries
            .iter()
            .find(|(display, _)| display == symbol)
            .map(|(_, insert)| insert.as_str())
            .unwrap_or(symbol)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for SymbolMap {
    /// The composite-glyph set of the SignWriting palette
    ///
    /// The palette buttons for filled hand variants render the outline
    /// base glyph; the recorded text carries the base plus its Sutton
    /// fill modifier, so the insert spans two scalar values.
    fn default() -> Self {
        Self::new(vec![
            ("\u{1D800}".into(), "\u{1D800}\u{1DA9C}".into()),
            ("\u{1D801}".into(), "\u{1D801}\u{1DA9C}".into()),
            ("\u{1D803}".into(), "\u{1D803}\u{1DA9D}".into()),
            ("\u{1D810}".into(), "\u{1D810}\u{1DA9C}".into()),
            ("\u{1D824}".into(), "\u{1D824}\u{1DA9E}".into()),
            ("\u{1D84C}".into(), "\u{1D84C}\u{1DA9C}".into()),
            ("\u{1D8A5}".into(), "\u{1D8A5}\u{1DA9D}".into()),
            ("\u{1D9FF}".into(), "\u{1D9FF}\u{1DA9B}".into()),
        ])
    }
}
