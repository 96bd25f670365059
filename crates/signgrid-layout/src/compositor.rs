use serde::{Deserialize, Serialize};

use crate::display_list::{DisplayList, DrawOp};
use crate::document::Document;
use crate::metrics::TextMetrics;

/// ISO A4 page size in PostScript points
pub const A4_WIDTH: f32 = 595.0;
pub const A4_HEIGHT: f32 = 842.0;
/// Fixed vertical gap between grid rows on the page
pub const DEFAULT_ROW_GAP: f32 = 70.0;

/// Page geometry and type settings for an export
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PageSettings {
    pub page_width: f32,
    pub page_height: f32,
    pub margin_x: f32,
    pub margin_y: f32,
    pub font_size: f32,
    pub row_gap: f32,
}

impl Default for PageSettings {
    fn default() -> Self {
        Self {
            page_width: A4_WIDTH,
            page_height: A4_HEIGHT,
            margin_x: 10.0,
            margin_y: 10.0,
            font_size: 12.0,
            row_gap: DEFAULT_ROW_GAP,
        }
    }
}

/// Compute the printable layout of a document
///
/// Each row divides the printable width evenly among its columns; column
/// text is centered in its slot and adjacent columns are separated by a
/// full-height vertical rule. The vertical cursor starts at the top
/// margin and advances by the row's measured text height plus the fixed
/// row gap.
///
/// There is no pagination: rows keep being placed past the bottom margin
/// once the page fills up, matching the reference editor.
pub fn layout(
    document: &Document,
    page: &PageSettings,
    metrics: &impl TextMetrics,
) -> DisplayList {
    let mut ops = Vec::new();
    let mut y = page.margin_y;

    for columns in document.rows() {
        if columns.is_empty() {
            continue;
        }
        let column_width = (page.page_width - 2.0 * page.margin_x) / columns.len() as f32;
        let mut row_height: f32 = 0.0;

        for (i, text) in columns.iter().enumerate() {
            let extent = metrics.measure(text, page.font_size);
            ops.push(DrawOp::Text {
                x: page.margin_x + i as f32 * column_width + (column_width - extent.width) / 2.0,
                y,
                content: text.clone(),
                font_size: page.font_size,
            });
            row_height = row_height.max(extent.height);
        }

        for i in 1..columns.len() {
            ops.push(DrawOp::Rule {
                x: page.margin_x + i as f32 * column_width,
                y0: page.margin_y,
                y1: page.page_height - page.margin_y,
            });
        }

        y += row_height + page.row_gap;
    }

    DisplayList { ops }
}
