pub mod compositor;
pub mod display_list;
pub mod document;
pub mod metrics;

pub use compositor::{layout, PageSettings};
pub use display_list::{DisplayList, DrawOp};
pub use document::{DelimiterConflict, Document, COLUMN_DELIMITER, ROW_SEPARATOR};
pub use metrics::{FixedAdvanceMetrics, TextExtent, TextMetrics};
