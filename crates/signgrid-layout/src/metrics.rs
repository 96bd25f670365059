use serde::{Deserialize, Serialize};

/// Measured size of a rendered piece of text, in page units
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TextExtent {
    pub width: f32,
    pub height: f32,
}

/// Seam to the external text-shaping service
///
/// The compositor only needs extents; actual glyph rasterization lives in
/// whatever renders the display list (Cairo, a PDF writer, a canvas).
pub trait TextMetrics {
    fn measure(&self, text: &str, font_size: f32) -> TextExtent;
}

/// Fixed-advance measurement for headless use and tests
///
/// Every scalar value is `advance_em * font_size` wide; explicit line
/// breaks stack at one `font_size` per line. Good enough for layout
/// geometry when no shaping engine is attached.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FixedAdvanceMetrics {
    pub advance_em: f32,
}

impl Default for FixedAdvanceMetrics {
    fn default() -> Self {
        Self { advance_em: 0.6 }
    }
}

impl TextMetrics for FixedAdvanceMetrics {
    fn measure(&self, text: &str, font_size: f32) -> TextExtent {
        let mut lines = 1usize;
        let mut widest = 0usize;
        let mut current = 0usize;
        for ch in text.chars() {
            if ch == '\n' {
                lines += 1;
                current = 0;
            } else {
                current += 1;
                widest = widest.max(current);
            }
        }
        TextExtent {
            width: widest as f32 * self.advance_em * font_size,
            height: lines as f32 * font_size,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text_has_zero_width() {
        let metrics = FixedAdvanceMetrics::default();
        let extent = metrics.measure("", 12.0);
        assert_eq!(extent.width, 0.0);
        assert_eq!(extent.height, 12.0);
    }

    #[test]
    fn test_width_scales_with_scalar_count() {
        let metrics = FixedAdvanceMetrics { advance_em: 0.5 };
        let extent = metrics.measure("abcd", 10.0);
        assert_eq!(extent.width, 20.0);
        assert_eq!(extent.height, 10.0);
    }

    #[test]
    fn test_line_breaks_stack_height_and_take_widest_line() {
        let metrics = FixedAdvanceMetrics { advance_em: 1.0 };
        let extent = metrics.measure("ab\nxyz\nc", 10.0);
        assert_eq!(extent.width, 30.0);
        assert_eq!(extent.height, 30.0);
    }

    #[test]
    fn test_multi_scalar_symbols_count_per_scalar() {
        let metrics = FixedAdvanceMetrics { advance_em: 1.0 };
        // Base glyph plus fill modifier is two scalar values.
        let extent = metrics.measure("\u{1D800}\u{1DA9C}", 10.0);
        assert_eq!(extent.width, 20.0);
    }
}
