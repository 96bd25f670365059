use serde::{Deserialize, Serialize};

/// One draw instruction for the external renderer
///
/// The compositor pre-computes every position; the consumer places text
/// and strokes rules without doing any layout of its own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "camelCase")]
pub enum DrawOp {
    /// Place `content` with its left edge at `x`, baseline origin `y`
    Text {
        x: f32,
        y: f32,
        content: String,
        font_size: f32,
    },
    /// Stroke a vertical separator rule at `x` from `y0` down to `y1`
    Rule { x: f32, y0: f32, y1: f32 },
}

/// Ordered draw instructions for one exported document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DisplayList {
    pub ops: Vec<DrawOp>,
}

impl DisplayList {
    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DrawOp> {
        self.ops.iter()
    }

    pub fn text_ops(&self) -> impl Iterator<Item = &DrawOp> {
        self.ops
            .iter()
            .filter(|op| matches!(op, DrawOp::Text { .. }))
    }

    pub fn rule_ops(&self) -> impl Iterator<Item = &DrawOp> {
        self.ops
            .iter()
            .filter(|op| matches!(op, DrawOp::Rule { .. }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_op_filters() {
        let list = DisplayList {
            ops: vec![
                DrawOp::Text {
                    x: 1.0,
                    y: 2.0,
                    content: "a".into(),
                    font_size: 12.0,
                },
                DrawOp::Rule {
                    x: 5.0,
                    y0: 0.0,
                    y1: 10.0,
                },
            ],
        };
        assert_eq!(list.len(), 2);
        assert_eq!(list.text_ops().count(), 1);
        assert_eq!(list.rule_ops().count(), 1);
    }

    #[test]
    fn test_serialization_tags_ops() {
        let op = DrawOp::Rule {
            x: 1.0,
            y0: 2.0,
            y1: 3.0,
        };
        let serialized = serde_json::to_string(&op).unwrap();
        assert!(serialized.contains("\"op\":\"rule\""));
        let deserialized: DrawOp = serde_json::from_str(&serialized).unwrap();
        assert_eq!(op, deserialized);
    }
}
