use super::labels::Label;

/// A single detection reported by a backend.
///
/// Box coordinates are pixels in the original (pre-resize) image.
/// Score aggregation only consumes `label` and `confidence`; the box is
/// reported for callers that want to localize the finding.
#[derive(Clone, Debug, PartialEq)]
pub struct Detection {
    pub label: Label,
    pub confidence: f32,
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Detection {
    /// Detection with a zero-area box, for backends that only score.
    pub fn unlocated(label: Label, confidence: f32) -> Self {
        Self {
            label,
            confidence,
            x: 0.0,
            y: 0.0,
            w: 0.0,
            h: 0.0,
        }
    }
}
