use std::collections::BTreeMap;

use crate::detect::{Detection, Label};

/// Maximum observed confidence per label for one invocation.
///
/// `BTreeMap` keyed by class order keeps serialized output stable.
pub type ScoreMap = BTreeMap<Label, f32>;

/// Reduce detections to the maximum confidence seen per label.
///
/// Deterministic and independent of detection order.
pub fn aggregate(detections: &[Detection]) -> ScoreMap {
    let mut scores = ScoreMap::new();
    for detection in detections {
        let entry = scores.entry(detection.label).or_insert(0.0);
        if detection.confidence > *entry {
            *entry = detection.confidence;
        }
    }
    scores
}
