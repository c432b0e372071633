//! Teen-safe appropriateness policy.
//!
//! Thresholds and label sets are fixed constants: they are the policy
//! itself, not tuning knobs, and are stricter than typical adult-content
//! cutoffs.

use crate::detect::Label;
use crate::score::ScoreMap;
use crate::verdict::Verdict;

/// Strict cutoff for the high-risk set.
pub const EXPLICIT_THRESHOLD: f32 = 0.2;

/// Labels that make an image inappropriate at any confidence above
/// [`EXPLICIT_THRESHOLD`]. Checked in this order; the first hit wins.
pub const HIGH_RISK_LABELS: [Label; 5] = [
    Label::ExposedAnus,
    Label::ExposedButtocks,
    Label::ExposedBreastF,
    Label::ExposedGenitaliaF,
    Label::ExposedGenitaliaM,
];

/// Cutoff for the moderate-risk set.
pub const SUGGESTIVE_THRESHOLD: f32 = 0.3;

/// Broader label set held in reserve; see [`SUGGESTIVE_CHECK_ENABLED`].
pub const MODERATE_RISK_LABELS: [Label; 3] = [
    Label::ExposedArmpits,
    Label::ExposedBelly,
    Label::ExposedFeet,
];

/// The moderate-risk check is deliberately disabled. It ships as a
/// complete, inert code path so that enabling it is a one-constant
/// change rather than new policy code; while `false`, moderate-risk
/// labels never affect the verdict.
pub const SUGGESTIVE_CHECK_ENABLED: bool = false;

/// Apply the fixed decision rule to aggregated scores.
pub fn evaluate(scores: ScoreMap) -> Verdict {
    for label in HIGH_RISK_LABELS {
        let score = scores.get(&label).copied().unwrap_or(0.0);
        if score > EXPLICIT_THRESHOLD {
            let message = format!(
                "Inappropriate content detected: {} (confidence: {:.2})",
                label, score
            );
            return Verdict::inappropriate(scores, message);
        }
    }

    if SUGGESTIVE_CHECK_ENABLED {
        for label in MODERATE_RISK_LABELS {
            let score = scores.get(&label).copied().unwrap_or(0.0);
            if score > SUGGESTIVE_THRESHOLD {
                let message = format!(
                    "Suggestive content detected: {} (confidence: {:.2})",
                    label, score
                );
                return Verdict::inappropriate(scores, message);
            }
        }
    }

    Verdict::appropriate(scores)
}
