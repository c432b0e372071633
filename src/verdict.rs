use serde::Serialize;

use crate::error::FilterError;
use crate::score::ScoreMap;

/// Classification outcome, printed by the CLI as a single JSON line.
///
/// Immutable once constructed; `scores` carries the aggregated
/// per-label maxima that informed the decision (empty on fail-closed
/// verdicts, where no trustworthy scores exist).
#[derive(Clone, Debug, Serialize)]
pub struct Verdict {
    pub appropriate: bool,
    pub scores: ScoreMap,
    pub message: String,
}

impl Verdict {
    pub fn appropriate(scores: ScoreMap) -> Self {
        Self {
            appropriate: true,
            scores,
            message: "Content appropriate for teen users".to_string(),
        }
    }

    pub fn inappropriate(scores: ScoreMap, message: String) -> Self {
        Self {
            appropriate: false,
            scores,
            message,
        }
    }

    /// Collapse an internal error into the fail-closed form: not
    /// appropriate, empty scores, error text in the message. Every
    /// pipeline failure funnels through here.
    pub fn fail_closed(err: &FilterError) -> Self {
        Self {
            appropriate: false,
            scores: ScoreMap::new(),
            message: format!("Content filtering error: {err}"),
        }
    }

    /// Fail-closed verdict for CLI misuse.
    pub fn usage(usage: &str) -> Self {
        Self {
            appropriate: false,
            scores: ScoreMap::new(),
            message: usage.to_string(),
        }
    }
}
