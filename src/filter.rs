//! Pipeline wiring: decode, detect, aggregate, evaluate.

use crate::decode;
use crate::detect::DetectorBackend;
use crate::error::FilterError;
use crate::policy;
use crate::score;
use crate::verdict::Verdict;

/// Run the full pipeline, propagating stage errors.
pub fn classify(
    detector: &mut dyn DetectorBackend,
    payload: &str,
) -> Result<Verdict, FilterError> {
    let frame = decode::decode_image(payload)?;
    let detections = detector.detect(frame.as_raw(), frame.width(), frame.height())?;
    let scores = score::aggregate(&detections);
    Ok(policy::evaluate(scores))
}

/// Classify an image without ever failing: any pipeline error collapses
/// into a fail-closed verdict. Erring on the side of caution here is the
/// safety contract of the whole system.
pub fn check_image(detector: &mut dyn DetectorBackend, payload: &str) -> Verdict {
    match classify(detector, payload) {
        Ok(verdict) => verdict,
        Err(e) => {
            log::warn!("classification failed closed: {e}");
            Verdict::fail_closed(&e)
        }
    }
}
