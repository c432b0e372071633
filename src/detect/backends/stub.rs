use anyhow::anyhow;

use crate::detect::backend::DetectorBackend;
use crate::detect::result::Detection;
use crate::error::FilterError;

/// Stub backend for testing. Replays canned detections.
pub struct StubBackend {
    detections: Vec<Detection>,
    failure: Option<String>,
}

impl StubBackend {
    /// Backend that reports the given detections for every frame.
    pub fn with_detections(detections: Vec<Detection>) -> Self {
        Self {
            detections,
            failure: None,
        }
    }

    /// Backend that fails every invocation with `message`.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            detections: Vec::new(),
            failure: Some(message.into()),
        }
    }
}

impl Default for StubBackend {
    fn default() -> Self {
        Self::with_detections(Vec::new())
    }
}

impl DetectorBackend for StubBackend {
    fn name(&self) -> &'static str {
        "stub"
    }

    fn detect(
        &mut self,
        pixels: &[u8],
        width: u32,
        height: u32,
    ) -> Result<Vec<Detection>, FilterError> {
        let expected = width as usize * height as usize * 3;
        if pixels.len() != expected {
            return Err(FilterError::Detection(anyhow!(
                "expected {} RGB bytes, received {}",
                expected,
                pixels.len()
            )));
        }
        if let Some(message) = &self.failure {
            return Err(FilterError::Detection(anyhow!("{message}")));
        }
        Ok(self.detections.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detect::labels::Label;

    #[test]
    fn replays_canned_detections() {
        let canned = vec![Detection::unlocated(Label::FaceF, 0.9)];
        let mut backend = StubBackend::with_detections(canned.clone());
        let out = backend.detect(&[0u8; 12], 2, 2).expect("stub detect");
        assert_eq!(out, canned);
    }

    #[test]
    fn rejects_wrong_buffer_length() {
        let mut backend = StubBackend::default();
        assert!(backend.detect(&[0u8; 5], 2, 2).is_err());
    }

    #[test]
    fn failing_stub_reports_detection_error() {
        let mut backend = StubBackend::failing("inference backend exploded");
        let err = backend.detect(&[0u8; 12], 2, 2).unwrap_err();
        assert!(err.to_string().contains("inference backend exploded"));
    }
}
