use crate::detect::result::Detection;
use crate::error::FilterError;

/// Detector backend trait.
///
/// A backend wraps one loaded model instance. Construction performs the
/// one-time model initialization; construct a backend once per process
/// and reuse it. Backends are `Send` but not synchronized — a caller
/// that shares one across threads must serialize access itself.
pub trait DetectorBackend: Send {
    /// Backend identifier.
    fn name(&self) -> &'static str;

    /// Run detection on an RGB24 pixel buffer.
    ///
    /// `pixels` must hold exactly `width * height * 3` bytes. The buffer
    /// is read-only and ephemeral; implementations must not retain it.
    fn detect(
        &mut self,
        pixels: &[u8],
        width: u32,
        height: u32,
    ) -> Result<Vec<Detection>, FilterError>;

    /// Optional warm-up hook.
    fn warm_up(&mut self) -> Result<(), FilterError> {
        Ok(())
    }
}
