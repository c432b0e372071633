use thiserror::Error;

/// Errors produced by the classification pipeline.
///
/// Every variant is collapsed into a fail-closed [`Verdict`] at the
/// boundary by [`check_image`]; none of them escapes the process as a
/// crash or a nonzero exit.
///
/// [`Verdict`]: crate::verdict::Verdict
/// [`check_image`]: crate::filter::check_image
#[derive(Debug, Error)]
pub enum FilterError {
    /// The detection model file is absent or could not be loaded.
    ///
    /// Raised when backend initialization is attempted, not before.
    #[error("nudity detection model unavailable: {0}")]
    DependencyMissing(String),

    /// The payload was not valid base64.
    #[error("invalid base64 image data: {0}")]
    Base64(#[from] base64::DecodeError),

    /// The payload decoded to bytes that are not a parseable image.
    #[error("unreadable image data: {0}")]
    Image(#[from] image::ImageError),

    /// Model inference failed.
    #[error("detection failed: {0}")]
    Detection(#[source] anyhow::Error),

    /// The runtime configuration file could not be read or parsed.
    #[error("invalid configuration: {0}")]
    Config(String),
}
