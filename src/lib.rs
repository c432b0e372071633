//! Teen-safe image content filter.
//!
//! Classifies a base64-encoded image as appropriate or not for a teen
//! audience by running a pretrained nudity detector and applying fixed
//! confidence thresholds over the aggregated per-label scores.
//!
//! # Module Structure
//!
//! - `decode`: base64 payload to RGB pixel buffer
//! - `detect`: detector backends (ONNX inference via tract, test stub)
//! - `score`: per-label max-confidence aggregation
//! - `policy`: fixed-threshold appropriateness rule
//! - `verdict`: output record and the fail-closed collapse
//! - `filter`: pipeline wiring
//! - `config`: detector runtime settings
//!
//! # Fail-closed contract
//!
//! Any internal failure (missing model, bad payload, inference error)
//! becomes `appropriate = false` with the error text in the message; it
//! never propagates as a crash. Only CLI misuse exits nonzero.
//!
//! # Concurrency
//!
//! Everything is synchronous and single-threaded. Construct one detector
//! backend per process at startup and inject it; sharing one across
//! threads requires caller-side serialization.

pub mod config;
pub mod decode;
pub mod detect;
pub mod error;
pub mod filter;
pub mod policy;
pub mod score;
pub mod verdict;

pub use config::FilterConfig;
#[cfg(feature = "backend-tract")]
pub use detect::TractBackend;
pub use detect::{Detection, DetectorBackend, Label, StubBackend};
pub use error::FilterError;
pub use filter::{check_image, classify};
pub use score::{aggregate, ScoreMap};
pub use verdict::Verdict;
