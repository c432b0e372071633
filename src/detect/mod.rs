mod backend;
mod backends;
mod labels;
mod result;

pub use backend::DetectorBackend;
pub use backends::StubBackend;
#[cfg(feature = "backend-tract")]
pub use backends::TractBackend;
pub use labels::Label;
pub use result::Detection;
