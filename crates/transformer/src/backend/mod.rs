//! Back-end capabilities
//!
//! A back-end wraps one third-party library. It receives well-formed source
//! and returns an equivalent transformed text, or reports an error on
//! malformed input.

mod css;
mod html;
mod javascript;

pub use css::LightningCssBackend;
pub use html::MinifyHtmlBackend;
pub use javascript::OxcBackend;

use thiserror::Error;

/// Failure reported by a back-end library
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct BackendError(pub String);

impl BackendError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// Transformed code plus any non-fatal diagnostics
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BackendOutput {
    pub code: String,
    pub warnings: Vec<String>,
}

impl From<String> for BackendOutput {
    fn from(code: String) -> Self {
        Self {
            code,
            warnings: Vec::new(),
        }
    }
}

/// A transformation capability for one language, configured by `O`
pub trait Backend<O>: Send + Sync {
    /// Library name, used in logs
    fn name(&self) -> &'static str;

    fn transform(&self, code: &str, options: &O) -> Result<BackendOutput, BackendError>;
}
