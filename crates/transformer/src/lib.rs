//! Transformation Dispatcher
//!
//! Routes source code to a per-language back-end, merges caller options over
//! the language defaults, and wraps the output with size and timing
//! statistics. The back-ends own all lexing and rewriting; this crate only
//! validates, forwards and measures.

pub mod backend;
pub mod dispatcher;
pub mod options;

pub use backend::{
    Backend, BackendError, BackendOutput, LightningCssBackend, MinifyHtmlBackend, OxcBackend,
};
pub use dispatcher::Dispatcher;
pub use options::{BackendOptions, CssOptions, HtmlOptions, JsOptions};
