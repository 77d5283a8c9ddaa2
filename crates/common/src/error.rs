use thiserror::Error;

use crate::ContentType;

#[derive(Error, Debug)]
pub enum Error {
    #[error("{0}")]
    Validation(String),

    #[error("Unsupported type '{0}'. Use: javascript, css, html")]
    UnsupportedType(String),

    #[error("{kind} transformation failed: {message}")]
    Backend { kind: ContentType, message: String },

    #[error("Invalid options: {0}")]
    Options(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
