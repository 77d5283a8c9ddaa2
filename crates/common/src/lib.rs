pub mod content_type;
pub mod error;
pub mod result;

pub use content_type::{ContentType, PRODUCT_TAG};
pub use error::{Error, Result};
pub use result::TransformResult;
