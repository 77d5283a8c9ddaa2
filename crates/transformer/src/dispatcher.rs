//! Routes a transformation to the back-end of its content type

use std::sync::Arc;
use std::time::Instant;

use niceobf_common::{ContentType, Error, Result, TransformResult};
use tracing::{debug, info};

use crate::backend::{Backend, LightningCssBackend, MinifyHtmlBackend, OxcBackend};
use crate::options::{BackendOptions, CssOptions, HtmlOptions, JsOptions};

/// One back-end per content type. Holds no per-request state, so a single
/// instance is shared by every request.
#[derive(Clone)]
pub struct Dispatcher {
    javascript: Arc<dyn Backend<JsOptions>>,
    css: Arc<dyn Backend<CssOptions>>,
    html: Arc<dyn Backend<HtmlOptions>>,
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::with_backends(
            Arc::new(OxcBackend),
            Arc::new(LightningCssBackend),
            Arc::new(MinifyHtmlBackend),
        )
    }
}

impl Dispatcher {
    /// Dispatcher using the bundled oxc, lightningcss and minify-html back-ends
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_backends(
        javascript: Arc<dyn Backend<JsOptions>>,
        css: Arc<dyn Backend<CssOptions>>,
        html: Arc<dyn Backend<HtmlOptions>>,
    ) -> Self {
        Self {
            javascript,
            css,
            html,
        }
    }

    /// Transform `code` as `kind`, merging `options` over the defaults of
    /// that kind.
    ///
    /// # Errors
    /// * `Error::Validation` / `Error::Options` - empty code or bad options
    /// * `Error::Backend` - the library rejected the input
    pub fn transform(
        &self,
        code: &str,
        kind: ContentType,
        options: &serde_json::Value,
    ) -> Result<TransformResult> {
        if code.is_empty() {
            return Err(Error::Validation(format!("{} code is required", kind)));
        }

        match kind {
            ContentType::JavaScript => run(self.javascript.as_ref(), kind, code, options),
            ContentType::Css => run(self.css.as_ref(), kind, code, options),
            ContentType::Html => run(self.html.as_ref(), kind, code, options),
        }
    }
}

fn run<O>(
    backend: &dyn Backend<O>,
    kind: ContentType,
    code: &str,
    options: &serde_json::Value,
) -> Result<TransformResult>
where
    O: BackendOptions + std::fmt::Debug,
{
    let options = O::from_json(options)?;
    debug!(backend = backend.name(), ?options, "Resolved {} options", kind);

    let started = Instant::now();
    let output = backend
        .transform(code, &options)
        .map_err(|e| Error::Backend {
            kind,
            message: e.to_string(),
        })?;
    let elapsed_ms = started.elapsed().as_millis() as u64;

    let transformed = format!("{}{}", kind.marker(), output.code);
    let result = TransformResult::new(code, transformed, elapsed_ms).with_warnings(output.warnings);

    info!(
        backend = backend.name(),
        original_size = result.original_size,
        transformed_size = result.transformed_size,
        processing_time_ms = result.processing_time_ms,
        "{} transformation complete",
        kind
    );

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::{BackendError, BackendOutput};
    use serde_json::{json, Value};

    struct Upper;

    impl Backend<CssOptions> for Upper {
        fn name(&self) -> &'static str {
            "upper"
        }

        fn transform(&self, code: &str, _options: &CssOptions) -> std::result::Result<BackendOutput, BackendError> {
            Ok(code.to_uppercase().into())
        }
    }

    struct Broken;

    impl Backend<JsOptions> for Broken {
        fn name(&self) -> &'static str {
            "broken"
        }

        fn transform(&self, _code: &str, _options: &JsOptions) -> std::result::Result<BackendOutput, BackendError> {
            Err(BackendError::new("Unexpected token (1:9)"))
        }
    }

    fn stub_dispatcher() -> Dispatcher {
        Dispatcher::with_backends(Arc::new(Broken), Arc::new(Upper), Arc::new(MinifyHtmlBackend))
    }

    #[test]
    fn test_prefixes_marker_and_counts_bytes() {
        let result = stub_dispatcher()
            .transform("a{}é", ContentType::Css, &Value::Null)
            .unwrap();

        assert_eq!(result.transformed_code, "/* NICE-OBF */\nA{}É");
        assert_eq!(result.original_size, "a{}é".len());
        assert_eq!(result.transformed_size, result.transformed_code.len());
        assert_eq!(
            result.compression_ratio,
            result.original_size as f64 / result.transformed_size as f64
        );
    }

    #[test]
    fn test_empty_code_is_rejected_before_backend() {
        let result = stub_dispatcher().transform("", ContentType::JavaScript, &Value::Null);
        assert!(matches!(result, Err(Error::Validation(_))));
    }

    #[test]
    fn test_backend_message_is_kept() {
        let err = stub_dispatcher()
            .transform("function (", ContentType::JavaScript, &Value::Null)
            .unwrap_err();

        assert!(matches!(err, Error::Backend { kind: ContentType::JavaScript, .. }));
        assert_eq!(
            err.to_string(),
            "JavaScript transformation failed: Unexpected token (1:9)"
        );
    }

    #[test]
    fn test_invalid_options_are_rejected() {
        let result = stub_dispatcher().transform("a{}", ContentType::Css, &json!({ "level": 9 }));
        assert!(matches!(result, Err(Error::Validation(_))));
    }

    #[test]
    fn test_default_backends() {
        let dispatcher = Dispatcher::new();

        let js = dispatcher
            .transform("var answer = 40 + 2;", ContentType::JavaScript, &Value::Null)
            .unwrap();
        assert!(js.transformed_code.starts_with("// NICE-OBF\n"));

        let html = dispatcher
            .transform("<p>  hi  </p>", ContentType::Html, &json!({}))
            .unwrap();
        assert!(html.transformed_code.starts_with("<!-- NICE-OBF -->\n"));
    }
}
