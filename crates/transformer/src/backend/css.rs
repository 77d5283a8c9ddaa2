use std::sync::{Arc, PoisonError, RwLock};

use lightningcss::stylesheet::{MinifyOptions, ParserOptions, PrinterOptions, StyleSheet};

use super::{Backend, BackendError, BackendOutput};
use crate::options::CssOptions;

/// CSS back-end built on lightningcss
#[derive(Debug, Default, Clone, Copy)]
pub struct LightningCssBackend;

impl Backend<CssOptions> for LightningCssBackend {
    fn name(&self) -> &'static str {
        "lightningcss"
    }

    fn transform(&self, code: &str, options: &CssOptions) -> Result<BackendOutput, BackendError> {
        let warnings = Arc::new(RwLock::new(Vec::new()));
        let parser_options = ParserOptions {
            error_recovery: options.error_recovery,
            warnings: Some(warnings.clone()),
            ..ParserOptions::default()
        };

        let mut stylesheet =
            StyleSheet::parse(code, parser_options).map_err(|e| BackendError::new(e.to_string()))?;

        if options.level > 0 {
            stylesheet
                .minify(MinifyOptions::default())
                .map_err(|e| BackendError::new(e.to_string()))?;
        }

        let printed = stylesheet
            .to_css(PrinterOptions {
                minify: true,
                ..PrinterOptions::default()
            })
            .map_err(|e| BackendError::new(e.to_string()))?;

        Ok(BackendOutput {
            code: printed.code,
            warnings: collect_warnings(&warnings),
        })
    }
}

/// Read the parser warnings, keeping them even if a writer panicked
fn collect_warnings<T: ToString>(warnings: &RwLock<Vec<T>>) -> Vec<String> {
    warnings
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .iter()
        .map(|w| w.to_string())
        .collect()
}
