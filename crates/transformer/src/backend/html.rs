use super::{Backend, BackendError, BackendOutput};
use crate::options::HtmlOptions;

/// HTML back-end built on minify-html
#[derive(Debug, Default, Clone, Copy)]
pub struct MinifyHtmlBackend;

impl MinifyHtmlBackend {
    fn cfg(options: &HtmlOptions) -> minify_html::Cfg {
        minify_html::Cfg {
            keep_comments: !options.remove_comments,
            keep_input_type_text_attr: !options.remove_redundant_attributes,
            keep_closing_tags: options.keep_closing_tags,
            minify_css: options.minify_css,
            minify_js: options.minify_js,
            ..minify_html::Cfg::default()
        }
    }
}

impl Backend<HtmlOptions> for MinifyHtmlBackend {
    fn name(&self) -> &'static str {
        "minify-html"
    }

    fn transform(&self, code: &str, options: &HtmlOptions) -> Result<BackendOutput, BackendError> {
        let minified = minify_html::minify(code.as_bytes(), &Self::cfg(options));

        String::from_utf8(minified)
            .map(BackendOutput::from)
            .map_err(|_| BackendError::new("minification produced invalid UTF-8"))
    }
}
