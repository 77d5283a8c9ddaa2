//! Per-language option structs
//!
//! Each struct carries its defaults as a `const`, and deserializes with
//! `#[serde(default)]` so that any key the caller supplies overrides the
//! default while every other field keeps it (a shallow merge). Unknown keys
//! are ignored.

use niceobf_common::{Error, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Options accepted by a back-end
pub trait BackendOptions: DeserializeOwned + Default {
    /// Reject values that deserialize but make no sense
    fn validate(&self) -> std::result::Result<(), String> {
        Ok(())
    }

    /// Merge a caller-supplied JSON object over the defaults.
    ///
    /// `null` yields the defaults; anything other than an object is rejected.
    fn from_json(value: &serde_json::Value) -> Result<Self> {
        let options = match value {
            serde_json::Value::Null => Self::default(),
            serde_json::Value::Object(_) => serde_json::from_value(value.clone())?,
            _ => {
                return Err(Error::Validation(
                    "options must be a JSON object".to_string(),
                ))
            }
        };

        options.validate().map_err(Error::Validation)?;

        Ok(options)
    }
}

/// JavaScript options
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct JsOptions {
    /// Emit minified, single-line output
    pub compact: bool,

    /// Rename local bindings to short identifiers
    pub rename_identifiers: bool,

    /// Also rename top-level bindings. Breaks scripts whose globals are
    /// referenced from elsewhere.
    pub rename_globals: bool,

    /// Run the compressor (constant folding, dead code removal, ...)
    pub simplify: bool,

    /// Drop `console.*` calls
    pub disable_console_output: bool,

    /// Parse the input as a strict ES module. Otherwise it is parsed as
    /// CommonJS, which still accepts `import` and `export` statements.
    pub module: bool,
}

impl JsOptions {
    pub const DEFAULT: JsOptions = JsOptions {
        compact: true,
        rename_identifiers: true,
        rename_globals: false,
        simplify: true,
        disable_console_output: false,
        module: false,
    };
}

impl Default for JsOptions {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl BackendOptions for JsOptions {}

/// CSS options
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CssOptions {
    /// Optimization level: 0 only reprints compactly, 1 also merges and
    /// shortens rules. 2 is accepted and currently behaves exactly like 1.
    pub level: u8,

    /// Skip invalid rules instead of failing; skipped rules are reported
    /// as warnings.
    pub error_recovery: bool,
}

impl CssOptions {
    pub const DEFAULT: CssOptions = CssOptions {
        level: 2,
        error_recovery: false,
    };
}

impl Default for CssOptions {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl BackendOptions for CssOptions {
    fn validate(&self) -> std::result::Result<(), String> {
        if self.level > 2 {
            return Err(format!("level must be 0, 1 or 2 (got {})", self.level));
        }
        Ok(())
    }
}

/// HTML options. Whitespace is always collapsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HtmlOptions {
    pub remove_comments: bool,

    /// Drop `type="text"` from `<input>`, where it is the implied value
    pub remove_redundant_attributes: bool,

    /// Minify `<style>` contents and `style` attributes
    pub minify_css: bool,

    /// Minify `<script>` contents
    pub minify_js: bool,

    pub keep_closing_tags: bool,
}

impl HtmlOptions {
    pub const DEFAULT: HtmlOptions = HtmlOptions {
        remove_comments: true,
        remove_redundant_attributes: true,
        minify_css: true,
        minify_js: true,
        keep_closing_tags: false,
    };
}

impl Default for HtmlOptions {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl BackendOptions for HtmlOptions {}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_null_yields_defaults() {
        let options = JsOptions::from_json(&serde_json::Value::Null).unwrap();
        assert_eq!(options, JsOptions::DEFAULT);
    }

    #[test]
    fn test_caller_keys_win() {
        let options = JsOptions::from_json(&json!({
            "renameGlobals": true,
            "compact": false
        }))
        .unwrap();

        assert!(options.rename_globals);
        assert!(!options.compact);
        // Untouched keys keep their defaults
        assert!(options.rename_identifiers);
        assert!(options.simplify);
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let options = HtmlOptions::from_json(&json!({
            "useShortDoctype": true,
            "minifyJs": false
        }))
        .unwrap();

        assert!(!options.minify_js);
        assert!(options.minify_css);
    }

    #[test]
    fn test_wrong_value_type_is_rejected() {
        let result = CssOptions::from_json(&json!({ "level": "high" }));
        assert!(matches!(result, Err(Error::Options(_))));
    }

    #[test]
    fn test_non_object_is_rejected() {
        let result = CssOptions::from_json(&json!([1, 2]));
        assert!(matches!(result, Err(Error::Validation(_))));
    }

    #[test]
    fn test_css_level_out_of_range() {
        let result = CssOptions::from_json(&json!({ "level": 3 }));
        let err = result.unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
        assert!(err.to_string().contains("level must be 0, 1 or 2"));
    }
}
