use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::Error;

/// Product tag written into the marker comment of every transformed file
pub const PRODUCT_TAG: &str = "NICE-OBF";

/// Kind of source code accepted by the transform endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    JavaScript,
    Css,
    Html,
}

impl ContentType {
    /// Canonical lowercase tag
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::JavaScript => "javascript",
            ContentType::Css => "css",
            ContentType::Html => "html",
        }
    }

    /// Marker comment prepended to transformed output, using the
    /// comment syntax of the language.
    pub fn marker(&self) -> String {
        match self {
            ContentType::JavaScript => format!("// {}\n", PRODUCT_TAG),
            ContentType::Css => format!("/* {} */\n", PRODUCT_TAG),
            ContentType::Html => format!("<!-- {} -->\n", PRODUCT_TAG),
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ContentType::JavaScript => "JavaScript",
            ContentType::Css => "CSS",
            ContentType::Html => "HTML",
        };
        f.write_str(label)
    }
}

impl FromStr for ContentType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "javascript" | "js" => Ok(ContentType::JavaScript),
            "css" => Ok(ContentType::Css),
            "html" => Ok(ContentType::Html),
            _ => Err(Error::UnsupportedType(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("JavaScript".parse::<ContentType>().unwrap(), ContentType::JavaScript);
        assert_eq!("JS".parse::<ContentType>().unwrap(), ContentType::JavaScript);
        assert_eq!("Css".parse::<ContentType>().unwrap(), ContentType::Css);
        assert_eq!("HTML".parse::<ContentType>().unwrap(), ContentType::Html);
    }

    #[test]
    fn test_parse_unknown_lists_accepted_values() {
        let err = "typescript".parse::<ContentType>().unwrap_err();
        let message = err.to_string();
        assert!(message.contains("typescript"));
        assert!(message.contains("javascript, css, html"));
    }

    #[test]
    fn test_marker_uses_language_comment_syntax() {
        assert_eq!(ContentType::JavaScript.marker(), "// NICE-OBF\n");
        assert_eq!(ContentType::Css.marker(), "/* NICE-OBF */\n");
        assert_eq!(ContentType::Html.marker(), "<!-- NICE-OBF -->\n");
    }
}
