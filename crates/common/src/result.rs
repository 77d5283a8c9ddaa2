use serde::{Deserialize, Serialize};

/// Output of a single transformation, with size and timing statistics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransformResult {
    /// Transformed source, including the marker comment
    pub transformed_code: String,

    /// UTF-8 byte length of the input
    pub original_size: usize,

    /// UTF-8 byte length of `transformed_code`
    pub transformed_size: usize,

    /// `original_size / transformed_size`
    pub compression_ratio: f64,

    /// Wall-clock time spent in the back-end
    pub processing_time_ms: u64,

    /// Non-fatal diagnostics reported by the back-end
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

impl TransformResult {
    /// Build a result from the input and the final output, computing sizes
    /// as byte lengths so non-ASCII sources yield correct ratios.
    pub fn new(original: &str, transformed_code: String, processing_time_ms: u64) -> Self {
        let original_size = original.len();
        let transformed_size = transformed_code.len();

        Self {
            transformed_code,
            original_size,
            transformed_size,
            compression_ratio: original_size as f64 / transformed_size as f64,
            processing_time_ms,
            warnings: Vec::new(),
        }
    }

    pub fn with_warnings(mut self, warnings: Vec<String>) -> Self {
        self.warnings = warnings;
        self
    }
}
