//! Wire models for the transformation API

use serde::{Deserialize, Serialize};

/// Body of `POST /api/obfuscate`.
///
/// `code` and `type` are optional here so that a missing field is reported
/// as a 400 with a clear message rather than a deserialization error.
#[derive(Debug, Deserialize)]
pub struct TransformRequest {
    #[serde(default)]
    pub code: Option<String>,

    /// Type tag, matched case-insensitively
    #[serde(default, rename = "type")]
    pub kind: Option<String>,

    /// Caller overrides, merged over the defaults of `kind`
    #[serde(default)]
    pub options: serde_json::Value,
}

/// Standard response envelope: `data` on success, `error` otherwise
#[derive(Debug, Serialize)]
pub struct Envelope<T> {
    pub success: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorBody>,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub message: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<&'static str>,
}

impl<T> Envelope<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn error(message: impl Into<String>, kind: Option<&'static str>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(ErrorBody {
                message: message.into(),
                kind,
            }),
        }
    }
}

/// Memory snapshot in megabytes
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct MemoryUsage {
    /// Resident memory of the service process
    pub used: u64,
    /// Physical memory of the host
    pub total: u64,
}

/// Capabilities of this deployment
#[derive(Debug, Clone, Copy, Serialize)]
pub struct FeatureFlags {
    pub javascript_obfuscation: bool,
    pub css_obfuscation: bool,
    pub html_obfuscation: bool,
    pub file_upload: bool,
    pub file_download: bool,
}

impl FeatureFlags {
    /// No storage backend is attached, so file upload and download are off.
    pub const STATELESS: FeatureFlags = FeatureFlags {
        javascript_obfuscation: true,
        css_obfuscation: true,
        html_obfuscation: true,
        file_upload: false,
        file_download: false,
    };
}

/// Body of `GET /api/health`
#[derive(Debug, Serialize)]
pub struct HealthInfo {
    pub status: &'static str,
    pub timestamp: String,
    pub service: &'static str,
    pub version: &'static str,
    pub environment: String,
    /// Seconds since the service started
    pub uptime: f64,
    pub memory: MemoryUsage,
    pub features: FeatureFlags,
}
