//! Wire types for the recognition backend.
//!
//! The backend speaks plain JSON over HTTP. Every response field is optional
//! on our side so a partial or error-shaped body still decodes and can be
//! mapped to a UI outcome instead of a decode failure.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Deserializer, Serialize};

/// Status value the backend reports for a completed prediction.
pub const STATUS_SUCCESS: &str = "success";

/// Body of `POST /predict`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredictRequest {
    /// Base64 `data:` URL of the image to recognise.
    pub image: String,
}

/// Response of `POST /predict`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredictResponse {
    #[serde(default, deserialize_with = "string_or_none")]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "string_or_none")]
    pub prediction: Option<String>,
    #[serde(default, deserialize_with = "string_or_none")]
    pub error: Option<String>,
}

/// Accept any JSON value; keep it only when it is a string.
fn string_or_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(text) => Ok(Some(text)),
        _ => Ok(None),
    }
}

impl PredictResponse {
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status.as_deref() == Some(STATUS_SUCCESS)
    }
}

/// Response of `GET /status`. Informational only; availability is decided by
/// the HTTP status code.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackendStatus {
    #[serde(default)]
    pub model_loaded: Option<bool>,
    #[serde(default)]
    pub device: Option<String>,
}

impl BackendStatus {
    /// Short human summary for the status tooltip.
    #[must_use]
    pub fn summary(&self) -> String {
        let model = match self.model_loaded {
            Some(true) => "model loaded",
            Some(false) => "model missing",
            None => "model unknown",
        };
        match self.device.as_deref() {
            Some(device) if !device.is_empty() => format!("{model} on {device}"),
            _ => model.to_owned(),
        }
    }
}
