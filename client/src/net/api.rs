//! HTTP calls to the recognition backend.
//!
//! Client-side (hydrate): real requests via `gloo-net`.
//! Server-side (SSR): stubs returning `ApiError::Unavailable`, since the
//! backend is only ever contacted from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Both calls return `Result<_, ApiError>`. Callers fold every error into UI
//! state (`Offline`, `Server Error`); nothing here panics or retries.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{BackendStatus, PredictResponse};
use crate::config::BackendConfig;
use crate::state::health::BackendHealth;

/// Failure talking to the backend.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (network, CORS, bad URL).
    #[error("request failed: {0}")]
    Request(String),

    /// The backend answered with a non-2xx status.
    #[error("unexpected status: {0}")]
    Status(u16),

    /// The response body was not the JSON we expected.
    #[error("response decode failed: {0}")]
    Decode(String),

    /// Called outside the browser.
    #[error("not available on server")]
    Unavailable,
}

/// Probe `GET /status`.
///
/// Any 2xx counts as reachable; the body is decoded leniently and an
/// unreadable body yields a default `BackendStatus`.
///
/// # Errors
///
/// `Request` on transport failure, `Status` on a non-2xx answer.
pub async fn fetch_backend_status(config: &BackendConfig) -> Result<BackendStatus, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&config.status_url())
            .send()
            .await
            .map_err(|e| ApiError::Request(e.to_string()))?;
        if !resp.ok() {
            return Err(ApiError::Status(resp.status()));
        }
        Ok(resp.json::<BackendStatus>().await.unwrap_or_default())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = config;
        Err(ApiError::Unavailable)
    }
}

/// Submit an image data URL to `POST /predict`.
///
/// The body is decoded whatever the HTTP status, because the backend reports
/// failures as JSON (`{"error": ...}`) alongside 4xx/5xx codes.
///
/// # Errors
///
/// `Request` on transport failure, `Decode` when the body is not JSON.
pub async fn predict(config: &BackendConfig, image: String) -> Result<PredictResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let body = super::types::PredictRequest { image };
        let resp = gloo_net::http::Request::post(&config.predict_url())
            .json(&body)
            .map_err(|e| ApiError::Request(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Request(e.to_string()))?;
        resp.json::<PredictResponse>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, image);
        Err(ApiError::Unavailable)
    }
}

/// Collapse a probe result into the indicator state.
#[must_use]
pub fn health_from_probe(result: &Result<BackendStatus, ApiError>) -> BackendHealth {
    match result {
        Ok(status) => BackendHealth::Online(status.summary()),
        Err(_) => BackendHealth::Offline,
    }
}
