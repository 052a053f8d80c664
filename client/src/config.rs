//! Backend endpoint configuration.
//!
//! The host server renders the backend base URL into a
//! `<meta name="backend-url">` tag; the hydrated client reads it back so the
//! WASM bundle carries no deployment-specific address.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Base URL of the recognition backend when nothing else is configured.
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:5001";
/// Name of the meta tag carrying the backend base URL.
pub const BACKEND_META_NAME: &str = "backend-url";

/// Resolved backend location shared through Leptos context.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BackendConfig {
    base_url: String,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BACKEND_URL)
    }
}

impl BackendConfig {
    /// Build from a base URL. Blank input falls back to the default and a
    /// trailing `/` is trimmed.
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        let trimmed = base_url.trim().trim_end_matches('/');
        if trimmed.is_empty() {
            return Self { base_url: DEFAULT_BACKEND_URL.to_owned() };
        }
        Self { base_url: trimmed.to_owned() }
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET` health endpoint.
    #[must_use]
    pub fn status_url(&self) -> String {
        format!("{}/status", self.base_url)
    }

    /// `POST` recognition endpoint.
    #[must_use]
    pub fn predict_url(&self) -> String {
        format!("{}/predict", self.base_url)
    }

    /// Read the base URL from the document's meta tag, falling back to the
    /// default outside the browser or when the tag is absent.
    #[must_use]
    pub fn from_document() -> Self {
        #[cfg(feature = "hydrate")]
        {
            let selector = format!("meta[name=\"{BACKEND_META_NAME}\"]");
            let content = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|d| d.query_selector(&selector).ok().flatten())
                .and_then(|el| el.get_attribute("content"));
            match content {
                Some(url) => Self::new(&url),
                None => Self::default(),
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Self::default()
        }
    }
}
