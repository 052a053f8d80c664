//! Backend availability as shown in the header badge.

#[cfg(test)]
#[path = "health_test.rs"]
mod health_test;

/// Milliseconds between status probes.
pub const POLL_INTERVAL_MS: u32 = 5_000;

/// Result of the most recent status probe.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum BackendHealth {
    /// No probe has completed yet.
    #[default]
    Checking,
    /// Last probe got a 2xx; carries the backend's self-description.
    Online(String),
    /// Last probe failed or got a non-2xx.
    Offline,
}

impl BackendHealth {
    #[must_use]
    pub fn is_online(&self) -> bool {
        matches!(self, Self::Online(_))
    }

    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Checking => "Backend: Checking...",
            Self::Online(_) => "Backend: Online",
            Self::Offline => "Backend: Offline",
        }
    }

    /// CSS classes for the badge; `status-online` only while reachable.
    #[must_use]
    pub fn css_class(&self) -> &'static str {
        if self.is_online() { "backend-status status-online" } else { "backend-status" }
    }

    #[must_use]
    pub fn tooltip(&self) -> String {
        match self {
            Self::Online(detail) => detail.clone(),
            Self::Checking => "waiting for first status check".to_owned(),
            Self::Offline => "backend unreachable".to_owned(),
        }
    }
}
