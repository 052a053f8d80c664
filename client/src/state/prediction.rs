//! Recognition result shown under the input panels.
//!
//! DESIGN
//! ======
//! Every submission takes a ticket from `begin`. Clearing the canvas or
//! starting a newer submission advances the generation, so a slow response
//! carrying an old ticket is dropped by `resolve` instead of overwriting what
//! the user is looking at now.
//!
//! The confidence figure is cosmetic: the backend reports no certainty, so a
//! value is drawn uniformly from `[CONFIDENCE_MIN, CONFIDENCE_MAX)`.

#[cfg(test)]
#[path = "prediction_test.rs"]
mod prediction_test;

use rand::Rng;

use crate::net::api::ApiError;
use crate::net::types::PredictResponse;

pub const WAITING_TEXT: &str = "... waiting for input";
pub const UNKNOWN_LABEL: &str = "???";
pub const ERROR_LABEL: &str = "Error";
pub const SERVER_ERROR_LABEL: &str = "Server Error";
pub const CONFIDENCE_MIN: f64 = 85.0;
pub const CONFIDENCE_MAX: f64 = 95.0;

/// What the result panel is doing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PredictionPhase {
    /// Nothing submitted since load or the last clear.
    #[default]
    Idle,
    /// Request in flight; loader visible, label hidden.
    Loading,
    /// A result (or error) is displayed.
    Shown,
}

/// How a finished request should be presented.
#[derive(Clone, Debug, PartialEq)]
pub enum PredictionOutcome {
    /// Backend said `success`.
    Recognized { label: String, confidence: f64 },
    /// Backend answered with any other status.
    Rejected,
    /// Request failed before a usable answer arrived.
    Unreachable,
}

impl PredictionOutcome {
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Recognized { label, .. } => label,
            Self::Rejected => ERROR_LABEL,
            Self::Unreachable => SERVER_ERROR_LABEL,
        }
    }

    #[must_use]
    pub fn confidence(&self) -> f64 {
        match self {
            Self::Recognized { confidence, .. } => *confidence,
            Self::Rejected | Self::Unreachable => 0.0,
        }
    }
}

/// Draw a cosmetic confidence percentage.
pub fn fabricate_confidence<R: Rng>(rng: &mut R) -> f64 {
    rng.random_range(CONFIDENCE_MIN..CONFIDENCE_MAX)
}

/// Map a decoded backend response to an outcome.
pub fn interpret_response<R: Rng>(resp: &PredictResponse, rng: &mut R) -> PredictionOutcome {
    if !resp.is_success() {
        return PredictionOutcome::Rejected;
    }
    let label = match resp.prediction.as_deref() {
        Some(text) if !text.is_empty() => text.to_owned(),
        _ => UNKNOWN_LABEL.to_owned(),
    };
    PredictionOutcome::Recognized { label, confidence: fabricate_confidence(rng) }
}

/// Map the full request result, errors included, to an outcome.
pub fn outcome_from_result<R: Rng>(
    result: &Result<PredictResponse, ApiError>,
    rng: &mut R,
) -> PredictionOutcome {
    match result {
        Ok(resp) => interpret_response(resp, rng),
        Err(_) => PredictionOutcome::Unreachable,
    }
}

/// Result panel model.
#[derive(Clone, Debug, PartialEq)]
pub struct PredictionState {
    pub phase: PredictionPhase,
    pub label: String,
    pub confidence: f64,
    generation: u64,
}

impl Default for PredictionState {
    fn default() -> Self {
        Self {
            phase: PredictionPhase::Idle,
            label: WAITING_TEXT.to_owned(),
            confidence: 0.0,
            generation: 0,
        }
    }
}

impl PredictionState {
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.phase == PredictionPhase::Loading
    }

    /// CSS width of the confidence bar fill.
    #[must_use]
    pub fn confidence_width(&self) -> String {
        format!("{}%", self.confidence)
    }

    /// Enter the loading phase and return the ticket for this submission.
    pub fn begin(&mut self) -> u64 {
        self.generation += 1;
        self.phase = PredictionPhase::Loading;
        self.generation
    }

    /// Apply an outcome if `ticket` is still current. Returns whether it was
    /// applied.
    pub fn resolve(&mut self, ticket: u64, outcome: &PredictionOutcome) -> bool {
        if ticket != self.generation {
            return false;
        }
        self.phase = PredictionPhase::Shown;
        outcome.label().clone_into(&mut self.label);
        self.confidence = outcome.confidence();
        true
    }

    /// Back to the waiting placeholder; invalidates any pending ticket.
    pub fn reset(&mut self) {
        self.generation += 1;
        self.phase = PredictionPhase::Idle;
        WAITING_TEXT.clone_into(&mut self.label);
        self.confidence = 0.0;
    }
}
