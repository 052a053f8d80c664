//! Tab selection for the two input panels.
//!
//! DESIGN
//! ======
//! A single `active_tab` field is the only source of truth, so at most one
//! panel can ever be visible; there is no per-panel flag to fall out of sync.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Input panels on the recognizer page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RecognizerTab {
    /// Freehand drawing canvas.
    #[default]
    Draw,
    /// Image file upload.
    Upload,
}

impl RecognizerTab {
    pub const ALL: [Self; 2] = [Self::Draw, Self::Upload];

    /// Stable key used for element ids (`draw-tab`, `upload-tab`).
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::Draw => "draw",
            Self::Upload => "upload",
        }
    }

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Draw => "Draw",
            Self::Upload => "Upload Image",
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub active_tab: RecognizerTab,
}

impl UiState {
    pub fn activate(&mut self, tab: RecognizerTab) {
        self.active_tab = tab;
    }

    #[must_use]
    pub fn is_visible(&self, tab: RecognizerTab) -> bool {
        self.active_tab == tab
    }

    #[must_use]
    pub fn tab_button_class(&self, tab: RecognizerTab) -> &'static str {
        if self.is_visible(tab) { "tab-btn active" } else { "tab-btn" }
    }

    #[must_use]
    pub fn panel_class(&self, tab: RecognizerTab) -> &'static str {
        if self.is_visible(tab) { "tab-content" } else { "tab-content hidden" }
    }
}
