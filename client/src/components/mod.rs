//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the recognizer chrome and input surfaces while
//! reading/writing shared state from Leptos context providers.

pub mod backend_badge;
pub mod result_panel;
pub mod sketch_pad;
pub mod tab_bar;
pub mod upload_panel;
