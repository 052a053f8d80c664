//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`health`, `prediction`, `sketch`, `upload`,
//! `ui`) so each component depends on a small focused model. All of it is
//! plain Rust, provided through Leptos context as `RwSignal`s by `app`.

pub mod health;
pub mod prediction;
pub mod sketch;
pub mod ui;
pub mod upload;
