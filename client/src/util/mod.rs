//! Browser helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! These modules isolate `web-sys` plumbing (2D context calls, `FileReader`)
//! from component logic. They only exist in the hydrated build.

#[cfg(feature = "hydrate")]
pub mod file_reader;
#[cfg(feature = "hydrate")]
pub mod sketch_canvas;
