//! Utility helpers shared across the page's components.
//!
//! SYSTEM CONTEXT
//! ==============
//! These modules fence browser and environment concerns off from component
//! logic: each one exposes a pure, natively-testable core with thin
//! WASM-only wiring around it, so the interesting behavior runs under plain
//! `cargo test` with no browser in the loop.

pub mod dark_mode;
pub mod resume;
pub mod scroll;
pub mod visibility;
