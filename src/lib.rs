//! Single-page portfolio for Divy Kalathiya, rendered client-side with Leptos.
//!
//! ARCHITECTURE
//! ============
//! `app` wires context and layout, `components` render the sections, `state`
//! holds the pure page-wide models, and `util` wraps the browser APIs behind
//! natively testable seams.

pub mod app;
pub mod components;
pub mod state;
pub mod util;
