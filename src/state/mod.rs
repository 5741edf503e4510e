//! Page-wide state models.
//!
//! State is split by domain (`theme`, `nav`) so components can depend on
//! small focused models instead of one page-wide blob. Each model is a plain
//! struct; the app shell wraps them in signals and provides them via context.

pub mod nav;
pub mod theme;
