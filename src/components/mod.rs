//! Page section and chrome components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the portfolio sections and interaction surfaces while
//! reading shared theme and navigation state from Leptos context providers.

pub mod about;
pub mod contact;
pub mod hero;
pub mod navbar;
pub mod preloader;
pub mod projects;
pub mod skills;
pub mod theme_toggle;
