//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the site chrome and interactive controls while reading
//! shared state from Leptos context providers.

pub mod contact_form;
pub mod header;
pub mod language_switcher;
pub mod theme_toggle;
