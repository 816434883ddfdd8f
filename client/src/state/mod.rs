//! Application state modules.
//!
//! DESIGN
//! ======
//! State types are plain Rust values wrapped in `RwSignal` at the app root and
//! shared through Leptos context. Keeping them free of reactive types lets the
//! transitions be unit tested without a runtime.

pub mod contact;
pub mod i18n;
pub mod ui;
