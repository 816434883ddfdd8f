//! Browser glue shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate `web-sys` access behind plain functions and the
//! `prefs` traits. Every helper compiles to a safe no-op outside `hydrate`
//! so server rendering stays deterministic.

pub mod locale_env;
pub mod theme_env;
