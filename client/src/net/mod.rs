//! Network layer modules.
//!
//! DESIGN
//! ======
//! The site has a single write endpoint (locale preference). Requests live
//! here so components never build URLs or payloads themselves.

pub mod api;
