//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page binds one content namespace of the message bundle and delegates
//! interactive pieces to `components`.

pub mod about;
pub mod contact;
pub mod home;
pub mod projects;
