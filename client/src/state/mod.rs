//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`auth`, `redirect`, `admin`) so guards,
//! pages, and components depend on small focused models.

pub mod admin;
pub mod auth;
pub mod redirect;
