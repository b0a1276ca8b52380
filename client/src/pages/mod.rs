//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`. Admin console workflows live in `admin_actions` so they
//! can be driven without a browser.

pub mod admin;
pub mod admin_actions;
pub mod dashboard;
pub mod home;
pub mod login;
pub mod payment;
pub mod post_auth;
