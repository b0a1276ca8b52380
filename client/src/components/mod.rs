//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page chrome and admin console panels. Shared auth state
//! comes from Leptos context; console panels receive an `AdminConsole` handle.

pub mod bookings_table;
pub mod class_form;
pub mod mentor_form;
pub mod notice_banner;
pub mod route_guard;
pub mod site_header;
