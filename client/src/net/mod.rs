//! Networking modules for the academic REST backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` owns the HTTP gateway and its error type; `types` defines the wire
//! schema shared by pages and workflows.

pub mod api;
pub mod types;
