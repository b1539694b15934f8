//! Data models
//!
//! Shared between staff-server and staff-client (via API).
//! All JSON field names are camelCase to match the HTTP contract.

pub mod employee;

// Re-exports
pub use employee::*;
