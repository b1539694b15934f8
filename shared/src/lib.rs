//! Shared types for the staff directory
//!
//! Wire types used by both `staff-server` and `staff-client`: the employee
//! record and its create/update payloads, the JSON response bodies, and
//! small utilities such as document id generation.

pub mod models;
pub mod response;
pub mod util;

// Re-exports
pub use models::{Employee, EmployeeCreate, EmployeeUpdate};
pub use response::{CreatedResponse, ErrorBody, MessageResponse};
pub use serde::{Deserialize, Serialize};
