//! Staff Client - terminal front end for the staff directory API
//!
//! The HTTP client talks to `staff-server`; `app` holds all UI state and
//! runs commands against an [`EmployeeService`], `ui` renders it.

pub mod app;
pub mod config;
pub mod error;
pub mod http;
pub mod logger;
pub mod service;
pub mod terminal;
pub mod ui;

pub use app::{Command, DirectoryApp, Focus, ViewMode};
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::HttpClient;
pub use service::EmployeeService;

// Re-export shared types for convenience
pub use shared::{CreatedResponse, Employee, EmployeeCreate, EmployeeUpdate, MessageResponse};
