//! Repository Module
//!
//! Business-level operations on top of the document store.

pub mod employee;

pub use employee::EmployeeRepository;

use crate::store::StoreError;
use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Duplicate: {0}")]
    Duplicate(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;
