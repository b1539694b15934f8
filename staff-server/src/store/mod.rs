//! Document store
//!
//! The system of record is a single collection of employee documents
//! addressed by store-assigned ids. Handlers never touch a backend directly;
//! they go through [`EmployeeStore`], which supports exactly four operations:
//!
//! | Operation | Semantics |
//! |-----------|-----------|
//! | `list` | all documents, ordered by id (= creation order) |
//! | `insert` | store a new document, return its generated id |
//! | `update` | overwrite the mutable fields of an existing document |
//! | `delete` | remove a document; unknown ids are a no-op |
//!
//! # Backends
//!
//! - [`MemoryStore`] - ordered in-process map (tests, `STORE_PATH=:memory:`)
//! - [`RedbStore`] - embedded redb file

mod disk;
mod memory;

pub use disk::RedbStore;
pub use memory::MemoryStore;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use shared::{Employee, EmployeeUpdate};
use std::sync::Arc;
use thiserror::Error;

use crate::core::Config;

/// Storage errors
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] redb::DatabaseError),

    #[error("Transaction error: {0}")]
    Transaction(#[from] redb::TransactionError),

    #[error("Table error: {0}")]
    Table(#[from] redb::TableError),

    #[error("Storage error: {0}")]
    Storage(#[from] redb::StorageError),

    #[error("Commit error: {0}")]
    Commit(#[from] redb::CommitError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("No document to update: {0}")]
    NotFound(String),

    #[error("Store task failed: {0}")]
    Task(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Stored form of an employee: every field except the id, which is the key
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeDocument {
    pub employee_id: String,
    pub name: String,
    pub surname: String,
    pub email: String,
    pub phone_number: String,
    pub employee_position: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl EmployeeDocument {
    /// Attach the store-assigned id
    pub fn into_employee(self, id: impl Into<String>) -> Employee {
        Employee {
            id: id.into(),
            employee_id: self.employee_id,
            name: self.name,
            surname: self.surname,
            email: self.email,
            phone_number: self.phone_number,
            employee_position: self.employee_position,
            image: self.image,
        }
    }

    /// Overwrite the mutable fields; `employee_id` is left untouched
    pub fn apply(&mut self, changes: EmployeeUpdate) {
        self.name = changes.name;
        self.surname = changes.surname;
        self.email = changes.email;
        self.phone_number = changes.phone_number;
        self.employee_position = changes.employee_position;
        self.image = changes.image;
    }
}

/// Generic document-collection interface
#[async_trait]
pub trait EmployeeStore: Send + Sync {
    /// All documents with their ids attached, in id order
    async fn list(&self) -> StoreResult<Vec<Employee>>;

    /// Insert a document under a freshly generated id
    async fn insert(&self, document: EmployeeDocument) -> StoreResult<String>;

    /// Partial overwrite of an existing document
    ///
    /// Fails with [`StoreError::NotFound`] when no document has this id.
    async fn update(&self, id: &str, changes: EmployeeUpdate) -> StoreResult<()>;

    /// Remove a document; succeeds whether or not it existed
    async fn delete(&self, id: &str) -> StoreResult<()>;
}

/// Open the backend selected by `config.store_path`
pub fn open_store(config: &Config) -> StoreResult<Arc<dyn EmployeeStore>> {
    if config.is_memory_store() {
        tracing::warn!("Using in-memory store; data is lost on shutdown");
        return Ok(Arc::new(MemoryStore::new()));
    }

    let path = std::path::Path::new(&config.store_path);
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }

    let store = RedbStore::open(path)?;
    tracing::info!(path = %config.store_path, "Document store opened");
    Ok(Arc::new(store))
}
