//! redb-based document store
//!
//! # Tables
//!
//! | Table | Key | Value |
//! |-------|-----|-------|
//! | `employees` | document id | JSON-serialized `EmployeeDocument` |
//!
//! redb commits are durable once `commit()` returns. All calls are
//! synchronous, so the async trait methods hop onto the blocking pool.

use async_trait::async_trait;
use redb::{Database, ReadableDatabase, ReadableTable, TableDefinition};
use shared::util::document_id;
use shared::{Employee, EmployeeUpdate};
use std::path::Path;
use std::sync::Arc;

use super::{EmployeeDocument, EmployeeStore, StoreError, StoreResult};

/// Employee documents: key = id, value = JSON-serialized EmployeeDocument
const EMPLOYEES_TABLE: TableDefinition<&str, &[u8]> = TableDefinition::new("employees");

/// Employee collection backed by redb
#[derive(Clone)]
pub struct RedbStore {
    db: Arc<Database>,
}

impl std::fmt::Debug for RedbStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedbStore").finish_non_exhaustive()
    }
}

impl RedbStore {
    /// Open or create the database at the given path
    pub fn open(path: impl AsRef<Path>) -> StoreResult<Self> {
        let db = Database::create(path)?;
        Self::init(db)
    }

    /// Open an in-memory database (for testing)
    pub fn open_in_memory() -> StoreResult<Self> {
        let db = Database::builder().create_with_backend(redb::backends::InMemoryBackend::new())?;
        Self::init(db)
    }

    fn init(db: Database) -> StoreResult<Self> {
        // Create the table up front so read transactions never miss it
        let write_txn = db.begin_write()?;
        {
            let _ = write_txn.open_table(EMPLOYEES_TABLE)?;
        }
        write_txn.commit()?;

        Ok(Self { db: Arc::new(db) })
    }

    // ========== Synchronous operations ==========

    fn list_sync(&self) -> StoreResult<Vec<Employee>> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(EMPLOYEES_TABLE)?;

        let mut employees = Vec::new();
        for entry in table.iter()? {
            let (key, value) = entry?;
            let document: EmployeeDocument = serde_json::from_slice(value.value())?;
            employees.push(document.into_employee(key.value()));
        }
        Ok(employees)
    }

    fn insert_sync(&self, document: &EmployeeDocument) -> StoreResult<String> {
        let bytes = serde_json::to_vec(document)?;

        let txn = self.db.begin_write()?;
        let id = {
            let mut table = txn.open_table(EMPLOYEES_TABLE)?;
            let mut id = document_id();
            while table.get(id.as_str())?.is_some() {
                id = document_id();
            }
            table.insert(id.as_str(), bytes.as_slice())?;
            id
        };
        txn.commit()?;
        Ok(id)
    }

    fn update_sync(&self, id: &str, changes: EmployeeUpdate) -> StoreResult<()> {
        let txn = self.db.begin_write()?;
        {
            let mut table = txn.open_table(EMPLOYEES_TABLE)?;
            let existing = table.get(id)?.map(|guard| guard.value().to_vec());
            let Some(bytes) = existing else {
                // Dropping the transaction aborts it
                return Err(StoreError::NotFound(id.to_string()));
            };

            let mut document: EmployeeDocument = serde_json::from_slice(&bytes)?;
            document.apply(changes);
            let bytes = serde_json::to_vec(&document)?;
            table.insert(id, bytes.as_slice())?;
        }
        txn.commit()?;
        Ok(())
    }

    fn delete_sync(&self, id: &str) -> StoreResult<()> {
        let txn = self.db.begin_write()?;
        {
            let mut table = txn.open_table(EMPLOYEES_TABLE)?;
            table.remove(id)?;
        }
        txn.commit()?;
        Ok(())
    }
}

/// Run a blocking store call on the tokio blocking pool
async fn run_blocking<T, F>(f: F) -> StoreResult<T>
where
    F: FnOnce() -> StoreResult<T> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|e| StoreError::Task(e.to_string()))?
}

#[async_trait]
impl EmployeeStore for RedbStore {
    async fn list(&self) -> StoreResult<Vec<Employee>> {
        let store = self.clone();
        run_blocking(move || store.list_sync()).await
    }

    async fn insert(&self, document: EmployeeDocument) -> StoreResult<String> {
        let store = self.clone();
        run_blocking(move || store.insert_sync(&document)).await
    }

    async fn update(&self, id: &str, changes: EmployeeUpdate) -> StoreResult<()> {
        let store = self.clone();
        let id = id.to_string();
        run_blocking(move || store.update_sync(&id, changes)).await
    }

    async fn delete(&self, id: &str) -> StoreResult<()> {
        let store = self.clone();
        let id = id.to_string();
        run_blocking(move || store.delete_sync(&id)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::contract;

    #[tokio::test]
    async fn test_insert_then_list() {
        contract::insert_then_list(&RedbStore::open_in_memory().unwrap()).await;
    }

    #[tokio::test]
    async fn test_update_overwrites_mutable_fields() {
        contract::update_overwrites_mutable_fields(&RedbStore::open_in_memory().unwrap()).await;
    }

    #[tokio::test]
    async fn test_update_unknown_id_fails() {
        contract::update_unknown_id_fails(&RedbStore::open_in_memory().unwrap()).await;
    }

    #[tokio::test]
    async fn test_delete_is_idempotent() {
        contract::delete_is_idempotent(&RedbStore::open_in_memory().unwrap()).await;
    }

    #[tokio::test]
    async fn test_documents_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("employees.redb");

        let id = {
            let store = RedbStore::open(&path).unwrap();
            store.insert(contract::document("E1", "Ann")).await.unwrap()
        };

        let store = RedbStore::open(&path).unwrap();
        let all = store.list().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].id, id);
        assert_eq!(all[0].name, "Ann");
    }
}
