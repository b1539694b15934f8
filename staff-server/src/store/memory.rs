//! In-memory document store

use async_trait::async_trait;
use shared::util::document_id;
use shared::{Employee, EmployeeUpdate};
use std::collections::BTreeMap;
use tokio::sync::RwLock;

use super::{EmployeeDocument, EmployeeStore, StoreError, StoreResult};

/// Ordered in-process collection
///
/// `BTreeMap` keeps the same id ordering as the redb backend.
#[derive(Debug, Default)]
pub struct MemoryStore {
    documents: RwLock<BTreeMap<String, EmployeeDocument>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl EmployeeStore for MemoryStore {
    async fn list(&self) -> StoreResult<Vec<Employee>> {
        let documents = self.documents.read().await;
        Ok(documents
            .iter()
            .map(|(id, doc)| doc.clone().into_employee(id.as_str()))
            .collect())
    }

    async fn insert(&self, document: EmployeeDocument) -> StoreResult<String> {
        let mut documents = self.documents.write().await;
        let mut id = document_id();
        // Two inserts in the same millisecond can draw the same random bits
        while documents.contains_key(&id) {
            id = document_id();
        }
        documents.insert(id.clone(), document);
        Ok(id)
    }

    async fn update(&self, id: &str, changes: EmployeeUpdate) -> StoreResult<()> {
        let mut documents = self.documents.write().await;
        let document = documents
            .get_mut(id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        document.apply(changes);
        Ok(())
    }

    async fn delete(&self, id: &str) -> StoreResult<()> {
        self.documents.write().await.remove(id);
        Ok(())
    }
}
