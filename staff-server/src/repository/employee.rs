//! Employee Repository

use super::{RepoError, RepoResult};
use crate::store::{EmployeeDocument, EmployeeStore};
use shared::models::normalize_image;
use shared::{Employee, EmployeeCreate, EmployeeUpdate};
use std::sync::Arc;

#[derive(Clone)]
pub struct EmployeeRepository {
    store: Arc<dyn EmployeeStore>,
}

impl EmployeeRepository {
    pub fn new(store: Arc<dyn EmployeeStore>) -> Self {
        Self { store }
    }

    /// Find all employees, in store order
    pub async fn find_all(&self) -> RepoResult<Vec<Employee>> {
        Ok(self.store.list().await?)
    }

    /// Find employee by business identifier (full scan)
    pub async fn find_by_employee_id(&self, employee_id: &str) -> RepoResult<Option<Employee>> {
        let employees = self.store.list().await?;
        Ok(employees.into_iter().find(|e| e.employee_id == employee_id))
    }

    /// Create a new employee, returning the store-assigned id
    ///
    /// The duplicate scan and the insert are two separate store calls with
    /// nothing held in between: concurrent creates with the same
    /// `employee_id` can both pass the scan.
    pub async fn create(&self, data: EmployeeCreate) -> RepoResult<String> {
        // Check duplicate employeeId
        if self.find_by_employee_id(&data.employee_id).await?.is_some() {
            return Err(RepoError::Duplicate(format!(
                "Employee ID '{}' already exists",
                data.employee_id
            )));
        }

        let document = EmployeeDocument {
            employee_id: data.employee_id,
            name: data.name,
            surname: data.surname,
            email: data.email,
            phone_number: data.phone_number,
            employee_position: data.employee_position,
            image: normalize_image(data.image),
        };

        Ok(self.store.insert(document).await?)
    }

    /// Overwrite the mutable fields of an employee
    pub async fn update(&self, id: &str, mut data: EmployeeUpdate) -> RepoResult<()> {
        data.image = normalize_image(data.image);
        self.store.update(id, data).await?;
        Ok(())
    }

    /// Delete an employee; unknown ids succeed silently
    pub async fn delete(&self, id: &str) -> RepoResult<()> {
        self.store.delete(id).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{MemoryStore, StoreError};

    fn repo() -> EmployeeRepository {
        EmployeeRepository::new(Arc::new(MemoryStore::new()))
    }

    fn create(employee_id: &str) -> EmployeeCreate {
        EmployeeCreate {
            employee_id: employee_id.to_string(),
            name: "Ann".to_string(),
            surname: "Lee".to_string(),
            email: "a@x.com".to_string(),
            phone_number: "555".to_string(),
            employee_position: "Eng".to_string(),
            image: Some(" ".to_string()),
        }
    }

    #[tokio::test]
    async fn test_create_rejects_duplicate_employee_id() {
        let repo = repo();
        repo.create(create("E1")).await.unwrap();

        let err = repo.create(create("E1")).await.unwrap_err();
        assert!(matches!(err, RepoError::Duplicate(_)));
        assert_eq!(repo.find_all().await.unwrap().len(), 1);

        // A different business id is fine
        repo.create(create("E2")).await.unwrap();
        assert_eq!(repo.find_all().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_create_drops_blank_image() {
        let repo = repo();
        let id = repo.create(create("E1")).await.unwrap();
        let found = repo.find_by_employee_id("E1").await.unwrap().unwrap();
        assert_eq!(found.id, id);
        assert!(found.image.is_none());
    }

    #[tokio::test]
    async fn test_update_missing_document_is_store_error() {
        let err = repo()
            .update("nope", EmployeeUpdate::default())
            .await
            .unwrap_err();
        assert!(matches!(err, RepoError::Store(StoreError::NotFound(_))));
    }
}
