//! Employee service abstraction
//!
//! The UI only talks to this trait; [`crate::HttpClient`] is the network
//! implementation, tests plug in an in-process fake.

use async_trait::async_trait;
use shared::{CreatedResponse, Employee, EmployeeCreate, EmployeeUpdate, MessageResponse};

use crate::ClientResult;

#[async_trait]
pub trait EmployeeService: Send + Sync {
    /// GET /api/employees
    async fn list_employees(&self) -> ClientResult<Vec<Employee>>;

    /// POST /api/employees
    async fn create_employee(&self, employee: &EmployeeCreate) -> ClientResult<CreatedResponse>;

    /// PUT /api/employees/{id}
    async fn update_employee(
        &self,
        id: &str,
        employee: &EmployeeUpdate,
    ) -> ClientResult<MessageResponse>;

    /// DELETE /api/employees/{id}
    async fn delete_employee(&self, id: &str) -> ClientResult<MessageResponse>;
}
