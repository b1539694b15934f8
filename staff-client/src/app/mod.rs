//! Directory application state
//!
//! `DirectoryApp` owns everything the screen shows. Keys become
//! [`Command`]s (see [`keys`]), commands run against an
//! [`EmployeeService`] and always finish by re-reading the full list.

pub mod draft;
pub mod keys;

use shared::Employee;
use tui_input::Input;

use crate::EmployeeService;
pub use draft::{DraftField, EDIT_FORM, EditDraft, EmployeeDraft, NEW_FORM};
pub use keys::handle_key;

pub const ERR_FETCH: &str = "Error fetching employees";
pub const ERR_ADD: &str = "Error adding employee";
pub const ERR_UPDATE: &str = "Error updating employee";
pub const ERR_DELETE: &str = "Error deleting employee";

/// Which screen is showing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ViewMode {
    /// Table plus create form
    #[default]
    List,
    /// Edit form only
    Edit,
}

/// Where key presses go
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Focus {
    #[default]
    Table,
    NewForm,
    EditForm,
}

/// Service-bound actions produced by key handling
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Refresh,
    SubmitNew,
    SubmitEdit,
    Delete(String),
    Quit,
}

#[derive(Debug, Default)]
pub struct DirectoryApp {
    pub employees: Vec<Employee>,
    pub loading: bool,
    /// Shared error line; only cleared explicitly
    pub error: Option<String>,
    pub new_draft: EmployeeDraft,
    pub edit: Option<EditDraft>,
    pub view: ViewMode,
    pub focus: Focus,
    pub selected: usize,
    pub field_index: usize,
    /// Mirrors the focused form field
    pub input: Input,
    pub should_quit: bool,
}

impl DirectoryApp {
    pub fn new() -> Self {
        Self::default()
    }

    // ========== Selection ==========

    pub fn selected_employee(&self) -> Option<&Employee> {
        self.employees.get(self.selected)
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.employees.len() {
            self.selected += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    // ========== Forms ==========

    /// Fields of the focused form, empty when the table has focus
    pub fn active_fields(&self) -> &'static [DraftField] {
        match self.focus {
            Focus::Table => &[],
            Focus::NewForm => &NEW_FORM,
            Focus::EditForm => &EDIT_FORM,
        }
    }

    pub fn active_field(&self) -> Option<DraftField> {
        self.active_fields().get(self.field_index).copied()
    }

    fn active_draft_mut(&mut self) -> Option<&mut EmployeeDraft> {
        match self.focus {
            Focus::Table => None,
            Focus::NewForm => Some(&mut self.new_draft),
            Focus::EditForm => self.edit.as_mut().map(|edit| &mut edit.draft),
        }
    }

    /// Load the focused field's value into the input widget
    fn sync_input(&mut self) {
        let value = match (self.focus, self.active_field()) {
            (Focus::NewForm, Some(field)) => self.new_draft.get(field).to_string(),
            (Focus::EditForm, Some(field)) => self
                .edit
                .as_ref()
                .map(|edit| edit.draft.get(field).to_string())
                .unwrap_or_default(),
            _ => String::new(),
        };
        self.input = Input::new(value);
    }

    /// Write the input widget's value back into the draft
    pub fn store_input(&mut self) {
        let value = self.input.value().to_string();
        if let Some(field) = self.active_field()
            && let Some(draft) = self.active_draft_mut()
        {
            draft.set(field, value);
        }
    }

    pub fn focus_table(&mut self) {
        self.focus = Focus::Table;
        self.field_index = 0;
        self.input.reset();
    }

    pub fn focus_new_form(&mut self) {
        self.focus = Focus::NewForm;
        self.field_index = 0;
        self.sync_input();
    }

    pub fn next_field(&mut self) {
        let len = self.active_fields().len();
        if len > 0 {
            self.field_index = (self.field_index + 1) % len;
            self.sync_input();
        }
    }

    pub fn prev_field(&mut self) {
        let len = self.active_fields().len();
        if len > 0 {
            self.field_index = (self.field_index + len - 1) % len;
            self.sync_input();
        }
    }

    /// Copy the selected record into the edit draft and switch views
    pub fn begin_edit(&mut self) {
        let Some(employee) = self.selected_employee() else {
            return;
        };
        self.edit = Some(EditDraft::from_employee(employee));
        self.view = ViewMode::Edit;
        self.focus = Focus::EditForm;
        self.field_index = 0;
        self.sync_input();
    }

    /// Drop the edit draft without touching the server
    pub fn cancel_edit(&mut self) {
        self.edit = None;
        self.view = ViewMode::List;
        self.focus_table();
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    // ========== Commands ==========

    /// Run one command to completion
    pub async fn dispatch(&mut self, command: Command, service: &dyn EmployeeService) {
        match command {
            Command::Quit => {
                self.should_quit = true;
                return;
            }
            Command::Refresh => self.refresh(service).await,
            Command::SubmitNew => self.submit_new(service).await,
            Command::SubmitEdit => self.submit_edit(service).await,
            Command::Delete(id) => self.delete(&id, service).await,
        }
        self.loading = false;
    }

    pub async fn refresh(&mut self, service: &dyn EmployeeService) {
        self.loading = true;
        match service.list_employees().await {
            Ok(employees) => {
                tracing::debug!(count = employees.len(), "Fetched employees");
                self.employees = employees;
                if self.selected >= self.employees.len() {
                    self.selected = self.employees.len().saturating_sub(1);
                }
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to fetch employees");
                self.error = Some(ERR_FETCH.to_string());
            }
        }
        self.loading = false;
    }

    pub async fn submit_new(&mut self, service: &dyn EmployeeService) {
        let payload = self.new_draft.to_create();
        match service.create_employee(&payload).await {
            Ok(created) => {
                tracing::info!(id = %created.id, "Employee created");
                self.new_draft.clear();
                if self.focus == Focus::NewForm {
                    self.sync_input();
                }
                self.refresh(service).await;
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to create employee");
                self.error = Some(ERR_ADD.to_string());
            }
        }
    }

    pub async fn submit_edit(&mut self, service: &dyn EmployeeService) {
        let Some(edit) = self.edit.as_ref() else {
            return;
        };
        let id = edit.id.clone();
        let payload = edit.draft.to_update();

        match service.update_employee(&id, &payload).await {
            Ok(_) => {
                tracing::info!(id = %id, "Employee updated");
                self.edit = None;
                self.view = ViewMode::List;
                self.focus_table();
                self.refresh(service).await;
            }
            Err(e) => {
                tracing::warn!(id = %id, error = %e, "Failed to update employee");
                self.error = Some(ERR_UPDATE.to_string());
            }
        }
    }

    pub async fn delete(&mut self, id: &str, service: &dyn EmployeeService) {
        match service.delete_employee(id).await {
            Ok(_) => {
                tracing::info!(id = %id, "Employee deleted");
                self.refresh(service).await;
            }
            Err(e) => {
                tracing::warn!(id = %id, error = %e, "Failed to delete employee");
                self.error = Some(ERR_DELETE.to_string());
            }
        }
    }
}

#[cfg(test)]
pub(crate) mod fake {
    use async_trait::async_trait;
    use shared::{CreatedResponse, Employee, EmployeeCreate, EmployeeUpdate, MessageResponse};
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
    use tokio::sync::Mutex;

    use crate::{ClientError, ClientResult, EmployeeService};

    /// In-process service with a failure switch and a call counter
    #[derive(Default)]
    pub struct FakeService {
        pub employees: Mutex<Vec<Employee>>,
        pub fail: AtomicBool,
        pub calls: AtomicUsize,
        next_id: AtomicUsize,
    }

    impl FakeService {
        pub fn failing(&self, fail: bool) {
            self.fail.store(fail, Ordering::SeqCst);
        }

        pub fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }

        fn check(&self) -> ClientResult<()> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail.load(Ordering::SeqCst) {
                return Err(ClientError::Api {
                    status: 500,
                    message: "boom".to_string(),
                    error: None,
                });
            }
            Ok(())
        }
    }

    #[async_trait]
    impl EmployeeService for FakeService {
        async fn list_employees(&self) -> ClientResult<Vec<Employee>> {
            self.check()?;
            Ok(self.employees.lock().await.clone())
        }

        async fn create_employee(&self, e: &EmployeeCreate) -> ClientResult<CreatedResponse> {
            self.check()?;
            let id = format!("{:04}", self.next_id.fetch_add(1, Ordering::SeqCst));
            self.employees.lock().await.push(Employee {
                id: id.clone(),
                employee_id: e.employee_id.clone(),
                name: e.name.clone(),
                surname: e.surname.clone(),
                email: e.email.clone(),
                phone_number: e.phone_number.clone(),
                employee_position: e.employee_position.clone(),
                image: e.image.clone(),
            });
            Ok(CreatedResponse {
                message: "Employee added successfully".to_string(),
                id,
            })
        }

        async fn update_employee(
            &self,
            id: &str,
            e: &EmployeeUpdate,
        ) -> ClientResult<MessageResponse> {
            self.check()?;
            let mut employees = self.employees.lock().await;
            let Some(found) = employees.iter_mut().find(|x| x.id == id) else {
                return Err(ClientError::Internal(format!("No document to update: {id}")));
            };
            found.name = e.name.clone();
            found.surname = e.surname.clone();
            found.email = e.email.clone();
            found.phone_number = e.phone_number.clone();
            found.employee_position = e.employee_position.clone();
            found.image = e.image.clone();
            Ok(MessageResponse::new("Employee updated successfully"))
        }

        async fn delete_employee(&self, id: &str) -> ClientResult<MessageResponse> {
            self.check()?;
            self.employees.lock().await.retain(|x| x.id != id);
            Ok(MessageResponse::new("Employee deleted successfully"))
        }
    }
}
