//! Form drafts
//!
//! Uncommitted field values for the create and edit forms. Every keystroke
//! lands here; nothing reaches the server until the form is submitted.

use shared::{Employee, EmployeeCreate, EmployeeUpdate};

/// One editable field of the employee form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    EmployeeId,
    Name,
    Surname,
    Email,
    PhoneNumber,
    EmployeePosition,
    Image,
}

impl DraftField {
    pub fn label(self) -> &'static str {
        match self {
            Self::EmployeeId => "Employee ID",
            Self::Name => "Name",
            Self::Surname => "Surname",
            Self::Email => "Email",
            Self::PhoneNumber => "Phone Number",
            Self::EmployeePosition => "Position",
            Self::Image => "Image URL",
        }
    }
}

/// Field order of the create form
pub const NEW_FORM: [DraftField; 7] = [
    DraftField::EmployeeId,
    DraftField::Name,
    DraftField::Surname,
    DraftField::Email,
    DraftField::PhoneNumber,
    DraftField::EmployeePosition,
    DraftField::Image,
];

/// Field order of the edit form (employee id is read-only there)
pub const EDIT_FORM: [DraftField; 6] = [
    DraftField::Name,
    DraftField::Surname,
    DraftField::Email,
    DraftField::PhoneNumber,
    DraftField::EmployeePosition,
    DraftField::Image,
];

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmployeeDraft {
    pub employee_id: String,
    pub name: String,
    pub surname: String,
    pub email: String,
    pub phone_number: String,
    pub employee_position: String,
    /// Empty means "no image"
    pub image: String,
}

impl EmployeeDraft {
    pub fn from_employee(employee: &Employee) -> Self {
        Self {
            employee_id: employee.employee_id.clone(),
            name: employee.name.clone(),
            surname: employee.surname.clone(),
            email: employee.email.clone(),
            phone_number: employee.phone_number.clone(),
            employee_position: employee.employee_position.clone(),
            image: employee.image.clone().unwrap_or_default(),
        }
    }

    pub fn get(&self, field: DraftField) -> &str {
        match field {
            DraftField::EmployeeId => &self.employee_id,
            DraftField::Name => &self.name,
            DraftField::Surname => &self.surname,
            DraftField::Email => &self.email,
            DraftField::PhoneNumber => &self.phone_number,
            DraftField::EmployeePosition => &self.employee_position,
            DraftField::Image => &self.image,
        }
    }

    pub fn set(&mut self, field: DraftField, value: impl Into<String>) {
        let slot = match field {
            DraftField::EmployeeId => &mut self.employee_id,
            DraftField::Name => &mut self.name,
            DraftField::Surname => &mut self.surname,
            DraftField::Email => &mut self.email,
            DraftField::PhoneNumber => &mut self.phone_number,
            DraftField::EmployeePosition => &mut self.employee_position,
            DraftField::Image => &mut self.image,
        };
        *slot = value.into();
    }

    /// Reset every field to the empty string
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    fn image(&self) -> Option<String> {
        (!self.image.is_empty()).then(|| self.image.clone())
    }

    pub fn to_create(&self) -> EmployeeCreate {
        EmployeeCreate {
            employee_id: self.employee_id.clone(),
            name: self.name.clone(),
            surname: self.surname.clone(),
            email: self.email.clone(),
            phone_number: self.phone_number.clone(),
            employee_position: self.employee_position.clone(),
            image: self.image(),
        }
    }

    pub fn to_update(&self) -> EmployeeUpdate {
        EmployeeUpdate {
            name: self.name.clone(),
            surname: self.surname.clone(),
            email: self.email.clone(),
            phone_number: self.phone_number.clone(),
            employee_position: self.employee_position.clone(),
            image: self.image(),
        }
    }
}

/// Draft of a record being edited, keyed by its store id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditDraft {
    pub id: String,
    pub draft: EmployeeDraft,
}

impl EditDraft {
    pub fn from_employee(employee: &Employee) -> Self {
        Self {
            id: employee.id.clone(),
            draft: EmployeeDraft::from_employee(employee),
        }
    }
}
