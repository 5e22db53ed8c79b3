//! Edit-form state for creating or updating an employee.

use super::{format_phone, handle_backspace, validate, Field, RecordFields, ValidationError, ValidationResult};
use crate::models::{Birthday, Employee, EmployeeDraft, Role};

const INVALID_DATE_MESSAGE: &str = "Некорректная дата";
const INVALID_ROLE_MESSAGE: &str = "Неизвестная должность";

/// What a successful submit asks the collection store to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    Create(EmployeeDraft),
    Update(Employee),
}

/// String-valued form state, as typed by the user.
///
/// Errors are only exposed after the first submit; from then on every change
/// re-validates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeForm {
    id: Option<u64>,
    pub name: String,
    pub phone: String,
    /// `YYYY-MM-DD` as produced by a date input; `DD.MM.YYYY` is accepted too
    pub birthday: String,
    pub role: String,
    pub is_archive: bool,
    submitted: bool,
    result: ValidationResult,
}

impl Default for EmployeeForm {
    fn default() -> Self {
        Self {
            id: None,
            name: String::new(),
            phone: String::new(),
            birthday: String::new(),
            role: Role::Driver.as_str().to_string(),
            is_archive: false,
            submitted: false,
            result: ValidationResult::from_errors(Vec::new()),
        }
    }
}

impl EmployeeForm {
    /// Blank form for a new employee.
    pub fn new() -> Self {
        Self::default()
    }

    /// Form pre-filled from an existing record.
    pub fn edit(employee: &Employee) -> Self {
        Self {
            id: Some(employee.id),
            name: employee.name.clone(),
            phone: employee.phone.clone(),
            birthday: employee.birthday.to_input_value(),
            role: employee.role.as_str().to_string(),
            is_archive: employee.is_archive,
            ..Self::default()
        }
    }

    pub fn is_editing(&self) -> bool {
        self.id.is_some()
    }

    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    pub fn fields(&self) -> RecordFields<'_> {
        RecordFields {
            name: &self.name,
            phone: &self.phone,
            birthday: &self.birthday,
            role: &self.role,
        }
    }

    /// Set a text field; the phone goes through the mask.
    pub fn set_field(&mut self, field: Field, value: &str) {
        match field {
            Field::Name => self.name = value.to_string(),
            Field::Phone => self.phone = format_phone(value),
            Field::Birthday => self.birthday = value.to_string(),
            Field::Role => self.role = value.to_string(),
        }
        self.revalidate();
    }

    pub fn set_archive(&mut self, is_archive: bool) {
        self.is_archive = is_archive;
    }

    /// Backspace in the phone input. Returns `false` when the caller should let
    /// the default deletion happen.
    pub fn phone_backspace(&mut self, cursor: usize) -> bool {
        match handle_backspace(&self.phone, cursor) {
            Some(phone) => {
                self.phone = phone;
                self.revalidate();
                true
            }
            None => false,
        }
    }

    /// Message to show under `field`, only once the form was submitted.
    pub fn field_error(&self, field: Field) -> Option<&str> {
        if !self.submitted {
            return None;
        }
        self.result.message_for(field)
    }

    pub fn has_field_error(&self, field: Field) -> bool {
        self.field_error(field).is_some()
    }

    /// Validate and, when everything checks out, build the store mutation.
    pub fn submit(&mut self) -> Option<Submission> {
        self.submitted = true;
        self.result = self.check();
        if !self.result.is_valid {
            tracing::debug!("Form rejected with {} errors", self.result.errors.len());
            return None;
        }

        // `check` guarantees both parse.
        let birthday = Birthday::parse(&self.birthday).ok()?;
        let role = self.role.parse::<Role>().ok()?;
        let draft = EmployeeDraft {
            name: self.name.trim().to_string(),
            phone: self.phone.clone(),
            birthday,
            role,
            is_archive: self.is_archive,
        };

        Some(match self.id {
            Some(id) => Submission::Update(draft.into_employee(id)),
            None => Submission::Create(draft),
        })
    }

    fn revalidate(&mut self) {
        if self.submitted {
            self.result = self.check();
        }
    }

    fn check(&self) -> ValidationResult {
        let mut result = validate(self.fields());
        if result.is_valid {
            let mut errors = Vec::new();
            if Birthday::parse(&self.birthday).is_err() {
                errors.push(ValidationError::new(Field::Birthday, INVALID_DATE_MESSAGE));
            }
            if self.role.parse::<Role>().is_err() {
                errors.push(ValidationError::new(Field::Role, INVALID_ROLE_MESSAGE));
            }
            result = ValidationResult::from_errors(errors);
        }
        result
    }
}
