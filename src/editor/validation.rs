//! Required-field validation for the employee form.

use std::fmt;

use serde::Serialize;

/// Suffix appended to the field label in every required-field message.
pub const REQUIRED_MESSAGE: &str = "Это поле обязательно для заполнения";

/// Form fields that carry validation messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Name,
    Phone,
    Birthday,
    Role,
}

impl Field {
    /// Validation order, which is also the display order.
    pub const ALL: [Field; 4] = [Field::Name, Field::Phone, Field::Birthday, Field::Role];

    pub fn key(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Phone => "phone",
            Field::Birthday => "birthday",
            Field::Role => "role",
        }
    }

    /// Display name used in messages.
    pub fn label(&self) -> &'static str {
        match self {
            Field::Name => "ФИО",
            Field::Phone => "Телефон",
            Field::Birthday => "Дата рождения",
            Field::Role => "Должность",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// A single field-scoped problem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationError {
    pub field: Field,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: Field, message: impl fmt::Display) -> Self {
        Self {
            field,
            message: format!("{}: {}", field.label(), message),
        }
    }

    pub fn required(field: Field) -> Self {
        Self::new(field, REQUIRED_MESSAGE)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<ValidationError>,
}

impl ValidationResult {
    pub fn from_errors(errors: Vec<ValidationError>) -> Self {
        Self {
            is_valid: errors.is_empty(),
            errors,
        }
    }

    /// First message for `field`, if any.
    pub fn message_for(&self, field: Field) -> Option<&str> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }
}

/// The string-valued fields the validator inspects.
#[derive(Debug, Clone, Copy)]
pub struct RecordFields<'a> {
    pub name: &'a str,
    pub phone: &'a str,
    pub birthday: &'a str,
    pub role: &'a str,
}

impl<'a> RecordFields<'a> {
    fn value(&self, field: Field) -> &'a str {
        match field {
            Field::Name => self.name,
            Field::Phone => self.phone,
            Field::Birthday => self.birthday,
            Field::Role => self.role,
        }
    }
}

/// Check that every field is present and non-blank, in [`Field::ALL`] order.
pub fn validate(record: RecordFields<'_>) -> ValidationResult {
    let errors = Field::ALL
        .into_iter()
        .filter(|&field| record.value(field).trim().is_empty())
        .map(ValidationError::required)
        .collect();
    ValidationResult::from_errors(errors)
}
