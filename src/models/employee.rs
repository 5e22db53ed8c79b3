//! Employee record and its field types.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Display format used by the seed data, the list page and snapshots.
const DISPLAY_FORMAT: &str = "%d.%m.%Y";
/// Format produced by the date input of the edit form.
const INPUT_FORMAT: &str = "%Y-%m-%d";

/// Position held by an employee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Driver,
    Waiter,
    Cook,
}

impl Role {
    /// All roles in the order the edit form offers them.
    pub const ALL: [Role; 3] = [Role::Driver, Role::Waiter, Role::Cook];

    /// Stable key used in snapshots and form values.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Driver => "driver",
            Role::Waiter => "waiter",
            Role::Cook => "cook",
        }
    }

    /// Human-readable name shown on cards and in the role select.
    pub fn label(&self) -> &'static str {
        match self {
            Role::Driver => "Водитель",
            Role::Waiter => "Официант",
            Role::Cook => "Повар",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string is not one of the known role keys.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown role: {0}")]
pub struct UnknownRole(pub String);

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::ALL
            .into_iter()
            .find(|role| role.as_str() == s.trim())
            .ok_or_else(|| UnknownRole(s.to_string()))
    }
}

/// Calendar date of birth.
///
/// Both `DD.MM.YYYY` and `YYYY-MM-DD` are accepted on the way in; the value is
/// always written back as `DD.MM.YYYY`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Birthday(NaiveDate);

impl Birthday {
    /// Build from year/month/day, `None` for an impossible date.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    /// Parse either boundary format.
    pub fn parse(value: &str) -> Result<Self, chrono::ParseError> {
        let value = value.trim();
        NaiveDate::parse_from_str(value, DISPLAY_FORMAT)
            .or_else(|_| NaiveDate::parse_from_str(value, INPUT_FORMAT))
            .map(Self)
    }

    /// Value for an HTML-style date input (`YYYY-MM-DD`).
    pub fn to_input_value(&self) -> String {
        self.0.format(INPUT_FORMAT).to_string()
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DISPLAY_FORMAT))
    }
}

impl FromStr for Birthday {
    type Err = chrono::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for Birthday {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Birthday::parse(&raw).map_err(serde::de::Error::custom)
    }
}

/// A staff member as stored in the canonical list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    /// Assigned by the collection store, never edited afterwards
    pub id: u64,
    pub name: String,
    /// Phone in mask form, e.g. `+7 (999) 123-4567`
    pub phone: String,
    pub birthday: Birthday,
    pub role: Role,
    pub is_archive: bool,
}

impl Employee {
    /// Status shown on the employee card.
    pub fn status_label(&self) -> &'static str {
        if self.is_archive {
            "В архиве"
        } else {
            "Активен"
        }
    }
}

/// Employee data submitted for creation, before an id is assigned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeDraft {
    pub name: String,
    pub phone: String,
    pub birthday: Birthday,
    pub role: Role,
    #[serde(default)]
    pub is_archive: bool,
}

impl EmployeeDraft {
    pub fn into_employee(self, id: u64) -> Employee {
        Employee {
            id,
            name: self.name,
            phone: self.phone,
            birthday: self.birthday,
            role: self.role,
            is_archive: self.is_archive,
        }
    }
}
