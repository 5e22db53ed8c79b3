//! Filter and sort criteria for the derived view.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use super::{Employee, Role};

/// Which employees appear in the derived view.
///
/// There is deliberately no "active only" state: `archived_only == false`
/// lets everyone through.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterCriteria {
    /// `None` means no role restriction
    pub role: Option<Role>,
    pub archived_only: bool,
}

impl FilterCriteria {
    pub fn matches(&self, employee: &Employee) -> bool {
        let role_match = self.role.map_or(true, |role| employee.role == role);
        let archive_match = !self.archived_only || employee.is_archive;
        role_match && archive_match
    }

    /// Merge a partial update; absent fields keep their current value.
    pub fn apply(&mut self, patch: FilterPatch) {
        if let Some(role) = patch.role {
            self.role = role;
        }
        if let Some(archived_only) = patch.archived_only {
            self.archived_only = archived_only;
        }
    }
}

/// Partial update of [`FilterCriteria`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterPatch {
    /// `Some(None)` clears the role restriction
    pub role: Option<Option<Role>>,
    pub archived_only: Option<bool>,
}

impl FilterPatch {
    pub fn role(role: Option<Role>) -> Self {
        Self {
            role: Some(role),
            ..Self::default()
        }
    }

    pub fn archived_only(archived_only: bool) -> Self {
        Self {
            archived_only: Some(archived_only),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortField {
    #[default]
    Name,
    Birthday,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

/// Ordering of the derived view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortCriteria {
    pub field: SortField,
    pub direction: SortDirection,
}

impl SortCriteria {
    pub fn new(field: SortField, direction: SortDirection) -> Self {
        Self { field, direction }
    }

    /// Merge a partial update; absent fields keep their current value.
    pub fn apply(&mut self, patch: SortPatch) {
        if let Some(field) = patch.field {
            self.field = field;
        }
        if let Some(direction) = patch.direction {
            self.direction = direction;
        }
    }

    pub fn compare(&self, a: &Employee, b: &Employee) -> Ordering {
        let ordering = match self.field {
            SortField::Name => collate(&a.name, &b.name),
            SortField::Birthday => a.birthday.cmp(&b.birthday),
        };
        match self.direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    }

    /// Stable sort: equal keys keep their relative order.
    pub fn sort(&self, employees: &mut [Employee]) {
        employees.sort_by(|a, b| self.compare(a, b));
    }
}

/// Partial update of [`SortCriteria`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SortPatch {
    pub field: Option<SortField>,
    pub direction: Option<SortDirection>,
}

impl SortPatch {
    pub fn new(field: SortField, direction: SortDirection) -> Self {
        Self {
            field: Some(field),
            direction: Some(direction),
        }
    }
}

/// Locale-aware name comparison, Russian conventions.
///
/// Primary strength ignores case, treats `ё` as `е` and orders non-letters,
/// then Cyrillic, then other scripts. Ties fall back to `е` before `ё` and
/// lowercase before uppercase, so distinct names never compare equal.
fn collate(a: &str, b: &str) -> Ordering {
    let primary = fold(a).cmp(fold(b));
    primary
        .then_with(|| a.chars().map(tertiary).cmp(b.chars().map(tertiary)))
        .then_with(|| a.cmp(b))
}

fn fold(value: &str) -> impl Iterator<Item = (u8, char)> + '_ {
    value
        .chars()
        .flat_map(char::to_lowercase)
        .map(|c| match c {
            'ё' => 'е',
            other => other,
        })
        .map(|c| (script_rank(c), c))
}

fn script_rank(c: char) -> u8 {
    if !c.is_alphabetic() {
        0
    } else if ('\u{0400}'..='\u{04FF}').contains(&c) {
        1
    } else {
        2
    }
}

fn tertiary(c: char) -> (bool, bool) {
    (matches!(c, 'ё' | 'Ё'), c.is_uppercase())
}
