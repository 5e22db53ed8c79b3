//! Storage adapter for employee snapshots.
//!
//! The medium is an opaque key-value byte store; the adapter owns the key and the
//! JSON encoding of the canonical list.

mod file;
mod memory;

pub use file::*;
pub use memory::*;

use std::collections::HashSet;

use crate::errors::StorageError;
use crate::models::Employee;

/// Key under which the canonical list snapshot is stored.
pub const EMPLOYEES_STORAGE_KEY: &str = "employees_data";

/// Opaque key-value byte store backing persistence.
pub trait KeyValueStore {
    /// Read the value for `key`, `None` if it was never written.
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError>;

    /// Write `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &[u8]) -> Result<(), StorageError>;
}

/// Loads and saves the employee list through a [`KeyValueStore`].
#[derive(Debug, Clone)]
pub struct EmployeeStorage<S> {
    store: S,
}

impl<S: KeyValueStore> EmployeeStorage<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Load the persisted snapshot, `None` if nothing was saved yet.
    ///
    /// A snapshot with a zero or repeated id is rejected as invalid.
    pub fn load(&self) -> Result<Option<Vec<Employee>>, StorageError> {
        let Some(bytes) = self.store.get(EMPLOYEES_STORAGE_KEY)? else {
            return Ok(None);
        };
        let employees: Vec<Employee> = serde_json::from_slice(&bytes)?;
        check_ids(&employees)?;
        Ok(Some(employees))
    }

    /// Persist the full list as a single snapshot.
    pub fn save(&mut self, employees: &[Employee]) -> Result<(), StorageError> {
        let bytes = serde_json::to_vec(employees)?;
        self.store.set(EMPLOYEES_STORAGE_KEY, &bytes)
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

fn check_ids(employees: &[Employee]) -> Result<(), StorageError> {
    let mut seen = HashSet::with_capacity(employees.len());
    for employee in employees {
        if employee.id == 0 {
            return Err(StorageError::InvalidSnapshot("employee id 0".to_string()));
        }
        if !seen.insert(employee.id) {
            return Err(StorageError::InvalidSnapshot(format!(
                "duplicate employee id {}",
                employee.id
            )));
        }
    }
    Ok(())
}
