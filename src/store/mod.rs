//! Collection store: canonical employee list plus its filtered, sorted view.
//!
//! The view is always `sort(filter(list))` for the active criteria and is never
//! edited on its own. Structural changes (add, update) are persisted through the
//! storage adapter; persistence failures are logged and never roll back memory.

use crate::data::seed_employees;
use crate::errors::StoreError;
use crate::models::{
    Employee, EmployeeDraft, FilterCriteria, FilterPatch, SortCriteria, SortPatch,
};
use crate::storage::{EmployeeStorage, KeyValueStore};

pub struct CollectionStore<S> {
    list: Vec<Employee>,
    view: Vec<Employee>,
    filter: FilterCriteria,
    sort: SortCriteria,
    storage: EmployeeStorage<S>,
}

impl<S: KeyValueStore> CollectionStore<S> {
    /// Load the persisted snapshot, falling back to the seed dataset.
    pub fn initialize(storage: EmployeeStorage<S>) -> Self {
        let list = match storage.load() {
            Ok(Some(list)) => {
                tracing::info!("Loaded {} employees from snapshot", list.len());
                list
            }
            Ok(None) => {
                tracing::info!("No snapshot found, using seed dataset");
                seed_employees()
            }
            Err(e) => {
                tracing::warn!("Failed to load snapshot ({}), using seed dataset: {}", e.error_code(), e);
                seed_employees()
            }
        };
        Self::with_employees(storage, list)
    }

    /// Start from an explicit list without reading storage. Ids must already be
    /// unique and positive.
    pub fn with_employees(storage: EmployeeStorage<S>, list: Vec<Employee>) -> Self {
        let mut store = Self {
            list,
            view: Vec::new(),
            filter: FilterCriteria::default(),
            sort: SortCriteria::default(),
            storage,
        };
        store.rebuild_view();
        store
    }

    pub fn list(&self) -> &[Employee] {
        &self.list
    }

    pub fn view(&self) -> &[Employee] {
        &self.view
    }

    pub fn filter(&self) -> FilterCriteria {
        self.filter
    }

    pub fn sort(&self) -> SortCriteria {
        self.sort
    }

    pub fn storage(&self) -> &EmployeeStorage<S> {
        &self.storage
    }

    /// Look up an employee in the canonical list.
    pub fn get(&self, id: u64) -> Option<&Employee> {
        self.list.iter().find(|e| e.id == id)
    }

    /// Merge the patch into the filter and re-derive the view. Not persisted.
    pub fn set_filter(&mut self, patch: FilterPatch) {
        self.filter.apply(patch);
        self.rebuild_view();
        tracing::debug!(filter = ?self.filter, visible = self.view.len(), "Filter changed");
    }

    /// Merge the patch into the sort and re-sort the current view. Not persisted.
    pub fn set_sort(&mut self, patch: SortPatch) {
        self.sort.apply(patch);
        self.sort.sort(&mut self.view);
        tracing::debug!(sort = ?self.sort, "Sort changed");
    }

    /// Append a new employee and return its assigned id.
    pub fn add_employee(&mut self, draft: EmployeeDraft) -> Result<u64, StoreError> {
        let id = self.next_id()?;
        self.list.push(draft.into_employee(id));
        self.rebuild_view();
        tracing::info!("Added employee {}", id);
        self.persist();
        Ok(id)
    }

    /// Replace the employee with the same id, keeping its position in the list.
    pub fn update_employee(&mut self, employee: Employee) -> Result<(), StoreError> {
        let id = employee.id;
        let slot = self
            .list
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or(StoreError::NotFound(id))?;
        *slot = employee;
        self.rebuild_view();
        tracing::info!("Updated employee {}", id);
        self.persist();
        Ok(())
    }

    fn next_id(&self) -> Result<u64, StoreError> {
        match self.list.iter().map(|e| e.id).max() {
            None => Ok(1),
            Some(max) => max.checked_add(1).ok_or(StoreError::IdsExhausted(max)),
        }
    }

    fn rebuild_view(&mut self) {
        let filter = self.filter;
        self.view = self
            .list
            .iter()
            .filter(|e| filter.matches(e))
            .cloned()
            .collect();
        self.sort.sort(&mut self.view);
    }

    fn persist(&mut self) {
        if let Err(e) = self.storage.save(&self.list) {
            tracing::error!("Failed to persist employees ({}): {}", e.error_code(), e);
        }
    }
}
