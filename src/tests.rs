//! Scenario tests for the roster engine.

use tempfile::TempDir;

use crate::data::seed_employees;
use crate::editor::{format_phone, validate, EmployeeForm, Field, RecordFields, Submission};
use crate::models::{
    Birthday, Employee, EmployeeDraft, FilterPatch, Role, SortDirection, SortField, SortPatch,
};
use crate::errors::StoreError;
use crate::storage::{EmployeeStorage, FileStore, KeyValueStore, MemoryStore, EMPLOYEES_STORAGE_KEY};
use crate::CollectionStore;

fn test_employees() -> Vec<Employee> {
    vec![
        Employee {
            id: 1,
            name: "Иван Иванов".to_string(),
            phone: "+7 (123) 456-7890".to_string(),
            birthday: Birthday::parse("01.01.1990").unwrap(),
            role: Role::Driver,
            is_archive: false,
        },
        Employee {
            id: 2,
            name: "Мария Петрова".to_string(),
            phone: "+7 (987) 654-3210".to_string(),
            birthday: Birthday::parse("15.05.1985").unwrap(),
            role: Role::Cook,
            is_archive: true,
        },
    ]
}

fn draft(name: &str, birthday: &str, role: Role) -> EmployeeDraft {
    EmployeeDraft {
        name: name.to_string(),
        phone: "+7 (111) 222-3333".to_string(),
        birthday: Birthday::parse(birthday).unwrap(),
        role,
        is_archive: false,
    }
}

fn test_store() -> CollectionStore<MemoryStore> {
    CollectionStore::with_employees(EmployeeStorage::new(MemoryStore::new()), test_employees())
}

fn view_names<S: KeyValueStore>(store: &CollectionStore<S>) -> Vec<&str> {
    store.view().iter().map(|e| e.name.as_str()).collect()
}

#[test]
fn test_initial_state_defaults() {
    let store = CollectionStore::initialize(EmployeeStorage::new(MemoryStore::new()));

    assert_eq!(store.list(), seed_employees().as_slice());
    assert_eq!(store.filter().role, None);
    assert!(!store.filter().archived_only);
    assert_eq!(store.sort().field, SortField::Name);
    assert_eq!(store.sort().direction, SortDirection::Asc);
    assert_eq!(store.view().len(), store.list().len());
}

#[test]
fn test_initialize_prefers_snapshot() {
    let mut kv = MemoryStore::new();
    kv.set(EMPLOYEES_STORAGE_KEY, &serde_json::to_vec(&test_employees()).unwrap())
        .unwrap();

    let store = CollectionStore::initialize(EmployeeStorage::new(kv));
    assert_eq!(store.list(), test_employees().as_slice());
}

#[test]
fn test_initialize_corrupt_snapshot_falls_back_to_seed() {
    let mut kv = MemoryStore::new();
    kv.set(EMPLOYEES_STORAGE_KEY, b"[{\"id\":").unwrap();

    let store = CollectionStore::initialize(EmployeeStorage::new(kv));
    assert_eq!(store.list(), seed_employees().as_slice());
}

#[test]
fn test_initialize_duplicate_ids_fall_back_to_seed() {
    let mut duplicated = test_employees();
    duplicated[1].id = 1;
    let mut kv = MemoryStore::new();
    kv.set(EMPLOYEES_STORAGE_KEY, &serde_json::to_vec(&duplicated).unwrap())
        .unwrap();

    let store = CollectionStore::initialize(EmployeeStorage::new(kv));
    assert_eq!(store.list(), seed_employees().as_slice());
}

#[test]
fn test_initialize_zero_id_falls_back_to_seed() {
    let mut zeroed = test_employees();
    zeroed[0].id = 0;
    let mut kv = MemoryStore::new();
    kv.set(EMPLOYEES_STORAGE_KEY, &serde_json::to_vec(&zeroed).unwrap())
        .unwrap();

    let store = CollectionStore::initialize(EmployeeStorage::new(kv));
    assert_eq!(store.list(), seed_employees().as_slice());
}

#[test]
fn test_add_after_largest_snapshot_id_reports_error() {
    let mut last = test_employees();
    last[1].id = u64::MAX;
    let mut kv = MemoryStore::new();
    kv.set(EMPLOYEES_STORAGE_KEY, &serde_json::to_vec(&last).unwrap())
        .unwrap();

    let mut store = CollectionStore::initialize(EmployeeStorage::new(kv));
    assert_eq!(store.list(), last.as_slice());

    let result = store.add_employee(draft("Петр Сидоров", "10.10.1980", Role::Waiter));
    assert_eq!(result, Err(StoreError::IdsExhausted(u64::MAX)));
    assert_eq!(store.list(), last.as_slice());
}

#[test]
fn test_filter_by_role() {
    let mut store = test_store();
    store.set_filter(FilterPatch::role(Some(Role::Driver)));

    assert_eq!(store.filter().role, Some(Role::Driver));
    assert_eq!(view_names(&store), vec!["Иван Иванов"]);
    assert_eq!(store.list().len(), 2);
}

#[test]
fn test_filter_by_archive() {
    let mut store = test_store();
    store.set_filter(FilterPatch::archived_only(true));

    assert!(store.filter().archived_only);
    assert_eq!(view_names(&store), vec!["Мария Петрова"]);

    // Turning the flag off shows everyone again, not only active employees.
    store.set_filter(FilterPatch::archived_only(false));
    assert_eq!(store.view().len(), 2);
}

#[test]
fn test_set_filter_is_idempotent() {
    let mut store = test_store();
    let patch = FilterPatch {
        role: Some(Some(Role::Cook)),
        archived_only: Some(true),
    };

    store.set_filter(patch);
    let first = store.view().to_vec();
    store.set_filter(patch);
    assert_eq!(store.view(), first.as_slice());
}

#[test]
fn test_sort_by_name_desc() {
    let mut store = test_store();
    store.set_sort(SortPatch::new(SortField::Name, SortDirection::Desc));

    assert_eq!(store.sort().field, SortField::Name);
    assert_eq!(store.sort().direction, SortDirection::Desc);
    assert_eq!(view_names(&store), vec!["Мария Петрова", "Иван Иванов"]);
}

#[test]
fn test_sort_by_birthday_asc() {
    let mut store = test_store();
    store.set_sort(SortPatch::new(SortField::Birthday, SortDirection::Asc));

    assert_eq!(view_names(&store), vec!["Мария Петрова", "Иван Иванов"]);
}

#[test]
fn test_sort_by_birthday_with_form_dates() {
    let mut store = CollectionStore::with_employees(EmployeeStorage::new(MemoryStore::new()), Vec::new());
    store.add_employee(draft("Иван", "1990-01-15", Role::Driver)).unwrap();
    store.add_employee(draft("Мария", "1985-05-15", Role::Cook)).unwrap();

    store.set_sort(SortPatch::new(SortField::Birthday, SortDirection::Asc));
    assert_eq!(view_names(&store), vec!["Мария", "Иван"]);
}

#[test]
fn test_sort_keeps_membership_and_respects_filter() {
    let mut store = test_store();
    store.set_filter(FilterPatch::role(Some(Role::Cook)));
    let mut before: Vec<u64> = store.view().iter().map(|e| e.id).collect();

    store.set_sort(SortPatch::new(SortField::Birthday, SortDirection::Desc));
    store.set_sort(SortPatch::new(SortField::Birthday, SortDirection::Desc));

    let mut after: Vec<u64> = store.view().iter().map(|e| e.id).collect();
    before.sort_unstable();
    after.sort_unstable();
    assert_eq!(before, after);
    assert_eq!(after, vec![2]);
}

#[test]
fn test_add_employee_assigns_next_id() {
    let mut store = test_store();
    let id = store.add_employee(draft("Петр Сидоров", "10.10.1980", Role::Waiter)).unwrap();

    assert_eq!(id, 3);
    assert_eq!(store.list().len(), 3);
    assert_eq!(store.list()[2].id, 3);
    assert_eq!(store.list()[2].name, "Петр Сидоров");
    assert!(store.view().iter().any(|e| e.id == 3));
}

#[test]
fn test_add_employee_respects_active_filter() {
    let mut store = test_store();
    store.set_filter(FilterPatch::archived_only(true));
    store.add_employee(draft("Тестовый Сотрудник", "20.02.2000", Role::Cook)).unwrap();

    assert_eq!(store.list().len(), 3);
    assert_eq!(view_names(&store), vec!["Мария Петрова"]);
}

#[test]
fn test_update_employee_in_place() {
    let mut store = test_store();
    let mut updated = test_employees()[0].clone();
    updated.name = "Иван Иванов Обновленный".to_string();
    updated.is_archive = true;

    store.update_employee(updated).unwrap();

    assert_eq!(store.list().len(), 2);
    assert_eq!(store.list()[0].name, "Иван Иванов Обновленный");
    assert!(store.list()[0].is_archive);
    assert_eq!(store.list()[1], test_employees()[1]);
}

#[test]
fn test_mutations_persist_snapshot() {
    let mut store = test_store();
    assert!(store.storage().load().unwrap().is_none());

    store.add_employee(draft("Тестовый Сотрудник", "20.02.2000", Role::Cook)).unwrap();
    assert_eq!(store.storage().load().unwrap().unwrap().len(), 3);

    let mut updated = test_employees()[0].clone();
    updated.role = Role::Cook;
    store.update_employee(updated).unwrap();
    let saved = store.storage().load().unwrap().unwrap();
    assert_eq!(saved[0].role, Role::Cook);
}

#[test]
fn test_filter_and_sort_do_not_persist() {
    let mut store = test_store();
    store.set_filter(FilterPatch::role(Some(Role::Cook)));
    store.set_sort(SortPatch::new(SortField::Birthday, SortDirection::Desc));

    assert!(!store.storage().store().contains(EMPLOYEES_STORAGE_KEY));
}

#[test]
fn test_failed_write_keeps_memory_state() {
    let storage = EmployeeStorage::new(MemoryStore::failing_writes());
    let mut store = CollectionStore::with_employees(storage, test_employees());

    let id = store.add_employee(draft("Петр Сидоров", "10.10.1980", Role::Waiter)).unwrap();

    assert_eq!(id, 3);
    assert_eq!(store.list().len(), 3);
    assert!(store.storage().load().unwrap().is_none());
}

#[test]
fn test_file_store_survives_restart() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");

    let mut store = CollectionStore::initialize(EmployeeStorage::new(FileStore::open(temp_dir.path())));
    let id = store.add_employee(draft("Новый Сотрудник", "1999-09-09", Role::Waiter)).unwrap();

    let reopened = CollectionStore::initialize(EmployeeStorage::new(FileStore::open(temp_dir.path())));
    assert_eq!(reopened.list(), store.list());
    assert_eq!(reopened.get(id).map(|e| e.birthday.to_string()), Some("09.09.1999".to_string()));
}

#[test]
fn test_phone_examples() {
    assert_eq!(format_phone("9991234567"), "+7 (999) 123-4567");
    assert_eq!(format_phone("89991234567"), "+7 (999) 123-4567");
    assert_eq!(format_phone("8999"), "+7 (999)");
    assert_eq!(format_phone(""), "");
}

#[test]
fn test_validate_three_blank_fields() {
    let result = validate(RecordFields {
        name: "",
        phone: "",
        birthday: "",
        role: "driver",
    });

    assert!(!result.is_valid);
    let fields: Vec<Field> = result.errors.iter().map(|e| e.field).collect();
    assert_eq!(fields, vec![Field::Name, Field::Phone, Field::Birthday]);
}

#[test]
fn test_form_round_trip_through_store() {
    let mut store = test_store();

    let mut form = EmployeeForm::new();
    form.set_field(Field::Name, "Ольга Смирнова");
    form.set_field(Field::Phone, "9161234567");
    form.set_field(Field::Birthday, "1993-03-08");
    form.set_field(Field::Role, "cook");
    let Some(Submission::Create(new_employee)) = form.submit() else {
        panic!("expected a create submission");
    };
    let id = store.add_employee(new_employee).unwrap();

    let existing = store.get(id).cloned().expect("employee was added");
    let mut edit = EmployeeForm::edit(&existing);
    edit.set_field(Field::Role, "waiter");
    let Some(Submission::Update(changed)) = edit.submit() else {
        panic!("expected an update submission");
    };
    store.update_employee(changed).unwrap();

    let stored = store.get(id).unwrap();
    assert_eq!(stored.role, Role::Waiter);
    assert_eq!(stored.phone, "+7 (916) 123-4567");
    assert_eq!(stored.birthday.to_string(), "08.03.1993");
}
