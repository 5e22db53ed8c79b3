//! Built-in seed dataset, used when no snapshot has been persisted yet.

use crate::models::{Birthday, Employee, Role};

const SEED: &[(u64, &str, &str, (i32, u32, u32), Role, bool)] = &[
    (1, "Илья Емельянов", "+7 (883) 508-3269", (1982, 2, 12), Role::Driver, false),
    (2, "Александр Ларионов", "+7 (823) 440-3602", (1986, 1, 26), Role::Waiter, true),
    (3, "Богдан Давыдов", "+7 (971) 575-2645", (1990, 9, 29), Role::Driver, false),
    (4, "Марк Блинов", "+7 (912) 462-2549", (1987, 6, 15), Role::Cook, true),
    (5, "Анна Блинова", "+7 (944) 474-2716", (1991, 10, 13), Role::Cook, false),
    (6, "Всеволод Шестаков", "+7 (853) 412-3304", (1985, 4, 10), Role::Waiter, false),
    (7, "Ксения Тихонова", "+7 (905) 128-9410", (1994, 12, 3), Role::Waiter, false),
    (8, "Пётр Ёлкин", "+7 (936) 700-1845", (1979, 7, 21), Role::Driver, true),
];

/// The fixed initial roster.
pub fn seed_employees() -> Vec<Employee> {
    SEED.iter()
        .filter_map(|&(id, name, phone, (year, month, day), role, is_archive)| {
            let birthday = Birthday::from_ymd(year, month, day)?;
            Some(Employee {
                id,
                name: name.to_string(),
                phone: phone.to_string(),
                birthday,
                role,
                is_archive,
            })
        })
        .collect()
}
