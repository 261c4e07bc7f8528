// Copyright 2025 Serbench Contributors
// SPDX-License-Identifier: Apache-2.0

//! Employee dataset used by the bundled benchmark suite.

use serde::{Deserialize, Serialize};

/// One employee record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Identifier, unique within a dataset (not enforced)
    pub id: i64,
    /// Display name
    pub name: String,
    /// Salary
    pub salary: f64,
    /// Contact email
    pub email: String,
    /// Whether the employee manages others
    pub is_manager: bool,
}

impl Employee {
    /// Create a new employee.
    pub fn new(
        id: i64,
        name: impl Into<String>,
        salary: f64,
        email: impl Into<String>,
        is_manager: bool,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            salary,
            email: email.into(),
            is_manager,
        }
    }
}

/// The dataset: a list of employees under an `employee` key.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EmployeeList {
    /// Employees, in order
    #[serde(default)]
    pub employee: Vec<Employee>,
}

impl EmployeeList {
    /// Wrap a list of employees.
    pub fn new(employee: Vec<Employee>) -> Self {
        Self { employee }
    }

    /// Number of employees.
    pub fn len(&self) -> usize {
        self.employee.len()
    }

    /// Whether the list is empty.
    pub fn is_empty(&self) -> bool {
        self.employee.is_empty()
    }
}

/// The three-employee sample set.
pub fn sample_employees() -> EmployeeList {
    EmployeeList::new(vec![
        Employee::new(1, "Ahmed", 12000.0, "ahmed@entreprise.ma", false),
        Employee::new(2, "Fatima", 25000.0, "fatima@entreprise.ma", true),
        Employee::new(3, "Youssef", 28000.0, "youssef@entreprise.ma", true),
    ])
}

const FIRST_NAMES: [&str; 8] = [
    "Ahmed", "Fatima", "Youssef", "Salma", "Omar", "Khadija", "Karim", "Nadia",
];

/// Deterministic dataset of `count` employees.
///
/// The first three match [`sample_employees`]; later ones cycle through a
/// fixed name list with salaries in quarter steps so every value is exactly
/// representable as `f64`.
pub fn generate_employees(count: usize) -> EmployeeList {
    let sample = sample_employees().employee;
    let employee = (0..count)
        .map(|i| {
            if let Some(e) = sample.get(i) {
                return e.clone();
            }
            let name = FIRST_NAMES[i % FIRST_NAMES.len()];
            let id = i as i64 + 1;
            Employee::new(
                id,
                format!("{}{}", name, id),
                10000.0 + ((i * 7919) % 30000) as f64 + (i % 4) as f64 * 0.25,
                format!("{}{}@entreprise.ma", name.to_lowercase(), id),
                i % 5 == 0,
            )
        })
        .collect();
    EmployeeList::new(employee)
}
