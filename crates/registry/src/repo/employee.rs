use shared_types::{AppError, Employee, Status};

use super::ymd;
use crate::filter::Filterable;
use crate::store::{Entity, EntityStore};

/// Departments offered in the employee form and filter.
pub const EMPLOYEE_DEPARTMENTS: &[&str] = &[
    "Engineering",
    "HR",
    "Finance",
    "Marketing",
    "Operations",
];

impl Entity for Employee {
    const KIND: &'static str = "Employee";

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmployeeAxis {
    Department,
}

impl Filterable for Employee {
    type Axis = EmployeeAxis;

    fn search_fields(&self) -> Vec<&str> {
        vec![&self.name, &self.email, &self.employee_id]
    }

    fn matches_category(&self, axis: EmployeeAxis, value: &str) -> bool {
        match axis {
            EmployeeAxis::Department => self.department.eq_ignore_ascii_case(value),
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn employee(
    id: &str,
    employee_id: &str,
    name: &str,
    email: &str,
    phone: &str,
    department: &str,
    position: &str,
    joined: (i32, u32, u32),
    status: Status,
) -> Employee {
    Employee {
        id: id.into(),
        employee_id: employee_id.into(),
        name: name.into(),
        email: email.into(),
        phone: phone.into(),
        department: department.into(),
        position: position.into(),
        joining_date: ymd(joined.0, joined.1, joined.2),
        status,
    }
}

pub fn fixtures() -> Vec<Employee> {
    use Status::{Active, Inactive};
    vec![
        employee("1", "EMP001", "John Smith", "john.smith@corporate.com", "+1 234-567-8902", "Engineering", "Senior Engineer", (2021, 4, 12), Active),
        employee("2", "EMP002", "Sarah Johnson", "sarah.j@corporate.com", "+1 234-567-8904", "HR", "HR Business Partner", (2020, 9, 1), Active),
        employee("3", "EMP003", "Michael Brown", "michael.b@corporate.com", "+1 234-567-8906", "Finance", "Financial Analyst", (2022, 2, 14), Active),
        employee("4", "EMP004", "Emily Wilson", "emily.w@corporate.com", "+1 234-567-8908", "Marketing", "Marketing Lead", (2019, 6, 3), Active),
        employee("5", "EMP005", "James Anderson", "james.a@corporate.com", "+1 234-567-8910", "Operations", "Operations Manager", (2018, 11, 20), Inactive),
    ]
}

pub fn seed() -> Result<EntityStore<Employee>, AppError> {
    EntityStore::seeded(fixtures())
}
