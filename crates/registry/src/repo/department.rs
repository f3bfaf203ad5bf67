use shared_types::{AppError, Department, Status};

use crate::filter::Filterable;
use crate::store::{Entity, EntityStore};

impl Entity for Department {
    const KIND: &'static str = "Department";

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DepartmentAxis {
    Status,
}

impl Filterable for Department {
    type Axis = DepartmentAxis;

    fn search_fields(&self) -> Vec<&str> {
        vec![&self.name, &self.code, &self.head]
    }

    fn matches_category(&self, axis: DepartmentAxis, value: &str) -> bool {
        match axis {
            DepartmentAxis::Status => self.status.as_str() == value,
        }
    }
}

fn department(id: &str, name: &str, code: &str, head: &str, description: &str) -> Department {
    Department {
        id: id.into(),
        name: name.into(),
        code: code.into(),
        head: head.into(),
        description: description.into(),
        status: Status::Active,
    }
}

pub fn fixtures() -> Vec<Department> {
    let mut records = vec![
        department("1", "Engineering", "ENG", "John Smith", "Product development and platform engineering"),
        department("2", "Human Resources", "HR", "Sarah Johnson", "Hiring, onboarding and people operations"),
        department("3", "Finance", "FIN", "Michael Brown", "Budgeting, payroll and reporting"),
        department("4", "Marketing", "MKT", "Emily Wilson", "Brand, campaigns and communications"),
        department("5", "Operations", "OPS", "James Anderson", "Facilities and day-to-day operations"),
    ];
    records[4].status = Status::Inactive;
    records
}

pub fn seed() -> Result<EntityStore<Department>, AppError> {
    EntityStore::seeded(fixtures())
}
