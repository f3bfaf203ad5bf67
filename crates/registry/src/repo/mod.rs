//! Per-kind wiring: [`Entity`](crate::Entity) and
//! [`Filterable`](crate::Filterable) impls plus the fixture data each
//! screen is seeded with.

pub mod department;
pub mod directory_user;
pub mod employee;
pub mod parent;
pub mod role;
pub mod student;
pub mod teacher;

use chrono::NaiveDate;
use shared_types::{
    AppError, Department, DirectoryUser, Employee, Parent, Role, Student, Teacher,
};

use crate::store::{Entity, EntityStore};

/// Fixture date. Out-of-range input falls back to the epoch.
pub(crate) fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

/// Local calendar date, used for blank-form defaults and audit stamps.
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Every store the application manages, each seeded independently.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Registry {
    pub students: EntityStore<Student>,
    pub parents: EntityStore<Parent>,
    pub teachers: EntityStore<Teacher>,
    pub employees: EntityStore<Employee>,
    pub departments: EntityStore<Department>,
    pub users: EntityStore<DirectoryUser>,
    pub roles: EntityStore<Role>,
}

/// Dashboard tile for one record kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KindSummary {
    pub kind: &'static str,
    pub total: usize,
    pub active: usize,
}

fn summarize<T: Entity>(store: &EntityStore<T>, is_active: impl Fn(&T) -> bool) -> KindSummary {
    KindSummary {
        kind: T::KIND,
        total: store.len(),
        active: store.count_where(is_active),
    }
}

impl Registry {
    pub fn seeded() -> Result<Self, AppError> {
        let registry = Self {
            students: student::seed()?,
            parents: parent::seed()?,
            teachers: teacher::seed()?,
            employees: employee::seed()?,
            departments: department::seed()?,
            users: directory_user::seed()?,
            roles: role::seed()?,
        };
        tracing::debug!("registry seeded");
        Ok(registry)
    }

    /// Totals for the academic screens.
    pub fn academic_summary(&self) -> Vec<KindSummary> {
        vec![
            summarize(&self.students, |s| s.status.is_active()),
            summarize(&self.teachers, |t| t.status.is_active()),
            summarize(&self.parents, |p| p.status.is_active()),
        ]
    }

    /// Totals for the corporate screens.
    pub fn corporate_summary(&self) -> Vec<KindSummary> {
        vec![
            summarize(&self.employees, |e| e.status.is_active()),
            summarize(&self.departments, |d| d.status.is_active()),
        ]
    }

    /// Totals shared by both admin kinds.
    pub fn access_summary(&self) -> Vec<KindSummary> {
        vec![
            summarize(&self.users, |u| u.status.is_active()),
            summarize(&self.roles, |r| r.is_active),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_registry_counts() {
        let registry = Registry::seeded().unwrap();
        let academic = registry.academic_summary();
        assert_eq!(academic[0], KindSummary { kind: "Student", total: 10, active: 10 });
        assert_eq!(registry.access_summary()[0].active, 8);
        assert_eq!(registry.corporate_summary()[1].active, 4);
    }
}
