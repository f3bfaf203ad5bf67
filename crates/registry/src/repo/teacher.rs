use shared_types::{AppError, Status, Teacher};

use super::ymd;
use crate::filter::Filterable;
use crate::store::{Entity, EntityStore};

impl Entity for Teacher {
    const KIND: &'static str = "Teacher";

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TeacherAxis {
    /// Passes when the grade is one of the teacher's assigned grades.
    Grade,
}

impl Filterable for Teacher {
    type Axis = TeacherAxis;

    fn search_fields(&self) -> Vec<&str> {
        vec![&self.name, &self.email]
    }

    fn matches_category(&self, axis: TeacherAxis, value: &str) -> bool {
        match axis {
            TeacherAxis::Grade => self.teaches_grade(value),
        }
    }
}

pub fn fixtures() -> Vec<Teacher> {
    vec![Teacher {
        id: "1".into(),
        name: "Sarah Smith".into(),
        email: "sarah.smith@school.com".into(),
        phone: "123-456-7890".into(),
        assigned_grades: vec!["9".into(), "10".into()],
        subjects: vec!["Mathematics".into(), "Physics".into()],
        qualification: "M.Sc. Mathematics".into(),
        experience: 5,
        joining_date: ymd(2023, 1, 15),
        linked_student_ids: Vec::new(),
        status: Status::Active,
    }]
}

pub fn seed() -> Result<EntityStore<Teacher>, AppError> {
    EntityStore::seeded(fixtures())
}
