use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::common::Status;

/// Subjects a teacher can be assigned.
pub const SUBJECTS: &[&str] = &[
    "Mathematics",
    "Physics",
    "Chemistry",
    "Biology",
    "Computer Science",
];

/// A member of the teaching staff.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "validation", derive(validator::Validate))]
pub struct Teacher {
    pub id: String,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Name is required"))
    )]
    pub name: String,
    #[cfg_attr(
        feature = "validation",
        validate(email(message = "Valid email is required"))
    )]
    pub email: String,
    pub phone: String,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Assign at least one grade"))
    )]
    pub assigned_grades: Vec<String>,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Assign at least one subject"))
    )]
    pub subjects: Vec<String>,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Qualification is required"))
    )]
    pub qualification: String,
    /// Years of experience.
    pub experience: u32,
    pub joining_date: NaiveDate,
    /// Ids into the canonical student store.
    #[serde(default)]
    pub linked_student_ids: Vec<String>,
    #[serde(default)]
    pub status: Status,
}

impl Teacher {
    /// Blank form defaults; the joining date starts at `today`.
    pub fn blank(today: NaiveDate) -> Self {
        Self {
            id: String::new(),
            name: String::new(),
            email: String::new(),
            phone: String::new(),
            assigned_grades: Vec::new(),
            subjects: Vec::new(),
            qualification: String::new(),
            experience: 0,
            joining_date: today,
            linked_student_ids: Vec::new(),
            status: Status::Active,
        }
    }

    pub fn teaches_grade(&self, grade: &str) -> bool {
        self.assigned_grades.iter().any(|g| g == grade)
    }

    pub fn toggle_grade(&mut self, grade: &str) {
        toggle(&mut self.assigned_grades, grade);
    }

    pub fn toggle_subject(&mut self, subject: &str) {
        toggle(&mut self.subjects, subject);
    }

    pub fn toggle_student(&mut self, student_id: &str) {
        toggle(&mut self.linked_student_ids, student_id);
    }
}

fn toggle(values: &mut Vec<String>, value: &str) {
    if let Some(pos) = values.iter().position(|v| v == value) {
        values.remove(pos);
    } else {
        values.push(value.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    #[test]
    fn blank_uses_given_joining_date() {
        let t = Teacher::blank(today());
        assert_eq!(t.joining_date, today());
        assert!(t.subjects.is_empty());
        assert_eq!(t.status, Status::Active);
    }

    #[test]
    fn toggles_never_duplicate() {
        let mut t = Teacher::blank(today());
        t.toggle_grade("9");
        t.toggle_grade("10");
        t.toggle_grade("9");
        assert_eq!(t.assigned_grades, vec!["10".to_string()]);
        assert!(t.teaches_grade("10"));
        assert!(!t.teaches_grade("9"));

        t.toggle_subject("Physics");
        t.toggle_subject("Physics");
        assert!(t.subjects.is_empty());
    }

    #[test]
    fn joining_date_serializes_as_iso() {
        let t = Teacher::blank(today());
        let json = serde_json::to_value(&t).unwrap();
        assert_eq!(json["joining_date"], "2024-06-01");
    }
}
