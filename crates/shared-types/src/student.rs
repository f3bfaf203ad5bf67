use serde::{Deserialize, Serialize};

use crate::common::Status;

/// A student enrolled in the school.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "validation", derive(validator::Validate))]
pub struct Student {
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
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Grade is required"))
    )]
    pub grade: String,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Section is required"))
    )]
    pub section: String,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Roll number is required"))
    )]
    pub roll_number: String,
    pub parent_name: String,
    pub parent_email: String,
    #[serde(default)]
    pub status: Status,
}

impl Student {
    /// Blank form defaults for the create dialog.
    pub fn blank() -> Self {
        Self {
            id: String::new(),
            name: String::new(),
            email: String::new(),
            grade: String::new(),
            section: String::new(),
            roll_number: String::new(),
            parent_name: String::new(),
            parent_email: String::new(),
            status: Status::Active,
        }
    }

    /// `"10-A"` style class label.
    pub fn class_label(&self) -> String {
        format!("{}-{}", self.grade, self.section)
    }

    /// Label used wherever another record links to this student.
    pub fn link_label(&self) -> String {
        format!(
            "{} (Grade {}, Roll: {})",
            self.name,
            self.class_label(),
            self.roll_number
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_student_is_active_and_empty() {
        let s = Student::blank();
        assert!(s.id.is_empty());
        assert!(s.name.is_empty());
        assert_eq!(s.status, Status::Active);
    }

    #[test]
    fn link_label_formats_class_and_roll() {
        let s = Student {
            id: "1".into(),
            name: "John Doe".into(),
            email: "john.doe@example.com".into(),
            grade: "10".into(),
            section: "A".into(),
            roll_number: "1001".into(),
            parent_name: "Mike Doe".into(),
            parent_email: "mike.doe@example.com".into(),
            status: Status::Active,
        };
        assert_eq!(s.link_label(), "John Doe (Grade 10-A, Roll: 1001)");
    }

    #[test]
    fn missing_status_deserializes_as_active() {
        let json = r#"{"id":"9","name":"N","email":"n@x.com","grade":"8","section":"C",
            "roll_number":"1009","parent_name":"P","parent_email":"p@x.com"}"#;
        let s: Student = serde_json::from_str(json).unwrap();
        assert_eq!(s.status, Status::Active);
    }
}
