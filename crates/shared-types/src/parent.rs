use serde::{Deserialize, Serialize};

use crate::common::Status;

/// A parent or guardian, linked to students by id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "validation", derive(validator::Validate))]
pub struct Parent {
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
        validate(length(min = 1, message = "Phone is required"))
    )]
    pub phone: String,
    pub address: String,
    pub occupation: String,
    /// Ids into the canonical student store.
    #[serde(default)]
    pub linked_student_ids: Vec<String>,
    #[serde(default)]
    pub status: Status,
}

impl Parent {
    pub fn blank() -> Self {
        Self {
            id: String::new(),
            name: String::new(),
            email: String::new(),
            phone: String::new(),
            address: String::new(),
            occupation: String::new(),
            linked_student_ids: Vec::new(),
            status: Status::Active,
        }
    }

    pub fn is_linked_to(&self, student_id: &str) -> bool {
        self.linked_student_ids.iter().any(|id| id == student_id)
    }

    /// Link or unlink a student; never records the same id twice.
    pub fn toggle_student(&mut self, student_id: &str) {
        if let Some(pos) = self.linked_student_ids.iter().position(|id| id == student_id) {
            self.linked_student_ids.remove(pos);
        } else {
            self.linked_student_ids.push(student_id.to_string());
        }
    }
}
