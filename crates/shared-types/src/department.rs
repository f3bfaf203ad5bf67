use serde::{Deserialize, Serialize};

use crate::common::Status;

/// An organizational unit of the company.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "validation", derive(validator::Validate))]
pub struct Department {
    pub id: String,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Name is required"))
    )]
    pub name: String,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, max = 10, message = "Code must be 1-10 characters"))
    )]
    pub code: String,
    /// Display name of the department head.
    pub head: String,
    pub description: String,
    #[serde(default)]
    pub status: Status,
}

impl Department {
    pub fn blank() -> Self {
        Self {
            id: String::new(),
            name: String::new(),
            code: String::new(),
            head: String::new(),
            description: String::new(),
            status: Status::Active,
        }
    }
}
