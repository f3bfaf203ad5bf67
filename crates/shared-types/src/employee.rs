use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::common::Status;

/// A corporate employee.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "validation", derive(validator::Validate))]
pub struct Employee {
    pub id: String,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Employee ID is required"))
    )]
    pub employee_id: String,
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
        validate(length(min = 1, message = "Department is required"))
    )]
    pub department: String,
    pub position: String,
    pub joining_date: NaiveDate,
    #[serde(default)]
    pub status: Status,
}

impl Employee {
    pub fn blank(today: NaiveDate) -> Self {
        Self {
            id: String::new(),
            employee_id: String::new(),
            name: String::new(),
            email: String::new(),
            phone: String::new(),
            department: String::new(),
            position: String::new(),
            joining_date: today,
            status: Status::Active,
        }
    }
}
