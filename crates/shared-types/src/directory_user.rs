use serde::{Deserialize, Serialize};

use crate::common::Status;

/// Kind of account listed in the user directory.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum DirectoryUserType {
    Student,
    Employee,
}

impl DirectoryUserType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DirectoryUserType::Student => "student",
            DirectoryUserType::Employee => "employee",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            DirectoryUserType::Student => "Student",
            DirectoryUserType::Employee => "Employee",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "student" => Some(DirectoryUserType::Student),
            "employee" => Some(DirectoryUserType::Employee),
            _ => None,
        }
    }
}

/// A date/time pair as shown in the activity column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionStamp {
    pub date: String,
    pub time: String,
}

impl SessionStamp {
    pub fn new(date: &str, time: &str) -> Self {
        Self {
            date: date.to_string(),
            time: time.to_string(),
        }
    }
}

/// A login account in the user directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "validation", derive(validator::Validate))]
pub struct DirectoryUser {
    pub id: String,
    /// Organization-issued code such as `STU001` or `EMP003`.
    pub user_id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub user_type: DirectoryUserType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grade: Option<String>,
    #[serde(default)]
    pub status: Status,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_login: Option<SessionStamp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_logout: Option<SessionStamp>,
    #[serde(default)]
    pub total_login_hours: f64,
    #[serde(default)]
    pub has_logged_in: bool,
}

impl DirectoryUser {
    /// Department for employees, grade for students.
    pub fn affiliation(&self) -> Option<&str> {
        match self.user_type {
            DirectoryUserType::Employee => self.department.as_deref(),
            DirectoryUserType::Student => self.grade.as_deref(),
        }
    }

    /// Activity column text, e.g. `"2024-03-15 09:30 AM"` or `"Never logged in"`.
    pub fn last_login_label(&self) -> String {
        match (&self.last_login, self.has_logged_in) {
            (Some(stamp), true) => format!("{} {}", stamp.date, stamp.time),
            _ => "Never logged in".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(t: DirectoryUserType) -> DirectoryUser {
        DirectoryUser {
            id: "1".into(),
            user_id: "STU001".into(),
            name: "Alice Johnson".into(),
            email: "alice.j@student.com".into(),
            phone: "+1 234-567-8901".into(),
            user_type: t,
            department: Some("Engineering".into()),
            grade: Some("Grade 10".into()),
            status: Status::Active,
            last_login: Some(SessionStamp::new("2024-03-15", "09:30 AM")),
            last_logout: None,
            total_login_hours: 7.25,
            has_logged_in: true,
        }
    }

    #[test]
    fn affiliation_depends_on_type() {
        assert_eq!(user(DirectoryUserType::Student).affiliation(), Some("Grade 10"));
        assert_eq!(user(DirectoryUserType::Employee).affiliation(), Some("Engineering"));
    }

    #[test]
    fn last_login_label_handles_never() {
        let mut u = user(DirectoryUserType::Student);
        assert_eq!(u.last_login_label(), "2024-03-15 09:30 AM");
        u.has_logged_in = false;
        u.last_login = None;
        assert_eq!(u.last_login_label(), "Never logged in");
    }

    #[test]
    fn user_type_parses_case_insensitively() {
        assert_eq!(DirectoryUserType::parse("Employee"), Some(DirectoryUserType::Employee));
        assert_eq!(DirectoryUserType::parse("all"), None);
    }
}
