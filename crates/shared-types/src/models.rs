use serde::{Deserialize, Serialize};

/// Role attached to an authenticated session.
///
/// - `SchoolAdmin` / `CorporateAdmin`: organization administrators created by sign-up.
/// - `DepartmentHead`, `Hrbp`: corporate staff with elevated visibility.
/// - `Student`, `Teacher`, `Parent`, `Employee`: end users; dashboard only.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    SchoolAdmin,
    CorporateAdmin,
    #[default]
    Student,
    Teacher,
    Parent,
    Employee,
    DepartmentHead,
    Hrbp,
}

impl UserRole {
    /// Parse a role string. Unknown values default to `Student`, the least
    /// privileged role.
    pub fn from_str_or_default(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "school_admin" => UserRole::SchoolAdmin,
            "corporate_admin" => UserRole::CorporateAdmin,
            "teacher" => UserRole::Teacher,
            "parent" => UserRole::Parent,
            "employee" => UserRole::Employee,
            "department_head" => UserRole::DepartmentHead,
            "hrbp" => UserRole::Hrbp,
            _ => UserRole::Student,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::SchoolAdmin => "school_admin",
            UserRole::CorporateAdmin => "corporate_admin",
            UserRole::Student => "student",
            UserRole::Teacher => "teacher",
            UserRole::Parent => "parent",
            UserRole::Employee => "employee",
            UserRole::DepartmentHead => "department_head",
            UserRole::Hrbp => "hrbp",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            UserRole::SchoolAdmin => "School Admin",
            UserRole::CorporateAdmin => "Corporate Admin",
            UserRole::Student => "Student",
            UserRole::Teacher => "Teacher",
            UserRole::Parent => "Parent",
            UserRole::Employee => "Employee",
            UserRole::DepartmentHead => "Department Head",
            UserRole::Hrbp => "HR Business Partner",
        }
    }

    pub fn is_admin(&self) -> bool {
        matches!(self, UserRole::SchoolAdmin | UserRole::CorporateAdmin)
    }
}

/// Which kind of organization an administrator signs up for.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum AdminType {
    #[default]
    School,
    Corporate,
}

impl AdminType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AdminType::School => "school",
            AdminType::Corporate => "corporate",
        }
    }

    pub fn from_str_or_default(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "corporate" => AdminType::Corporate,
            _ => AdminType::School,
        }
    }

    /// The session role an administrator of this kind receives.
    pub fn admin_role(&self) -> UserRole {
        match self {
            AdminType::School => UserRole::SchoolAdmin,
            AdminType::Corporate => UserRole::CorporateAdmin,
        }
    }

    /// Label for the organization-name field on the sign-up form.
    pub fn organization_label(&self) -> &'static str {
        match self {
            AdminType::School => "School Name",
            AdminType::Corporate => "Company Name",
        }
    }
}

/// Identity of the signed-in user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AuthUser {
    pub id: String,
    pub email: String,
    pub name: String,
    pub role: UserRole,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization_name: Option<String>,
}

impl AuthUser {
    /// Up to two uppercase initials for avatar fallbacks.
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|w| w.chars().next())
            .take(2)
            .collect::<String>()
            .to_uppercase()
    }
}

/// Login request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[cfg_attr(feature = "validation", derive(validator::Validate))]
pub struct LoginRequest {
    #[cfg_attr(
        feature = "validation",
        validate(email(message = "Valid email is required"))
    )]
    pub email: String,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Password is required"))
    )]
    pub password: String,
}

/// Administrator sign-up request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[cfg_attr(feature = "validation", derive(validator::Validate))]
pub struct SignUpRequest {
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Full name is required"))
    )]
    pub name: String,
    #[cfg_attr(
        feature = "validation",
        validate(email(message = "Valid email is required"))
    )]
    pub email: String,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Password is required"))
    )]
    pub password: String,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Organization name is required"))
    )]
    pub organization_name: String,
    pub admin_type: AdminType,
}
