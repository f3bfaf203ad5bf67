use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Permission string granting every capability.
pub const PERMISSION_ALL: &str = "all";

/// A named group of related permissions shown together in the role editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PermissionGroup {
    pub name: &'static str,
    pub permissions: &'static [&'static str],
}

/// Every permission a role can be granted, grouped for display.
pub const PERMISSION_GROUPS: &[PermissionGroup] = &[
    PermissionGroup {
        name: "Content Management",
        permissions: &["content:read", "content:write", "content:delete"],
    },
    PermissionGroup {
        name: "Course Management",
        permissions: &["course:create", "course:edit", "course:view"],
    },
    PermissionGroup {
        name: "Analytics Access",
        permissions: &["analytics:view", "reports:generate"],
    },
    PermissionGroup {
        name: "User Management",
        permissions: &["user:create", "user:edit", "user:delete"],
    },
    PermissionGroup {
        name: "Role Management",
        permissions: &["role:create", "role:edit", "role:delete"],
    },
];

/// Kind of account a role may be assigned to.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum RoleUserType {
    Employee,
    Teacher,
    Student,
    Parent,
}

/// Assignable user types in display order.
pub const ROLE_USER_TYPES: &[RoleUserType] = &[
    RoleUserType::Employee,
    RoleUserType::Teacher,
    RoleUserType::Student,
    RoleUserType::Parent,
];

impl RoleUserType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RoleUserType::Employee => "employee",
            RoleUserType::Teacher => "teacher",
            RoleUserType::Student => "student",
            RoleUserType::Parent => "parent",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            RoleUserType::Employee => "Employee",
            RoleUserType::Teacher => "Teacher",
            RoleUserType::Student => "Student",
            RoleUserType::Parent => "Parent",
        }
    }
}

/// A person a role can be assigned to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignableUser {
    /// Code such as `EMP001` or `STD002`.
    pub code: String,
    pub name: String,
    pub user_type: RoleUserType,
    pub email: String,
    /// Department, subject area or class, depending on the type.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

/// A permission role.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "validation", derive(validator::Validate))]
pub struct Role {
    pub id: String,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Role name is required"))
    )]
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub permissions: Vec<String>,
    #[serde(default = "default_true")]
    pub is_active: bool,
    pub created_at: NaiveDate,
    pub updated_at: NaiveDate,
    #[serde(default)]
    pub user_types: Vec<RoleUserType>,
    /// Codes of the users holding this role.
    #[serde(default)]
    pub assigned_users: Vec<String>,
}

fn default_true() -> bool {
    true
}

impl Role {
    /// Blank form defaults, stamped with `today`.
    pub fn blank(today: NaiveDate) -> Self {
        Self {
            id: String::new(),
            name: String::new(),
            description: String::new(),
            permissions: Vec::new(),
            is_active: true,
            created_at: today,
            updated_at: today,
            user_types: Vec::new(),
            assigned_users: Vec::new(),
        }
    }

    pub fn has_permission(&self, permission: &str) -> bool {
        self.permissions
            .iter()
            .any(|p| p == permission || p == PERMISSION_ALL)
    }

    /// Whether `permission` is literally present, ignoring the `all` grant.
    pub fn grants_explicitly(&self, permission: &str) -> bool {
        self.permissions.iter().any(|p| p == permission)
    }

    /// Add `permission` if absent, remove it if present.
    pub fn toggle_permission(&mut self, permission: &str) {
        if let Some(pos) = self.permissions.iter().position(|p| p == permission) {
            self.permissions.remove(pos);
        } else {
            self.permissions.push(permission.to_string());
        }
    }

    pub fn toggle_user_type(&mut self, user_type: RoleUserType) {
        if let Some(pos) = self.user_types.iter().position(|t| *t == user_type) {
            self.user_types.remove(pos);
        } else {
            self.user_types.push(user_type);
        }
    }

    pub fn toggle_assigned_user(&mut self, code: &str) {
        if let Some(pos) = self.assigned_users.iter().position(|c| c == code) {
            self.assigned_users.remove(pos);
        } else {
            self.assigned_users.push(code.to_string());
        }
    }

    /// Number of users holding the role, derived from the assignments.
    pub fn users_count(&self) -> usize {
        self.assigned_users.len()
    }

    pub fn status_label(&self) -> &'static str {
        if self.is_active {
            "Active"
        } else {
            "Inactive"
        }
    }
}
