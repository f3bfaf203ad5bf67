use chrono::NaiveDate;
use shared_types::{AppError, AssignableUser, Role, RoleUserType};

use super::{today, ymd};
use crate::filter::{Filterable, NoAxis};
use crate::store::{Entity, EntityStore};

impl Entity for Role {
    const KIND: &'static str = "Role";

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }

    /// Keeps the creation date and stamps the update date.
    fn merge(&mut self, draft: Self) {
        merge_at(self, draft, today());
    }
}

impl Filterable for Role {
    type Axis = NoAxis;

    fn search_fields(&self) -> Vec<&str> {
        vec![&self.name, &self.description]
    }

    fn matches_category(&self, axis: NoAxis, _value: &str) -> bool {
        match axis {}
    }
}

/// [`Entity::merge`] for roles with an explicit clock.
pub fn merge_at(role: &mut Role, draft: Role, now: NaiveDate) {
    let id = std::mem::take(&mut role.id);
    let created_at = role.created_at;
    *role = draft;
    role.id = id;
    role.created_at = created_at;
    role.updated_at = now;
}

/// The assignable users whose type is among `types`, in directory order.
pub fn assignable_of<'a>(
    directory: &'a [AssignableUser],
    types: &[RoleUserType],
) -> Vec<&'a AssignableUser> {
    directory
        .iter()
        .filter(|u| types.contains(&u.user_type))
        .collect()
}

fn assignable(
    code: &str,
    name: &str,
    user_type: RoleUserType,
    email: &str,
    detail: Option<&str>,
) -> AssignableUser {
    AssignableUser {
        code: code.into(),
        name: name.into(),
        user_type,
        email: email.into(),
        detail: detail.map(str::to_string),
    }
}

/// People roles can be assigned to.
#[rustfmt::skip]
pub fn assignable_users() -> Vec<AssignableUser> {
    use RoleUserType::{Employee, Parent, Student, Teacher};
    vec![
        assignable("EMP001", "John Smith", Employee, "john.smith@example.com", Some("Engineering")),
        assignable("EMP002", "Sarah Johnson", Employee, "sarah.j@example.com", Some("Analytics")),
        assignable("EMP003", "Mike Brown", Employee, "mike.b@example.com", Some("Operations")),
        assignable("TCH001", "Emily Davis", Teacher, "emily.d@example.com", Some("Mathematics")),
        assignable("TCH002", "Robert Wilson", Teacher, "robert.w@example.com", Some("Science")),
        assignable("TCH003", "Lisa Anderson", Teacher, "lisa.a@example.com", Some("English")),
        assignable("STD001", "Alex Thompson", Student, "alex.t@example.com", Some("Grade 10-A")),
        assignable("STD002", "Sophia Lee", Student, "sophia.l@example.com", Some("Grade 9-B")),
        assignable("STD003", "James Miller", Student, "james.m@example.com", Some("Grade 11-C")),
        assignable("PRT001", "David Thompson", Parent, "david.t@example.com", None),
        assignable("PRT002", "Maria Lee", Parent, "maria.l@example.com", None),
        assignable("PRT003", "Jennifer Miller", Parent, "jennifer.m@example.com", None),
    ]
}

struct RoleSeed {
    id: &'static str,
    name: &'static str,
    description: &'static str,
    permissions: &'static [&'static str],
    created: (i32, u32, u32),
    updated: (i32, u32, u32),
    user_types: &'static [RoleUserType],
    assigned: &'static [&'static str],
}

impl RoleSeed {
    fn build(&self) -> Role {
        Role {
            id: self.id.into(),
            name: self.name.into(),
            description: self.description.into(),
            permissions: self.permissions.iter().map(|p| p.to_string()).collect(),
            is_active: true,
            created_at: ymd(self.created.0, self.created.1, self.created.2),
            updated_at: ymd(self.updated.0, self.updated.1, self.updated.2),
            user_types: self.user_types.to_vec(),
            assigned_users: self.assigned.iter().map(|c| c.to_string()).collect(),
        }
    }
}

pub fn fixtures() -> Vec<Role> {
    use RoleUserType::{Employee, Parent, Student, Teacher};
    [
        RoleSeed {
            id: "1",
            name: "Administrator",
            description: "Full system access with all permissions",
            permissions: &["all"],
            created: (2024, 1, 1),
            updated: (2024, 3, 15),
            user_types: &[Employee, Teacher, Student, Parent],
            assigned: &["EMP001", "TCH001", "STD001", "PRT001"],
        },
        RoleSeed {
            id: "2",
            name: "Content Manager",
            description: "Manage course content and materials",
            permissions: &["content:read", "content:write", "content:delete"],
            created: (2024, 1, 15),
            updated: (2024, 3, 10),
            user_types: &[Employee, Teacher],
            assigned: &["EMP002", "TCH002"],
        },
        RoleSeed {
            id: "3",
            name: "Instructor",
            description: "Create and manage courses",
            permissions: &["course:create", "course:edit", "course:view"],
            created: (2024, 2, 1),
            updated: (2024, 3, 12),
            user_types: &[Teacher],
            assigned: &["TCH003"],
        },
        RoleSeed {
            id: "4",
            name: "Student",
            description: "Access and complete courses",
            permissions: &["course:view", "content:view"],
            created: (2024, 1, 1),
            updated: (2024, 3, 14),
            user_types: &[Student],
            assigned: &["STD002"],
        },
        RoleSeed {
            id: "5",
            name: "Analyst",
            description: "View analytics and reports",
            permissions: &["analytics:view", "reports:generate"],
            created: (2024, 2, 15),
            updated: (2024, 3, 13),
            user_types: &[Employee],
            assigned: &["EMP003"],
        },
    ]
    .iter()
    .map(RoleSeed::build)
    .collect()
}

pub fn seed() -> Result<EntityStore<Role>, AppError> {
    EntityStore::seeded(fixtures())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_keeps_created_and_stamps_updated() {
        let mut role = fixtures().remove(1);
        let mut draft = role.clone();
        draft.id = "other".into();
        draft.created_at = ymd(1999, 1, 1);
        draft.name = "Editor".into();
        merge_at(&mut role, draft, ymd(2024, 6, 1));
        assert_eq!(role.id, "2");
        assert_eq!(role.name, "Editor");
        assert_eq!(role.created_at, ymd(2024, 1, 15));
        assert_eq!(role.updated_at, ymd(2024, 6, 1));
    }

    #[test]
    fn assignable_users_filtered_by_type() {
        let directory = assignable_users();
        let codes: Vec<_> = assignable_of(&directory, &[RoleUserType::Parent])
            .iter()
            .map(|u| u.code.as_str())
            .collect();
        assert_eq!(codes, vec!["PRT001", "PRT002", "PRT003"]);
        assert!(assignable_of(&directory, &[]).is_empty());
    }
}
