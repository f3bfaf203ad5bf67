use shared_types::{AppError, DirectoryUser, DirectoryUserType, SessionStamp, Status};

use crate::filter::Filterable;
use crate::store::{Entity, EntityStore};

impl Entity for DirectoryUser {
    const KIND: &'static str = "User";

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectoryUserAxis {
    UserType,
}

impl Filterable for DirectoryUser {
    type Axis = DirectoryUserAxis;

    fn search_fields(&self) -> Vec<&str> {
        vec![&self.name, &self.email, &self.user_id]
    }

    fn matches_category(&self, axis: DirectoryUserAxis, value: &str) -> bool {
        match axis {
            DirectoryUserAxis::UserType => self.user_type.as_str() == value,
        }
    }
}

struct Activity {
    login: (&'static str, &'static str),
    logout: (&'static str, &'static str),
    hours: f64,
}

#[allow(clippy::too_many_arguments)]
fn user(
    id: &str,
    user_id: &str,
    name: &str,
    email: &str,
    user_type: DirectoryUserType,
    affiliation: &str,
    status: Status,
    activity: Option<Activity>,
) -> DirectoryUser {
    let (department, grade) = match user_type {
        DirectoryUserType::Employee => (Some(affiliation.to_string()), None),
        DirectoryUserType::Student => (None, Some(affiliation.to_string())),
    };
    let phone = format!("+1 234-567-89{:0>2}", id);
    DirectoryUser {
        id: id.into(),
        user_id: user_id.into(),
        name: name.into(),
        email: email.into(),
        phone,
        user_type,
        department,
        grade,
        status,
        last_login: activity.as_ref().map(|a| SessionStamp::new(a.login.0, a.login.1)),
        last_logout: activity.as_ref().map(|a| SessionStamp::new(a.logout.0, a.logout.1)),
        total_login_hours: activity.as_ref().map(|a| a.hours).unwrap_or(0.0),
        has_logged_in: activity.is_some(),
    }
}

fn seen(date: &'static str, login: &'static str, logout: &'static str, hours: f64) -> Option<Activity> {
    Some(Activity {
        login: (date, login),
        logout: (date, logout),
        hours,
    })
}

#[rustfmt::skip]
pub fn fixtures() -> Vec<DirectoryUser> {
    use DirectoryUserType::{Employee, Student};
    use Status::{Active, Inactive};
    vec![
        user("1", "STU001", "Alice Johnson", "alice.j@student.com", Student, "Grade 10", Active, seen("2024-03-15", "09:30 AM", "04:45 PM", 7.25)),
        user("2", "EMP001", "John Smith", "john.smith@corporate.com", Employee, "Engineering", Active, seen("2024-03-15", "08:00 AM", "06:00 PM", 10.0)),
        user("3", "STU002", "Bob Wilson", "bob.w@student.com", Student, "Grade 11", Active, seen("2024-03-14", "10:15 AM", "03:30 PM", 5.25)),
        user("4", "EMP002", "Sarah Johnson", "sarah.j@corporate.com", Employee, "HR", Active, seen("2024-03-15", "09:00 AM", "05:30 PM", 8.5)),
        user("5", "STU003", "Carol Davis", "carol.d@student.com", Student, "Grade 9", Inactive, None),
        user("6", "EMP003", "Michael Brown", "michael.b@corporate.com", Employee, "Finance", Active, seen("2024-03-15", "08:30 AM", "05:45 PM", 9.25)),
        user("7", "STU004", "David Miller", "david.m@student.com", Student, "Grade 12", Active, seen("2024-03-14", "11:00 AM", "04:00 PM", 5.0)),
        user("8", "EMP004", "Emily Wilson", "emily.w@corporate.com", Employee, "Marketing", Active, seen("2024-03-15", "09:15 AM", "06:15 PM", 9.0)),
        user("9", "STU005", "Eve Taylor", "eve.t@student.com", Student, "Grade 10", Active, None),
        user("10", "EMP005", "James Anderson", "james.a@corporate.com", Employee, "Operations", Inactive, seen("2024-03-10", "08:00 AM", "05:00 PM", 9.0)),
    ]
}

pub fn seed() -> Result<EntityStore<DirectoryUser>, AppError> {
    EntityStore::seeded(fixtures())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phones_follow_fixture_numbering() {
        let users = fixtures();
        assert_eq!(users[0].phone, "+1 234-567-8901");
        assert_eq!(users[9].phone, "+1 234-567-8910");
    }

    #[test]
    fn never_logged_in_users_have_no_stamps() {
        let users = fixtures();
        assert!(!users[4].has_logged_in);
        assert_eq!(users[4].last_login_label(), "Never logged in");
        assert_eq!(users[0].last_login_label(), "2024-03-15 09:30 AM");
    }
}
