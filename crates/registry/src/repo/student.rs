use shared_types::{AppError, Status, Student};

use crate::filter::Filterable;
use crate::store::{Entity, EntityStore};

impl Entity for Student {
    const KIND: &'static str = "Student";

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StudentAxis {
    Grade,
}

impl Filterable for Student {
    type Axis = StudentAxis;

    fn search_fields(&self) -> Vec<&str> {
        vec![&self.name, &self.email]
    }

    fn matches_category(&self, axis: StudentAxis, value: &str) -> bool {
        match axis {
            StudentAxis::Grade => self.grade == value,
        }
    }
}

fn student(
    id: &str,
    name: &str,
    email: &str,
    grade: &str,
    section: &str,
    roll_number: &str,
    parent: (&str, &str),
) -> Student {
    Student {
        id: id.into(),
        name: name.into(),
        email: email.into(),
        grade: grade.into(),
        section: section.into(),
        roll_number: roll_number.into(),
        parent_name: parent.0.into(),
        parent_email: parent.1.into(),
        status: Status::Active,
    }
}

pub fn fixtures() -> Vec<Student> {
    vec![
        student("1", "John Doe", "john.doe@example.com", "10", "A", "1001", ("Mike Doe", "mike.doe@example.com")),
        student("2", "Jane Smith", "jane.smith@example.com", "9", "B", "1002", ("Sarah Johnson", "sarah.j@example.com")),
        student("3", "Michael Johnson", "michael.j@example.com", "11", "C", "1003", ("Robert Williams", "robert.w@example.com")),
        student("4", "Emily Brown", "emily.b@example.com", "8", "A", "1004", ("Emily Brown Sr", "emily.b.sr@example.com")),
        student("5", "David Wilson", "david.w@example.com", "12", "B", "1005", ("David Wilson Sr", "david.w.sr@example.com")),
        student("6", "Sarah Davis", "sarah.d@example.com", "10", "C", "1006", ("Jennifer Davis", "jennifer.d@example.com")),
        student("7", "Robert Miller", "robert.m@example.com", "9", "A", "1007", ("Michael Wilson", "michael.w@example.com")),
        student("8", "Lisa Anderson", "lisa.a@example.com", "11", "B", "1008", ("Lisa Anderson Sr", "lisa.a.sr@example.com")),
        student("9", "James Taylor", "james.t@example.com", "8", "C", "1009", ("James Taylor Sr", "james.t.sr@example.com")),
        student("10", "Patricia Moore", "patricia.m@example.com", "12", "A", "1010", ("Patricia Moore Sr", "patricia.m.sr@example.com")),
    ]
}

pub fn seed() -> Result<EntityStore<Student>, AppError> {
    EntityStore::seeded(fixtures())
}

/// Students for `ids`, in the order given. Ids with no matching student
/// (deleted since linking) are skipped.
pub fn resolve<'a>(store: &'a EntityStore<Student>, ids: &[String]) -> Vec<&'a Student> {
    ids.iter().filter_map(|id| store.get(id)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_skips_dangling_ids() {
        let store = seed().unwrap();
        let ids = vec!["2".to_string(), "gone".to_string(), "1".to_string()];
        let names: Vec<_> = resolve(&store, &ids).iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Jane Smith", "John Doe"]);
    }
}
