use registry::{Entity, IdAuthority, Registry};
use shared_types::{Status, Student};

/// Fresh fixture data for one test.
pub fn registry() -> Registry {
    Registry::seeded().expect("fixtures seed cleanly")
}

/// Deterministic ids: "new-1", "new-2", ...
#[derive(Debug, Default)]
pub struct SequentialIds(pub usize);

impl IdAuthority for SequentialIds {
    fn issue(&mut self) -> String {
        self.0 += 1;
        format!("new-{}", self.0)
    }
}

/// A valid student draft with no id.
pub fn student(name: &str, grade: &str) -> Student {
    Student {
        id: String::new(),
        name: name.to_string(),
        email: format!("{}@example.com", name.to_lowercase().replace(' ', ".")),
        grade: grade.to_string(),
        section: "A".to_string(),
        roll_number: "2001".to_string(),
        parent_name: String::new(),
        parent_email: String::new(),
        status: Status::Active,
    }
}

/// Ids of `rows`, in order.
pub fn ids<'a, T: Entity + 'a>(rows: impl IntoIterator<Item = &'a T>) -> Vec<String> {
    rows.into_iter().map(|r| r.id().to_string()).collect()
}
