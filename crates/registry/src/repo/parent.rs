use shared_types::{AppError, Parent, Status, Student};

use crate::filter::{Filterable, NoAxis};
use crate::store::{Entity, EntityStore};

impl Entity for Parent {
    const KIND: &'static str = "Parent";

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }
}

impl Filterable for Parent {
    type Axis = NoAxis;

    fn search_fields(&self) -> Vec<&str> {
        vec![&self.name, &self.email]
    }

    fn matches_category(&self, axis: NoAxis, _value: &str) -> bool {
        match axis {}
    }
}

/// Names of the students `parent` is linked to, looked up live so renames
/// show up immediately. Used as related search text.
pub fn linked_student_names(parent: &Parent, students: &EntityStore<Student>) -> Vec<String> {
    super::student::resolve(students, &parent.linked_student_ids)
        .into_iter()
        .map(|s| s.name.clone())
        .collect()
}

fn parent(
    id: &str,
    name: &str,
    email: &str,
    phone: &str,
    address: &str,
    occupation: &str,
    linked: &[&str],
) -> Parent {
    Parent {
        id: id.into(),
        name: name.into(),
        email: email.into(),
        phone: phone.into(),
        address: address.into(),
        occupation: occupation.into(),
        linked_student_ids: linked.iter().map(|s| s.to_string()).collect(),
        status: Status::Active,
    }
}

pub fn fixtures() -> Vec<Parent> {
    vec![
        parent("1", "Mike Doe", "mike.doe@example.com", "123-456-7890", "123 Main St, City", "Engineer", &["1"]),
        parent("2", "Sarah Johnson", "sarah.j@example.com", "234-567-8901", "456 Oak Ave, Town", "Doctor", &["2"]),
        parent("3", "Robert Williams", "robert.w@example.com", "345-678-9012", "789 Pine Rd, Village", "Teacher", &[]),
        parent("4", "Emily Brown", "emily.b@example.com", "456-789-0123", "321 Elm St, City", "Lawyer", &[]),
        parent("5", "David Miller", "david.m@example.com", "567-890-1234", "654 Maple Dr, Town", "Architect", &[]),
        parent("6", "Jennifer Davis", "jennifer.d@example.com", "678-901-2345", "987 Cedar Ln, Village", "Accountant", &[]),
        parent("7", "Michael Wilson", "michael.w@example.com", "789-012-3456", "147 Birch St, City", "Software Developer", &[]),
        parent("8", "Lisa Anderson", "lisa.a@example.com", "890-123-4567", "258 Spruce Ave, Town", "Marketing Manager", &[]),
        parent("9", "James Taylor", "james.t@example.com", "901-234-5678", "369 Willow Rd, Village", "Business Analyst", &[]),
        parent("10", "Patricia Moore", "patricia.m@example.com", "012-345-6789", "741 Oak St, City", "HR Manager", &[]),
    ]
}

pub fn seed() -> Result<EntityStore<Parent>, AppError> {
    EntityStore::seeded(fixtures())
}
