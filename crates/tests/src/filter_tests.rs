use pretty_assertions::assert_eq;
use registry::{Filter, StudentAxis};
use shared_types::Student;

use crate::common;

#[test]
fn empty_query_returns_everything() {
    let reg = common::registry();
    let filter: Filter<Student> = Filter::new();
    assert_eq!(filter.apply(reg.students.records()).len(), reg.students.len());
}

#[test]
fn query_is_case_insensitive_substring() {
    let mut store = registry::EntityStore::new();
    for (id, name) in [("1", "John Doe"), ("2", "Jane Smith")] {
        let mut s = common::student(name, "5");
        s.id = id.into();
        s.email = format!("user{id}@example.com");
        store.append(s).unwrap();
    }
    let mut filter: Filter<Student> = Filter::new();
    filter.set_query("jo");

    let names: Vec<&str> = filter
        .apply(store.records())
        .iter()
        .map(|s| s.name.as_str())
        .collect();
    assert_eq!(names, vec!["John Doe"]);
}

#[test]
fn query_matches_email_too() {
    let reg = common::registry();
    let mut filter: Filter<Student> = Filter::new();
    filter.set_query("PATRICIA.M@");
    let hits = filter.apply(reg.students.records());
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, "10");
}

#[test]
fn all_grade_is_pass_through() {
    let reg = common::registry();
    let mut filter: Filter<Student> = Filter::new();
    filter.set_category(StudentAxis::Grade, "all");
    assert_eq!(filter.apply(reg.students.records()).len(), 10);
    assert!(!filter.is_active());
}

#[test]
fn query_and_grade_combine() {
    let reg = common::registry();
    let mut filter: Filter<Student> = Filter::new();
    filter.set_category(StudentAxis::Grade, "10");
    filter.set_query("sarah");
    let hits = filter.apply(reg.students.records());
    assert_eq!(common::ids(hits), vec!["6"]);
}
