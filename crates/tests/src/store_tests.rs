use pretty_assertions::assert_eq;
use registry::{EntityStore, UuidAuthority};
use shared_types::{AppErrorKind, Student};

use crate::common;

#[test]
fn create_adds_exactly_one_record_with_fresh_id() {
    let mut reg = common::registry();
    let before = reg.students.len();
    let draft = common::student("Nina Patel", "7");

    let id = reg.students.create(draft.clone(), &mut UuidAuthority).unwrap();

    assert_eq!(reg.students.len(), before + 1);
    let matches: Vec<&Student> = reg.students.iter().filter(|s| s.id == id).collect();
    assert_eq!(matches.len(), 1);
    let mut expected = draft;
    expected.id = id;
    assert_eq!(matches[0], &expected);
}

#[test]
fn created_ids_are_unique_across_the_store() {
    let mut reg = common::registry();
    let a = reg.students.create(common::student("A One", "1"), &mut UuidAuthority).unwrap();
    let b = reg.students.create(common::student("B Two", "2"), &mut UuidAuthority).unwrap();
    assert_ne!(a, b);
    assert!(!reg.students.iter().any(|s| s.id.is_empty()));
}

#[test]
fn update_keeps_id_and_applies_changes() {
    let mut reg = common::registry();
    let original = reg.students.get("3").cloned().unwrap();
    let mut draft = original.clone();
    draft.id = "ignored".into();
    draft.section = "D".into();
    draft.roll_number = "3003".into();

    reg.students.update("3", draft).unwrap();

    let updated = reg.students.get("3").unwrap();
    let mut expected = original;
    expected.section = "D".into();
    expected.roll_number = "3003".into();
    assert_eq!(updated, &expected);
    assert!(reg.students.get("ignored").is_none());
}

#[test]
fn remove_leaves_others_untouched_in_order() {
    let mut reg = common::registry();
    let before: Vec<Student> = reg.students.records().to_vec();

    let removed = reg.students.remove("4").unwrap();

    assert_eq!(removed.id, "4");
    let expected: Vec<Student> = before.into_iter().filter(|s| s.id != "4").collect();
    assert_eq!(reg.students.records(), expected.as_slice());
}

#[test]
fn unknown_ids_are_not_found() {
    let mut reg = common::registry();
    let draft = common::student("Ghost", "5");
    assert_eq!(reg.students.update("nope", draft).unwrap_err().kind, AppErrorKind::NotFound);
    assert_eq!(reg.students.remove("nope").unwrap_err().kind, AppErrorKind::NotFound);
}

#[test]
fn append_duplicate_is_conflict() {
    let mut store: EntityStore<Student> = EntityStore::new();
    let mut s = common::student("Dup", "3");
    s.id = "x".into();
    store.append(s.clone()).unwrap();
    assert_eq!(store.append(s).unwrap_err().kind, AppErrorKind::Conflict);
    assert_eq!(store.len(), 1);
}
