use pretty_assertions::assert_eq;
use registry::{DeleteOutcome, EditorMode, ListView, StudentAxis};
use shared_types::{AppErrorKind, Student};

use crate::common::{self, SequentialIds};

fn view(confirm: bool) -> ListView<Student> {
    ListView::new(5, confirm)
}

#[test]
fn add_then_commit_creates() {
    let mut reg = common::registry();
    let mut lv = view(false);
    let mut ids = SequentialIds::default();

    lv.add(Student::blank());
    assert_eq!(lv.editor().mode(), Some(EditorMode::Create));
    lv.editor_mut().update(|d| *d = common::student("Omar Ali", "6"));
    let id = lv.commit(&mut reg.students, &mut ids).unwrap();

    assert_eq!(id, "new-1");
    assert!(!lv.editor().is_open());
    assert_eq!(reg.students.get("new-1").map(|s| s.name.as_str()), Some("Omar Ali"));
    assert_eq!(reg.students.len(), 11);
}

#[test]
fn edit_then_commit_updates_in_place() {
    let mut reg = common::registry();
    let mut lv = view(false);

    lv.edit(&reg.students, "2").unwrap();
    assert_eq!(lv.editor().mode(), Some(EditorMode::Edit));
    assert!(!lv.editor().is_dirty());
    lv.editor_mut().update(|d| d.name = "Jane Smythe".into());
    assert!(lv.editor().is_dirty());

    let id = lv.commit(&mut reg.students, &mut SequentialIds::default()).unwrap();

    assert_eq!(id, "2");
    assert_eq!(reg.students.len(), 10);
    assert_eq!(reg.students.records()[1].name, "Jane Smythe");
}

#[test]
fn invalid_draft_reports_fields_and_stays_open() {
    let mut reg = common::registry();
    let mut lv = view(false);

    lv.add(Student::blank());
    let err = lv.commit(&mut reg.students, &mut SequentialIds::default()).unwrap_err();

    assert_eq!(err.kind, AppErrorKind::ValidationError);
    assert_eq!(err.field_error("name"), Some("Name is required"));
    assert!(err.field_error("email").is_some());
    assert!(lv.editor().is_open());
    assert_eq!(reg.students.len(), 10);
}

#[test]
fn edit_unknown_id_is_not_found() {
    let reg = common::registry();
    let mut lv = view(false);
    let err = lv.edit(&reg.students, "missing").unwrap_err();
    assert_eq!(err.kind, AppErrorKind::NotFound);
    assert!(!lv.editor().is_open());
}

#[test]
fn delete_without_confirmation_is_immediate() {
    let mut reg = common::registry();
    let mut lv = view(false);
    match lv.request_delete(&mut reg.students, "5").unwrap() {
        DeleteOutcome::Removed(s) => assert_eq!(s.name, "David Wilson"),
        DeleteOutcome::Pending => panic!("expected immediate delete"),
    }
    assert!(!reg.students.contains("5"));
}

#[test]
fn confirmed_delete_and_cancel() {
    let mut reg = common::registry();
    let mut lv = view(true);

    assert_eq!(lv.request_delete(&mut reg.students, "5").unwrap(), DeleteOutcome::Pending);
    assert_eq!(lv.pending_delete(), Some("5"));
    lv.cancel_delete();
    assert_eq!(lv.pending_delete(), None);
    assert!(reg.students.contains("5"));

    lv.request_delete(&mut reg.students, "5").unwrap();
    let removed = lv.confirm_delete(&mut reg.students).unwrap();
    assert_eq!(removed.id, "5");
    assert_eq!(reg.students.len(), 9);
    assert_eq!(
        lv.confirm_delete(&mut reg.students).unwrap_err().kind,
        AppErrorKind::Conflict
    );
}

#[test]
fn deleting_the_record_being_edited_closes_editor() {
    let mut reg = common::registry();
    let mut lv = view(false);
    lv.edit(&reg.students, "7").unwrap();
    lv.request_delete(&mut reg.students, "7").unwrap();
    assert!(!lv.editor().is_open());
}

#[test]
fn filter_changes_reset_the_page() {
    let reg = common::registry();
    let mut lv = view(false);
    lv.set_page(1, &reg.students);
    assert_eq!(lv.window().page(), 1);

    lv.set_query("a");
    assert_eq!(lv.window().page(), 0);

    lv.set_page(1, &reg.students);
    lv.set_category(StudentAxis::Grade, "9");
    assert_eq!(lv.window().page(), 0);
}

#[test]
fn visible_reports_filtered_totals() {
    let reg = common::registry();
    let mut lv = view(false);
    lv.set_category(StudentAxis::Grade, "8");

    let page = lv.visible(&reg.students);

    assert_eq!(common::ids(&page.rows), vec!["4", "9"]);
    assert_eq!(page.total(), 2);
    assert_eq!(page.meta.total_pages, 1);
    assert!(!page.meta.has_next);
}
