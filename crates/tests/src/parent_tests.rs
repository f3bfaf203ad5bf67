use pretty_assertions::assert_eq;
use registry::repo::parent::linked_student_names;
use registry::repo::student;
use registry::ListView;
use shared_types::Parent;

use crate::common;

#[test]
fn linked_students_resolve_by_id() {
    let reg = common::registry();
    let parent = reg.parents.get("1").unwrap();
    let linked: Vec<String> = student::resolve(&reg.students, &parent.linked_student_ids)
        .into_iter()
        .map(|s| s.link_label())
        .collect();
    assert_eq!(linked, vec!["John Doe (Grade 10-A, Roll: 1001)"]);
}

#[test]
fn parent_search_finds_linked_student_name() {
    let reg = common::registry();
    let mut lv: ListView<Parent> = ListView::new(10, false);
    lv.set_query("jane smith");

    let page = lv.visible_with(&reg.parents, |p| linked_student_names(p, &reg.students));

    assert_eq!(common::ids(&page.rows), vec!["2"]);
}

#[test]
fn student_rename_shows_through_the_link() {
    let mut reg = common::registry();
    let mut renamed = reg.students.get("2").cloned().unwrap();
    renamed.name = "Janet Smith".into();
    reg.students.update("2", renamed).unwrap();

    let parent = reg.parents.get("2").unwrap();
    assert_eq!(linked_student_names(parent, &reg.students), vec!["Janet Smith"]);
}

#[test]
fn deleted_student_drops_out_of_links() {
    let mut reg = common::registry();
    reg.students.remove("1").unwrap();
    let parent = reg.parents.get("1").unwrap();
    assert!(linked_student_names(parent, &reg.students).is_empty());
    assert_eq!(parent.linked_student_ids, vec!["1"]);
}

#[test]
fn toggle_student_link() {
    let mut parent = Parent::blank();
    parent.toggle_student("3");
    parent.toggle_student("4");
    parent.toggle_student("3");
    assert_eq!(parent.linked_student_ids, vec!["4"]);
}

#[test]
fn delete_keeps_page_when_matches_come_from_linked_names() {
    let mut reg = common::registry();
    let ids: Vec<String> = common::ids(reg.parents.iter());
    for id in &ids {
        let mut parent = reg.parents.get(id).cloned().unwrap();
        parent.linked_student_ids = vec!["2".into()];
        reg.parents.update(id, parent).unwrap();
    }
    let mut lv: ListView<Parent> = ListView::new(3, false);
    lv.set_query("jane");
    lv.set_page_with(2, &reg.parents, |p| linked_student_names(p, &reg.students));
    assert_eq!(lv.window().page(), 2);

    let students = reg.students.clone();
    lv.request_delete_with(&mut reg.parents, "1", |p| linked_student_names(p, &students))
        .unwrap();

    assert_eq!(lv.window().page(), 2);
    let page = lv.visible_with(&reg.parents, |p| linked_student_names(p, &reg.students));
    assert_eq!(page.total(), 9);
    assert_eq!(common::ids(&page.rows), vec!["8", "9", "10"]);
}

#[test]
fn confirmed_delete_clamps_against_linked_matches() {
    let mut reg = common::registry();
    let mut lv: ListView<Parent> = ListView::new(1, true);
    lv.set_query("jane smith");
    lv.request_delete(&mut reg.parents, "2").unwrap();

    let students = reg.students.clone();
    let removed = lv
        .confirm_delete_with(&mut reg.parents, |p| linked_student_names(p, &students))
        .unwrap();

    assert_eq!(removed.name, "Sarah Johnson");
    assert_eq!(lv.window().page(), 0);
    assert!(lv.visible_with(&reg.parents, |p| linked_student_names(p, &reg.students)).is_empty());
}
