use pretty_assertions::assert_eq;
use registry::{ListView, TeacherAxis};
use shared_types::Teacher;

use crate::common;

fn teaching(reg: &registry::Registry, id: &str, name: &str, grades: &[&str]) -> Teacher {
    let mut t = reg.teachers.get("1").unwrap().clone();
    t.id = id.to_string();
    t.name = name.to_string();
    t.email = format!("{}@school.com", name.to_lowercase().replace(' ', "."));
    t.assigned_grades = grades.iter().map(|g| g.to_string()).collect();
    t
}

#[test]
fn grade_filter_matches_any_assigned_grade() {
    let mut reg = common::registry();
    let extra = [
        teaching(&reg, "2", "Mark Lee", &["11", "12"]),
        teaching(&reg, "3", "Nina Patel", &["10"]),
    ];
    for t in extra {
        reg.teachers.append(t).unwrap();
    }
    let mut lv: ListView<Teacher> = ListView::new(10, false);

    lv.set_category(TeacherAxis::Grade, "10");
    assert_eq!(common::ids(&lv.visible(&reg.teachers).rows), vec!["1", "3"]);

    lv.set_category(TeacherAxis::Grade, "12");
    assert_eq!(common::ids(&lv.visible(&reg.teachers).rows), vec!["2"]);

    lv.set_category(TeacherAxis::Grade, "all");
    assert_eq!(lv.visible(&reg.teachers).total(), 3);
}

#[test]
fn grade_filter_with_no_teacher_is_empty() {
    let reg = common::registry();
    let mut lv: ListView<Teacher> = ListView::new(10, false);
    lv.set_category(TeacherAxis::Grade, "7");

    let page = lv.visible(&reg.teachers);

    assert!(page.is_empty());
    assert_eq!(page.meta.range_label(), "0 of 0");
}

#[test]
fn search_and_grade_combine() {
    let mut reg = common::registry();
    let sam = teaching(&reg, "2", "Sam Carter", &["10"]);
    reg.teachers.append(sam).unwrap();
    let mut lv: ListView<Teacher> = ListView::new(10, false);
    lv.set_category(TeacherAxis::Grade, "10");
    lv.set_query("SAM");

    assert_eq!(common::ids(&lv.visible(&reg.teachers).rows), vec!["2"]);
}
