use pretty_assertions::assert_eq;
use registry::{ListView, StudentAxis};
use shared_types::Student;

use crate::common;

#[test]
fn grade_ten_filter_returns_seeded_pair() {
    let reg = common::registry();
    let mut lv: ListView<Student> = ListView::new(10, false);
    lv.set_category(StudentAxis::Grade, "10");

    let page = lv.visible(&reg.students);

    assert_eq!(common::ids(&page.rows), vec!["1", "6"]);
}

#[test]
fn ten_students_split_over_two_pages() {
    let reg = common::registry();
    let mut lv: ListView<Student> = ListView::new(5, false);

    assert_eq!(common::ids(&lv.visible(&reg.students).rows), vec!["1", "2", "3", "4", "5"]);
    lv.set_page(1, &reg.students);
    let page = lv.visible(&reg.students);
    assert_eq!(common::ids(&page.rows), vec!["6", "7", "8", "9", "10"]);
    assert_eq!(page.meta.range_label(), "6-10 of 10");
}

#[test]
fn link_label_format() {
    let reg = common::registry();
    let john = reg.students.get("1").unwrap();
    assert_eq!(john.link_label(), "John Doe (Grade 10-A, Roll: 1001)");
}
