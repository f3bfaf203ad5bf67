use pretty_assertions::assert_eq;
use registry::{DirectoryUserAxis, ListView};
use shared_types::DirectoryUser;

use crate::common;

#[test]
fn user_type_filter_splits_directory() {
    let reg = common::registry();
    let mut lv: ListView<DirectoryUser> = ListView::new(10, false);

    lv.set_category(DirectoryUserAxis::UserType, "student");
    assert_eq!(common::ids(&lv.visible(&reg.users).rows), vec!["1", "3", "5", "7", "9"]);

    lv.set_category(DirectoryUserAxis::UserType, "employee");
    assert_eq!(common::ids(&lv.visible(&reg.users).rows), vec!["2", "4", "6", "8", "10"]);

    lv.set_category(DirectoryUserAxis::UserType, "");
    assert_eq!(lv.visible(&reg.users).total(), 10);
}

#[test]
fn search_matches_user_id() {
    let reg = common::registry();
    let mut lv: ListView<DirectoryUser> = ListView::new(10, false);

    lv.set_query("emp003");
    assert_eq!(common::ids(&lv.visible(&reg.users).rows), vec!["6"]);

    lv.set_query("STU00");
    assert_eq!(lv.visible(&reg.users).total(), 5);
}

#[test]
fn user_id_search_respects_type_filter() {
    let reg = common::registry();
    let mut lv: ListView<DirectoryUser> = ListView::new(10, false);
    lv.set_category(DirectoryUserAxis::UserType, "employee");
    lv.set_query("STU001");

    assert!(lv.visible(&reg.users).is_empty());
}
