use pretty_assertions::assert_eq;
use registry::repo::role::{assignable_of, assignable_users, merge_at};
use registry::ListView;
use shared_types::{Role, RoleUserType, PERMISSION_ALL};

use crate::common::{self, SequentialIds};

#[test]
fn toggle_permission_adds_once_and_removes() {
    let reg = common::registry();
    let mut role = reg.roles.get("4").cloned().unwrap();
    let before = role.permissions.len();

    role.toggle_permission("content:write");
    assert_eq!(role.permissions.len(), before + 1);
    assert_eq!(
        role.permissions.iter().filter(|p| *p == "content:write").count(),
        1
    );

    role.toggle_permission("content:write");
    assert_eq!(role.permissions, vec!["course:view", "content:view"]);
}

#[test]
fn all_permission_implies_every_permission() {
    let reg = common::registry();
    let admin = reg.roles.get("1").unwrap();
    assert!(admin.has_permission("role:delete"));
    assert!(!admin.grants_explicitly("role:delete"));
    assert!(admin.grants_explicitly(PERMISSION_ALL));
}

#[test]
fn users_count_follows_assignments() {
    let reg = common::registry();
    let mut role = reg.roles.get("2").cloned().unwrap();
    assert_eq!(role.users_count(), 2);
    role.toggle_assigned_user("EMP003");
    assert_eq!(role.users_count(), 3);
    role.toggle_assigned_user("EMP002");
    assert_eq!(role.users_count(), 2);
}

#[test]
fn assignable_users_follow_selected_types() {
    let directory = assignable_users();
    let codes: Vec<&str> = assignable_of(&directory, &[RoleUserType::Teacher, RoleUserType::Parent])
        .iter()
        .map(|u| u.code.as_str())
        .collect();
    assert_eq!(codes, vec!["TCH001", "TCH002", "TCH003", "PRT001", "PRT002", "PRT003"]);
}

#[test]
fn editing_role_keeps_creation_date() {
    let reg = common::registry();
    let mut role = reg.roles.get("3").cloned().unwrap();
    let created = role.created_at;
    let mut draft = role.clone();
    draft.description = "Build courses".into();
    draft.created_at = reg.roles.get("5").unwrap().updated_at;
    let stamp = chrono::NaiveDate::from_ymd_opt(2025, 1, 2).unwrap();

    merge_at(&mut role, draft, stamp);

    assert_eq!(role.created_at, created);
    assert_eq!(role.updated_at, stamp);
    assert_eq!(role.description, "Build courses");
}

#[test]
fn role_create_and_confirmed_delete() {
    let mut reg = common::registry();
    let mut lv: ListView<Role> = ListView::new(5, true);
    let today = registry::today();

    lv.add(Role::blank(today));
    lv.editor_mut().update(|r| {
        r.name = "Auditor".into();
        r.description = "Reads reports".into();
        r.toggle_permission("reports:generate");
    });
    let id = lv.commit(&mut reg.roles, &mut SequentialIds::default()).unwrap();
    assert_eq!(reg.roles.len(), 6);
    assert_eq!(reg.roles.get(&id).map(|r| r.created_at), Some(today));

    lv.request_delete(&mut reg.roles, &id).unwrap();
    assert!(reg.roles.contains(&id));
    lv.confirm_delete(&mut reg.roles).unwrap();
    assert_eq!(reg.roles.len(), 5);
}

#[test]
fn role_list_pages_by_five() {
    let reg = common::registry();
    let lv: ListView<Role> = ListView::new(5, true);
    let page = lv.visible(&reg.roles);
    assert_eq!(page.rows.len(), 5);
    assert_eq!(page.meta.total_pages, 1);
}
