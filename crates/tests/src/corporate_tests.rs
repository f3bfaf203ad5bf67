use pretty_assertions::assert_eq;
use registry::{DepartmentAxis, EmployeeAxis, ListView};
use shared_types::{Department, Employee};

use crate::common;

#[test]
fn department_filter_narrows_employees() {
    let reg = common::registry();
    let mut lv: ListView<Employee> = ListView::new(10, false);

    lv.set_category(EmployeeAxis::Department, "Finance");
    assert_eq!(common::ids(&lv.visible(&reg.employees).rows), vec!["3"]);

    lv.set_category(EmployeeAxis::Department, "hr");
    assert_eq!(common::ids(&lv.visible(&reg.employees).rows), vec!["2"]);

    lv.set_category(EmployeeAxis::Department, "all");
    assert_eq!(lv.visible(&reg.employees).total(), 5);
}

#[test]
fn employee_search_matches_employee_id() {
    let reg = common::registry();
    let mut lv: ListView<Employee> = ListView::new(10, false);

    lv.set_query("EMP004");
    assert_eq!(common::ids(&lv.visible(&reg.employees).rows), vec!["4"]);

    lv.set_category(EmployeeAxis::Department, "Engineering");
    assert!(lv.visible(&reg.employees).is_empty());
}

#[test]
fn department_status_filter() {
    let reg = common::registry();
    let mut lv: ListView<Department> = ListView::new(10, false);

    lv.set_category(DepartmentAxis::Status, "inactive");
    assert_eq!(common::ids(&lv.visible(&reg.departments).rows), vec!["5"]);

    lv.set_category(DepartmentAxis::Status, "active");
    assert_eq!(common::ids(&lv.visible(&reg.departments).rows), vec!["1", "2", "3", "4"]);
}

#[test]
fn department_search_covers_code_and_head() {
    let reg = common::registry();
    let mut lv: ListView<Department> = ListView::new(10, false);

    lv.set_query("mkt");
    assert_eq!(common::ids(&lv.visible(&reg.departments).rows), vec!["4"]);

    lv.set_query("michael");
    assert_eq!(common::ids(&lv.visible(&reg.departments).rows), vec!["3"]);
}
