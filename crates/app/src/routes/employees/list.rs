use std::collections::HashMap;

use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdPlus;
use dioxus_free_icons::Icon;
use registry::repo::employee::EMPLOYEE_DEPARTMENTS;
use registry::{today, DeleteOutcome, EmployeeAxis};
use shared_types::Employee;
use shared_ui::{
    Button, DataTable, DataTableActions, DataTableBody, DataTableCell, DataTableColumn,
    DataTableEmpty, DataTableHeader, DataTableRow, Input, PageActions, PageHeader, PageTitle,
    Pagination, SearchBar, StatusBadge,
};

use super::form_sheet::EmployeeFormSheet;
use crate::routes::common::{
    notify_success, report, CategoryFilter, ConfirmDeleteDialog, FieldErrors, RowActions,
};
use crate::state::{use_config, use_list_view, use_registry};

#[component]
pub fn EmployeeListPage() -> Element {
    let config = use_config();
    let mut registry = use_registry();
    let mut view = use_list_view::<Employee>(config.pagination.default_page_size, false);
    let mut field_errors: FieldErrors = use_signal(HashMap::new);

    let page = view.read().visible(&registry.read().employees);
    let query = view.read().filter().query().to_string();
    let department = view
        .read()
        .filter()
        .category(EmployeeAxis::Department)
        .to_string();
    let pending_name = view
        .read()
        .pending_delete()
        .and_then(|id| registry.read().employees.get(id).map(|e| e.name.clone()));

    let mut edit = move |id: String| {
        field_errors.set(HashMap::new());
        let result = view.write().edit(&registry.read().employees, &id);
        if let Err(e) = result {
            report(&e, None);
        }
    };

    let mut delete = move |id: String| {
        let result = view
            .write()
            .request_delete(&mut registry.write().employees, &id);
        match result {
            Ok(DeleteOutcome::Removed(employee)) => {
                notify_success(format!("{} was removed", employee.name))
            }
            Ok(DeleteOutcome::Pending) => {}
            Err(e) => report(&e, None),
        }
    };

    let department_options: Vec<(String, String)> = EMPLOYEE_DEPARTMENTS
        .iter()
        .map(|d| (d.to_string(), d.to_string()))
        .collect();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("/src/routes/lists.css") }

        div { class: "list-page",
            PageHeader {
                PageTitle { description: "Company staff by department".to_string(), "Employees" }
                PageActions {
                    Button {
                        onclick: move |_| {
                            field_errors.set(HashMap::new());
                            view.write().add(Employee::blank(today()));
                        },
                        Icon::<LdPlus> { icon: LdPlus, width: 16, height: 16 }
                        "Add Employee"
                    }
                }
            }

            SearchBar {
                div { class: "list-search",
                    Input {
                        value: query,
                        placeholder: "Search by name, email or employee ID...",
                        on_input: move |e: FormEvent| view.write().set_query(e.value()),
                    }
                }
                div { class: "list-filter",
                    CategoryFilter {
                        label: "Department",
                        all_label: "All Departments",
                        value: department,
                        options: department_options,
                        on_change: move |v: String| {
                            view.write().set_category(EmployeeAxis::Department, v)
                        },
                    }
                }
            }

            DataTable {
                DataTableHeader {
                    DataTableColumn { "Employee ID" }
                    DataTableColumn { "Name" }
                    DataTableColumn { "Department" }
                    DataTableColumn { "Position" }
                    DataTableColumn { "Joined" }
                    DataTableColumn { "Status" }
                    DataTableColumn { align_end: true, "Actions" }
                }
                DataTableBody {
                    if page.is_empty() {
                        DataTableEmpty { colspan: 7, "No employees found." }
                    }
                    for employee in page.rows.iter().cloned() {
                        DataTableRow { key: "{employee.id}",
                            DataTableCell { "{employee.employee_id}" }
                            DataTableCell {
                                span { class: "cell-primary", "{employee.name}" }
                                span { class: "cell-secondary", "{employee.email}" }
                            }
                            DataTableCell { "{employee.department}" }
                            DataTableCell { "{employee.position}" }
                            DataTableCell { "{employee.joining_date}" }
                            DataTableCell {
                                StatusBadge { status: employee.status }
                            }
                            DataTableActions {
                                RowActions {
                                    on_edit: {
                                        let id = employee.id.clone();
                                        move |_| edit(id.clone())
                                    },
                                    on_delete: {
                                        let id = employee.id.clone();
                                        move |_| delete(id.clone())
                                    },
                                }
                            }
                        }
                    }
                }
            }

            Pagination {
                meta: page.meta.clone(),
                on_page_change: move |p: usize| view.write().set_page(p, &registry.read().employees),
            }
        }

        EmployeeFormSheet { view, field_errors }

        ConfirmDeleteDialog {
            open: pending_name.is_some(),
            kind: "employee",
            name: pending_name.clone().unwrap_or_default(),
            on_confirm: move |_| {
                let result = view.write().confirm_delete(&mut registry.write().employees);
                match result {
                    Ok(employee) => notify_success(format!("{} was removed", employee.name)),
                    Err(e) => report(&e, None),
                }
            },
            on_cancel: move |_| view.write().cancel_delete(),
        }
    }
}
