use std::collections::HashMap;

use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdPlus;
use dioxus_free_icons::Icon;
use registry::{DeleteOutcome, DepartmentAxis};
use shared_types::{Department, Status, STATUSES};
use shared_ui::{
    Badge, BadgeVariant, Button, DataTable, DataTableActions, DataTableBody, DataTableCell,
    DataTableColumn, DataTableEmpty, DataTableHeader, DataTableRow, Input, PageActions,
    PageHeader, PageTitle, Pagination, SearchBar, StatusBadge,
};

use super::form_sheet::DepartmentFormSheet;
use crate::routes::common::{
    notify_success, report, CategoryFilter, ConfirmDeleteDialog, FieldErrors, RowActions,
};
use crate::state::{use_config, use_list_view, use_registry};

fn status_option(status: Status) -> (String, String) {
    let text = match status {
        Status::Active => "Active",
        Status::Inactive => "Inactive",
    };
    (status.as_str().to_string(), text.to_string())
}

#[component]
pub fn DepartmentListPage() -> Element {
    let config = use_config();
    let mut registry = use_registry();
    let mut view = use_list_view::<Department>(config.pagination.default_page_size, false);
    let mut field_errors: FieldErrors = use_signal(HashMap::new);

    let page = view.read().visible(&registry.read().departments);
    let query = view.read().filter().query().to_string();
    let status = view.read().filter().category(DepartmentAxis::Status).to_string();
    let pending_name = view
        .read()
        .pending_delete()
        .and_then(|id| registry.read().departments.get(id).map(|d| d.name.clone()));

    let mut edit = move |id: String| {
        field_errors.set(HashMap::new());
        let result = view.write().edit(&registry.read().departments, &id);
        if let Err(e) = result {
            report(&e, None);
        }
    };

    let mut delete = move |id: String| {
        let result = view
            .write()
            .request_delete(&mut registry.write().departments, &id);
        match result {
            Ok(DeleteOutcome::Removed(department)) => {
                notify_success(format!("{} was removed", department.name))
            }
            Ok(DeleteOutcome::Pending) => {}
            Err(e) => report(&e, None),
        }
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("/src/routes/lists.css") }

        div { class: "list-page",
            PageHeader {
                PageTitle { description: "Organizational units and who leads them".to_string(), "Departments" }
                PageActions {
                    Button {
                        onclick: move |_| {
                            field_errors.set(HashMap::new());
                            view.write().add(Department::blank());
                        },
                        Icon::<LdPlus> { icon: LdPlus, width: 16, height: 16 }
                        "Add Department"
                    }
                }
            }

            SearchBar {
                div { class: "list-search",
                    Input {
                        value: query,
                        placeholder: "Search by name, code or head...",
                        on_input: move |e: FormEvent| view.write().set_query(e.value()),
                    }
                }
                div { class: "list-filter",
                    CategoryFilter {
                        label: "Status",
                        all_label: "All Statuses",
                        value: status,
                        options: STATUSES.iter().copied().map(status_option).collect::<Vec<_>>(),
                        on_change: move |v: String| view.write().set_category(DepartmentAxis::Status, v),
                    }
                }
            }

            DataTable {
                DataTableHeader {
                    DataTableColumn { "Code" }
                    DataTableColumn { "Name" }
                    DataTableColumn { "Head" }
                    DataTableColumn { "Description" }
                    DataTableColumn { "Status" }
                    DataTableColumn { align_end: true, "Actions" }
                }
                DataTableBody {
                    if page.is_empty() {
                        DataTableEmpty { colspan: 6, "No departments found." }
                    }
                    for department in page.rows.iter().cloned() {
                        DataTableRow { key: "{department.id}",
                            DataTableCell {
                                Badge { variant: BadgeVariant::Outline, "{department.code}" }
                            }
                            DataTableCell {
                                span { class: "cell-primary", "{department.name}" }
                            }
                            DataTableCell { "{department.head}" }
                            DataTableCell {
                                span { class: "cell-secondary", "{department.description}" }
                            }
                            DataTableCell {
                                StatusBadge { status: department.status }
                            }
                            DataTableActions {
                                RowActions {
                                    on_edit: {
                                        let id = department.id.clone();
                                        move |_| edit(id.clone())
                                    },
                                    on_delete: {
                                        let id = department.id.clone();
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
                on_page_change: move |p: usize| view.write().set_page(p, &registry.read().departments),
            }
        }

        DepartmentFormSheet { view, field_errors }

        ConfirmDeleteDialog {
            open: pending_name.is_some(),
            kind: "department",
            name: pending_name.clone().unwrap_or_default(),
            on_confirm: move |_| {
                let result = view.write().confirm_delete(&mut registry.write().departments);
                match result {
                    Ok(department) => notify_success(format!("{} was removed", department.name)),
                    Err(e) => report(&e, None),
                }
            },
            on_cancel: move |_| view.write().cancel_delete(),
        }
    }
}
