use std::collections::HashMap;

use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdPlus;
use dioxus_free_icons::Icon;
use registry::{DeleteOutcome, StudentAxis};
use shared_types::{Student, GRADES};
use shared_ui::{
    Button, DataTable, DataTableActions, DataTableBody, DataTableCell, DataTableColumn,
    DataTableEmpty, DataTableHeader, DataTableRow, Input, PageActions, PageHeader, PageTitle,
    Pagination, SearchBar, StatusBadge,
};

use super::form_sheet::StudentFormSheet;
use crate::routes::common::{
    notify_success, report, CategoryFilter, ConfirmDeleteDialog, FieldErrors, RowActions,
};
use crate::state::{use_config, use_list_view, use_registry};

#[component]
pub fn StudentListPage() -> Element {
    let config = use_config();
    let mut registry = use_registry();
    let mut view = use_list_view::<Student>(config.pagination.default_page_size, false);
    let mut field_errors: FieldErrors = use_signal(HashMap::new);

    let page = view.read().visible(&registry.read().students);
    let query = view.read().filter().query().to_string();
    let grade = view.read().filter().category(StudentAxis::Grade).to_string();
    let pending_name = view
        .read()
        .pending_delete()
        .and_then(|id| registry.read().students.get(id).map(|s| s.name.clone()));

    let mut edit = move |id: String| {
        field_errors.set(HashMap::new());
        let result = view.write().edit(&registry.read().students, &id);
        if let Err(e) = result {
            report(&e, None);
        }
    };

    let mut delete = move |id: String| {
        let result = view
            .write()
            .request_delete(&mut registry.write().students, &id);
        match result {
            Ok(DeleteOutcome::Removed(student)) => {
                notify_success(format!("{} was removed", student.name))
            }
            Ok(DeleteOutcome::Pending) => {}
            Err(e) => report(&e, None),
        }
    };

    let grade_options: Vec<(String, String)> = GRADES
        .iter()
        .map(|g| (g.to_string(), format!("Grade {g}")))
        .collect();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("/src/routes/lists.css") }

        div { class: "list-page",
            PageHeader {
                PageTitle { description: "Manage enrolled students and their classes".to_string(), "Students" }
                PageActions {
                    Button {
                        onclick: move |_| {
                            field_errors.set(HashMap::new());
                            view.write().add(Student::blank());
                        },
                        Icon::<LdPlus> { icon: LdPlus, width: 16, height: 16 }
                        "Add Student"
                    }
                }
            }

            SearchBar {
                div { class: "list-search",
                    Input {
                        value: query,
                        placeholder: "Search by name or email...",
                        on_input: move |e: FormEvent| view.write().set_query(e.value()),
                    }
                }
                div { class: "list-filter",
                    CategoryFilter {
                        label: "Grade",
                        all_label: "All Grades",
                        value: grade,
                        options: grade_options,
                        on_change: move |v: String| view.write().set_category(StudentAxis::Grade, v),
                    }
                }
            }

            DataTable {
                DataTableHeader {
                    DataTableColumn { "Name" }
                    DataTableColumn { "Class" }
                    DataTableColumn { "Roll No." }
                    DataTableColumn { "Parent" }
                    DataTableColumn { "Status" }
                    DataTableColumn { align_end: true, "Actions" }
                }
                DataTableBody {
                    if page.is_empty() {
                        DataTableEmpty { colspan: 6, "No students found." }
                    }
                    for student in page.rows.iter().cloned() {
                        DataTableRow { key: "{student.id}",
                            DataTableCell {
                                span { class: "cell-primary", "{student.name}" }
                                span { class: "cell-secondary", "{student.email}" }
                            }
                            DataTableCell { "{student.class_label()}" }
                            DataTableCell { "{student.roll_number}" }
                            DataTableCell {
                                span { class: "cell-primary", "{student.parent_name}" }
                                span { class: "cell-secondary", "{student.parent_email}" }
                            }
                            DataTableCell {
                                StatusBadge { status: student.status }
                            }
                            DataTableActions {
                                RowActions {
                                    on_edit: {
                                        let id = student.id.clone();
                                        move |_| edit(id.clone())
                                    },
                                    on_delete: {
                                        let id = student.id.clone();
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
                on_page_change: move |p: usize| view.write().set_page(p, &registry.read().students),
            }
        }

        StudentFormSheet { view, field_errors }

        ConfirmDeleteDialog {
            open: pending_name.is_some(),
            kind: "student",
            name: pending_name.clone().unwrap_or_default(),
            on_confirm: move |_| {
                let result = view.write().confirm_delete(&mut registry.write().students);
                match result {
                    Ok(student) => notify_success(format!("{} was removed", student.name)),
                    Err(e) => report(&e, None),
                }
            },
            on_cancel: move |_| view.write().cancel_delete(),
        }
    }
}
