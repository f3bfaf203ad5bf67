use std::collections::HashMap;

use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdPlus;
use dioxus_free_icons::Icon;
use registry::{today, DeleteOutcome, TeacherAxis};
use shared_types::{Teacher, GRADES};
use shared_ui::{
    Badge, BadgeVariant, Button, DataTable, DataTableActions, DataTableBody, DataTableCell,
    DataTableColumn, DataTableEmpty, DataTableHeader, DataTableRow, Input, PageActions,
    PageHeader, PageTitle, Pagination, SearchBar, StatusBadge,
};

use super::form_sheet::TeacherFormSheet;
use crate::routes::common::{
    notify_success, report, CategoryFilter, ConfirmDeleteDialog, FieldErrors, RowActions,
};
use crate::state::{use_config, use_list_view, use_registry};

#[component]
pub fn TeacherListPage() -> Element {
    let config = use_config();
    let mut registry = use_registry();
    let mut view = use_list_view::<Teacher>(config.pagination.default_page_size, false);
    let mut field_errors: FieldErrors = use_signal(HashMap::new);

    let page = view.read().visible(&registry.read().teachers);
    let query = view.read().filter().query().to_string();
    let grade = view.read().filter().category(TeacherAxis::Grade).to_string();
    let pending_name = view
        .read()
        .pending_delete()
        .and_then(|id| registry.read().teachers.get(id).map(|t| t.name.clone()));

    let mut edit = move |id: String| {
        field_errors.set(HashMap::new());
        let result = view.write().edit(&registry.read().teachers, &id);
        if let Err(e) = result {
            report(&e, None);
        }
    };

    let mut delete = move |id: String| {
        let result = view
            .write()
            .request_delete(&mut registry.write().teachers, &id);
        match result {
            Ok(DeleteOutcome::Removed(teacher)) => {
                notify_success(format!("{} was removed", teacher.name))
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
                PageTitle { description: "Teaching staff, their grades and subjects".to_string(), "Teachers" }
                PageActions {
                    Button {
                        onclick: move |_| {
                            field_errors.set(HashMap::new());
                            view.write().add(Teacher::blank(today()));
                        },
                        Icon::<LdPlus> { icon: LdPlus, width: 16, height: 16 }
                        "Add Teacher"
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
                        on_change: move |v: String| view.write().set_category(TeacherAxis::Grade, v),
                    }
                }
            }

            DataTable {
                DataTableHeader {
                    DataTableColumn { "Name" }
                    DataTableColumn { "Grades" }
                    DataTableColumn { "Subjects" }
                    DataTableColumn { "Experience" }
                    DataTableColumn { "Joined" }
                    DataTableColumn { "Status" }
                    DataTableColumn { align_end: true, "Actions" }
                }
                DataTableBody {
                    if page.is_empty() {
                        DataTableEmpty { colspan: 7, "No teachers found." }
                    }
                    for teacher in page.rows.iter().cloned() {
                        DataTableRow { key: "{teacher.id}",
                            DataTableCell {
                                span { class: "cell-primary", "{teacher.name}" }
                                span { class: "cell-secondary", "{teacher.email}" }
                            }
                            DataTableCell {
                                div { class: "chip-list",
                                    for g in teacher.assigned_grades.iter() {
                                        Badge { variant: BadgeVariant::Outline, "Grade {g}" }
                                    }
                                }
                            }
                            DataTableCell {
                                div { class: "chip-list",
                                    for s in teacher.subjects.iter() {
                                        Badge { variant: BadgeVariant::Secondary, "{s}" }
                                    }
                                }
                            }
                            DataTableCell { "{teacher.experience} yrs" }
                            DataTableCell { "{teacher.joining_date}" }
                            DataTableCell {
                                StatusBadge { status: teacher.status }
                            }
                            DataTableActions {
                                RowActions {
                                    on_edit: {
                                        let id = teacher.id.clone();
                                        move |_| edit(id.clone())
                                    },
                                    on_delete: {
                                        let id = teacher.id.clone();
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
                on_page_change: move |p: usize| view.write().set_page(p, &registry.read().teachers),
            }
        }

        TeacherFormSheet { view, field_errors }

        ConfirmDeleteDialog {
            open: pending_name.is_some(),
            kind: "teacher",
            name: pending_name.clone().unwrap_or_default(),
            on_confirm: move |_| {
                let result = view.write().confirm_delete(&mut registry.write().teachers);
                match result {
                    Ok(teacher) => notify_success(format!("{} was removed", teacher.name)),
                    Err(e) => report(&e, None),
                }
            },
            on_cancel: move |_| view.write().cancel_delete(),
        }
    }
}
