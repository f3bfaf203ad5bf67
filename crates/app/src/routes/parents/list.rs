use std::collections::HashMap;

use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdPlus;
use dioxus_free_icons::Icon;
use registry::repo::{parent::linked_student_names, student};
use registry::DeleteOutcome;
use shared_types::Parent;
use shared_ui::{
    Button, Card, CardContent, CardDescription, CardHeader, CardTitle, Input, PageActions,
    PageHeader, PageTitle, Pagination, SearchBar, StatusBadge,
};

use super::form_sheet::ParentFormSheet;
use crate::routes::common::{notify_success, report, ConfirmDeleteDialog, FieldErrors, RowActions};
use crate::state::{use_config, use_list_view, use_registry};

/// Parents as cards, each listing the students it links to.
#[component]
pub fn ParentListPage() -> Element {
    let config = use_config();
    let mut registry = use_registry();
    let mut view = use_list_view::<Parent>(config.pagination.default_page_size, false);
    let mut field_errors: FieldErrors = use_signal(HashMap::new);

    let page = {
        let reg = registry.read();
        view.read()
            .visible_with(&reg.parents, |p| linked_student_names(p, &reg.students))
    };
    let query = view.read().filter().query().to_string();
    let pending_name = view
        .read()
        .pending_delete()
        .and_then(|id| registry.read().parents.get(id).map(|p| p.name.clone()));

    let cards: Vec<(Parent, Vec<String>)> = {
        let reg = registry.read();
        page.rows
            .iter()
            .map(|p| {
                let linked = student::resolve(&reg.students, &p.linked_student_ids)
                    .into_iter()
                    .map(|s| s.link_label())
                    .collect();
                (p.clone(), linked)
            })
            .collect()
    };

    let mut edit = move |id: String| {
        field_errors.set(HashMap::new());
        let result = view.write().edit(&registry.read().parents, &id);
        if let Err(e) = result {
            report(&e, None);
        }
    };

    let mut delete = move |id: String| {
        let mut guard = registry.write();
        let reg = &mut *guard;
        let result = view.write().request_delete_with(&mut reg.parents, &id, |p| {
            linked_student_names(p, &reg.students)
        });
        drop(guard);
        match result {
            Ok(DeleteOutcome::Removed(parent)) => {
                notify_success(format!("{} was removed", parent.name))
            }
            Ok(DeleteOutcome::Pending) => {}
            Err(e) => report(&e, None),
        }
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("/src/routes/lists.css") }

        div { class: "list-page",
            PageHeader {
                PageTitle { description: "Parents and guardians linked to enrolled students".to_string(), "Parents" }
                PageActions {
                    Button {
                        onclick: move |_| {
                            field_errors.set(HashMap::new());
                            view.write().add(Parent::blank());
                        },
                        Icon::<LdPlus> { icon: LdPlus, width: 16, height: 16 }
                        "Add Parent"
                    }
                }
            }

            SearchBar {
                div { class: "list-search",
                    Input {
                        value: query,
                        placeholder: "Search by name, email or student...",
                        on_input: move |e: FormEvent| view.write().set_query(e.value()),
                    }
                }
            }

            if cards.is_empty() {
                div { class: "empty-state", "No parents found." }
            }

            div { class: "card-grid",
                for (parent, linked) in cards {
                    Card { key: "{parent.id}",
                        CardHeader {
                            div { class: "record-card-head",
                                div {
                                    CardTitle { "{parent.name}" }
                                    CardDescription { "{parent.email}" }
                                }
                                div { class: "record-card-actions",
                                    RowActions {
                                        on_edit: {
                                            let id = parent.id.clone();
                                            move |_| edit(id.clone())
                                        },
                                        on_delete: {
                                            let id = parent.id.clone();
                                            move |_| delete(id.clone())
                                        },
                                    }
                                }
                            }
                        }
                        CardContent {
                            div { class: "record-card-field",
                                span { class: "record-card-field-label", "Phone" }
                                span { "{parent.phone}" }
                            }
                            if !parent.occupation.is_empty() {
                                div { class: "record-card-field",
                                    span { class: "record-card-field-label", "Occupation" }
                                    span { "{parent.occupation}" }
                                }
                            }
                            if !parent.address.is_empty() {
                                div { class: "record-card-field",
                                    span { class: "record-card-field-label", "Address" }
                                    span { "{parent.address}" }
                                }
                            }
                            div { class: "record-card-field",
                                span { class: "record-card-field-label", "Linked Students" }
                                if linked.is_empty() {
                                    span { class: "option-empty", "None" }
                                } else {
                                    ul { class: "linked-list",
                                        for label in linked {
                                            li { "{label}" }
                                        }
                                    }
                                }
                            }
                            StatusBadge { status: parent.status }
                        }
                    }
                }
            }

            Pagination {
                meta: page.meta.clone(),
                on_page_change: move |p: usize| {
                    let reg = registry.read();
                    view.write()
                        .set_page_with(p, &reg.parents, |parent| linked_student_names(parent, &reg.students));
                },
            }
        }

        ParentFormSheet { view, field_errors }

        ConfirmDeleteDialog {
            open: pending_name.is_some(),
            kind: "parent",
            name: pending_name.clone().unwrap_or_default(),
            on_confirm: move |_| {
                let mut guard = registry.write();
                let reg = &mut *guard;
                let result = view.write().confirm_delete_with(&mut reg.parents, |p| {
                    linked_student_names(p, &reg.students)
                });
                drop(guard);
                match result {
                    Ok(parent) => notify_success(format!("{} was removed", parent.name)),
                    Err(e) => report(&e, None),
                }
            },
            on_cancel: move |_| view.write().cancel_delete(),
        }
    }
}
