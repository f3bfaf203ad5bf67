use std::collections::HashMap;

use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdPlus;
use dioxus_free_icons::Icon;
use registry::{today, DeleteOutcome};
use shared_types::{Role, PERMISSION_ALL};
use shared_ui::{
    Badge, BadgeVariant, Button, DataTable, DataTableActions, DataTableBody, DataTableCell,
    DataTableColumn, DataTableEmpty, DataTableHeader, DataTableRow, Input, PageActions,
    PageHeader, PageTitle, Pagination, SearchBar,
};

use super::form_sheet::RoleFormSheet;
use crate::routes::common::{notify_success, report, ConfirmDeleteDialog, FieldErrors, RowActions};
use crate::state::{use_config, use_list_view, use_registry};

/// Permissions shown inline before collapsing into a "+n more" badge.
const PERMISSION_PREVIEW: usize = 3;

/// Badge labels for a role's permissions column.
fn permission_badges(role: &Role) -> Vec<String> {
    if role.grants_explicitly(PERMISSION_ALL) {
        return vec!["All permissions".to_string()];
    }
    let mut badges: Vec<String> = role
        .permissions
        .iter()
        .take(PERMISSION_PREVIEW)
        .cloned()
        .collect();
    if role.permissions.len() > PERMISSION_PREVIEW {
        badges.push(format!("+{} more", role.permissions.len() - PERMISSION_PREVIEW));
    }
    badges
}

fn user_types_label(role: &Role) -> String {
    role.user_types
        .iter()
        .map(|t| t.display_name())
        .collect::<Vec<_>>()
        .join(", ")
}

fn active_variant(is_active: bool) -> BadgeVariant {
    if is_active {
        BadgeVariant::Success
    } else {
        BadgeVariant::Secondary
    }
}

#[component]
pub fn RoleListPage() -> Element {
    let config = use_config();
    let mut registry = use_registry();
    // Role deletes always ask first.
    let mut view = use_list_view::<Role>(config.pagination.role_page_size, true);
    let mut field_errors: FieldErrors = use_signal(HashMap::new);

    let page = view.read().visible(&registry.read().roles);
    let query = view.read().filter().query().to_string();
    let pending_name = view
        .read()
        .pending_delete()
        .and_then(|id| registry.read().roles.get(id).map(|r| r.name.clone()));

    let mut edit = move |id: String| {
        field_errors.set(HashMap::new());
        let result = view.write().edit(&registry.read().roles, &id);
        if let Err(e) = result {
            report(&e, None);
        }
    };

    let mut delete = move |id: String| {
        let result = view.write().request_delete(&mut registry.write().roles, &id);
        match result {
            Ok(DeleteOutcome::Removed(role)) => notify_success(format!("{} was removed", role.name)),
            Ok(DeleteOutcome::Pending) => {}
            Err(e) => report(&e, None),
        }
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("/src/routes/lists.css") }

        div { class: "list-page",
            PageHeader {
                PageTitle { description: "Permission roles and who holds them".to_string(), "Roles & Permissions" }
                PageActions {
                    Button {
                        onclick: move |_| {
                            field_errors.set(HashMap::new());
                            view.write().add(Role::blank(today()));
                        },
                        Icon::<LdPlus> { icon: LdPlus, width: 16, height: 16 }
                        "Add Role"
                    }
                }
            }

            SearchBar {
                div { class: "list-search",
                    Input {
                        value: query,
                        placeholder: "Search roles...",
                        on_input: move |e: FormEvent| view.write().set_query(e.value()),
                    }
                }
            }

            DataTable {
                DataTableHeader {
                    DataTableColumn { "Role" }
                    DataTableColumn { "Permissions" }
                    DataTableColumn { "User Types" }
                    DataTableColumn { "Users" }
                    DataTableColumn { "Status" }
                    DataTableColumn { "Updated" }
                    DataTableColumn { align_end: true, "Actions" }
                }
                DataTableBody {
                    if page.is_empty() {
                        DataTableEmpty { colspan: 7, "No roles found." }
                    }
                    for role in page.rows.iter().cloned() {
                        DataTableRow { key: "{role.id}",
                            DataTableCell {
                                span { class: "cell-primary", "{role.name}" }
                                span { class: "cell-secondary", "{role.description}" }
                            }
                            DataTableCell {
                                div { class: "chip-list",
                                    for label in permission_badges(&role) {
                                        Badge { variant: BadgeVariant::Secondary, "{label}" }
                                    }
                                }
                            }
                            DataTableCell { "{user_types_label(&role)}" }
                            DataTableCell { "{role.users_count()}" }
                            DataTableCell {
                                Badge {
                                    variant: active_variant(role.is_active),
                                    "{role.status_label()}"
                                }
                            }
                            DataTableCell {
                                span { "{role.updated_at}" }
                                span { class: "cell-secondary", "Created {role.created_at}" }
                            }
                            DataTableActions {
                                RowActions {
                                    on_edit: {
                                        let id = role.id.clone();
                                        move |_| edit(id.clone())
                                    },
                                    on_delete: {
                                        let id = role.id.clone();
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
                on_page_change: move |p: usize| view.write().set_page(p, &registry.read().roles),
            }
        }

        RoleFormSheet { view, field_errors }

        ConfirmDeleteDialog {
            open: pending_name.is_some(),
            kind: "role",
            name: pending_name.clone().unwrap_or_default(),
            on_confirm: move |_| {
                let result = view.write().confirm_delete(&mut registry.write().roles);
                match result {
                    Ok(role) => notify_success(format!("{} was removed", role.name)),
                    Err(e) => report(&e, None),
                }
            },
            on_cancel: move |_| view.write().cancel_delete(),
        }
    }
}
