use std::collections::HashMap;

use dioxus::prelude::*;
use registry::repo::role::{assignable_of, assignable_users};
use registry::{EditorMode, ListView, UuidAuthority};
use shared_types::{AssignableUser, Role, PERMISSION_ALL, PERMISSION_GROUPS, ROLE_USER_TYPES};
use shared_ui::{CheckboxField, FormSection, Input, SwitchField};

use crate::routes::common::{field_error, notify_success, report, EditorSheet, FieldErrors};
use crate::state::{patch, use_registry};

fn assignee_description(user: &AssignableUser) -> String {
    match &user.detail {
        Some(detail) => format!("{} · {} · {}", user.code, user.email, detail),
        None => format!("{} · {}", user.code, user.email),
    }
}

/// Create/edit panel for a role: details, the grouped permission switches,
/// and who the role is assigned to.
#[component]
pub fn RoleFormSheet(view: Signal<ListView<Role>>, field_errors: FieldErrors) -> Element {
    let mut registry = use_registry();
    let directory = use_hook(assignable_users);

    let (mode, dirty, draft) = {
        let state = view.read();
        let editor = state.editor();
        (editor.mode(), editor.is_dirty(), editor.draft().cloned())
    };
    let Some(draft) = draft else {
        return rsx! {};
    };
    let editing = mode == Some(EditorMode::Edit);
    let (title, submit_label) = if editing {
        ("Edit Role".to_string(), "Save Changes".to_string())
    } else {
        ("Add Role".to_string(), "Create Role".to_string())
    };

    let grants_all = draft.grants_explicitly(PERMISSION_ALL);
    let assignees: Vec<(AssignableUser, bool)> = assignable_of(&directory, &draft.user_types)
        .into_iter()
        .map(|u| (u.clone(), draft.assigned_users.contains(&u.code)))
        .collect();

    let save = move |_: ()| {
        let result = view
            .write()
            .commit(&mut registry.write().roles, &mut UuidAuthority);
        match result {
            Ok(_) => {
                field_errors.set(HashMap::new());
                notify_success(if editing { "Role updated" } else { "Role created" });
            }
            Err(e) => report(&e, Some(field_errors)),
        }
    };

    rsx! {
        EditorSheet {
            title,
            description: "Name the role, choose its permissions and assign it",
            submit_label,
            open: true,
            dirty,
            on_submit: save,
            on_close: move |_| {
                field_errors.set(HashMap::new());
                view.write().editor_mut().close();
            },

            FormSection { title: "Details",
                Input {
                    label: "Role Name",
                    value: draft.name.clone(),
                    required: true,
                    error: field_error(field_errors, "name"),
                    on_input: move |e: FormEvent| patch(view, |d| d.name = e.value()),
                }
                Input {
                    label: "Description",
                    value: draft.description.clone(),
                    on_input: move |e: FormEvent| patch(view, |d| d.description = e.value()),
                }
                SwitchField {
                    label: "Active",
                    checked: draft.is_active,
                    hint: "Inactive roles stay assigned but grant nothing".to_string(),
                    on_change: move |active: bool| patch(view, |d| d.is_active = active),
                }
            }

            FormSection { title: "Permissions",
                SwitchField {
                    label: "All permissions",
                    checked: grants_all,
                    on_change: move |_: bool| patch(view, |d| d.toggle_permission(PERMISSION_ALL)),
                }
                for group in PERMISSION_GROUPS.iter() {
                    div { key: "{group.name}", class: "permission-group",
                        h4 { class: "permission-group-title", "{group.name}" }
                        for permission in group.permissions.iter().copied() {
                            SwitchField {
                                key: "{permission}",
                                label: permission.to_string(),
                                checked: draft.has_permission(permission),
                                disabled: grants_all,
                                on_change: move |_: bool| patch(view, |d| d.toggle_permission(permission)),
                            }
                        }
                    }
                }
            }

            FormSection { title: "User Types",
                div { class: "option-grid",
                    for user_type in ROLE_USER_TYPES.iter().copied() {
                        CheckboxField {
                            key: "{user_type.as_str()}",
                            id: format!("role-type-{}", user_type.as_str()),
                            label: user_type.display_name().to_string(),
                            checked: draft.user_types.contains(&user_type),
                            on_toggle: move |_| patch(view, |d| d.toggle_user_type(user_type)),
                        }
                    }
                }
            }

            FormSection { title: "Assigned Users",
                div { class: "option-list",
                    if assignees.is_empty() {
                        span { class: "option-empty", "Select a user type to see who can hold this role." }
                    }
                    for (user, assigned) in assignees {
                        CheckboxField {
                            key: "{user.code}",
                            id: format!("role-user-{}", user.code),
                            label: user.name.clone(),
                            description: assignee_description(&user),
                            checked: assigned,
                            on_toggle: {
                                let code = user.code.clone();
                                move |_| patch(view, |d| d.toggle_assigned_user(&code))
                            },
                        }
                    }
                }
            }
        }
    }
}
