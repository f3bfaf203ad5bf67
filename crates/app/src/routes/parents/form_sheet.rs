use std::collections::HashMap;

use dioxus::prelude::*;
use registry::{EditorMode, ListView, UuidAuthority};
use shared_types::Parent;
use shared_ui::{CheckboxField, FormRow, FormSection, Input};

use crate::routes::common::{
    field_error, notify_success, report, EditorSheet, FieldErrors, StatusSelect,
};
use crate::state::{patch, use_registry};

#[component]
pub fn ParentFormSheet(view: Signal<ListView<Parent>>, field_errors: FieldErrors) -> Element {
    let mut registry = use_registry();

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
        ("Edit Parent".to_string(), "Save Changes".to_string())
    } else {
        ("Add Parent".to_string(), "Add Parent".to_string())
    };

    // (id, label, linked)
    let students: Vec<(String, String, bool)> = registry
        .read()
        .students
        .iter()
        .map(|s| (s.id.clone(), s.link_label(), draft.is_linked_to(&s.id)))
        .collect();

    let save = move |_: ()| {
        let result = view
            .write()
            .commit(&mut registry.write().parents, &mut UuidAuthority);
        match result {
            Ok(_) => {
                field_errors.set(HashMap::new());
                notify_success(if editing { "Parent updated" } else { "Parent added" });
            }
            Err(e) => report(&e, Some(field_errors)),
        }
    };

    rsx! {
        EditorSheet {
            title,
            description: "Contact details and linked students",
            submit_label,
            open: true,
            dirty,
            on_submit: save,
            on_close: move |_| {
                field_errors.set(HashMap::new());
                view.write().editor_mut().close();
            },

            FormSection { title: "Contact",
                Input {
                    label: "Full Name",
                    value: draft.name.clone(),
                    required: true,
                    error: field_error(field_errors, "name"),
                    on_input: move |e: FormEvent| patch(view, |d| d.name = e.value()),
                }
                FormRow {
                    Input {
                        label: "Email",
                        input_type: "email",
                        value: draft.email.clone(),
                        required: true,
                        error: field_error(field_errors, "email"),
                        on_input: move |e: FormEvent| patch(view, |d| d.email = e.value()),
                    }
                    Input {
                        label: "Phone",
                        input_type: "tel",
                        value: draft.phone.clone(),
                        required: true,
                        error: field_error(field_errors, "phone"),
                        on_input: move |e: FormEvent| patch(view, |d| d.phone = e.value()),
                    }
                }
                Input {
                    label: "Occupation",
                    value: draft.occupation.clone(),
                    on_input: move |e: FormEvent| patch(view, |d| d.occupation = e.value()),
                }
                Input {
                    label: "Address",
                    value: draft.address.clone(),
                    on_input: move |e: FormEvent| patch(view, |d| d.address = e.value()),
                }
            }

            FormSection { title: "Linked Students",
                div { class: "option-list",
                    if students.is_empty() {
                        span { class: "option-empty", "No students on record." }
                    }
                    for (id, label, linked) in students {
                        CheckboxField {
                            key: "{id}",
                            id: format!("parent-student-{id}"),
                            label,
                            checked: linked,
                            on_toggle: {
                                let id = id.clone();
                                move |_| patch(view, |d| d.toggle_student(&id))
                            },
                        }
                    }
                }
            }

            StatusSelect {
                value: draft.status,
                on_change: move |status| patch(view, |d| d.status = status),
            }
        }
    }
}
