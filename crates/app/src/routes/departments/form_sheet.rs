use std::collections::HashMap;

use dioxus::prelude::*;
use registry::{EditorMode, ListView, UuidAuthority};
use shared_types::Department;
use shared_ui::{FormRow, Input};

use crate::routes::common::{
    field_error, notify_success, report, EditorSheet, FieldErrors, StatusSelect,
};
use crate::state::{patch, use_registry};

#[component]
pub fn DepartmentFormSheet(
    view: Signal<ListView<Department>>,
    field_errors: FieldErrors,
) -> Element {
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
        ("Edit Department".to_string(), "Save Changes".to_string())
    } else {
        ("Add Department".to_string(), "Add Department".to_string())
    };

    let save = move |_: ()| {
        let result = view
            .write()
            .commit(&mut registry.write().departments, &mut UuidAuthority);
        match result {
            Ok(_) => {
                field_errors.set(HashMap::new());
                notify_success(if editing { "Department updated" } else { "Department added" });
            }
            Err(e) => report(&e, Some(field_errors)),
        }
    };

    rsx! {
        EditorSheet {
            title,
            description: "Department name, code and head",
            submit_label,
            open: true,
            dirty,
            on_submit: save,
            on_close: move |_| {
                field_errors.set(HashMap::new());
                view.write().editor_mut().close();
            },

            FormRow {
                Input {
                    label: "Name",
                    value: draft.name.clone(),
                    required: true,
                    error: field_error(field_errors, "name"),
                    on_input: move |e: FormEvent| patch(view, |d| d.name = e.value()),
                }
                Input {
                    label: "Code",
                    value: draft.code.clone(),
                    required: true,
                    placeholder: "ENG",
                    error: field_error(field_errors, "code"),
                    on_input: move |e: FormEvent| patch(view, |d| d.code = e.value().to_uppercase()),
                }
            }
            Input {
                label: "Department Head",
                value: draft.head.clone(),
                on_input: move |e: FormEvent| patch(view, |d| d.head = e.value()),
            }
            Input {
                label: "Description",
                value: draft.description.clone(),
                on_input: move |e: FormEvent| patch(view, |d| d.description = e.value()),
            }

            StatusSelect {
                value: draft.status,
                on_change: move |status| patch(view, |d| d.status = status),
            }
        }
    }
}
