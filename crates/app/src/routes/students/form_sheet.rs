use std::collections::HashMap;

use dioxus::prelude::*;
use registry::{EditorMode, ListView, UuidAuthority};
use shared_types::{Student, GRADES, SECTIONS};
use shared_ui::{FormRow, FormSection, FormSelect, Input};

use crate::routes::common::{
    field_error, notify_success, report, EditorSheet, FieldErrors, StatusSelect,
};
use crate::state::{patch, use_registry};

/// Create/edit panel for a student.
#[component]
pub fn StudentFormSheet(view: Signal<ListView<Student>>, field_errors: FieldErrors) -> Element {
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
        ("Edit Student".to_string(), "Save Changes".to_string())
    } else {
        ("Add Student".to_string(), "Add Student".to_string())
    };

    let save = move |_: ()| {
        let result = view
            .write()
            .commit(&mut registry.write().students, &mut UuidAuthority);
        match result {
            Ok(_) => {
                field_errors.set(HashMap::new());
                notify_success(if editing { "Student updated" } else { "Student added" });
            }
            Err(e) => report(&e, Some(field_errors)),
        }
    };

    rsx! {
        EditorSheet {
            title,
            description: "Student details and parent contact",
            submit_label,
            open: true,
            dirty,
            on_submit: save,
            on_close: move |_| {
                field_errors.set(HashMap::new());
                view.write().editor_mut().close();
            },

            FormSection { title: "Student",
                Input {
                    label: "Full Name",
                    value: draft.name.clone(),
                    required: true,
                    error: field_error(field_errors, "name"),
                    on_input: move |e: FormEvent| patch(view, |d| d.name = e.value()),
                }
                Input {
                    label: "Email",
                    input_type: "email",
                    value: draft.email.clone(),
                    required: true,
                    error: field_error(field_errors, "email"),
                    on_input: move |e: FormEvent| patch(view, |d| d.email = e.value()),
                }
                FormRow {
                    FormSelect {
                        label: "Grade",
                        value: draft.grade.clone(),
                        required: true,
                        error: field_error(field_errors, "grade"),
                        onchange: move |e: Event<FormData>| patch(view, |d| d.grade = e.value()),
                        option { value: "", "Select grade" }
                        for g in GRADES.iter() {
                            option { value: *g, "Grade {g}" }
                        }
                    }
                    FormSelect {
                        label: "Section",
                        value: draft.section.clone(),
                        required: true,
                        error: field_error(field_errors, "section"),
                        onchange: move |e: Event<FormData>| patch(view, |d| d.section = e.value()),
                        option { value: "", "Select section" }
                        for s in SECTIONS.iter() {
                            option { value: *s, "Section {s}" }
                        }
                    }
                }
                Input {
                    label: "Roll Number",
                    value: draft.roll_number.clone(),
                    required: true,
                    error: field_error(field_errors, "roll_number"),
                    on_input: move |e: FormEvent| patch(view, |d| d.roll_number = e.value()),
                }
            }

            FormSection { title: "Parent",
                Input {
                    label: "Parent Name",
                    value: draft.parent_name.clone(),
                    on_input: move |e: FormEvent| patch(view, |d| d.parent_name = e.value()),
                }
                Input {
                    label: "Parent Email",
                    input_type: "email",
                    value: draft.parent_email.clone(),
                    on_input: move |e: FormEvent| patch(view, |d| d.parent_email = e.value()),
                }
            }

            StatusSelect {
                value: draft.status,
                on_change: move |status| patch(view, |d| d.status = status),
            }
        }
    }
}
