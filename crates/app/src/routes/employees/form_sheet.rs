use std::collections::HashMap;

use chrono::NaiveDate;
use dioxus::prelude::*;
use registry::repo::employee::EMPLOYEE_DEPARTMENTS;
use registry::{EditorMode, ListView, UuidAuthority};
use shared_types::Employee;
use shared_ui::{FormRow, FormSection, FormSelect, Input};

use crate::routes::common::{
    field_error, notify_success, report, EditorSheet, FieldErrors, StatusSelect,
};
use crate::state::{patch, use_registry};

#[component]
pub fn EmployeeFormSheet(view: Signal<ListView<Employee>>, field_errors: FieldErrors) -> Element {
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
        ("Edit Employee".to_string(), "Save Changes".to_string())
    } else {
        ("Add Employee".to_string(), "Add Employee".to_string())
    };

    let save = move |_: ()| {
        let result = view
            .write()
            .commit(&mut registry.write().employees, &mut UuidAuthority);
        match result {
            Ok(_) => {
                field_errors.set(HashMap::new());
                notify_success(if editing { "Employee updated" } else { "Employee added" });
            }
            Err(e) => report(&e, Some(field_errors)),
        }
    };

    rsx! {
        EditorSheet {
            title,
            description: "Employment record",
            submit_label,
            open: true,
            dirty,
            on_submit: save,
            on_close: move |_| {
                field_errors.set(HashMap::new());
                view.write().editor_mut().close();
            },

            FormSection { title: "Employee",
                FormRow {
                    Input {
                        label: "Employee ID",
                        value: draft.employee_id.clone(),
                        required: true,
                        placeholder: "EMP001",
                        error: field_error(field_errors, "employee_id"),
                        on_input: move |e: FormEvent| patch(view, |d| d.employee_id = e.value()),
                    }
                    Input {
                        label: "Full Name",
                        value: draft.name.clone(),
                        required: true,
                        error: field_error(field_errors, "name"),
                        on_input: move |e: FormEvent| patch(view, |d| d.name = e.value()),
                    }
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
                        on_input: move |e: FormEvent| patch(view, |d| d.phone = e.value()),
                    }
                }
            }

            FormSection { title: "Position",
                FormRow {
                    FormSelect {
                        label: "Department",
                        value: draft.department.clone(),
                        required: true,
                        error: field_error(field_errors, "department"),
                        onchange: move |e: Event<FormData>| patch(view, |d| d.department = e.value()),
                        option { value: "", "Select department" }
                        for dept in EMPLOYEE_DEPARTMENTS.iter() {
                            option { value: *dept, "{dept}" }
                        }
                    }
                    Input {
                        label: "Position",
                        value: draft.position.clone(),
                        on_input: move |e: FormEvent| patch(view, |d| d.position = e.value()),
                    }
                }
                Input {
                    label: "Joining Date",
                    input_type: "date",
                    value: draft.joining_date.format("%Y-%m-%d").to_string(),
                    on_input: move |e: FormEvent| {
                        if let Ok(date) = NaiveDate::parse_from_str(&e.value(), "%Y-%m-%d") {
                            patch(view, |d| d.joining_date = date);
                        }
                    },
                }
            }

            StatusSelect {
                value: draft.status,
                on_change: move |status| patch(view, |d| d.status = status),
            }
        }
    }
}
