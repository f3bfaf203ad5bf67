use std::collections::HashMap;

use chrono::NaiveDate;
use dioxus::prelude::*;
use registry::{EditorMode, ListView, UuidAuthority};
use shared_types::{Teacher, GRADES, SUBJECTS};
use shared_ui::{CheckboxField, FieldError, FormRow, FormSection, Input};

use crate::routes::common::{
    field_error, notify_success, report, EditorSheet, FieldErrors, StatusSelect,
};
use crate::state::{patch, use_registry};

/// Create/edit panel for a teacher: contact details, grade and subject
/// assignments, and the students the teacher is linked to.
#[component]
pub fn TeacherFormSheet(view: Signal<ListView<Teacher>>, field_errors: FieldErrors) -> Element {
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
        ("Edit Teacher".to_string(), "Save Changes".to_string())
    } else {
        ("Add Teacher".to_string(), "Add Teacher".to_string())
    };

    let students: Vec<(String, String, bool)> = registry
        .read()
        .students
        .iter()
        .map(|s| {
            let linked = draft.linked_student_ids.contains(&s.id);
            (s.id.clone(), s.link_label(), linked)
        })
        .collect();

    let save = move |_: ()| {
        let result = view
            .write()
            .commit(&mut registry.write().teachers, &mut UuidAuthority);
        match result {
            Ok(_) => {
                field_errors.set(HashMap::new());
                notify_success(if editing { "Teacher updated" } else { "Teacher added" });
            }
            Err(e) => report(&e, Some(field_errors)),
        }
    };

    rsx! {
        EditorSheet {
            title,
            description: "Profile, assignments and linked students",
            submit_label,
            open: true,
            dirty,
            on_submit: save,
            on_close: move |_| {
                field_errors.set(HashMap::new());
                view.write().editor_mut().close();
            },

            FormSection { title: "Profile",
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
                        on_input: move |e: FormEvent| patch(view, |d| d.phone = e.value()),
                    }
                }
                Input {
                    label: "Qualification",
                    value: draft.qualification.clone(),
                    required: true,
                    error: field_error(field_errors, "qualification"),
                    on_input: move |e: FormEvent| patch(view, |d| d.qualification = e.value()),
                }
                FormRow {
                    Input {
                        label: "Experience (years)",
                        input_type: "number",
                        value: draft.experience.to_string(),
                        on_input: move |e: FormEvent| {
                            // Non-numeric input leaves the previous value.
                            if let Ok(years) = e.value().parse::<u32>() {
                                patch(view, |d| d.experience = years);
                            }
                        },
                    }
                    Input {
                        label: "Joining Date",
                        input_type: "date",
                        value: draft.joining_date.format("%Y-%m-%d").to_string(),
                        on_input: move |e: FormEvent| {
                            match NaiveDate::parse_from_str(&e.value(), "%Y-%m-%d") {
                                Ok(date) => patch(view, |d| d.joining_date = date),
                                Err(err) => tracing::debug!(error = %err, "ignoring partial date"),
                            }
                        },
                    }
                }
            }

            FormSection { title: "Assigned Grades",
                div { class: "option-grid",
                    for g in GRADES.iter().copied() {
                        CheckboxField {
                            key: "{g}",
                            id: format!("teacher-grade-{g}"),
                            label: format!("Grade {g}"),
                            checked: draft.teaches_grade(g),
                            on_toggle: move |_| patch(view, |d| d.toggle_grade(g)),
                        }
                    }
                }
                FieldError { message: field_error(field_errors, "assigned_grades") }
            }

            FormSection { title: "Subjects",
                div { class: "option-grid",
                    for subject in SUBJECTS.iter().copied() {
                        CheckboxField {
                            key: "{subject}",
                            id: format!("teacher-subject-{subject}"),
                            label: subject.to_string(),
                            checked: draft.subjects.iter().any(|s| s == subject),
                            on_toggle: move |_| patch(view, |d| d.toggle_subject(subject)),
                        }
                    }
                }
                FieldError { message: field_error(field_errors, "subjects") }
            }

            FormSection { title: "Linked Students",
                div { class: "option-list",
                    if students.is_empty() {
                        span { class: "option-empty", "No students on record." }
                    }
                    for (id, label, linked) in students {
                        CheckboxField {
                            key: "{id}",
                            id: format!("teacher-student-{id}"),
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
