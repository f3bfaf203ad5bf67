//! Pieces every management screen draws the same way.

use std::collections::HashMap;

use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdPencil, LdTrash2};
use dioxus_free_icons::Icon;
use shared_types::{AppError, Status, FILTER_ALL, STATUSES};
use shared_ui::components::{
    AlertDialogAction, AlertDialogActions, AlertDialogCancel, AlertDialogContent,
    AlertDialogDescription, AlertDialogRoot, AlertDialogTitle, Button, ButtonSize, ButtonVariant,
    Form, FormSelect, Separator, Sheet, SheetClose, SheetContent, SheetDescription, SheetFooter,
    SheetHeader, SheetSide, SheetTitle,
};
use shared_ui::{consume_toast, ToastOptions};

/// Per-field messages from the last rejected save.
pub type FieldErrors = Signal<HashMap<String, String>>;

pub fn field_error(errors: FieldErrors, field: &str) -> Option<String> {
    errors.read().get(field).cloned()
}

/// Log a failed operation and toast its message. Validation failures also
/// land in `field_errors` next to the offending inputs.
pub fn report(error: &AppError, field_errors: Option<FieldErrors>) {
    tracing::error!(kind = %error.kind, error = %error, "operation failed");
    if let Some(mut errors) = field_errors {
        errors.set(error.field_errors.clone());
    }
    consume_toast().error(error.message.clone(), ToastOptions::new());
}

pub fn notify_success(message: impl Into<String>) {
    consume_toast().success(message.into(), ToastOptions::new());
}

/// Create/edit panel with a discard prompt for unsaved changes.
#[component]
pub fn EditorSheet(
    title: String,
    description: String,
    submit_label: String,
    open: bool,
    dirty: bool,
    on_submit: EventHandler<()>,
    on_close: EventHandler<()>,
    children: Element,
) -> Element {
    let mut show_discard = use_signal(|| false);

    let mut try_close = move |_: ()| {
        if dirty {
            show_discard.set(true);
        } else {
            on_close.call(());
        }
    };

    rsx! {
        Sheet {
            open,
            on_close: try_close,
            side: SheetSide::Right,
            SheetContent {
                SheetHeader {
                    SheetTitle { "{title}" }
                    SheetDescription { "{description}" }
                    SheetClose { on_close: try_close }
                }

                Form {
                    onsubmit: move |_| on_submit.call(()),
                    div { class: "sheet-form", {children} }

                    Separator {}

                    SheetFooter {
                        div { class: "sheet-footer-actions",
                            Button {
                                variant: ButtonVariant::Outline,
                                onclick: move |_| try_close(()),
                                "Cancel"
                            }
                            Button {
                                button_type: "submit",
                                "{submit_label}"
                            }
                        }
                    }
                }
            }
        }

        AlertDialogRoot {
            open: show_discard(),
            on_open_change: move |open: bool| show_discard.set(open),
            AlertDialogContent {
                AlertDialogTitle { "Discard changes?" }
                AlertDialogDescription {
                    "You have unsaved changes. Close without saving?"
                }
                AlertDialogActions {
                    AlertDialogCancel { "Keep Editing" }
                    AlertDialogAction {
                        on_click: move |_| {
                            show_discard.set(false);
                            on_close.call(());
                        },
                        "Discard"
                    }
                }
            }
        }
    }
}

/// Confirmation prompt for a staged delete.
#[component]
pub fn ConfirmDeleteDialog(
    open: bool,
    kind: String,
    name: String,
    on_confirm: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    rsx! {
        AlertDialogRoot {
            open,
            on_open_change: move |open: bool| {
                if !open {
                    on_cancel.call(());
                }
            },
            AlertDialogContent {
                AlertDialogTitle { "Delete {kind}?" }
                AlertDialogDescription {
                    "\"{name}\" will be removed. This cannot be undone."
                }
                AlertDialogActions {
                    AlertDialogCancel { "Cancel" }
                    AlertDialogAction {
                        on_click: move |_| on_confirm.call(()),
                        "Delete"
                    }
                }
            }
        }
    }
}

/// Category filter select whose first option passes everything through.
#[component]
pub fn CategoryFilter(
    label: String,
    all_label: String,
    value: String,
    options: Vec<(String, String)>,
    on_change: EventHandler<String>,
) -> Element {
    let selected = if value.is_empty() {
        FILTER_ALL.to_string()
    } else {
        value
    };

    rsx! {
        FormSelect {
            label,
            value: selected,
            onchange: move |e: Event<FormData>| on_change.call(e.value()),
            option { value: FILTER_ALL, "{all_label}" }
            for (value, text) in options {
                option { value: "{value}", "{text}" }
            }
        }
    }
}

/// Edit and delete buttons for one row or card.
#[component]
pub fn RowActions(on_edit: EventHandler<()>, on_delete: EventHandler<()>) -> Element {
    rsx! {
        Button {
            variant: ButtonVariant::Ghost,
            size: ButtonSize::Icon,
            title: "Edit",
            onclick: move |_| on_edit.call(()),
            Icon::<LdPencil> { icon: LdPencil, width: 16, height: 16 }
        }
        Button {
            variant: ButtonVariant::Ghost,
            size: ButtonSize::Icon,
            title: "Delete",
            onclick: move |_| on_delete.call(()),
            Icon::<LdTrash2> { icon: LdTrash2, width: 16, height: 16 }
        }
    }
}

/// Active/inactive select for an editor form.
#[component]
pub fn StatusSelect(value: Status, on_change: EventHandler<Status>) -> Element {
    rsx! {
        FormSelect {
            label: "Status",
            value: value.as_str().to_string(),
            onchange: move |e: Event<FormData>| on_change.call(Status::from_str_or_default(&e.value())),
            for status in STATUSES.iter() {
                option { value: status.as_str(), "{status_label(*status)}" }
            }
        }
    }
}

fn status_label(status: Status) -> &'static str {
    match status {
        Status::Active => "Active",
        Status::Inactive => "Inactive",
    }
}
