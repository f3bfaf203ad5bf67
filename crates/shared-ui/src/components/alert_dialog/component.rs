use dioxus::prelude::*;
use dioxus_primitives::alert_dialog as prim;

fn with_class(attributes: &mut Vec<Attribute>, class: &'static str) {
    attributes.push(Attribute::new("class", class, None, false));
}

/// Modal confirmation overlay. Used for destructive actions and the
/// password-reset prompt.
#[component]
pub fn AlertDialogRoot(mut props: prim::AlertDialogRootProps) -> Element {
    with_class(&mut props.attributes, "alert-dialog-overlay");

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        prim::AlertDialogRoot { ..props }
    }
}

#[component]
pub fn AlertDialogContent(mut props: prim::AlertDialogContentProps) -> Element {
    if props.class.is_none() {
        props.class = Some("alert-dialog-content".to_string());
    }

    rsx! {
        prim::AlertDialogContent { ..props }
    }
}

#[component]
pub fn AlertDialogTitle(mut props: prim::AlertDialogTitleProps) -> Element {
    with_class(&mut props.attributes, "alert-dialog-title");

    rsx! {
        prim::AlertDialogTitle { ..props }
    }
}

#[component]
pub fn AlertDialogDescription(mut props: prim::AlertDialogDescriptionProps) -> Element {
    with_class(&mut props.attributes, "alert-dialog-description");

    rsx! {
        prim::AlertDialogDescription { ..props }
    }
}

#[component]
pub fn AlertDialogActions(mut props: prim::AlertDialogActionsProps) -> Element {
    with_class(&mut props.attributes, "alert-dialog-actions");

    rsx! {
        prim::AlertDialogActions { ..props }
    }
}

/// The confirming button. Styled destructive.
#[component]
pub fn AlertDialogAction(mut props: prim::AlertDialogActionProps) -> Element {
    with_class(&mut props.attributes, "alert-dialog-action");

    rsx! {
        prim::AlertDialogAction { ..props }
    }
}

#[component]
pub fn AlertDialogCancel(mut props: prim::AlertDialogCancelProps) -> Element {
    with_class(&mut props.attributes, "alert-dialog-cancel");

    rsx! {
        prim::AlertDialogCancel { ..props }
    }
}
