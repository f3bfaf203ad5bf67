use dioxus::prelude::*;
use dioxus_primitives::dropdown_menu as prim;

/// Account menu anchored to the navbar avatar.
#[component]
pub fn DropdownMenu(mut props: prim::DropdownMenuProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "dropdown-menu", None, false));

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        prim::DropdownMenu { ..props }
    }
}

#[component]
pub fn DropdownMenuTrigger(mut props: prim::DropdownMenuTriggerProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "dropdown-menu-trigger", None, false));

    rsx! {
        prim::DropdownMenuTrigger { ..props }
    }
}

#[component]
pub fn DropdownMenuContent(mut props: prim::DropdownMenuContentProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "dropdown-menu-content", None, false));

    rsx! {
        prim::DropdownMenuContent { ..props }
    }
}

#[component]
pub fn DropdownMenuItem<T: Clone + PartialEq + 'static>(
    mut props: prim::DropdownMenuItemProps<T>,
) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "dropdown-menu-item", None, false));

    rsx! {
        prim::DropdownMenuItem { ..props }
    }
}

/// Non-interactive heading row, e.g. the signed-in user's name and email.
#[component]
pub fn DropdownMenuLabel(children: Element) -> Element {
    rsx! {
        div { class: "dropdown-menu-label", {children} }
    }
}

#[component]
pub fn DropdownMenuSeparator() -> Element {
    rsx! {
        div { class: "dropdown-menu-separator", role: "separator" }
    }
}
