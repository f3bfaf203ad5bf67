use dioxus::prelude::*;
use dioxus_primitives::navbar as prim;

/// Top bar inside the sidebar inset: trigger, page title, account menu.
#[component]
pub fn Navbar(mut props: prim::NavbarProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "navbar", None, false));

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        prim::Navbar { ..props }
    }
}
