use dioxus::prelude::*;
use dioxus_primitives::label as prim;

/// Standalone field label for controls that are not an [`Input`](crate::Input).
#[component]
pub fn Label(mut props: prim::LabelProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "field-label", None, false));

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        prim::Label { ..props }
    }
}
