use dioxus::prelude::*;
use dioxus_primitives::checkbox as prim;

pub use prim::CheckboxState;

/// Checkbox used by the multi-select lists (grades, subjects, linked
/// students, user types, assigned users).
#[component]
pub fn Checkbox(mut props: prim::CheckboxProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "checkbox", None, false));

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        prim::Checkbox { ..props }
    }
}

/// Check mark shown while the parent [`Checkbox`] is checked.
#[component]
pub fn CheckboxIndicator(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let mut attrs = attributes;
    attrs.push(Attribute::new("class", "checkbox-indicator", None, false));

    rsx! {
        prim::CheckboxIndicator {
            attributes: attrs,
            svg {
                class: "checkbox-icon",
                xmlns: "http://www.w3.org/2000/svg",
                width: "12",
                height: "12",
                view_box: "0 0 24 24",
                fill: "none",
                stroke: "currentColor",
                stroke_width: "3",
                stroke_linecap: "round",
                stroke_linejoin: "round",
                path { d: "M20 6L9 17l-5-5" }
            }
        }
    }
}

/// A checkbox with its label, toggling one value in a multi-select.
#[component]
pub fn CheckboxField(
    id: String,
    label: String,
    checked: bool,
    #[props(default)] description: Option<String>,
    on_toggle: EventHandler<()>,
) -> Element {
    let state = if checked {
        CheckboxState::Checked
    } else {
        CheckboxState::Unchecked
    };

    rsx! {
        div { class: "checkbox-field",
            Checkbox {
                id: "{id}",
                checked: Some(state),
                on_checked_change: move |_: CheckboxState| on_toggle.call(()),
                CheckboxIndicator {}
            }
            label { class: "checkbox-field-label", r#for: "{id}",
                span { "{label}" }
                if let Some(desc) = description {
                    span { class: "checkbox-field-description", "{desc}" }
                }
            }
        }
    }
}
