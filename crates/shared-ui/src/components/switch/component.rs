use dioxus::prelude::*;
use dioxus_primitives::switch as prim;

/// On/off toggle: role permissions, the role active flag and the theme mode.
#[component]
pub fn Switch(mut props: prim::SwitchProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "switch", None, false));

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        prim::Switch { ..props }
    }
}

#[component]
pub fn SwitchThumb(mut props: prim::SwitchThumbProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "switch-thumb", None, false));

    rsx! {
        prim::SwitchThumb { ..props }
    }
}

/// Label, optional hint and switch on one row.
#[component]
pub fn SwitchField(
    label: String,
    checked: bool,
    #[props(default)] hint: Option<String>,
    #[props(default = false)] disabled: bool,
    on_change: EventHandler<bool>,
) -> Element {
    rsx! {
        div { class: "switch-field",
            div { class: "switch-field-text",
                span { class: "switch-field-label", "{label}" }
                if let Some(hint) = hint {
                    span { class: "switch-field-hint", "{hint}" }
                }
            }
            Switch {
                checked: Some(checked),
                disabled,
                on_checked_change: move |val: bool| on_change.call(val),
                SwitchThumb {}
            }
        }
    }
}
