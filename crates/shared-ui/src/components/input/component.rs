use dioxus::prelude::*;

/// Labelled text input with an optional validation message.
#[component]
pub fn Input(
    #[props(default)] value: String,
    #[props(default)] on_input: EventHandler<FormEvent>,
    #[props(default)] placeholder: String,
    #[props(default)] label: String,
    #[props(default = "text".to_string())] input_type: String,
    #[props(default = false)] required: bool,
    #[props(default)] error: Option<String>,
    #[props(default = false)] disabled: bool,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let base = vec![Attribute::new("class", "input", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);
    let invalid = error.is_some();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "input-wrapper",
            if !label.is_empty() {
                label { class: "input-label",
                    "{label}"
                    if required {
                        span { class: "required-mark", " *" }
                    }
                }
            }
            input {
                r#type: "{input_type}",
                value: value,
                placeholder: placeholder,
                disabled: disabled,
                "aria-invalid": if invalid { "true" } else { "false" },
                oninput: move |evt| on_input.call(evt),
                ..merged,
            }
            if let Some(msg) = error {
                p { class: "input-error", "{msg}" }
            }
        }
    }
}
