use dioxus::prelude::*;

/// Native `<select>` styled for the filter bars and form dialogs.
///
/// Children are `option { value: "...", "Label" }` elements. Category
/// filters put an `"all"` option first.
#[component]
pub fn FormSelect(
    #[props(default)] value: String,
    #[props(default)] onchange: Option<EventHandler<Event<FormData>>>,
    #[props(default)] label: String,
    #[props(default = false)] required: bool,
    #[props(default)] error: Option<String>,
    #[props(default = false)] disabled: bool,
    children: Element,
) -> Element {
    let invalid = error.is_some();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "form-select-wrapper",
            if !label.is_empty() {
                label { class: "form-select-label",
                    "{label}"
                    if required {
                        span { class: "required-mark", " *" }
                    }
                }
            }
            select {
                class: "form-select",
                value: value,
                disabled: disabled,
                "aria-invalid": if invalid { "true" } else { "false" },
                onchange: move |evt| {
                    if let Some(handler) = &onchange {
                        handler.call(evt);
                    }
                },
                {children}
            }
            if let Some(msg) = error {
                p { class: "form-select-error", "{msg}" }
            }
        }
    }
}
