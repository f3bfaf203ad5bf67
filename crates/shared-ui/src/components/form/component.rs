use dioxus::prelude::*;

/// Form wrapper that suppresses the browser submit and hands the event on.
#[component]
pub fn Form(
    #[props(default)] onsubmit: EventHandler<FormEvent>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "form", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        form {
            novalidate: true,
            onsubmit: move |evt| {
                evt.prevent_default();
                onsubmit.call(evt);
            },
            ..merged,
            {children}
        }
    }
}

/// Two-column row of fields that collapses to one column on narrow screens.
#[component]
pub fn FormRow(children: Element) -> Element {
    rsx! {
        div { class: "form-row", {children} }
    }
}

/// Titled group of fields, e.g. one permission category.
#[component]
pub fn FormSection(title: String, children: Element) -> Element {
    rsx! {
        fieldset { class: "form-section",
            legend { class: "form-section-title", "{title}" }
            {children}
        }
    }
}

/// Per-field validation message.
#[component]
pub fn FieldError(message: Option<String>) -> Element {
    match message {
        Some(msg) => rsx! {
            p { class: "field-error", role: "alert", "{msg}" }
        },
        None => rsx! {},
    }
}
