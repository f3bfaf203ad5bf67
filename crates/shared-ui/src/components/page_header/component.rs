use dioxus::prelude::*;

/// Title row of a management screen with its primary actions.
#[component]
pub fn PageHeader(children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "page-header",
            {children}
        }
    }
}

#[component]
pub fn PageTitle(
    /// Muted line under the title.
    #[props(default)]
    description: Option<String>,
    children: Element,
) -> Element {
    rsx! {
        div { class: "page-title-block",
            h1 { class: "page-title", {children} }
            if let Some(text) = description {
                p { class: "page-description", "{text}" }
            }
        }
    }
}

#[component]
pub fn PageActions(children: Element) -> Element {
    rsx! {
        div { class: "page-actions", {children} }
    }
}
