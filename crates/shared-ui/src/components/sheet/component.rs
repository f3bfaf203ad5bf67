use dioxus::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum SheetSide {
    #[default]
    Right,
    Left,
}

impl SheetSide {
    fn class(&self) -> &'static str {
        match self {
            SheetSide::Right => "right",
            SheetSide::Left => "left",
        }
    }
}

fn classed(class: &'static str, attributes: Vec<Attribute>) -> Vec<Attribute> {
    dioxus_primitives::merge_attributes(vec![
        vec![Attribute::new("class", class, None, false)],
        attributes,
    ])
}

/// Slide-in panel hosting the create/edit forms. Clicking the backdrop asks
/// the owner to close; the owner decides whether that discards anything.
#[component]
pub fn Sheet(
    open: bool,
    on_close: EventHandler<()>,
    #[props(default)] side: SheetSide,
    children: Element,
) -> Element {
    if !open {
        return rsx! {};
    }

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            class: "sheet-overlay",
            onclick: move |_| on_close.call(()),
            div {
                class: "sheet-panel",
                role: "dialog",
                "aria-modal": "true",
                "data-side": side.class(),
                onclick: move |evt| evt.stop_propagation(),
                {children}
            }
        }
    }
}

#[component]
pub fn SheetContent(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let merged = classed("sheet-content", attributes);

    rsx! {
        div {
            ..merged,
            {children}
        }
    }
}

#[component]
pub fn SheetHeader(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let merged = classed("sheet-header", attributes);

    rsx! {
        div {
            ..merged,
            {children}
        }
    }
}

#[component]
pub fn SheetFooter(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let merged = classed("sheet-footer", attributes);

    rsx! {
        div {
            ..merged,
            {children}
        }
    }
}

#[component]
pub fn SheetTitle(children: Element) -> Element {
    rsx! {
        h2 { class: "sheet-title", {children} }
    }
}

#[component]
pub fn SheetDescription(children: Element) -> Element {
    rsx! {
        p { class: "sheet-description", {children} }
    }
}

/// The corner "x" button.
#[component]
pub fn SheetClose(on_close: EventHandler<()>) -> Element {
    rsx! {
        button {
            class: "sheet-close",
            r#type: "button",
            "aria-label": "Close",
            onclick: move |_| on_close.call(()),
            "\u{2715}"
        }
    }
}
