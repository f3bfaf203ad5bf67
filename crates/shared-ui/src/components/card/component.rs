use dioxus::prelude::*;

fn classed(class: &'static str, attributes: Vec<Attribute>) -> Vec<Attribute> {
    dioxus_primitives::merge_attributes(vec![
        vec![Attribute::new("class", class, None, false)],
        attributes,
    ])
}

/// Bordered surface used for the dashboard tiles, the parent cards and the
/// auth forms.
#[component]
pub fn Card(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let merged = classed("card", attributes);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            ..merged,
            {children}
        }
    }
}

#[component]
pub fn CardHeader(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let merged = classed("card-header", attributes);

    rsx! {
        div {
            ..merged,
            {children}
        }
    }
}

#[component]
pub fn CardTitle(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let merged = classed("card-title", attributes);

    rsx! {
        h3 {
            ..merged,
            {children}
        }
    }
}

#[component]
pub fn CardDescription(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let merged = classed("card-description", attributes);

    rsx! {
        p {
            ..merged,
            {children}
        }
    }
}

/// Top-right slot of a [`CardHeader`], for row actions.
#[component]
pub fn CardAction(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let merged = classed("card-action", attributes);

    rsx! {
        div {
            ..merged,
            {children}
        }
    }
}

#[component]
pub fn CardContent(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let merged = classed("card-content", attributes);

    rsx! {
        div {
            ..merged,
            {children}
        }
    }
}

#[component]
pub fn CardFooter(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let merged = classed("card-footer", attributes);

    rsx! {
        div {
            ..merged,
            {children}
        }
    }
}
