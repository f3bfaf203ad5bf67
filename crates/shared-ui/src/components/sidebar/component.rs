use dioxus::prelude::*;

/// Whether the navigation sidebar is expanded.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SidebarState {
    pub open: bool,
}

impl SidebarState {
    fn toggled(self) -> Self {
        Self { open: !self.open }
    }
}

fn use_sidebar() -> Signal<SidebarState> {
    use_context::<Signal<SidebarState>>()
}

fn classed(class: &'static str, attributes: Vec<Attribute>) -> Vec<Attribute> {
    dioxus_primitives::merge_attributes(vec![
        vec![Attribute::new("class", class, None, false)],
        attributes,
    ])
}

/// Owns the open/closed state shared by the sidebar, its trigger and rail.
#[component]
pub fn SidebarProvider(#[props(default = true)] default_open: bool, children: Element) -> Element {
    let state = use_signal(|| SidebarState { open: default_open });
    use_context_provider(|| state);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            class: "sidebar-provider",
            "data-sidebar-open": if state().open { "true" } else { "false" },
            {children}
        }
    }
}

/// Navigation column. On narrow viewports it overlays the page with a
/// backdrop that closes it.
#[component]
pub fn Sidebar(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let mut state = use_sidebar();
    let is_open = state().open;

    let base = vec![
        Attribute::new("class", "sidebar", None, false),
        Attribute::new("data-state", if is_open { "open" } else { "closed" }, None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        if is_open {
            div {
                class: "sidebar-backdrop",
                onclick: move |_| state.set(SidebarState { open: false }),
            }
        }
        aside {
            ..merged,
            {children}
        }
    }
}

#[component]
pub fn SidebarHeader(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let merged = classed("sidebar-header", attributes);
    rsx! {
        div { ..merged, {children} }
    }
}

#[component]
pub fn SidebarContent(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let merged = classed("sidebar-content", attributes);
    rsx! {
        nav { ..merged, {children} }
    }
}

#[component]
pub fn SidebarFooter(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let merged = classed("sidebar-footer", attributes);
    rsx! {
        div { ..merged, {children} }
    }
}

/// One navigation group, e.g. "Academic Management".
#[component]
pub fn SidebarGroup(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let merged = classed("sidebar-group", attributes);
    rsx! {
        div { ..merged, {children} }
    }
}

#[component]
pub fn SidebarGroupLabel(children: Element) -> Element {
    rsx! {
        div { class: "sidebar-group-label", {children} }
    }
}

#[component]
pub fn SidebarGroupContent(children: Element) -> Element {
    rsx! {
        div { class: "sidebar-group-content", {children} }
    }
}

#[component]
pub fn SidebarMenu(children: Element) -> Element {
    rsx! {
        ul { class: "sidebar-menu", {children} }
    }
}

#[component]
pub fn SidebarMenuItem(children: Element) -> Element {
    rsx! {
        li { class: "sidebar-menu-item", {children} }
    }
}

/// Menu entry. Choosing one collapses the sidebar so the overlay gets out of
/// the way on small screens.
#[component]
pub fn SidebarMenuButton(
    #[props(default = false)] active: bool,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let mut state = use_sidebar();

    let base = vec![
        Attribute::new("class", "sidebar-menu-button", None, false),
        Attribute::new("data-active", if active { "true" } else { "false" }, None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        button {
            r#type: "button",
            onclick: move |_| state.set(SidebarState { open: false }),
            ..merged,
            {children}
        }
    }
}

#[component]
pub fn SidebarTrigger(children: Element) -> Element {
    let mut state = use_sidebar();

    rsx! {
        button {
            class: "sidebar-trigger",
            r#type: "button",
            "aria-label": "Toggle sidebar",
            onclick: move |_| {
                let current = state();
                state.set(current.toggled());
            },
            {children}
        }
    }
}

#[component]
pub fn SidebarSeparator() -> Element {
    rsx! {
        hr { class: "sidebar-separator" }
    }
}

/// Page area beside the sidebar.
#[component]
pub fn SidebarInset(children: Element) -> Element {
    rsx! {
        main { class: "sidebar-inset", {children} }
    }
}

/// Thin clickable edge that toggles the sidebar.
#[component]
pub fn SidebarRail() -> Element {
    let mut state = use_sidebar();

    rsx! {
        button {
            class: "sidebar-rail",
            r#type: "button",
            "aria-label": "Toggle sidebar",
            tabindex: -1,
            onclick: move |_| {
                let current = state();
                state.set(current.toggled());
            },
        }
    }
}
