use dioxus::prelude::*;
use shared_types::Status;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum BadgeVariant {
    #[default]
    Primary,
    Secondary,
    Success,
    Warning,
    Destructive,
    Outline,
}

impl BadgeVariant {
    fn class(&self) -> &'static str {
        match self {
            BadgeVariant::Primary => "primary",
            BadgeVariant::Secondary => "secondary",
            BadgeVariant::Success => "success",
            BadgeVariant::Warning => "warning",
            BadgeVariant::Destructive => "destructive",
            BadgeVariant::Outline => "outline",
        }
    }
}

impl From<Status> for BadgeVariant {
    fn from(status: Status) -> Self {
        match status {
            Status::Active => BadgeVariant::Success,
            Status::Inactive => BadgeVariant::Secondary,
        }
    }
}

/// Inline pill for statuses, grades and tags.
#[component]
pub fn Badge(
    #[props(default)] variant: BadgeVariant,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![
        Attribute::new("class", "badge", None, false),
        Attribute::new("data-style", variant.class(), None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        span {
            ..merged,
            {children}
        }
    }
}

/// Active/inactive badge with the status word capitalized.
#[component]
pub fn StatusBadge(status: Status) -> Element {
    let label = match status {
        Status::Active => "Active",
        Status::Inactive => "Inactive",
    };

    rsx! {
        Badge { variant: BadgeVariant::from(status), "{label}" }
    }
}
