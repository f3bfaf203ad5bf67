use dioxus::prelude::*;
use dioxus_primitives::avatar as prim;

/// Circular user avatar. The navbar only ever shows the initials fallback.
#[component]
pub fn Avatar(mut props: prim::AvatarProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "avatar", None, false));

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        prim::Avatar { ..props }
    }
}

#[component]
pub fn AvatarFallback(mut props: prim::AvatarFallbackProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "avatar-fallback", None, false));

    rsx! {
        prim::AvatarFallback { ..props }
    }
}
