use dioxus::prelude::*;

/// Filter row above a list: the search input, category selects and a
/// clear button, wrapped in a flex row.
#[component]
pub fn SearchBar(children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "search-bar", role: "search",
            {children}
        }
    }
}
