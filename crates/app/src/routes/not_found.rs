use dioxus::prelude::*;

use crate::routes::Route;

/// Unknown paths go back to the landing page.
#[component]
pub fn NotFound(route: Vec<String>) -> Element {
    tracing::debug!(path = %format!("/{}", route.join("/")), "unknown route; redirecting home");
    navigator().replace(Route::Home {});
    rsx! {}
}
