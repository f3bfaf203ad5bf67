use dioxus::prelude::*;
use shared_types::PaginationMeta;

use crate::components::button::{Button, ButtonSize, ButtonVariant};

/// `"Page 2 of 3"`. An empty collection still reads as one page.
pub fn page_label(meta: &PaginationMeta) -> String {
    format!("Page {} of {}", meta.page + 1, meta.total_pages.max(1))
}

/// Page-window controls under a list: rows-per-page, the visible range and
/// previous/next.
///
/// Pages are 0-indexed; the handlers receive the requested page or size and
/// the owning list view clamps it.
#[component]
pub fn Pagination(
    meta: PaginationMeta,
    on_page_change: EventHandler<usize>,
    /// Rows-per-page choices. No selector is drawn when empty.
    #[props(default)]
    page_size_options: Vec<usize>,
    #[props(default)] on_page_size_change: Option<EventHandler<usize>>,
) -> Element {
    let range = meta.range_label();
    let page_text = page_label(&meta);
    let page = meta.page;
    let current_size = meta.page_size.to_string();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "pagination",
            if !page_size_options.is_empty() {
                label { class: "pagination-size",
                    span { "Rows per page" }
                    select {
                        class: "pagination-size-select",
                        value: "{current_size}",
                        onchange: move |evt: Event<FormData>| {
                            if let (Some(handler), Ok(size)) =
                                (&on_page_size_change, evt.value().parse::<usize>())
                            {
                                handler.call(size);
                            }
                        },
                        for size in page_size_options.iter() {
                            option { value: "{size}", "{size}" }
                        }
                    }
                }
            }
            span { class: "pagination-range", "{range}" }
            div { class: "pagination-nav",
                Button {
                    variant: ButtonVariant::Outline,
                    size: ButtonSize::Small,
                    disabled: !meta.has_prev,
                    onclick: move |_| on_page_change.call(page.saturating_sub(1)),
                    "Previous"
                }
                span { class: "pagination-info", "{page_text}" }
                Button {
                    variant: ButtonVariant::Outline,
                    size: ButtonSize::Small,
                    disabled: !meta.has_next,
                    onclick: move |_| on_page_change.call(page + 1),
                    "Next"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn page_label_is_one_based() {
        assert_eq!(page_label(&PaginationMeta::new(0, 5, 12)), "Page 1 of 3");
        assert_eq!(page_label(&PaginationMeta::new(2, 5, 12)), "Page 3 of 3");
    }

    #[test]
    fn empty_collection_reads_as_one_page() {
        let meta = PaginationMeta::new(0, 10, 0);
        assert_eq!(page_label(&meta), "Page 1 of 1");
        assert_eq!(meta.range_label(), "0 of 0");
    }
}
