use dioxus::prelude::*;

/// Horizontally scrollable table shell.
#[component]
pub fn DataTable(children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "data-table",
            table {
                {children}
            }
        }
    }
}

/// Wraps `th` cells in `thead > tr`.
#[component]
pub fn DataTableHeader(children: Element) -> Element {
    rsx! {
        thead {
            tr { {children} }
        }
    }
}

#[component]
pub fn DataTableBody(children: Element) -> Element {
    rsx! {
        tbody { {children} }
    }
}

#[component]
pub fn DataTableColumn(
    /// Right-aligns the column, for the row-action column.
    #[props(default = false)]
    align_end: bool,
    children: Element,
) -> Element {
    rsx! {
        th { class: if align_end { "align-end" } else { "" }, {children} }
    }
}

#[component]
pub fn DataTableRow(
    #[props(default)] onclick: Option<EventHandler<MouseEvent>>,
    children: Element,
) -> Element {
    let has_click = onclick.is_some();
    rsx! {
        tr {
            class: if has_click { "data-table-row clickable" } else { "data-table-row" },
            onclick: move |evt| {
                if let Some(handler) = &onclick {
                    handler.call(evt);
                }
            },
            {children}
        }
    }
}

#[component]
pub fn DataTableCell(children: Element) -> Element {
    rsx! {
        td { {children} }
    }
}

/// Trailing cell holding the edit/delete/reset buttons of a row.
#[component]
pub fn DataTableActions(children: Element) -> Element {
    rsx! {
        td { class: "data-table-actions",
            div { class: "data-table-actions-inner", {children} }
        }
    }
}

/// Single full-width row shown when the filtered collection is empty.
#[component]
pub fn DataTableEmpty(colspan: u32, children: Element) -> Element {
    rsx! {
        tr { class: "data-table-empty",
            td { colspan: "{colspan}", {children} }
        }
    }
}
