//! Page navigation with a rows-per-page selector.

use crate::state::AppState;
use dioxus::prelude::*;
use wgi_data::explorer::{Pagination, ROWS_PER_PAGE_OPTIONS};

/// Props for PaginationBar
#[derive(Props, Clone, PartialEq)]
pub struct PaginationBarProps {
    pub pagination: Pagination,
    /// Number of rows after filtering
    pub total: usize,
    pub on_change: EventHandler<Pagination>,
}

#[component]
pub fn PaginationBar(props: PaginationBarProps) -> Element {
    let theme = use_context::<AppState>().theme();
    let pagination = props.pagination;
    let total = props.total;
    let on_change = props.on_change;
    let label = pagination.label(total);

    let button_style = format!(
        "padding: 4px 10px; border-radius: 6px; border: 1px solid {}; background: {}; color: {}; cursor: pointer;",
        theme.divider, theme.paper, theme.text
    );

    rsx! {
        div {
            style: "display: flex; justify-content: flex-end; align-items: center; gap: 12px; padding: 8px 0; font-size: 13px;",
            span { "Baris per halaman:" }
            select {
                onchange: move |evt: Event<FormData>| {
                    if let Ok(rows) = evt.value().parse::<usize>() {
                        on_change.call(pagination.with_rows_per_page(rows));
                    }
                },
                for rows in ROWS_PER_PAGE_OPTIONS {
                    option {
                        value: "{rows}",
                        selected: rows == pagination.rows_per_page,
                        "{rows}"
                    }
                }
            }
            span { "{label}" }
            button {
                style: "{button_style}",
                disabled: !pagination.has_previous(),
                onclick: move |_| {
                    on_change.call(Pagination { page: pagination.page.saturating_sub(1), ..pagination })
                },
                "‹"
            }
            button {
                style: "{button_style}",
                disabled: !pagination.has_next(total),
                onclick: move |_| on_change.call(Pagination { page: pagination.page + 1, ..pagination }),
                "›"
            }
        }
    }
}
