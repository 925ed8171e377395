use dioxus::prelude::*;

use super::button::{Button, ButtonVariant};
use crate::domain::models::Pagination;
use crate::shared::utils::page_window;

/// Previous / numbered / next page buttons
#[component]
pub fn PaginationControls(pagination: Pagination, loading: bool, on_page: EventHandler<u32>) -> Element {
    let current = pagination.current_page;
    let total_pages = pagination.total_pages;
    let total_results = pagination.total_results;
    let pages = page_window(current, total_pages);

    rsx! {
        nav { class: "c-pagination",
            p { class: "c-pagination__summary",
                "Showing page {current} of {total_pages} ({total_results} results)"
            }

            if total_pages > 1 {
                div { class: "c-pagination__controls",
                    Button {
                        variant: ButtonVariant::Secondary,
                        disabled: loading || !pagination.has_previous(),
                        onclick: move |_| on_page.call(current.saturating_sub(1)),
                        "‹ Previous"
                    }

                    for page in pages {
                        Button {
                            key: "{page}",
                            variant: page_variant(page, current),
                            disabled: loading,
                            title: "Page {page}",
                            onclick: move |_| on_page.call(page),
                            "{page}"
                        }
                    }

                    Button {
                        variant: ButtonVariant::Secondary,
                        disabled: loading || !pagination.has_next(),
                        onclick: move |_| on_page.call(current + 1),
                        "Next ›"
                    }
                }
            }
        }
    }
}

fn page_variant(page: u32, current: u32) -> ButtonVariant {
    if page == current {
        ButtonVariant::Primary
    } else {
        ButtonVariant::Ghost
    }
}
