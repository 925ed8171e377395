use dioxus::prelude::*;

use crate::app::components::{
    EmptyState, ErrorMessage, ImagePreviewGrid, LoadingText, NoticeMessage, PaginationControls, ResultCard, SearchBar,
};
use crate::shared::hooks::use_search;

#[component]
pub fn SearchPage() -> Element {
    let search = use_search();

    let session = search.session.read();
    let upload_error = session.uploads().error().map(ToString::to_string);
    let upload_notice = session.uploads().notice().map(ToString::to_string);
    let search_error = session.error().map(ToString::to_string);
    let search_notice = session.notice().map(ToString::to_string);
    let is_loading = session.is_loading();

    rsx! {
        div { class: "search-page",
            SearchBar { search }
            ImagePreviewGrid { search }

            if let Some(message) = upload_error {
                ErrorMessage { message }
            }
            if let Some(message) = upload_notice {
                NoticeMessage { message }
            }
            if let Some(message) = search_error {
                ErrorMessage { message }
            }
            if let Some(message) = search_notice {
                NoticeMessage { message }
            }

            if is_loading {
                LoadingText { message: "Searching videos..." }
            }

            if !session.results().is_empty() {
                div { class: "c-results",
                    for result in session.results().iter() {
                        ResultCard {
                            key: "{result.id}",
                            result: result.clone(),
                            ui: session.result_ui().state(&result.id),
                            phase: session.result_ui().phase(&result.id),
                            search,
                        }
                    }
                }

                PaginationControls {
                    pagination: session.pagination().clone(),
                    loading: is_loading,
                    on_page: move |page| search.go_to_page(page),
                }
            } else if !session.has_searched() && !is_loading {
                EmptyState {
                    icon: "🔎",
                    title: "Search your video library",
                    description: "Type what you are looking for, attach reference images, or both.",
                }
            }
        }
    }
}
