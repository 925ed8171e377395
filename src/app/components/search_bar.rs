//! Search bar component
//!
//! Free-text input, image picker and search button.

use dioxus::prelude::*;

use crate::domain::models::FILE_INPUT_ACCEPT;
use crate::shared::hooks::SearchState;

/// DOM id of the hidden file input
pub const IMAGE_INPUT_ID: &str = "search-image-input";

#[component]
pub fn SearchBar(search: SearchState) -> Element {
    let mut query_text = search.query_text;
    let session = search.session.read();
    let is_loading = session.is_loading();
    let is_processing = session.uploads().is_processing();

    let run_search = move || search.search();

    rsx! {
        div { class: "c-search-bar",
            div { class: "c-search-bar__form",
                input {
                    r#type: "text",
                    class: "c-search-bar__input",
                    placeholder: "Describe a scene, e.g. \"sunset on the beach\"",
                    value: "{query_text}",
                    oninput: move |evt| query_text.set(evt.value()),
                    onkeydown: move |evt| {
                        if evt.key() == Key::Enter {
                            run_search();
                        }
                    },
                }

                label {
                    class: "c-search-bar__upload",
                    class: if is_processing { "c-search-bar__upload--busy" } else { "" },
                    title: "Search with JPEG or PNG images",
                    r#for: IMAGE_INPUT_ID,
                    input {
                        r#type: "file",
                        id: IMAGE_INPUT_ID,
                        class: "c-search-bar__file-input",
                        accept: FILE_INPUT_ACCEPT,
                        multiple: true,
                        disabled: is_processing,
                        onchange: move |_| search.upload_from_input(IMAGE_INPUT_ID),
                    }
                    if is_processing { "Processing..." } else { "🖼️ Add images" }
                }

                button {
                    class: "c-button c-button--primary",
                    r#type: "button",
                    onclick: move |_| run_search(),
                    disabled: is_loading,
                    if is_loading {
                        "Searching..."
                    } else {
                        "Search"
                    }
                }
            }
        }
    }
}
