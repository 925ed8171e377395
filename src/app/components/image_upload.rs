//! Previews of the images attached to the next search

use dioxus::prelude::*;

use crate::shared::hooks::SearchState;

/// Grid of image previews with per-image removal and "clear all"
#[component]
pub fn ImagePreviewGrid(search: SearchState) -> Element {
    let session = search.session.read();
    let images = session.uploads().images();

    if images.is_empty() {
        return rsx! {};
    }

    let count = images.len();

    rsx! {
        div { class: "image-preview-grid",
            div { class: "image-preview-grid__header",
                span { class: "image-preview-grid__count", "{count} image(s) attached" }
                button {
                    class: "image-preview-grid__clear",
                    r#type: "button",
                    onclick: move |_| search.clear_images(),
                    "Clear all"
                }
            }

            div { class: "image-preview-grid__items",
                for img in images.iter() {
                    ImagePreviewItem {
                        key: "{img.id}",
                        url: img.preview_url(),
                        filename: img.filename.clone(),
                        on_remove: {
                            let id = img.id.clone();
                            move |_| search.remove_image(&id)
                        },
                    }
                }
            }
        }
    }
}

/// Single image preview item
#[component]
pub fn ImagePreviewItem(url: String, filename: String, on_remove: EventHandler<()>) -> Element {
    rsx! {
        div { class: "image-preview-item",
            img {
                src: "{url}",
                alt: "{filename}",
                class: "image-preview-item__image",
            }

            button {
                class: "image-preview-item__remove",
                r#type: "button",
                title: "Remove {filename}",
                onclick: move |_| on_remove.call(()),
                svg {
                    xmlns: "http://www.w3.org/2000/svg",
                    width: "14",
                    height: "14",
                    view_box: "0 0 24 24",
                    fill: "none",
                    stroke: "currentColor",
                    stroke_width: "2",
                    line { x1: "18", y1: "6", x2: "6", y2: "18" }
                    line { x1: "6", y1: "6", x2: "18", y2: "18" }
                }
            }
        }
    }
}
