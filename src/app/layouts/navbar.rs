use dioxus::prelude::*;

#[component]
pub fn Navbar() -> Element {
    rsx! {
        nav { class: "c-navbar",
            div { class: "c-navbar__brand", "🎬 Video Search" }
            p { class: "c-navbar__tagline", "Find moments in your videos by text or image" }
        }
    }
}
