//! Runs `MediaCommand`s against the `<video>` elements of result cards
//!
//! WASM-only for real; the native build keeps a logging stub so shared
//! components compile for SSR.

use dioxus::prelude::*;

use crate::domain::models::ResultId;
use crate::domain::services::{MediaCommand, SearchSession};

/// DOM id of the media element for a result
pub fn media_element_id(id: &ResultId) -> String {
    format!("result-media-{}", id)
}

#[cfg(target_arch = "wasm32")]
pub fn run_media_commands(commands: Vec<MediaCommand>, session: Signal<SearchSession>) {
    use wasm_bindgen::JsCast;
    use wasm_bindgen_futures::JsFuture;
    use web_sys::HtmlMediaElement;

    use crate::domain::services::PlaybackFailure;

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        tracing::warn!("No document available for media commands");
        return;
    };

    let element = |id: &ResultId| {
        document
            .get_element_by_id(&media_element_id(id))
            .and_then(|el| el.dyn_into::<HtmlMediaElement>().ok())
    };

    for command in commands {
        match command {
            MediaCommand::Pause(id) => {
                if let Some(media) = element(&id) {
                    if let Err(e) = media.pause() {
                        tracing::warn!("Pause failed for {}: {:?}", id, e);
                    }
                }
            }
            MediaCommand::Seek { id, position } => {
                if let Some(media) = element(&id) {
                    media.set_current_time(position);
                }
            }
            MediaCommand::Play(id) => {
                let mut session = session;
                let Some(media) = element(&id) else {
                    session
                        .write()
                        .on_play_failed(&id, PlaybackFailure::Other("media element not found".to_string()));
                    continue;
                };

                match media.play() {
                    Ok(promise) => {
                        spawn(async move {
                            if let Err(e) = JsFuture::from(promise).await {
                                session.write().on_play_failed(&id, playback_failure(&e));
                            }
                        });
                    }
                    Err(e) => session.write().on_play_failed(&id, playback_failure(&e)),
                }
            }
        }
    }
}

/// `AbortError` means our own `pause()` interrupted a pending `play()`
#[cfg(target_arch = "wasm32")]
fn playback_failure(error: &wasm_bindgen::JsValue) -> crate::domain::services::PlaybackFailure {
    use crate::domain::services::PlaybackFailure;
    use wasm_bindgen::JsCast;

    match error.dyn_ref::<web_sys::DomException>() {
        Some(exception) if exception.name() == "AbortError" => PlaybackFailure::Interrupted,
        Some(exception) => PlaybackFailure::Other(format!("{}: {}", exception.name(), exception.message())),
        None => PlaybackFailure::Other(format!("{:?}", error)),
    }
}

/// Server-side stub (no media elements)
#[cfg(not(target_arch = "wasm32"))]
pub fn run_media_commands(commands: Vec<MediaCommand>, _session: Signal<SearchSession>) {
    for command in commands {
        tracing::trace!("Skipping media command outside the browser: {:?}", command);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_media_element_id() {
        assert_eq!(media_element_id(&ResultId::new("vid-42")), "result-media-vid-42");
    }
}
