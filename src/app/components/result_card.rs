//! Result card: inline video, metadata and expandable sections

use dioxus::prelude::*;

use crate::domain::models::SearchResult;
use crate::domain::services::{PlaybackPhase, ResultUiState, Section};
use crate::shared::hooks::SearchState;
use crate::shared::services::media_element_id;
use crate::shared::utils::{format_created_at, format_segment, format_timestamp, relevance_percent};

#[component]
pub fn ResultCard(
    result: SearchResult,
    ui: ResultUiState,
    phase: PlaybackPhase,
    search: SearchState,
) -> Element {
    let id = result.id.clone();
    let media_id = media_element_id(&id);
    let title = result.display_title().to_string();
    let relevance = relevance_percent(result.relevance_score);
    let segment = format_segment(result.segment_start, result.segment_end);
    let duration = result.duration_seconds.map(format_timestamp);
    let created = format_created_at(&result.created_at);

    let (play_icon, play_label) = match phase {
        PlaybackPhase::ActivePlaying => ("⏸", "Pause"),
        PlaybackPhase::ActivePaused => ("▶", "Resume"),
        PlaybackPhase::Idle => ("▶", "Play segment"),
    };
    let card_class = match phase {
        PlaybackPhase::Idle => "c-result-card",
        _ => "c-result-card c-result-card--active",
    };

    rsx! {
        article { class: "{card_class}",
            div { class: "c-result-card__media",
                video {
                    id: "{media_id}",
                    class: "c-result-card__video",
                    src: "{result.media_url}",
                    poster: result.thumbnail_url.clone(),
                    preload: "metadata",
                    playsinline: true,
                    onplay: {
                        let id = id.clone();
                        move |_| search.media_event(&id, true)
                    },
                    onpause: {
                        let id = id.clone();
                        move |_| search.media_event(&id, false)
                    },
                    onended: {
                        let id = id.clone();
                        move |_| search.media_event(&id, false)
                    },
                }
                button {
                    class: "c-result-card__play",
                    r#type: "button",
                    title: "{play_label}",
                    onclick: {
                        let id = id.clone();
                        move |_| search.toggle_playback(&id)
                    },
                    "{play_icon}"
                }
            }

            div { class: "c-result-card__body",
                h3 { class: "c-result-card__title", "{title}" }

                div { class: "c-result-card__meta",
                    span { class: "c-badge c-badge--score", "{relevance}% match" }
                    if let Some(match_type) = result.match_type.clone() {
                        span { class: "c-badge", "{match_type}" }
                    }
                    if let Some(segment) = segment {
                        span { class: "c-result-card__segment", "⏱ {segment}" }
                    }
                    if let Some(duration) = duration {
                        span { class: "c-result-card__duration", "{duration}" }
                    }
                    span { class: "c-result-card__date", "{created}" }
                }

                if let Some(description) = result.description.clone() {
                    DisclosureSection {
                        label: "Description",
                        body: description,
                        expanded: ui.description_expanded,
                        on_toggle: {
                            let id = id.clone();
                            move |_| search.toggle_section(&id, Section::Description)
                        },
                    }
                }

                if let Some(transcript) = result.transcript.clone() {
                    DisclosureSection {
                        label: "Transcript",
                        body: transcript,
                        expanded: ui.transcript_expanded,
                        on_toggle: {
                            let id = id.clone();
                            move |_| search.toggle_section(&id, Section::Transcript)
                        },
                    }
                }
            }
        }
    }
}

/// Collapsible text block
#[component]
fn DisclosureSection(label: String, body: String, expanded: bool, on_toggle: EventHandler<()>) -> Element {
    let arrow = if expanded { "▾" } else { "▸" };

    rsx! {
        section { class: "c-disclosure",
            button {
                class: "c-disclosure__toggle",
                r#type: "button",
                aria_expanded: "{expanded}",
                onclick: move |_| on_toggle.call(()),
                "{arrow} {label}"
            }
            if expanded {
                p { class: "c-disclosure__body", "{body}" }
            }
        }
    }
}
