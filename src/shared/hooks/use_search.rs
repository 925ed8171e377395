use dioxus::prelude::*;

use crate::config::APP_CONFIG;
use crate::domain::models::ResultId;
use crate::domain::services::{ApplyOutcome, PendingRequest, SearchSession, Section};
use crate::shared::services::{HttpSearchClient, add_files_from_input, dispatch, run_media_commands};

/// Search page state management hook
#[derive(Clone, Copy, PartialEq)]
pub struct SearchState {
    pub session: Signal<SearchSession>,
    pub query_text: Signal<String>,
}

impl SearchState {
    /// Run a new search (page 1) from the current text and images
    pub fn search(&self) {
        let mut session = self.session;
        let text = self.query_text.read().clone();

        let pending = session.write().begin_search(&text, 1);
        if let Ok(pending) = pending {
            self.send(pending);
        }
    }

    /// Page change over the captured queries; ignored when not allowed
    pub fn go_to_page(&self, page: u32) {
        let mut session = self.session;
        let pending = session.write().go_to_page(page);
        if let Some(pending) = pending {
            self.send(pending);
        }
    }

    /// Convert the files picked in `input_id` and attach them
    pub fn upload_from_input(&self, input_id: &'static str) {
        let session = self.session;
        spawn(async move {
            add_files_from_input(input_id, session).await;
        });
    }

    pub fn remove_image(&self, id: &str) {
        let mut session = self.session;
        session.write().remove_image(id);
    }

    pub fn clear_images(&self) {
        let mut session = self.session;
        session.write().clear_images();
    }

    fn send(&self, pending: PendingRequest) {
        let mut session = self.session;

        spawn(async move {
            let client = HttpSearchClient::from_config(&APP_CONFIG);
            let completion = dispatch(&client, pending).await;

            let outcome = session.write().apply(completion);
            if let ApplyOutcome::Applied(commands) = outcome {
                run_media_commands(commands, session);
            }
        });
    }

    /// Play/pause button of a result card
    pub fn toggle_playback(&self, id: &ResultId) {
        let mut session = self.session;
        let commands = session.write().toggle_playback(id);
        run_media_commands(commands, session);
    }

    /// `play`/`pause`/`ended` events fired by the media element
    pub fn media_event(&self, id: &ResultId, playing: bool) {
        let mut session = self.session;
        session.write().on_media_event(id, playing);
    }

    pub fn toggle_section(&self, id: &ResultId, section: Section) {
        let mut session = self.session;
        session.write().toggle_section(id, section);
    }
}

/// Hook to manage search state
pub fn use_search() -> SearchState {
    let session = use_signal(|| SearchSession::new(&APP_CONFIG));
    let query_text = use_signal(String::new);

    SearchState { session, query_text }
}
