//! Per-result UI state: playback and expandable sections
//!
//! One map keyed by result id holds both concerns. Playback allows at most
//! one active result; clicks produce `MediaCommand`s that the view layer
//! executes against the actual media elements.

use std::collections::HashMap;

use crate::domain::models::ResultId;
use crate::shared::logging;

/// Expandable section of a result card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Description,
    Transcript,
}

/// UI flags for one result
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResultUiState {
    pub playing: bool,
    pub description_expanded: bool,
    pub transcript_expanded: bool,
}

impl ResultUiState {
    pub fn is_expanded(&self, section: Section) -> bool {
        match section {
            Section::Description => self.description_expanded,
            Section::Transcript => self.transcript_expanded,
        }
    }

    fn section_mut(&mut self, section: Section) -> &mut bool {
        match section {
            Section::Description => &mut self.description_expanded,
            Section::Transcript => &mut self.transcript_expanded,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackPhase {
    Idle,
    ActivePlaying,
    ActivePaused,
}

/// Side effect to run on a result's media element
#[derive(Debug, Clone, PartialEq)]
pub enum MediaCommand {
    Pause(ResultId),
    Seek { id: ResultId, position: f64 },
    Play(ResultId),
}

/// Why a play request was rejected
#[derive(Debug, Clone, PartialEq)]
pub enum PlaybackFailure {
    /// The play request was cut short by our own pause
    Interrupted,
    Other(String),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultUi {
    entries: HashMap<ResultId, ResultUiState>,
    active: Option<ResultId>,
}

impl ResultUi {
    pub fn state(&self, id: &ResultId) -> ResultUiState {
        self.entries.get(id).copied().unwrap_or_default()
    }

    pub fn active(&self) -> Option<&ResultId> {
        self.active.as_ref()
    }

    pub fn is_playing(&self, id: &ResultId) -> bool {
        self.state(id).playing
    }

    pub fn is_expanded(&self, id: &ResultId, section: Section) -> bool {
        self.state(id).is_expanded(section)
    }

    pub fn phase(&self, id: &ResultId) -> PlaybackPhase {
        match &self.active {
            Some(active) if active == id => {
                if self.is_playing(id) {
                    PlaybackPhase::ActivePlaying
                } else {
                    PlaybackPhase::ActivePaused
                }
            }
            _ => PlaybackPhase::Idle,
        }
    }

    /// Play/pause click on result `id`.
    ///
    /// `start_position` is where playback begins when `id` becomes active.
    pub fn click(&mut self, id: &ResultId, start_position: f64) -> Vec<MediaCommand> {
        if self.active.as_ref() == Some(id) {
            let entry = self.entries.entry(id.clone()).or_default();
            entry.playing = !entry.playing;
            return if entry.playing {
                vec![MediaCommand::Play(id.clone())]
            } else {
                vec![MediaCommand::Pause(id.clone())]
            };
        }

        let mut commands = Vec::with_capacity(3);
        if let Some(previous) = self.active.take() {
            self.entries.entry(previous.clone()).or_default().playing = false;
            commands.push(MediaCommand::Pause(previous));
        }

        commands.push(MediaCommand::Seek {
            id: id.clone(),
            position: start_position,
        });
        commands.push(MediaCommand::Play(id.clone()));

        self.entries.entry(id.clone()).or_default().playing = true;
        self.active = Some(id.clone());
        commands
    }

    /// Play/pause reported by the media element itself (e.g. end of media).
    /// The active result is left alone.
    pub fn on_media_event(&mut self, id: &ResultId, playing: bool) {
        self.entries.entry(id.clone()).or_default().playing = playing;
    }

    /// A play request for `id` was rejected.
    pub fn on_play_failed(&mut self, id: &ResultId, failure: PlaybackFailure) {
        match failure {
            PlaybackFailure::Interrupted => logging::log_playback_interrupted(id),
            PlaybackFailure::Other(error) => {
                logging::log_playback_failure(id, &error);
                self.entries.entry(id.clone()).or_default().playing = false;
            }
        }
    }

    /// Stop everything: pause whatever plays and forget the active result.
    /// Section flags survive; they are keyed by id and never read for
    /// results that are gone.
    pub fn reset_playback(&mut self) -> Vec<MediaCommand> {
        let mut playing: Vec<ResultId> = self
            .entries
            .iter_mut()
            .filter(|(_, state)| state.playing)
            .map(|(id, state)| {
                state.playing = false;
                id.clone()
            })
            .collect();
        playing.sort();

        self.active = None;
        playing.into_iter().map(MediaCommand::Pause).collect()
    }

    /// Flip a section flag, returning the new value
    pub fn toggle(&mut self, id: &ResultId, section: Section) -> bool {
        let flag = self.entries.entry(id.clone()).or_default().section_mut(section);
        *flag = !*flag;
        *flag
    }

    pub fn any_playing(&self) -> bool {
        self.entries.values().any(|state| state.playing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(s: &str) -> ResultId {
        ResultId::new(s)
    }

    #[test]
    fn test_first_click_seeks_and_plays() {
        let mut ui = ResultUi::default();
        let commands = ui.click(&id("a"), 12.5);

        assert_eq!(
            commands,
            vec![
                MediaCommand::Seek { id: id("a"), position: 12.5 },
                MediaCommand::Play(id("a")),
            ]
        );
        assert_eq!(ui.active(), Some(&id("a")));
        assert_eq!(ui.phase(&id("a")), PlaybackPhase::ActivePlaying);
    }

    #[test]
    fn test_click_on_active_toggles_pause_and_resume() {
        let mut ui = ResultUi::default();
        ui.click(&id("a"), 0.0);

        assert_eq!(ui.click(&id("a"), 0.0), vec![MediaCommand::Pause(id("a"))]);
        assert_eq!(ui.phase(&id("a")), PlaybackPhase::ActivePaused);

        // Resume does not seek back to the segment start
        assert_eq!(ui.click(&id("a"), 0.0), vec![MediaCommand::Play(id("a"))]);
        assert_eq!(ui.phase(&id("a")), PlaybackPhase::ActivePlaying);
    }

    #[test]
    fn test_switching_results_pauses_previous() {
        let mut ui = ResultUi::default();
        ui.click(&id("b"), 0.0);

        let commands = ui.click(&id("a"), 42.0);
        assert_eq!(
            commands,
            vec![
                MediaCommand::Pause(id("b")),
                MediaCommand::Seek { id: id("a"), position: 42.0 },
                MediaCommand::Play(id("a")),
            ]
        );
        assert_eq!(ui.phase(&id("b")), PlaybackPhase::Idle);
        assert!(!ui.is_playing(&id("b")));
        assert_eq!(ui.phase(&id("a")), PlaybackPhase::ActivePlaying);
    }

    #[test]
    fn test_failure_keeps_active_but_stops_playing() {
        let mut ui = ResultUi::default();
        ui.click(&id("a"), 0.0);
        ui.on_play_failed(&id("a"), PlaybackFailure::Other("NotSupportedError".to_string()));

        assert_eq!(ui.active(), Some(&id("a")));
        assert_eq!(ui.phase(&id("a")), PlaybackPhase::ActivePaused);
    }

    #[test]
    fn test_interruption_is_ignored() {
        let mut ui = ResultUi::default();
        ui.click(&id("a"), 0.0);
        ui.on_play_failed(&id("a"), PlaybackFailure::Interrupted);
        assert!(ui.is_playing(&id("a")));
    }

    #[test]
    fn test_media_event_does_not_change_active() {
        let mut ui = ResultUi::default();
        ui.click(&id("a"), 0.0);
        ui.on_media_event(&id("a"), false);

        assert_eq!(ui.active(), Some(&id("a")));
        assert_eq!(ui.phase(&id("a")), PlaybackPhase::ActivePaused);
    }

    #[test]
    fn test_reset_pauses_everything() {
        let mut ui = ResultUi::default();
        ui.click(&id("a"), 0.0);
        ui.on_media_event(&id("z"), true);
        ui.toggle(&id("a"), Section::Transcript);

        let commands = ui.reset_playback();
        assert_eq!(commands, vec![MediaCommand::Pause(id("a")), MediaCommand::Pause(id("z"))]);
        assert_eq!(ui.active(), None);
        assert!(!ui.any_playing());
        assert!(ui.is_expanded(&id("a"), Section::Transcript));
    }

    #[test]
    fn test_toggle_twice_restores_flag() {
        let mut ui = ResultUi::default();
        assert!(!ui.is_expanded(&id("a"), Section::Description));
        assert!(ui.toggle(&id("a"), Section::Description));
        assert!(!ui.toggle(&id("a"), Section::Description));
        assert!(!ui.is_expanded(&id("a"), Section::Description));
    }

    #[test]
    fn test_sections_are_independent() {
        let mut ui = ResultUi::default();
        ui.toggle(&id("a"), Section::Description);
        assert!(!ui.is_expanded(&id("a"), Section::Transcript));
        assert!(!ui.is_expanded(&id("b"), Section::Description));
        assert_eq!(ui.phase(&id("a")), PlaybackPhase::Idle);
    }
}
