//! Shared playback state and the controller components use to mutate it.

use dioxus::prelude::*;
use rand::Rng;

use crate::api::Episode;
use crate::error::{PlayerError, Result};

/// Queue, cursor and flags shared by every component that touches playback.
///
/// `current_index` is `Some` only while it points into `episodes`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PlaybackState {
    episodes: Vec<Episode>,
    current_index: Option<usize>,
    is_playing: bool,
    is_looping: bool,
    is_shuffling: bool,
}

/// What happened when the current episode reached its end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EpisodeEnd {
    Advanced(usize),
    Cleared,
}

impl PlaybackState {
    pub fn episodes(&self) -> &[Episode] {
        &self.episodes
    }

    pub fn current_index(&self) -> Option<usize> {
        self.current_index
    }

    pub fn current_episode(&self) -> Option<&Episode> {
        self.current_index.and_then(|idx| self.episodes.get(idx))
    }

    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    pub fn is_looping(&self) -> bool {
        self.is_looping
    }

    pub fn is_shuffling(&self) -> bool {
        self.is_shuffling
    }

    pub fn has_previous(&self) -> bool {
        matches!(self.current_index, Some(idx) if idx > 0)
    }

    /// While shuffling any other episode counts as next.
    pub fn has_next(&self) -> bool {
        match self.current_index {
            Some(_) if self.is_shuffling => self.episodes.len() > 1,
            Some(idx) => idx + 1 < self.episodes.len(),
            None => false,
        }
    }

    /// Replaces the queue with a single episode and starts it.
    pub fn play(&mut self, episode: Episode) {
        self.episodes = vec![episode];
        self.current_index = Some(0);
        self.is_playing = true;
    }

    /// Replaces the queue with `episodes` and starts the one at `index`.
    pub fn play_list(&mut self, episodes: Vec<Episode>, index: usize) -> Result<()> {
        if index >= episodes.len() {
            return Err(PlayerError::EpisodeIndexOutOfRange {
                index,
                len: episodes.len(),
            });
        }
        self.episodes = episodes;
        self.current_index = Some(index);
        self.is_playing = true;
        Ok(())
    }

    pub fn toggle_play(&mut self) {
        self.is_playing = !self.is_playing;
    }

    pub fn toggle_loop(&mut self) {
        self.is_looping = !self.is_looping;
    }

    pub fn toggle_shuffle(&mut self) {
        self.is_shuffling = !self.is_shuffling;
    }

    pub fn set_playing(&mut self, playing: bool) {
        self.is_playing = playing;
    }

    /// Moves to the next episode. While shuffling the target is drawn uniformly
    /// from the other episodes in the queue. Returns the new index, or `None`
    /// if nothing changed.
    pub fn play_next<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<usize> {
        if !self.has_next() {
            return None;
        }
        let current = self.current_index?;
        let next = if self.is_shuffling {
            let pick = rng.gen_range(0..self.episodes.len() - 1);
            if pick >= current {
                pick + 1
            } else {
                pick
            }
        } else {
            current + 1
        };
        self.current_index = Some(next);
        Some(next)
    }

    pub fn play_previous(&mut self) -> Option<usize> {
        if !self.has_previous() {
            return None;
        }
        let previous = self.current_index? - 1;
        self.current_index = Some(previous);
        Some(previous)
    }

    /// Drops the queue and stops playback.
    pub fn clear(&mut self) {
        self.episodes.clear();
        self.current_index = None;
        self.is_playing = false;
    }

    /// Advances past a finished episode, or clears everything if it was the last.
    pub fn finish_episode<R: Rng + ?Sized>(&mut self, rng: &mut R) -> EpisodeEnd {
        match self.play_next(rng) {
            Some(idx) => EpisodeEnd::Advanced(idx),
            None => {
                self.clear();
                EpisodeEnd::Cleared
            }
        }
    }
}

/// Handle to the shared [`PlaybackState`], provided through context.
#[derive(Clone, Copy, PartialEq)]
pub struct PlayerController {
    state: Signal<PlaybackState>,
}

impl PlayerController {
    pub fn new(state: Signal<PlaybackState>) -> Self {
        Self { state }
    }

    /// Subscribing snapshot of the whole state.
    pub fn state(&self) -> PlaybackState {
        (self.state)()
    }

    pub fn current_episode(&self) -> Option<Episode> {
        self.state.read().current_episode().cloned()
    }

    pub fn is_playing(&self) -> bool {
        self.state.read().is_playing()
    }

    pub fn play(&self, episode: Episode) {
        tracing::debug!(episode = %episode.id, "play episode");
        let mut state = self.state;
        state.with_mut(|s| s.play(episode));
    }

    pub fn play_list(&self, episodes: Vec<Episode>, index: usize) {
        let mut state = self.state;
        if let Err(err) = state.with_mut(|s| s.play_list(episodes, index)) {
            tracing::warn!("Ignoring play request: {err}");
        }
    }

    pub fn toggle_play(&self) {
        let mut state = self.state;
        state.with_mut(PlaybackState::toggle_play);
    }

    pub fn toggle_loop(&self) {
        let mut state = self.state;
        state.with_mut(PlaybackState::toggle_loop);
    }

    pub fn toggle_shuffle(&self) {
        let mut state = self.state;
        state.with_mut(PlaybackState::toggle_shuffle);
    }

    /// Mirrors the element's own play/pause events into shared state.
    pub fn set_playing_state(&self, playing: bool) {
        if self.state.peek().is_playing() == playing {
            return;
        }
        let mut state = self.state;
        state.with_mut(|s| s.set_playing(playing));
    }

    pub fn play_next(&self) {
        let mut state = self.state;
        state.with_mut(|s| s.play_next(&mut rand::thread_rng()));
    }

    pub fn play_previous(&self) {
        let mut state = self.state;
        state.with_mut(PlaybackState::play_previous);
    }

    pub fn clear_player_state(&self) {
        let mut state = self.state;
        state.with_mut(PlaybackState::clear);
    }

    pub fn finish_episode(&self) -> EpisodeEnd {
        let mut state = self.state;
        let outcome = state.with_mut(|s| s.finish_episode(&mut rand::thread_rng()));
        tracing::debug!(?outcome, "episode ended");
        outcome
    }
}

/// Controller for the nearest [`PlayerProvider`](crate::components::PlayerProvider).
pub fn use_player() -> PlayerController {
    use_context::<PlayerController>()
}
