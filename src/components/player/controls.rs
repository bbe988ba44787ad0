use crate::components::{use_player, Icon, IconName, PlaybackState};
use dioxus::prelude::*;

/// Which buttons are clickable and which toggles are lit, derived from shared state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ControlState {
    pub shuffle_enabled: bool,
    pub previous_enabled: bool,
    pub play_enabled: bool,
    pub next_enabled: bool,
    pub loop_enabled: bool,
    pub is_playing: bool,
    pub is_shuffling: bool,
    pub is_looping: bool,
}

impl ControlState {
    pub fn from_state(state: &PlaybackState) -> Self {
        let has_episode = state.current_episode().is_some();
        Self {
            shuffle_enabled: has_episode && state.episodes().len() > 1,
            previous_enabled: has_episode && state.has_previous(),
            play_enabled: has_episode,
            next_enabled: has_episode && state.has_next(),
            loop_enabled: has_episode,
            is_playing: state.is_playing(),
            is_shuffling: state.is_shuffling(),
            is_looping: state.is_looping(),
        }
    }

    pub fn all_disabled(&self) -> bool {
        !(self.shuffle_enabled
            || self.previous_enabled
            || self.play_enabled
            || self.next_enabled
            || self.loop_enabled)
    }
}

fn toggle_class(active: bool) -> &'static str {
    if active {
        "is-active"
    } else {
        ""
    }
}

/// Shuffle, previous, play/pause, next and repeat buttons.
#[component]
pub(super) fn PlayerControls(controls: ControlState) -> Element {
    let player = use_player();

    rsx! {
        div { class: "buttons", "aria-disabled": controls.all_disabled(),
            button {
                r#type: "button",
                class: toggle_class(controls.is_shuffling),
                disabled: !controls.shuffle_enabled,
                onclick: move |_| player.toggle_shuffle(),
                Icon { name: IconName::Shuffle }
            }
            button {
                r#type: "button",
                disabled: !controls.previous_enabled,
                onclick: move |_| player.play_previous(),
                Icon { name: IconName::Previous }
            }
            button {
                r#type: "button",
                class: "play-button",
                disabled: !controls.play_enabled,
                onclick: move |_| player.toggle_play(),
                if controls.is_playing {
                    Icon { name: IconName::Pause }
                } else {
                    Icon { name: IconName::Play }
                }
            }
            button {
                r#type: "button",
                disabled: !controls.next_enabled,
                onclick: move |_| player.play_next(),
                Icon { name: IconName::Next }
            }
            button {
                r#type: "button",
                class: toggle_class(controls.is_looping),
                disabled: !controls.loop_enabled,
                onclick: move |_| player.toggle_loop(),
                Icon { name: IconName::Repeat }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::Episode;

    fn episodes(n: usize) -> Vec<Episode> {
        (0..n)
            .map(|i| Episode {
                id: format!("ep-{i}"),
                title: format!("Episode {i}"),
                members: String::new(),
                thumbnail: String::new(),
                duration: 60,
                url: format!("https://cdn.test/{i}.mp3"),
            })
            .collect()
    }

    #[test]
    fn empty_queue_disables_every_button() {
        let controls = ControlState::from_state(&PlaybackState::default());
        assert!(controls.all_disabled());
        assert!(!controls.is_playing);
    }

    #[test]
    fn single_episode_cannot_shuffle_or_skip() {
        let mut state = PlaybackState::default();
        state.play_list(episodes(1), 0).unwrap();
        let controls = ControlState::from_state(&state);
        assert!(!controls.shuffle_enabled);
        assert!(!controls.previous_enabled);
        assert!(!controls.next_enabled);
        assert!(controls.play_enabled);
        assert!(controls.loop_enabled);
    }

    #[test]
    fn middle_of_queue_enables_both_directions() {
        let mut state = PlaybackState::default();
        state.play_list(episodes(3), 1).unwrap();
        let controls = ControlState::from_state(&state);
        assert!(controls.shuffle_enabled);
        assert!(controls.previous_enabled);
        assert!(controls.next_enabled);
    }

    #[test]
    fn shuffling_enables_next_on_the_last_episode() {
        let mut state = PlaybackState::default();
        state.play_list(episodes(3), 2).unwrap();
        assert!(!ControlState::from_state(&state).next_enabled);
        state.toggle_shuffle();
        let controls = ControlState::from_state(&state);
        assert!(controls.next_enabled);
        assert!(controls.is_shuffling);
    }
}
