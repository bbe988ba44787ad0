use std::cell::RefCell;
use std::rc::Rc;

use crate::components::audio_manager::{
    find_media_element, MediaElement, PlayToggle, TimeUpdateSubscription,
};
use crate::components::{use_player, EpisodeEnd, Icon, IconName};
use crate::config::PlayerConfig;
use crate::utils::format_time;
use dioxus::prelude::*;

mod controls;
mod progress;

use controls::PlayerControls;
pub use controls::ControlState;
pub use progress::ProgressTracker;

/// Where the widget is in its episode lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerPhase {
    /// No episode selected.
    Idle,
    /// Episode selected, metadata not loaded yet.
    Loading,
    /// Metadata loaded; playing or paused.
    Ready,
}

impl PlayerPhase {
    pub fn resolve(current: Option<&str>, loaded: Option<&str>) -> Self {
        match current {
            None => PlayerPhase::Idle,
            Some(id) if loaded == Some(id) => PlayerPhase::Ready,
            Some(_) => PlayerPhase::Loading,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PlayerPhase::Idle => "idle",
            PlayerPhase::Loading => "loading",
            PlayerPhase::Ready => "ready",
        }
    }
}

type TimeUpdateSlot = Rc<RefCell<Option<TimeUpdateSubscription>>>;

#[component]
pub fn Player() -> Element {
    let player = use_player();
    let config = use_context::<PlayerConfig>();

    let mut progress = use_signal(ProgressTracker::default);
    let mut loaded_episode = use_signal(|| None::<String>);
    let play_toggle = use_signal(PlayToggle::default);
    let time_updates: TimeUpdateSlot = use_hook(|| Rc::new(RefCell::new(None)));

    {
        let time_updates = time_updates.clone();
        use_drop(move || {
            time_updates.borrow_mut().take();
        });
    }

    // The only place play()/pause() is issued. PlayToggle collapses re-runs
    // caused by unrelated state changes.
    {
        let element_id = config.element_id.clone();
        use_effect(move || {
            let mut play_toggle = play_toggle;
            let playing = player.is_playing();
            let Some(episode) = player.current_episode() else {
                play_toggle.write().forget();
                return;
            };
            play_toggle.write().retarget(&episode.url);

            let element = match find_media_element(&element_id) {
                Ok(element) => element.on_rejected(move |err| {
                    tracing::warn!("{err}");
                    let mut play_toggle = play_toggle;
                    play_toggle.write().observe(false);
                    player.set_playing_state(false);
                }),
                Err(err) => {
                    tracing::debug!("Skipping play state sync: {err}");
                    play_toggle.write().forget();
                    return;
                }
            };

            if let Err(err) = play_toggle.write().sync(&element, playing) {
                tracing::warn!("Failed to apply play state: {err}");
            };
        });
    }

    let state = player.state();
    let episode = state.current_episode().cloned();
    let controls = ControlState::from_state(&state);
    let phase = PlayerPhase::resolve(
        episode.as_ref().map(|e| e.id.as_str()),
        loaded_episode().as_deref(),
    );
    let tracker = progress();

    let on_loaded_metadata = {
        let element_id = config.element_id.clone();
        let time_updates = time_updates.clone();
        let episode = episode.clone();
        move |_| {
            let Some(episode) = episode.clone() else {
                return;
            };
            progress.write().reset(episode.duration);
            loaded_episode.set(Some(episode.id.clone()));

            // Release the previous listener before attaching a new one.
            time_updates.borrow_mut().take();

            let element = match find_media_element(&element_id) {
                Ok(element) => element,
                Err(err) => {
                    tracing::warn!("Cannot track progress: {err}");
                    return;
                }
            };
            element.set_current_time(0.0);

            match TimeUpdateSubscription::register(&element, move |current_time| {
                let mut next = *progress.peek();
                next.on_time_update(current_time);
                if next != *progress.peek() {
                    progress.set(next);
                }
            }) {
                Ok(subscription) => {
                    *time_updates.borrow_mut() = Some(subscription);
                }
                Err(err) => tracing::warn!("{err}"),
            }
            tracing::debug!(episode = %episode.id, "metadata loaded");
        }
    };

    let on_seek = {
        let element_id = config.element_id.clone();
        let duration = episode.as_ref().map(|e| e.duration).unwrap_or(0);
        move |e: Event<FormData>| {
            let Ok(target) = e.value().parse::<f64>() else {
                return;
            };
            let position = progress.write().seek(target, duration);
            match find_media_element(&element_id) {
                Ok(element) => element.set_current_time(position as f64),
                Err(err) => tracing::warn!("Seek ignored: {err}"),
            }
        }
    };

    let on_ended = {
        let time_updates = time_updates.clone();
        move |_| match player.finish_episode() {
            EpisodeEnd::Advanced(_) => {
                let duration = player.current_episode().map(|e| e.duration).unwrap_or(0);
                progress.write().reset(duration);
            }
            EpisodeEnd::Cleared => {
                time_updates.borrow_mut().take();
                progress.set(ProgressTracker::default());
                loaded_episode.set(None);
            }
        }
    };

    let on_play = move |_| {
        let mut play_toggle = play_toggle;
        play_toggle.write().observe(true);
        player.set_playing_state(true);
    };

    let on_pause = move |_| {
        let mut play_toggle = play_toggle;
        play_toggle.write().observe(false);
        player.set_playing_state(false);
    };

    let elapsed = format_time(tracker.position());
    let total = format_time(episode.as_ref().map(|e| e.duration).unwrap_or(0));
    let slider_style = config.slider_style();

    rsx! {
        div { class: "player-container", "data-phase": phase.as_str(),
            header {
                Icon { name: IconName::Playing }
                strong { "{config.labels.now_playing}" }
            }

            {
                match &episode {
                    Some(episode) => rsx! {
                        div { class: "current-episode",
                            img {
                                width: "592",
                                height: "592",
                                src: "{episode.thumbnail}",
                                alt: "{episode.title}",
                            }
                            strong { "{episode.title}" }
                            span { "{episode.members}" }
                        }
                    },
                    None => rsx! {
                        div { class: "empty-player",
                            strong { "{config.labels.empty_state}" }
                        }
                    },
                }
            }

            footer { class: if episode.is_none() { "empty" } else { "" },
                div { class: "progress",
                    span { "{elapsed}" }
                    div { class: "slider",
                        if let Some(episode) = &episode {
                            input {
                                r#type: "range",
                                min: "0",
                                max: "{episode.duration}",
                                step: "1",
                                value: "{tracker.position()}",
                                style: "{slider_style}",
                                oninput: on_seek,
                            }
                        } else {
                            div { class: "empty-slider" }
                        }
                    }
                    span { "{total}" }
                }

                if let Some(episode) = &episode {
                    audio {
                        id: "{config.element_id}",
                        src: "{episode.url}",
                        preload: "metadata",
                        r#loop: state.is_looping(),
                        autoplay: true,
                        onloadedmetadata: on_loaded_metadata,
                        onended: on_ended,
                        onplay: on_play,
                        onpause: on_pause,
                    }
                }

                PlayerControls { controls }
            }
        }
    }
}
