use crate::api::bundled_episodes;
use crate::components::{EpisodeList, PlaybackState, Player, PlayerController};
use crate::config::PlayerConfig;
use dioxus::prelude::*;

/// Owns the shared playback state for everything rendered inside it.
#[component]
pub fn PlayerProvider(#[props(default)] initial: PlaybackState, children: Element) -> Element {
    let state = use_signal(move || initial);
    use_context_provider(|| PlayerController::new(state));

    rsx! {
        {children}
    }
}

#[component]
pub fn AppShell() -> Element {
    let config = use_context_provider(PlayerConfig::bundled);
    let episodes = use_hook(bundled_episodes);

    use_hook(|| {
        tracing::info!(
            episodes = episodes.len(),
            element = %config.element_id,
            "podcast player ready"
        );
    });

    rsx! {
        PlayerProvider {
            div { class: "app-shell",
                main { class: "episode-column",
                    EpisodeList { episodes }
                }
                aside { class: "player-column",
                    Player {}
                }
            }
        }
    }
}
