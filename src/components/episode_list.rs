use crate::api::Episode;
use crate::components::use_player;
use crate::utils::format_time;
use dioxus::prelude::*;

/// Host-side listing that feeds the player queue.
#[component]
pub fn EpisodeList(episodes: Vec<Episode>) -> Element {
    let player = use_player();
    let current_id = player.current_episode().map(|e| e.id);

    if episodes.is_empty() {
        return rsx! {
            p { class: "episode-list-empty", "No episodes available" }
        };
    }

    rsx! {
        div { class: "episode-list-header",
            h2 { "Latest episodes" }
            button {
                r#type: "button",
                disabled: current_id.is_none(),
                onclick: move |_| player.clear_player_state(),
                "Stop and clear queue"
            }
        }
        ul { class: "episode-list",
            for (index, episode) in episodes.iter().enumerate() {
                li {
                    key: "{episode.id}",
                    class: if current_id.as_deref() == Some(episode.id.as_str()) { "episode is-current" } else { "episode" },
                    img { src: "{episode.thumbnail}", alt: "{episode.title}", loading: "lazy" }
                    div { class: "episode-details",
                        strong { "{episode.title}" }
                        p { "{episode.members}" }
                        span { {format_time(episode.duration)} }
                    }
                    button {
                        r#type: "button",
                        title: "Play this episode",
                        onclick: {
                            let episode = episode.clone();
                            move |_| player.play(episode.clone())
                        },
                        "Play"
                    }
                    button {
                        r#type: "button",
                        title: "Play the list from here",
                        onclick: {
                            let episodes = episodes.clone();
                            move |_| player.play_list(episodes.clone(), index)
                        },
                        "Play from here"
                    }
                }
            }
        }
    }
}
