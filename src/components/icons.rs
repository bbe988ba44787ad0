use dioxus::prelude::*;

const PLAYING_ICON: Asset = asset!("/assets/icons/playing.svg");
const PLAY_ICON: Asset = asset!("/assets/icons/play.svg");
const PAUSE_ICON: Asset = asset!("/assets/icons/pause.svg");
const SHUFFLE_ICON: Asset = asset!("/assets/icons/shuffle.svg");
const REPEAT_ICON: Asset = asset!("/assets/icons/repeat.svg");
const NEXT_ICON: Asset = asset!("/assets/icons/play-next.svg");
const PREVIOUS_ICON: Asset = asset!("/assets/icons/play-previous.svg");

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconName {
    Playing,
    Play,
    Pause,
    Shuffle,
    Repeat,
    Next,
    Previous,
}

impl IconName {
    fn asset(self) -> Asset {
        match self {
            IconName::Playing => PLAYING_ICON,
            IconName::Play => PLAY_ICON,
            IconName::Pause => PAUSE_ICON,
            IconName::Shuffle => SHUFFLE_ICON,
            IconName::Repeat => REPEAT_ICON,
            IconName::Next => NEXT_ICON,
            IconName::Previous => PREVIOUS_ICON,
        }
    }

    /// Accessible label shown when the image cannot load.
    pub fn alt(self) -> &'static str {
        match self {
            IconName::Playing => "Playing now",
            IconName::Play => "Play",
            IconName::Pause => "Pause",
            IconName::Shuffle => "Shuffle",
            IconName::Repeat => "Repeat",
            IconName::Next => "Play next",
            IconName::Previous => "Play previous",
        }
    }
}

#[component]
pub fn Icon(name: IconName, #[props(default)] class: String) -> Element {
    rsx! {
        img { class: "{class}", src: name.asset(), alt: name.alt() }
    }
}
