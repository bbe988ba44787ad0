use dioxus::prelude::*;

mod api;
mod components;
mod config;
mod error;
mod utils;

use components::AppShell;

const FAVICON: Asset = asset!("/assets/icons/playing.svg");
const PLAYER_CSS: Asset = asset!("/assets/styling/player.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "icon", r#type: "image/svg+xml", href: FAVICON }
        document::Meta { name: "theme-color", content: "#8257e5" }
        document::Stylesheet { href: PLAYER_CSS }

        AppShell {}
    }
}
