//! The components module contains all shared components for our app.

mod app;
mod audio_manager;
mod episode_list;
mod icons;
mod player;
mod player_context;

pub use app::*;
pub use episode_list::*;
pub use icons::*;
pub use player::*;
pub use player_context::*;
