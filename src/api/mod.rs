//! Episode data consumed by the player.

pub mod models;

pub use models::*;

const BUNDLED_EPISODES: &str = include_str!("../../assets/episodes.json");

/// Episode list shipped with the demo shell. Empty if the bundle fails to parse.
pub fn bundled_episodes() -> Vec<Episode> {
    match parse_episodes(BUNDLED_EPISODES) {
        Ok(episodes) => episodes,
        Err(err) => {
            tracing::warn!("Failed to load bundled episodes: {err}");
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_episodes_are_playable() {
        let episodes = bundled_episodes();
        assert!(episodes.len() > 1);
        assert!(episodes.iter().all(|e| !e.url.is_empty() && e.duration > 0));
    }
}
