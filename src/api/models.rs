use serde::{Deserialize, Serialize};

use crate::error::Result;

/// A single playable podcast episode as listed by the host app.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Episode {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub members: String,
    #[serde(default)]
    pub thumbnail: String,
    /// Length in whole seconds.
    #[serde(default)]
    pub duration: u32,
    /// Audio source URL.
    #[serde(alias = "audio_url")]
    pub url: String,
}

/// Parses an episode list in the host's JSON shape.
pub fn parse_episodes(raw: &str) -> Result<Vec<Episode>> {
    Ok(serde_json::from_str(raw)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_listing_with_optional_fields_missing() {
        let raw = r#"[
            { "id": "a", "title": "Pilot", "members": "Ana, Bo", "thumbnail": "https://cdn/a.jpg", "duration": 3960, "url": "https://cdn/a.mp3" },
            { "id": "b", "title": "Bonus", "audio_url": "https://cdn/b.mp3" }
        ]"#;
        let episodes = parse_episodes(raw).unwrap();
        assert_eq!(episodes.len(), 2);
        assert_eq!(episodes[0].duration, 3960);
        assert_eq!(episodes[1].url, "https://cdn/b.mp3");
        assert_eq!(episodes[1].duration, 0);
        assert!(episodes[1].members.is_empty());
    }

    #[test]
    fn rejects_episode_without_audio_source() {
        assert!(parse_episodes(r#"[{ "id": "a", "title": "No audio" }]"#).is_err());
    }
}
