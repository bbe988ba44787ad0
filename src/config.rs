//! Player configuration bundled with the app.

use serde::{Deserialize, Serialize};

use crate::error::Result;

const BUNDLED_CONFIG: &str = include_str!("../assets/player.json");

/// Settings the player widget reads from context.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    /// DOM id given to the single `<audio>` element.
    pub element_id: String,
    pub slider: SliderColors,
    pub labels: PlayerLabels,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SliderColors {
    pub track_color: String,
    pub rail_color: String,
    pub handle_color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerLabels {
    pub now_playing: String,
    pub empty_state: String,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            element_id: "podcast-player-audio".to_string(),
            slider: SliderColors::default(),
            labels: PlayerLabels::default(),
        }
    }
}

impl Default for SliderColors {
    fn default() -> Self {
        Self {
            track_color: "#04d361".to_string(),
            rail_color: "#9775ff".to_string(),
            handle_color: "#04d361".to_string(),
        }
    }
}

impl Default for PlayerLabels {
    fn default() -> Self {
        Self {
            now_playing: "Playing now".to_string(),
            empty_state: "Select a podcast to listen to".to_string(),
        }
    }
}

impl PlayerConfig {
    pub fn from_json(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Loads `assets/player.json`, falling back to defaults when it does not parse.
    pub fn bundled() -> Self {
        match Self::from_json(BUNDLED_CONFIG) {
            Ok(config) => config,
            Err(err) => {
                tracing::warn!("Ignoring bundled player config: {err}");
                Self::default()
            }
        }
    }

    /// Inline style for the seek slider, mirroring the track/rail/handle colours.
    pub fn slider_style(&self) -> String {
        format!(
            "--slider-track: {}; --slider-rail: {}; --slider-handle: {};",
            self.slider.track_color, self.slider.rail_color, self.slider.handle_color
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_config_parses() {
        let config = PlayerConfig::from_json(BUNDLED_CONFIG).expect("bundled config");
        assert_eq!(config.element_id, "podcast-player-audio");
    }

    #[test]
    fn missing_fields_take_defaults() {
        let config = PlayerConfig::from_json(r#"{ "element_id": "episode-audio" }"#).unwrap();
        assert_eq!(config.element_id, "episode-audio");
        assert_eq!(config.slider, SliderColors::default());
        assert_eq!(config.labels, PlayerLabels::default());
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(PlayerConfig::from_json("{ not json").is_err());
    }

    #[test]
    fn slider_style_lists_all_colors() {
        let style = PlayerConfig::default().slider_style();
        assert!(style.contains("--slider-track: #04d361"));
        assert!(style.contains("--slider-rail: #9775ff"));
    }
}
