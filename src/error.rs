//! Error types for the player widget

use thiserror::Error;

/// Player errors
#[derive(Debug, Error)]
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
pub enum PlayerError {
    /// The media element for the current episode is not in the document
    #[error("Media element `{0}` not found")]
    MediaElementMissing(String),

    /// The media element refused to start playback
    #[error("Playback rejected: {0}")]
    PlaybackRejected(String),

    /// The media element refused to pause
    #[error("Pause failed: {0}")]
    PauseFailed(String),

    /// A media event listener could not be attached
    #[error("Failed to register `{event}` listener: {reason}")]
    ListenerRegistration { event: &'static str, reason: String },

    /// Queue index outside the episode list
    #[error("Episode index {index} out of range for a queue of {len}")]
    EpisodeIndexOutOfRange { index: usize, len: usize },

    /// Bundled configuration or episode data could not be parsed
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for player operations
pub type Result<T> = std::result::Result<T, PlayerError>;
