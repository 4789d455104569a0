//! Error types for the card core

use thiserror::Error;

/// Failures from the audio subsystem.
///
/// Everything here is absorbed into [`AudioState`](crate::audio::AudioState)
/// and surfaced as user-visible text; nothing propagates far enough to take
/// down the view.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AudioError {
    /// The track file could not be found when the card mounted
    #[error("Audio track not found: {0}")]
    ResourceNotFound(String),

    /// Explicit play was requested before any data had buffered
    #[error("Audio track not loaded yet. Check the track path.")]
    NotLoaded,

    /// The output device refused the playback attempt
    #[error("Playback blocked: {0}")]
    Blocked(String),

    /// An explicit playback attempt was rejected
    #[error("Playback failed: {0}")]
    PlaybackFailed(String),

    /// The track failed to decode or load after mount
    #[error("Error loading audio: {0}")]
    LoadError(String),
}

/// Result type alias using AudioError
pub type CardResult<T> = Result<T, AudioError>;
