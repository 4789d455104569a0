//! CardEngine - the entry point tying the card together
//!
//! CardEngine owns the stage machine, the audio controller, and the
//! confetti emitter, and dispatches transition side effects between them.
//! The UI talks only to this facade.
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use wishcard_core::{CardConfig, CardEngine};
//!
//! let mut engine = CardEngine::new(CardConfig::default(), renderer);
//!
//! // Mount sequence: settle, then a best-effort autoplay attempt.
//! tokio::time::sleep(wishcard_core::SETTLE_DELAY).await;
//! engine.autoplay_attempt().await;
//!
//! // The gift click: stage advance + confetti + play request.
//! engine.open_gift().await;
//! ```

use std::sync::Arc;

use tracing::{info, warn};

use crate::audio::AudioController;
use crate::config::CardConfig;
use crate::confetti::{ConfettiEmitter, ParticleRenderer};
use crate::audio::AudioState;
use crate::playback::RodioPlayback;
use crate::stage::{Stage, StageController, StageEffects};

/// Main entry point for the card core.
pub struct CardEngine {
    config: CardConfig,
    stage: StageController,
    audio: AudioController,
    confetti: ConfettiEmitter,
}

impl CardEngine {
    /// Build the engine with the real audio device.
    ///
    /// A missing track puts the audio controller in its terminal failed
    /// state; the rest of the card keeps working.
    pub fn new(config: CardConfig, renderer: Arc<dyn ParticleRenderer>) -> Self {
        let audio = match RodioPlayback::new(&config.track) {
            Ok(playback) => {
                info!("music track: {}", config.track.display());
                AudioController::new(Arc::new(playback))
            }
            Err(error) => {
                warn!("music disabled: {}", error);
                AudioController::failed(error)
            }
        };
        Self::with_audio(config, audio, renderer)
    }

    /// Build the engine around an existing audio controller. Used by
    /// tests to substitute a scripted playback seam.
    pub fn with_audio(
        config: CardConfig,
        audio: AudioController,
        renderer: Arc<dyn ParticleRenderer>,
    ) -> Self {
        Self {
            config,
            stage: StageController::new(),
            audio,
            confetti: ConfettiEmitter::new(renderer),
        }
    }

    pub fn config(&self) -> &CardConfig {
        &self.config
    }

    pub fn stage(&self) -> Stage {
        self.stage.stage()
    }

    pub fn audio_state(&self) -> AudioState {
        self.audio.state()
    }

    /// The gift click: advance to the birthday view, start confetti, and
    /// request playback unless music is already going.
    pub async fn open_gift(&mut self) {
        let playing = self.audio.state().playing;
        let effects = self.stage.open_gift(playing);
        self.dispatch(effects).await;
    }

    /// Advance from the birthday view to the letter.
    pub fn reveal_message(&mut self) {
        self.stage.reveal_message();
    }

    /// Re-run the confetti from the letter view.
    pub fn replay_confetti(&self) {
        let effects = self.stage.replay_confetti();
        if effects.burst_confetti {
            let _ = self.confetti.burst();
        }
    }

    /// The one automatic playback attempt after [`crate::SETTLE_DELAY`].
    pub async fn autoplay_attempt(&mut self) {
        self.audio.autoplay_attempt().await;
    }

    /// Explicit play request from any of the manual controls.
    pub async fn request_play(&mut self) {
        self.audio.request_play().await;
    }

    /// Music toggle button.
    pub async fn toggle_audio(&mut self) {
        self.audio.toggle().await;
    }

    /// One-shot document-wide interaction fallback.
    pub async fn on_first_interaction(&mut self) {
        self.audio.on_first_interaction().await;
    }

    /// Absorb an asynchronous loader failure, if one arrived.
    pub fn poll_load_failure(&mut self) {
        self.audio.poll_load_failure();
    }

    async fn dispatch(&mut self, effects: StageEffects) {
        if effects.burst_confetti {
            let _ = self.confetti.burst();
        }
        if effects.request_play {
            self.audio.request_play().await;
        }
    }
}
