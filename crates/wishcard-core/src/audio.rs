//! Music playback control with best-effort autoplay
//!
//! One looping track, two ways in: an automatic attempt shortly after
//! mount, and explicit user action (the prompt, the toggle, the gift
//! click). The automatic attempt is allowed to be refused without fuss;
//! explicit attempts report their failures. Either way every outcome is
//! absorbed into [`AudioState`] — playback problems never take down the
//! card.

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, info, warn};

use crate::error::AudioError;

/// Wait after mount before the automatic playback attempt, giving the
/// track time to buffer.
pub const SETTLE_DELAY: Duration = Duration::from_millis(1000);

/// Buffering state of the underlying track.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Readiness {
    /// No data decoded yet
    NoData,
    /// Enough data to start playback
    Ready,
}

/// Why a backend refused to start playback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayFailure {
    /// The output device refused or is unavailable
    Blocked(String),
    /// Anything else that stopped playback from starting
    Failed(String),
}

impl PlayFailure {
    pub fn message(&self) -> &str {
        match self {
            PlayFailure::Blocked(msg) | PlayFailure::Failed(msg) => msg,
        }
    }
}

/// Seam to the audio output.
///
/// Implementations: [`RodioPlayback`](crate::playback::RodioPlayback) for
/// the real device, scripted fakes in tests. Playback outcomes come back
/// as explicit results so every call site handles both.
#[async_trait::async_trait]
pub trait Playback: Send + Sync {
    /// Whether any data has buffered yet.
    fn readiness(&self) -> Readiness;

    /// Attempt to start (or resume) playback.
    async fn play(&self) -> Result<(), PlayFailure>;

    /// Pause playback. Never fails; pausing silence is fine.
    fn pause(&self);

    /// Set output volume, 0.0..=1.0.
    fn set_volume(&self, volume: f32);

    /// Take an asynchronous loader failure, if one has been reported.
    fn load_failure(&self) -> Option<String>;
}

/// Snapshot of playback state as the UI should render it.
///
/// `playing` and `show_prompt` are never both true.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioState {
    /// Playback has succeeded at least once
    pub started: bool,
    /// Currently audible
    pub playing: bool,
    /// Last playback/loading failure, as display text
    pub error: Option<String>,
    /// Show the manual "click to play" affordance
    pub show_prompt: bool,
    /// Terminal failure; play and pause no longer do anything
    pub failed: bool,
}

impl Default for AudioState {
    fn default() -> Self {
        Self {
            started: false,
            playing: false,
            error: None,
            // Prompt until something succeeds.
            show_prompt: true,
            failed: false,
        }
    }
}

/// Owns the playback seam and derives [`AudioState`] from every outcome.
pub struct AudioController {
    /// None when the track never resolved at mount.
    playback: Option<Arc<dyn Playback>>,
    state: AudioState,
    /// The document-wide fallback trigger fires at most once.
    interaction_consumed: bool,
}

impl AudioController {
    pub fn new(playback: Arc<dyn Playback>) -> Self {
        Self {
            playback: Some(playback),
            state: AudioState::default(),
            interaction_consumed: false,
        }
    }

    /// Terminal from birth: the track was missing at mount.
    pub fn failed(error: AudioError) -> Self {
        let mut controller = Self {
            playback: None,
            state: AudioState::default(),
            interaction_consumed: false,
        };
        controller.fail(error);
        controller
    }

    /// Current state snapshot.
    pub fn state(&self) -> AudioState {
        self.state.clone()
    }

    /// The one automatic playback attempt, made [`SETTLE_DELAY`] after
    /// mount. Refusal here is expected (device busy, policy) and records
    /// no error; the manual prompt stays up instead.
    pub async fn autoplay_attempt(&mut self) {
        self.absorb_load_failure();
        if self.state.failed {
            return;
        }
        let Some(playback) = self.playback.clone() else {
            return;
        };

        info!("attempting music autoplay");
        match playback.play().await {
            Ok(()) => {
                info!("autoplay succeeded");
                self.mark_playing();
            }
            Err(failure) => {
                info!("autoplay prevented: {}", failure.message());
                self.state.show_prompt = true;
            }
        }
    }

    /// Explicit play request: the prompt, the gift click, the start-music
    /// button, or the toggle while idle.
    pub async fn request_play(&mut self) {
        self.absorb_load_failure();
        if self.state.failed {
            return;
        }
        let Some(playback) = self.playback.clone() else {
            return;
        };

        if playback.readiness() == Readiness::NoData {
            warn!("play requested before any audio data buffered");
            self.state.error = Some(AudioError::NotLoaded.to_string());
            self.state.show_prompt = true;
            return;
        }

        playback.set_volume(1.0);
        match playback.play().await {
            Ok(()) => {
                info!("music playback started");
                self.mark_playing();
            }
            Err(failure) => {
                warn!("music playback failed: {}", failure.message());
                self.state.error =
                    Some(AudioError::PlaybackFailed(failure.message().to_string()).to_string());
                self.state.show_prompt = true;
                self.state.playing = false;
            }
        }
    }

    /// Pause when playing, otherwise the explicit play path.
    pub async fn toggle(&mut self) {
        if self.state.failed {
            return;
        }
        if self.state.playing {
            if let Some(playback) = &self.playback {
                playback.pause();
            }
            debug!("music paused");
            self.state.playing = false;
        } else {
            self.request_play().await;
        }
    }

    /// Document-wide interaction fallback. Consumed on first call whether
    /// or not a play attempt is needed.
    pub async fn on_first_interaction(&mut self) {
        if self.interaction_consumed {
            return;
        }
        self.interaction_consumed = true;
        if self.state.started || self.state.failed {
            return;
        }
        debug!("first user interaction, retrying playback");
        self.request_play().await;
    }

    /// Absorb an asynchronous loader failure reported after mount.
    /// Terminal for the track.
    pub fn poll_load_failure(&mut self) {
        self.absorb_load_failure();
    }

    fn absorb_load_failure(&mut self) {
        if self.state.failed {
            return;
        }
        let failure = self.playback.as_ref().and_then(|p| p.load_failure());
        if let Some(msg) = failure {
            self.fail(AudioError::LoadError(msg));
        }
    }

    fn mark_playing(&mut self) {
        self.state.started = true;
        self.state.playing = true;
        self.state.show_prompt = false;
        self.state.error = None;
    }

    fn fail(&mut self, error: AudioError) {
        warn!("audio unavailable: {}", error);
        self.state.failed = true;
        self.state.playing = false;
        // The prompt would be a dead control now; the error banner and
        // fallback row take over.
        self.state.show_prompt = false;
        self.state.error = Some(error.to_string());
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;
    use std::sync::Mutex;

    use super::*;

    struct FakePlayback {
        readiness: Mutex<Readiness>,
        play_results: Mutex<VecDeque<Result<(), PlayFailure>>>,
        load_failure: Mutex<Option<String>>,
        volumes: Mutex<Vec<f32>>,
        pauses: Mutex<usize>,
    }

    impl FakePlayback {
        fn scripted(results: Vec<Result<(), PlayFailure>>) -> Arc<Self> {
            Arc::new(Self {
                readiness: Mutex::new(Readiness::Ready),
                play_results: Mutex::new(results.into()),
                load_failure: Mutex::new(None),
                volumes: Mutex::new(Vec::new()),
                pauses: Mutex::new(0),
            })
        }
    }

    #[async_trait::async_trait]
    impl Playback for FakePlayback {
        fn readiness(&self) -> Readiness {
            *self.readiness.lock().unwrap()
        }

        async fn play(&self) -> Result<(), PlayFailure> {
            self.play_results
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or(Ok(()))
        }

        fn pause(&self) {
            *self.pauses.lock().unwrap() += 1;
        }

        fn set_volume(&self, volume: f32) {
            self.volumes.lock().unwrap().push(volume);
        }

        fn load_failure(&self) -> Option<String> {
            self.load_failure.lock().unwrap().take()
        }
    }

    #[tokio::test]
    async fn autoplay_success_hides_prompt() {
        let mut controller = AudioController::new(FakePlayback::scripted(vec![Ok(())]));
        controller.autoplay_attempt().await;

        let state = controller.state();
        assert!(state.started && state.playing);
        assert!(!state.show_prompt);
        assert!(state.error.is_none());
    }

    #[tokio::test]
    async fn autoplay_denial_prompts_without_error() {
        let fake = FakePlayback::scripted(vec![Err(PlayFailure::Blocked("device busy".into()))]);
        let mut controller = AudioController::new(fake);
        controller.autoplay_attempt().await;

        let state = controller.state();
        assert!(!state.playing);
        assert!(state.show_prompt);
        // Expected denial, not an error.
        assert!(state.error.is_none());
    }

    #[tokio::test]
    async fn explicit_play_before_buffering_reports_not_loaded() {
        let fake = FakePlayback::scripted(vec![Ok(())]);
        *fake.readiness.lock().unwrap() = Readiness::NoData;
        let mut controller = AudioController::new(fake.clone());
        controller.request_play().await;

        let state = controller.state();
        assert!(!state.playing);
        assert!(state.show_prompt);
        assert!(state.error.unwrap().contains("not loaded"));
        // The attempt never reached the backend.
        assert!(fake.volumes.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn explicit_failure_reports_and_reprompts() {
        let fake = FakePlayback::scripted(vec![
            Err(PlayFailure::Failed("stream closed".into())),
            Ok(()),
        ]);
        let mut controller = AudioController::new(fake.clone());

        controller.request_play().await;
        let state = controller.state();
        assert!(!state.playing);
        assert!(state.show_prompt);
        assert!(state.error.unwrap().contains("stream closed"));

        // Recoverable: the next attempt clears the error.
        controller.request_play().await;
        let state = controller.state();
        assert!(state.playing);
        assert!(state.error.is_none());
        assert_eq!(*fake.volumes.lock().unwrap(), vec![1.0, 1.0]);
    }

    #[tokio::test]
    async fn toggle_pauses_and_resumes() {
        let fake = FakePlayback::scripted(vec![Ok(()), Ok(())]);
        let mut controller = AudioController::new(fake.clone());

        controller.toggle().await;
        assert!(controller.state().playing);

        controller.toggle().await;
        assert!(!controller.state().playing);
        assert!(controller.state().error.is_none());
        assert_eq!(*fake.pauses.lock().unwrap(), 1);

        controller.toggle().await;
        assert!(controller.state().playing);
    }

    #[tokio::test]
    async fn first_interaction_fires_at_most_once() {
        let fake = FakePlayback::scripted(vec![
            Err(PlayFailure::Failed("still warming up".into())),
            Ok(()),
        ]);
        let mut controller = AudioController::new(fake.clone());

        controller.on_first_interaction().await;
        assert!(!controller.state().playing);

        // Consumed: the second interaction must not retry.
        controller.on_first_interaction().await;
        assert!(!controller.state().playing);
        assert_eq!(fake.play_results.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn load_failure_is_terminal() {
        let fake = FakePlayback::scripted(vec![Ok(())]);
        *fake.load_failure.lock().unwrap() = Some("malformed frame".into());
        let mut controller = AudioController::new(fake);

        controller.request_play().await;
        let state = controller.state();
        assert!(state.failed);
        assert!(!state.playing);
        assert!(!state.show_prompt);
        assert!(state.error.unwrap().contains("malformed frame"));

        // No retry path reanimates it.
        controller.request_play().await;
        controller.toggle().await;
        assert!(controller.state().failed);
        assert!(!controller.state().playing);
    }
}
