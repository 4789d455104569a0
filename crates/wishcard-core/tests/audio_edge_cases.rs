//! Audio edge cases and terminal failure behavior

mod common;

use std::path::Path;

use common::{RecordingRenderer, ScriptedPlayback};
use wishcard_core::{
    AudioController, AudioError, CardConfig, CardEngine, PlayFailure, Readiness, RodioPlayback,
    Stage,
};

// ============================================================================
// Terminal failures
// ============================================================================

/// A missing track file fails at construction, before any device work.
#[test]
fn missing_track_fails_at_mount() {
    let err = RodioPlayback::new(Path::new("/definitely/not/here.mp3")).unwrap_err();
    assert!(matches!(err, AudioError::ResourceNotFound(_)));
}

/// Resource-not-found is terminal: no play or pause call reanimates it.
#[tokio::test]
async fn resource_not_found_is_terminal() {
    let mut config = CardConfig::default();
    config.track = "/definitely/not/here.mp3".into();
    let mut engine = CardEngine::new(config, RecordingRenderer::new());

    let state = engine.audio_state();
    assert!(state.failed);
    assert!(!state.playing);
    assert!(!state.show_prompt);
    assert!(state.error.as_deref().unwrap_or_default().contains("not found"));

    engine.autoplay_attempt().await;
    engine.request_play().await;
    engine.toggle_audio().await;
    engine.on_first_interaction().await;

    let state = engine.audio_state();
    assert!(state.failed);
    assert!(!state.playing);

    // The rest of the card still works.
    engine.open_gift().await;
    assert_eq!(engine.stage(), Stage::Birthday);
}

/// An asynchronous loader failure after mount is terminal as well.
#[tokio::test]
async fn late_load_failure_is_terminal() {
    let playback = ScriptedPlayback::always_ok();
    let mut controller = AudioController::new(playback.clone());

    controller.autoplay_attempt().await;
    assert!(controller.state().playing);

    *playback.load_failure.lock().unwrap() = Some("corrupt frame header".to_string());
    controller.poll_load_failure();

    let state = controller.state();
    assert!(state.failed);
    assert!(!state.playing);
    assert!(state.error.unwrap().contains("corrupt frame header"));

    controller.request_play().await;
    assert!(controller.state().failed);
    assert!(!controller.state().playing);
}

// ============================================================================
// Recoverable failures
// ============================================================================

/// Explicit play with nothing buffered: NotLoaded, prompt stays, no playback.
#[tokio::test]
async fn explicit_play_with_zero_buffered_data() {
    let playback = ScriptedPlayback::always_ok();
    *playback.readiness.lock().unwrap() = Readiness::NoData;
    let mut controller = AudioController::new(playback.clone());

    controller.request_play().await;

    let state = controller.state();
    assert!(!state.playing);
    assert!(state.show_prompt);
    assert!(state.error.unwrap().contains("not loaded"));
    assert_eq!(*playback.plays.lock().unwrap(), 0, "attempt never reached the device");

    // Retry works once buffering completes.
    *playback.readiness.lock().unwrap() = Readiness::Ready;
    controller.request_play().await;
    let state = controller.state();
    assert!(state.playing && state.started);
    assert!(state.error.is_none());
}

/// The autoplay/explicit asymmetry: the same refusal is silent on the
/// automatic path and user-visible on the explicit one.
#[tokio::test]
async fn denial_asymmetry_between_autoplay_and_explicit() {
    let refusal = || Err(PlayFailure::Blocked("output device refused".to_string()));

    let mut controller = AudioController::new(ScriptedPlayback::scripted(vec![refusal()]));
    controller.autoplay_attempt().await;
    assert!(controller.state().error.is_none());
    assert!(controller.state().show_prompt);

    let mut controller = AudioController::new(ScriptedPlayback::scripted(vec![refusal()]));
    controller.request_play().await;
    let state = controller.state();
    assert!(state.error.unwrap().contains("output device refused"));
    assert!(state.show_prompt);
    assert!(!state.failed, "explicit refusal stays recoverable");
}

/// Pause then resume keeps the started flag and never re-prompts.
#[tokio::test]
async fn pause_resume_cycle() {
    let playback = ScriptedPlayback::always_ok();
    let mut controller = AudioController::new(playback.clone());

    controller.request_play().await;
    controller.toggle().await;

    let state = controller.state();
    assert!(state.started);
    assert!(!state.playing);
    assert!(!state.show_prompt, "prompt stays hidden once playback has succeeded");
    assert_eq!(*playback.pauses.lock().unwrap(), 1);

    controller.toggle().await;
    assert!(controller.state().playing);
}

/// The interaction fallback does nothing once playback has started.
#[tokio::test]
async fn interaction_fallback_skipped_after_start() {
    let playback = ScriptedPlayback::always_ok();
    let mut controller = AudioController::new(playback.clone());

    controller.autoplay_attempt().await;
    assert!(controller.state().playing);

    controller.on_first_interaction().await;
    assert_eq!(*playback.plays.lock().unwrap(), 1, "no extra attempt");
}

// ============================================================================
// Engine wiring
// ============================================================================

/// A failed explicit attempt during the gift click still advances the stage
/// and still runs confetti; audio errors never block the card.
#[tokio::test(start_paused = true)]
async fn gift_click_survives_play_failure() {
    let playback = ScriptedPlayback::scripted(vec![Err(PlayFailure::Failed(
        "stream underrun".to_string(),
    ))]);
    let renderer = RecordingRenderer::new();
    let mut engine = CardEngine::with_audio(
        CardConfig::default(),
        AudioController::new(playback),
        renderer.clone(),
    );

    engine.open_gift().await;

    assert_eq!(engine.stage(), Stage::Birthday);
    let state = engine.audio_state();
    assert!(!state.playing);
    assert!(state.show_prompt);
    assert!(state.error.unwrap().contains("stream underrun"));

    tokio::time::sleep(wishcard_core::BURST_DURATION * 2).await;
    assert_eq!(renderer.count(), 16, "confetti unaffected by the audio failure");
}
