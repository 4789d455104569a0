//! Engine context for the card UI.
//!
//! The [`CardEngine`] lives behind an `Arc<RwLock<_>>` provided from the
//! root component; stage and audio snapshots are mirrored into plain
//! signals so views re-render without touching the lock.

use std::sync::Arc;

use dioxus::prelude::*;
use tokio::sync::RwLock;
use wishcard_core::{AudioState, CardConfig, CardEngine, Stage};

/// Shared engine type for context.
pub type SharedCard = Arc<RwLock<CardEngine>>;

/// Hook to access the CardEngine from context.
pub fn use_card() -> Signal<SharedCard> {
    use_context::<Signal<SharedCard>>()
}

/// Hook for the mirrored stage snapshot.
pub fn use_stage() -> Signal<Stage> {
    use_context::<Signal<Stage>>()
}

/// Hook for the mirrored audio snapshot.
pub fn use_audio_state() -> Signal<AudioState> {
    use_context::<Signal<AudioState>>()
}

/// Hook for the card content.
pub fn use_card_config() -> Signal<CardConfig> {
    use_context::<Signal<CardConfig>>()
}

/// Copy the engine's stage and audio snapshots into the UI signals.
///
/// Called after every engine operation so the prompt, error banner, and
/// active view always reflect the latest transition.
pub async fn sync_signals(
    shared: &SharedCard,
    mut stage: Signal<Stage>,
    mut audio: Signal<AudioState>,
) {
    let guard = shared.read().await;
    stage.set(guard.stage());
    audio.set(guard.audio_state());
}
