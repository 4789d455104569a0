//! Root application component.
//!
//! Owns the shared engine, the mount-time autoplay sequence, the one-shot
//! interaction fallback, and the stage dispatch. Exactly one of the three
//! stage views renders at a time.

use std::sync::Arc;

use dioxus::prelude::*;
use tokio::sync::{mpsc, Mutex, RwLock};
use wishcard_core::{AudioState, CardEngine, ParticleBurst, Stage, SETTLE_DELAY};

use crate::components::{
    scatter, AudioControls, BirthdayStage, ChannelRenderer, ConfettiOverlay, ConfettiPiece,
    GiftStage, MessageStage,
};
use crate::context::{sync_signals, SharedCard};
use crate::theme::GLOBAL_STYLES;

/// Handles created once per app instance.
#[derive(Clone)]
struct CardRuntime {
    shared: SharedCard,
    /// Burst emissions from the core emitter, drained onto the overlay
    bursts: Arc<Mutex<mpsc::UnboundedReceiver<ParticleBurst>>>,
}

/// Root application component.
///
/// Provides global styles, the engine context, and the stage dispatch.
#[component]
pub fn App() -> Element {
    let config = use_signal(crate::card_config);
    let stage: Signal<Stage> = use_signal(|| Stage::Gift);
    let audio: Signal<AudioState> = use_signal(AudioState::default);
    let pieces: Signal<Vec<ConfettiPiece>> = use_signal(Vec::new);

    let runtime = use_hook(|| {
        let (bursts_tx, bursts_rx) = mpsc::unbounded_channel();
        let engine = CardEngine::new(crate::card_config(), Arc::new(ChannelRenderer::new(bursts_tx)));
        CardRuntime {
            shared: Arc::new(RwLock::new(engine)),
            bursts: Arc::new(Mutex::new(bursts_rx)),
        }
    });
    let card: Signal<SharedCard> = use_signal(|| runtime.shared.clone());

    // Provide engine context to all child components
    use_context_provider(|| card);
    use_context_provider(|| config);
    use_context_provider(|| stage);
    use_context_provider(|| audio);
    use_context_provider(|| pieces);

    // Drain burst emissions into overlay pieces.
    let bursts = runtime.bursts.clone();
    use_effect(move || {
        let bursts = bursts.clone();
        spawn(async move {
            let mut rx = bursts.lock().await;
            while let Some(burst) = rx.recv().await {
                scatter(&burst, pieces);
            }
        });
    });

    // Mount sequence: immediate snapshot (the track may already have failed
    // to resolve), then settle, then the one automatic playback attempt.
    // Cancelled on teardown so a late attempt never lands on a dead view.
    let mut mount_task: Signal<Option<Task>> = use_signal(|| None);
    use_effect(move || {
        let shared = card();
        let task = spawn(async move {
            sync_signals(&shared, stage, audio).await;

            tokio::time::sleep(SETTLE_DELAY).await;
            {
                let mut guard = shared.write().await;
                guard.poll_load_failure();
                guard.autoplay_attempt().await;
            }
            sync_signals(&shared, stage, audio).await;
        });
        mount_task.set(Some(task));
    });

    use_drop(move || {
        if let Some(task) = mount_task.take() {
            task.cancel();
            tracing::debug!("cancelled mount-time autoplay task");
        }
    });

    // Document-wide interaction fallback: consumed on the first click or
    // touch anywhere in the shell, then never again.
    let mut interaction_seen = use_signal(|| false);
    let on_first_interaction = move |_| {
        if interaction_seen() {
            return;
        }
        interaction_seen.set(true);
        let shared = card();
        spawn(async move {
            shared.write().await.on_first_interaction().await;
            sync_signals(&shared, stage, audio).await;
        });
    };

    rsx! {
        style { {GLOBAL_STYLES} }
        div { class: "card-shell", onclick: on_first_interaction,
            ConfettiOverlay {}
            AudioControls {}
            div { class: "card-frame",
                {match stage() {
                    Stage::Gift => rsx! { GiftStage {} },
                    Stage::Birthday => rsx! { BirthdayStage {} },
                    Stage::Message => rsx! { MessageStage {} },
                }}
            }
        }
    }
}
