//! Gift stage: the wrapped present waiting for a click.

use dioxus::prelude::*;

use crate::context::{sync_signals, use_audio_state, use_card, use_stage};

/// The opening view. Clicking the gift advances the card, starts the
/// confetti, and requests music; the extra button below starts music
/// without opening the gift.
#[component]
pub fn GiftStage() -> Element {
    let card = use_card();
    let stage = use_stage();
    let audio = use_audio_state();

    let open = move |_| {
        spawn(async move {
            let shared = card();
            shared.write().await.open_gift().await;
            sync_signals(&shared, stage, audio).await;
        });
    };

    let start_music = move |_| {
        spawn(async move {
            let shared = card();
            shared.write().await.request_play().await;
            sync_signals(&shared, stage, audio).await;
        });
    };

    rsx! {
        div { class: "stage gift-stage card-enter",
            div { class: "gift-box", onclick: open,
                span { class: "gift-icon", "🎁" }
                p { class: "gift-hint", "Press me" }
            }
            button { class: "btn-primary start-music", onclick: start_music,
                "Start Music"
            }
        }
    }
}
