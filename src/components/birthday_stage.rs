//! Birthday stage: headline greeting with staggered reveals.

use dioxus::prelude::*;

use crate::context::{sync_signals, use_audio_state, use_card, use_card_config, use_stage};

/// The greeting view. Children fade in one after another; the button
/// advances to the letter.
#[component]
pub fn BirthdayStage() -> Element {
    let card = use_card();
    let stage = use_stage();
    let audio = use_audio_state();
    let config = use_card_config();

    let reveal = move |_| {
        spawn(async move {
            let shared = card();
            shared.write().await.reveal_message();
            sync_signals(&shared, stage, audio).await;
        });
    };

    let content = config();

    rsx! {
        div { class: "stage card-panel card-enter",
            h1 { class: "headline reveal reveal-1", "Happy Birthday {content.recipient}!" }
            p { class: "subtitle reveal reveal-2", "{content.subtitle}" }
            div { class: "panel-actions reveal reveal-3",
                button { class: "btn-primary", onclick: reveal, "{content.reveal_label}" }
            }
        }
    }
}
