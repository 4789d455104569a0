//! Message stage: the letter, a replay button, and the balloon strip.

use dioxus::prelude::*;

use crate::components::Balloons;
use crate::context::{use_card, use_card_config};

/// The final view. "Celebrate Again!" re-runs the confetti without
/// changing stage; nothing here touches the music.
#[component]
pub fn MessageStage() -> Element {
    let card = use_card();
    let config = use_card_config();

    let celebrate = move |_| {
        spawn(async move {
            let shared = card();
            shared.read().await.replay_confetti();
        });
    };

    let content = config();

    rsx! {
        div { class: "stage card-panel card-enter",
            h2 { class: "headline reveal reveal-1", "{content.letter_title}" }

            div { class: "letter reveal reveal-2",
                for (index, paragraph) in content.letter.iter().enumerate() {
                    p { key: "{index}", class: "letter-paragraph", "{paragraph}" }
                }
                p { class: "letter-signoff", "{content.signoff}" }
            }

            div { class: "panel-actions reveal reveal-3",
                button { class: "btn-primary", onclick: celebrate, "Celebrate Again!" }
            }

            Balloons {}
        }
    }
}
