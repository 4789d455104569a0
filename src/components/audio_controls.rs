//! Fixed audio controls: toggle button, manual-play prompt, error banner.
//!
//! Everything here is derived from the latest audio snapshot;
//! the prompt and the toggle label always reflect the last transition.

use dioxus::prelude::*;

use crate::context::{sync_signals, use_audio_state, use_card, use_card_config, use_stage};

#[component]
pub fn AudioControls() -> Element {
    let card = use_card();
    let stage = use_stage();
    let audio = use_audio_state();
    let config = use_card_config();

    let toggle = move |_| {
        spawn(async move {
            let shared = card();
            shared.write().await.toggle_audio().await;
            sync_signals(&shared, stage, audio).await;
        });
    };

    let prompt_play = move |_| {
        spawn(async move {
            let shared = card();
            shared.write().await.request_play().await;
            sync_signals(&shared, stage, audio).await;
        });
    };

    let state = audio();
    let track_title = config().track_title;
    let track_path = config().track.display().to_string();
    let error_text = state.error.clone().unwrap_or_default();

    rsx! {
        div { class: "audio-dock",
            button { class: "btn-outline audio-toggle", onclick: toggle,
                if state.playing {
                    span { class: "audio-icon", "🔊" }
                    span { "Music Playing" }
                } else {
                    span { class: "audio-icon", "🔇" }
                    span { "Play Music" }
                }
            }
        }

        if state.show_prompt {
            div { class: "audio-prompt",
                span { class: "audio-icon", "🎵" }
                button { class: "prompt-link", onclick: prompt_play,
                    "Click here to play {track_title}"
                }
            }
        }

        if state.error.is_some() {
            div { class: "audio-error",
                span { class: "audio-icon audio-error-icon", "⚠" }
                div {
                    p { class: "audio-error-title", "Music Error" }
                    p { class: "audio-error-text", "{error_text}" }
                    if state.failed {
                        p { class: "audio-error-hint",
                            "Make sure {track_path} exists and is a playable audio file"
                        }
                    }
                }
            }
        }
    }
}
