//! Balloon strip for the letter view.

use dioxus::prelude::*;
use rand::Rng;

use crate::theme::colors::BALLOON_COLORS;

/// Nine balloons in varying shades, staggered across the strip. Float
/// durations are rolled once per mount so re-renders don't restart them.
#[component]
pub fn Balloons() -> Element {
    let durations = use_hook(|| {
        let mut rng = rand::rng();
        BALLOON_COLORS
            .iter()
            .map(|_| 3.0 + rng.random::<f64>() * 2.0)
            .collect::<Vec<f64>>()
    });

    rsx! {
        div { class: "balloon-strip",
            for (index, color) in BALLOON_COLORS.iter().enumerate() {
                {
                    let left = index * 11;
                    let delay = index as f64 * 0.2;
                    let duration = durations[index];

                    rsx! {
                        div {
                            key: "{index}",
                            class: "balloon",
                            style: "left: {left}%; background: {color}; animation-delay: {delay}s; animation-duration: {duration}s;",
                        }
                    }
                }
            }
        }
    }
}
