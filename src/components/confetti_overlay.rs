//! Confetti overlay.
//!
//! The core emitter computes burst parameters; this side turns each
//! emission into a handful of short-lived DOM pieces that fall through
//! the card. Pieces remove themselves after their animation finishes.

use std::sync::atomic::{AtomicU64, Ordering};

use dioxus::prelude::*;
use rand::Rng;
use tokio::sync::mpsc;
use wishcard_core::{ParticleBurst, ParticleRenderer};

use crate::theme::colors::CONFETTI_COLORS;

/// One DOM piece per this many computed particles keeps the webview light
/// while preserving the decay curve.
const DOM_PARTICLE_DIVISOR: f32 = 10.0;

/// Renderer frames per millisecond of CSS fall animation.
const MS_PER_TICK: u64 = 20;

/// Grace period past the fall animation before a piece is removed.
const REMOVAL_GRACE_MS: u64 = 200;

static NEXT_PIECE_ID: AtomicU64 = AtomicU64::new(0);

/// Bridges the core emitter onto the UI thread.
pub struct ChannelRenderer {
    bursts: mpsc::UnboundedSender<ParticleBurst>,
}

impl ChannelRenderer {
    pub fn new(bursts: mpsc::UnboundedSender<ParticleBurst>) -> Self {
        Self { bursts }
    }
}

impl ParticleRenderer for ChannelRenderer {
    fn emit(&self, burst: ParticleBurst) {
        // During teardown the overlay is already gone; dropped bursts are fine.
        let _ = self.bursts.send(burst);
    }
}

/// One rendered confetti piece.
#[derive(Clone, PartialEq)]
pub struct ConfettiPiece {
    pub id: u64,
    pub left_pct: f64,
    pub top_pct: f64,
    pub drift_px: f64,
    pub color: &'static str,
    pub fall_ms: u64,
    pub z_index: i32,
}

/// Hook for the overlay's piece list.
pub fn use_confetti_pieces() -> Signal<Vec<ConfettiPiece>> {
    use_context::<Signal<Vec<ConfettiPiece>>>()
}

/// Turn one emission into DOM pieces and schedule their removal.
pub fn scatter(burst: &ParticleBurst, mut pieces: Signal<Vec<ConfettiPiece>>) {
    let count = (burst.particle_count / DOM_PARTICLE_DIVISOR).round().max(1.0) as usize;
    let fall_ms = u64::from(burst.ticks) * MS_PER_TICK;

    let mut rng = rand::rng();
    let batch: Vec<ConfettiPiece> = (0..count)
        .map(|_| {
            let id = NEXT_PIECE_ID.fetch_add(1, Ordering::Relaxed);
            ConfettiPiece {
                id,
                left_pct: (burst.origin.x + rng.random_range(-0.04..0.04)) * 100.0,
                top_pct: burst.origin.y * 100.0,
                drift_px: rng.random_range(-90.0..90.0),
                color: CONFETTI_COLORS[id as usize % CONFETTI_COLORS.len()],
                fall_ms,
                z_index: burst.z_index,
            }
        })
        .collect();

    let ids: Vec<u64> = batch.iter().map(|piece| piece.id).collect();
    pieces.write().extend(batch);

    spawn(async move {
        tokio::time::sleep(std::time::Duration::from_millis(fall_ms + REMOVAL_GRACE_MS)).await;
        pieces.write().retain(|piece| !ids.contains(&piece.id));
    });
}

/// Confetti layer, rendered below the interactive controls.
#[component]
pub fn ConfettiOverlay() -> Element {
    let pieces = use_confetti_pieces();

    rsx! {
        div { class: "confetti-layer",
            for piece in pieces() {
                div {
                    key: "{piece.id}",
                    class: "confetti-piece",
                    style: "left: {piece.left_pct}%; top: {piece.top_pct}%; background: {piece.color}; animation-duration: {piece.fall_ms}ms; z-index: {piece.z_index}; --drift: {piece.drift_px}px;",
                }
            }
        }
    }
}
