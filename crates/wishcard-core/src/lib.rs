//! Wishcard Core Library
//!
//! The embeddable state core of an animated greeting card: a forward-only
//! view-stage machine, a music controller with best-effort autoplay, and a
//! timed confetti emitter.
//!
//! ## Overview
//!
//! Three cooperating pieces, all event-driven on one runtime:
//!
//! - **StageController**: Gift → Birthday → Message, never backwards
//! - **AudioController**: looping track playback behind a [`Playback`]
//!   seam, with an automatic attempt after a settle delay and graceful
//!   degradation when the device refuses or the track is broken
//! - **ConfettiEmitter**: independent self-terminating burst timers that
//!   feed a [`ParticleRenderer`] collaborator
//!
//! [`CardEngine`] ties them together and is the only type the UI needs.

pub mod audio;
pub mod config;
pub mod confetti;
pub mod engine;
pub mod error;
pub mod playback;
pub mod stage;

// Re-exports
pub use audio::{AudioController, AudioState, PlayFailure, Playback, Readiness, SETTLE_DELAY};
pub use config::CardConfig;
pub use confetti::{
    ConfettiEmitter, Origin, ParticleBurst, ParticleRenderer, BURST_DURATION,
    INITIAL_PARTICLE_COUNT, TICK_INTERVAL,
};
pub use engine::CardEngine;
pub use error::{AudioError, CardResult};
pub use playback::RodioPlayback;
pub use stage::{Stage, StageController, StageEffects};
