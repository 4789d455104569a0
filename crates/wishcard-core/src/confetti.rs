//! Timed confetti bursts
//!
//! Each burst is an independent, self-terminating timer task: for two
//! seconds it emits particles every 250ms from two symmetric screen bands,
//! with the particle count decaying linearly to zero. The emitter only
//! computes parameters and cadence; drawing is the renderer's job.

use std::sync::Arc;
use std::time::Duration;

use rand::Rng;
use tokio::task::JoinHandle;
use tokio::time::Instant;
use tracing::debug;

/// Total length of one burst window.
pub const BURST_DURATION: Duration = Duration::from_millis(2000);

/// Interval between emission ticks. The first tick fires immediately.
pub const TICK_INTERVAL: Duration = Duration::from_millis(250);

/// Particle count at the start of a burst.
pub const INITIAL_PARTICLE_COUNT: f32 = 50.0;

/// Launch point of an emission, in viewport fractions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Origin {
    pub x: f64,
    pub y: f64,
}

/// Parameters for one particle emission, handed to the renderer as-is.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParticleBurst {
    /// How many particles to spawn (decays linearly over the burst)
    pub particle_count: f32,
    pub origin: Origin,
    pub start_velocity: f32,
    /// Scatter angle in degrees
    pub spread: f32,
    /// Particle lifetime in renderer frames
    pub ticks: u32,
    /// Kept below interactive UI layers
    pub z_index: i32,
}

impl ParticleBurst {
    fn with_defaults(particle_count: f32, origin: Origin) -> Self {
        Self {
            particle_count,
            origin,
            start_velocity: 30.0,
            spread: 360.0,
            ticks: 60,
            z_index: 0,
        }
    }
}

/// Collaborator that actually draws an emission.
///
/// Implementations: the desktop overlay renderer, recording fakes in tests.
pub trait ParticleRenderer: Send + Sync {
    fn emit(&self, burst: ParticleBurst);
}

/// Linear decay law: particle count for the remaining burst time.
pub fn particle_count_at(time_left: Duration, total: Duration) -> f32 {
    INITIAL_PARTICLE_COUNT * (time_left.as_secs_f32() / total.as_secs_f32())
}

/// Spawns confetti burst tasks against a shared renderer.
///
/// Bursts are fully independent: overlapping invocations each run their own
/// timer and stop at their own deadline. Nothing needs to cancel them.
pub struct ConfettiEmitter {
    renderer: Arc<dyn ParticleRenderer>,
}

impl ConfettiEmitter {
    pub fn new(renderer: Arc<dyn ParticleRenderer>) -> Self {
        Self { renderer }
    }

    /// Start one burst. Returns the timer task handle; callers normally
    /// drop it, tests await it.
    pub fn burst(&self) -> JoinHandle<()> {
        let renderer = Arc::clone(&self.renderer);
        tokio::spawn(async move {
            let end = Instant::now() + BURST_DURATION;
            let mut ticks = tokio::time::interval(TICK_INTERVAL);
            debug!("confetti burst started");

            loop {
                ticks.tick().await;
                let now = Instant::now();
                if now >= end {
                    break;
                }
                let count = particle_count_at(end - now, BURST_DURATION);

                // One emission per side band, sharing the tick's vertical jitter.
                let (left_x, right_x, y) = {
                    let mut rng = rand::rng();
                    (
                        rng.random_range(0.1..0.3),
                        rng.random_range(0.7..0.9),
                        rng.random::<f64>() - 0.2,
                    )
                };
                renderer.emit(ParticleBurst::with_defaults(count, Origin { x: left_x, y }));
                renderer.emit(ParticleBurst::with_defaults(count, Origin { x: right_x, y }));
            }
            debug!("confetti burst expired");
        })
    }
}
