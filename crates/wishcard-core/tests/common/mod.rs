//! Shared test doubles: a scripted playback seam and a recording renderer.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::Arc;
use std::sync::Mutex;
use std::time::Duration;

use tokio::time::Instant;
use wishcard_core::{ParticleBurst, ParticleRenderer, PlayFailure, Playback, Readiness};

/// Playback fake driven by a queue of scripted play outcomes.
/// Once the queue is empty every attempt succeeds.
pub struct ScriptedPlayback {
    pub readiness: Mutex<Readiness>,
    pub play_results: Mutex<VecDeque<Result<(), PlayFailure>>>,
    pub load_failure: Mutex<Option<String>>,
    pub volumes: Mutex<Vec<f32>>,
    pub plays: Mutex<usize>,
    pub pauses: Mutex<usize>,
}

impl ScriptedPlayback {
    pub fn scripted(results: Vec<Result<(), PlayFailure>>) -> Arc<Self> {
        Arc::new(Self {
            readiness: Mutex::new(Readiness::Ready),
            play_results: Mutex::new(results.into()),
            load_failure: Mutex::new(None),
            volumes: Mutex::new(Vec::new()),
            plays: Mutex::new(0),
            pauses: Mutex::new(0),
        })
    }

    pub fn always_ok() -> Arc<Self> {
        Self::scripted(Vec::new())
    }
}

#[async_trait::async_trait]
impl Playback for ScriptedPlayback {
    fn readiness(&self) -> Readiness {
        *self.readiness.lock().unwrap()
    }

    async fn play(&self) -> Result<(), PlayFailure> {
        *self.plays.lock().unwrap() += 1;
        self.play_results
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Ok(()))
    }

    fn pause(&self) {
        *self.pauses.lock().unwrap() += 1;
    }

    fn set_volume(&self, volume: f32) {
        self.volumes.lock().unwrap().push(volume);
    }

    fn load_failure(&self) -> Option<String> {
        self.load_failure.lock().unwrap().take()
    }
}

/// Renderer that records every emission with the time it arrived.
pub struct RecordingRenderer {
    epoch: Instant,
    emissions: Mutex<Vec<(Duration, ParticleBurst)>>,
}

impl RecordingRenderer {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            epoch: Instant::now(),
            emissions: Mutex::new(Vec::new()),
        })
    }

    pub fn elapsed(&self) -> Duration {
        self.epoch.elapsed()
    }

    pub fn count(&self) -> usize {
        self.emissions.lock().unwrap().len()
    }

    pub fn emissions(&self) -> Vec<(Duration, ParticleBurst)> {
        self.emissions.lock().unwrap().clone()
    }

    pub fn clear(&self) {
        self.emissions.lock().unwrap().clear();
    }
}

impl ParticleRenderer for RecordingRenderer {
    fn emit(&self, burst: ParticleBurst) {
        self.emissions
            .lock()
            .unwrap()
            .push((self.epoch.elapsed(), burst));
    }
}
