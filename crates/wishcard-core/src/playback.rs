//! Rodio-backed playback
//!
//! `OutputStream` is tied to the thread that opens it, so all device work
//! lives on one dedicated thread driven by a command channel. Playback
//! outcomes travel back over oneshot replies; loader failures are parked
//! for the controller to poll.
//!
//! The output device is opened lazily on the first play command. An
//! unavailable device therefore surfaces as a blocked attempt, which the
//! controller treats as the expected autoplay denial.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;
use rodio::decoder::LoopedDecoder;
use rodio::{Decoder, OutputStream, Sink};
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, warn};

use crate::audio::{PlayFailure, Playback, Readiness};
use crate::error::AudioError;

enum Command {
    Play {
        reply: oneshot::Sender<Result<(), PlayFailure>>,
    },
    Pause,
    SetVolume(f32),
}

/// Looping track playback on a dedicated output thread.
#[derive(Debug)]
pub struct RodioPlayback {
    commands: mpsc::UnboundedSender<Command>,
    ready: Arc<AtomicBool>,
    load_failure: Arc<Mutex<Option<String>>>,
}

impl RodioPlayback {
    /// Check the track exists and start the output thread.
    ///
    /// A missing file is the terminal resource-not-found condition; decode
    /// problems are reported later through [`Playback::load_failure`].
    pub fn new(track: &Path) -> Result<Self, AudioError> {
        if !track.is_file() {
            return Err(AudioError::ResourceNotFound(track.display().to_string()));
        }

        let (commands, command_rx) = mpsc::unbounded_channel();
        let ready = Arc::new(AtomicBool::new(false));
        let load_failure = Arc::new(Mutex::new(None));

        let path = track.to_path_buf();
        let thread_ready = Arc::clone(&ready);
        let thread_failure = Arc::clone(&load_failure);
        std::thread::Builder::new()
            .name("wishcard-audio".into())
            .spawn(move || run_output_loop(path, command_rx, thread_ready, thread_failure))
            .map_err(|e| AudioError::LoadError(e.to_string()))?;

        Ok(Self {
            commands,
            ready,
            load_failure,
        })
    }
}

#[async_trait::async_trait]
impl Playback for RodioPlayback {
    fn readiness(&self) -> Readiness {
        if self.ready.load(Ordering::Acquire) {
            Readiness::Ready
        } else {
            Readiness::NoData
        }
    }

    async fn play(&self) -> Result<(), PlayFailure> {
        let (reply, outcome) = oneshot::channel();
        if self.commands.send(Command::Play { reply }).is_err() {
            return Err(PlayFailure::Failed("audio thread is gone".to_string()));
        }
        match outcome.await {
            Ok(result) => result,
            Err(_) => Err(PlayFailure::Failed(
                "audio thread dropped the request".to_string(),
            )),
        }
    }

    fn pause(&self) {
        let _ = self.commands.send(Command::Pause);
    }

    fn set_volume(&self, volume: f32) {
        let _ = self.commands.send(Command::SetVolume(volume));
    }

    fn load_failure(&self) -> Option<String> {
        self.load_failure.lock().take()
    }
}

fn open_looped(path: &Path) -> Result<LoopedDecoder<BufReader<File>>, String> {
    let file =
        File::open(path).map_err(|e| format!("open {}: {}", path.display(), e))?;
    Decoder::new_looped(BufReader::new(file))
        .map_err(|e| format!("decode {}: {}", path.display(), e))
}

fn run_output_loop(
    path: PathBuf,
    mut commands: mpsc::UnboundedReceiver<Command>,
    ready: Arc<AtomicBool>,
    load_failure: Arc<Mutex<Option<String>>>,
) {
    // Decode up front so readiness mirrors how much the "element" has
    // buffered. Failures here are the asynchronous load-error path.
    let mut pending = match open_looped(&path) {
        Ok(source) => {
            ready.store(true, Ordering::Release);
            debug!("decoded {}", path.display());
            Some(source)
        }
        Err(msg) => {
            warn!("audio decode failed: {}", msg);
            *load_failure.lock() = Some(msg);
            None
        }
    };

    // Opened on the first play command; (stream, sink) must stay paired so
    // the device handle outlives the sink.
    let mut output: Option<(OutputStream, Sink)> = None;
    let mut volume = 1.0f32;

    while let Some(command) = commands.blocking_recv() {
        match command {
            Command::Play { reply } => {
                let result = start_playback(&mut output, &mut pending, volume);
                let _ = reply.send(result);
            }
            Command::Pause => {
                if let Some((_, sink)) = &output {
                    sink.pause();
                }
            }
            Command::SetVolume(v) => {
                volume = v;
                if let Some((_, sink)) = &output {
                    sink.set_volume(v);
                }
            }
        }
    }

    // Channel closed: the card is gone, stop the music with it.
    if let Some((_, sink)) = &output {
        sink.stop();
    }
    info!("audio thread shutting down");
}

fn start_playback(
    output: &mut Option<(OutputStream, Sink)>,
    pending: &mut Option<LoopedDecoder<BufReader<File>>>,
    volume: f32,
) -> Result<(), PlayFailure> {
    if output.is_none() {
        let (stream, handle) = OutputStream::try_default()
            .map_err(|e| PlayFailure::Blocked(e.to_string()))?;
        let sink = Sink::try_new(&handle).map_err(|e| PlayFailure::Blocked(e.to_string()))?;
        *output = Some((stream, sink));
    }

    let Some((_, sink)) = output.as_ref() else {
        return Err(PlayFailure::Failed("output device unavailable".to_string()));
    };
    if let Some(source) = pending.take() {
        sink.append(source);
    } else if sink.empty() {
        // Decode never succeeded and there is nothing queued to resume.
        return Err(PlayFailure::Failed("no audio data loaded".to_string()));
    }
    sink.set_volume(volume);
    sink.play();
    Ok(())
}
