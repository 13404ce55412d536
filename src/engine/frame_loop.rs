//! Background frame loop
//!
//! One thread per surface session: acquire a target, tick and draw the stage,
//! present, then sleep off the rest of the frame budget. Shutdown is
//! cooperative with a bounded wait.

use std::sync::atomic::{AtomicU8, AtomicU32, AtomicU64, Ordering};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use super::EngineError;
use super::pacer::FramePacer;
use super::stage::Stage;
use crate::platform::Surface;
use crate::renderer::RenderTarget;

/// Lifecycle of a frame loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum LoopState {
    Stopped = 0,
    Running = 1,
    /// Asked to stop, thread not yet exited
    Stopping = 2,
}

impl LoopState {
    fn from_u8(value: u8) -> Self {
        match value {
            1 => LoopState::Running,
            2 => LoopState::Stopping,
            _ => LoopState::Stopped,
        }
    }
}

/// State shared between the owner and the loop thread
#[derive(Debug)]
struct LoopShared {
    state: AtomicU8,
    /// Average FPS as f32 bits
    average_fps: AtomicU32,
    frames: AtomicU64,
}

impl LoopShared {
    fn state(&self) -> LoopState {
        LoopState::from_u8(self.state.load(Ordering::Acquire))
    }

    fn set_state(&self, state: LoopState) {
        self.state.store(state as u8, Ordering::Release);
    }
}

/// Lock a mutex, recovering the data if a previous holder panicked
pub(crate) fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Marks the loop stopped when the thread exits, panics included
struct StoppedOnExit(Arc<LoopShared>);

impl Drop for StoppedOnExit {
    fn drop(&mut self) {
        if thread::panicking() {
            log::error!("Frame loop thread panicked mid-frame");
        }
        self.0.set_state(LoopState::Stopped);
    }
}

/// Handle to a running frame loop thread
pub struct FrameLoop {
    shared: Arc<LoopShared>,
    handle: Option<JoinHandle<()>>,
    /// Disconnects when the loop thread exits
    exited: Receiver<()>,
    stop_timeout: Duration,
}

impl FrameLoop {
    /// Spawn a loop driving `stage` against `surface`
    pub fn spawn<S: Surface>(
        surface: Arc<Mutex<S>>,
        stage: Arc<Mutex<Stage>>,
        target_fps: u32,
        stop_timeout: Duration,
    ) -> Result<Self, EngineError> {
        let pacer = FramePacer::new(target_fps);
        log::info!(
            "Frame loop starting ({} fps cap, {:?} budget)",
            pacer.target_fps(),
            pacer.budget()
        );
        let shared = Arc::new(LoopShared {
            state: AtomicU8::new(LoopState::Running as u8),
            average_fps: AtomicU32::new(pacer.average_fps().to_bits()),
            frames: AtomicU64::new(0),
        });
        let (exit_tx, exited) = mpsc::channel::<()>();

        let thread_shared = Arc::clone(&shared);
        let handle = thread::Builder::new()
            .name("frame-loop".to_string())
            .spawn(move || {
                // Dropped on exit, panics included; state flips before the channel closes
                let _exit_guard = exit_tx;
                let _state_guard = StoppedOnExit(Arc::clone(&thread_shared));
                run(&surface, &stage, &thread_shared, pacer);
            })
            .map_err(EngineError::Spawn)?;

        Ok(Self {
            shared,
            handle: Some(handle),
            exited,
            stop_timeout,
        })
    }

    pub fn state(&self) -> LoopState {
        self.shared.state()
    }

    pub fn is_running(&self) -> bool {
        self.state() == LoopState::Running
    }

    /// Rolling average frame rate (diagnostic)
    pub fn average_fps(&self) -> f32 {
        f32::from_bits(self.shared.average_fps.load(Ordering::Relaxed))
    }

    /// Frames completed so far
    pub fn frames(&self) -> u64 {
        self.shared.frames.load(Ordering::Relaxed)
    }

    /// Stop with the configured timeout
    pub fn stop(&mut self) -> Result<(), EngineError> {
        self.stop_within(self.stop_timeout)
    }

    /// Signal the loop to stop and wait up to `timeout` for it to exit
    ///
    /// On timeout the thread is detached; it still exits once its current
    /// frame returns.
    pub fn stop_within(&mut self, timeout: Duration) -> Result<(), EngineError> {
        let Some(handle) = self.handle.take() else {
            return Ok(());
        };

        self.shared.set_state(LoopState::Stopping);
        // Cut the pacing sleep short
        handle.thread().unpark();

        match self.exited.recv_timeout(timeout) {
            Ok(()) | Err(RecvTimeoutError::Disconnected) => {
                let joined = handle.join();
                self.shared.set_state(LoopState::Stopped);
                if joined.is_err() {
                    log::error!("Frame loop thread panicked");
                    return Err(EngineError::Panicked);
                }
                log::info!("Frame loop stopped after {} frames", self.frames());
                Ok(())
            }
            Err(RecvTimeoutError::Timeout) => {
                log::warn!("Frame loop did not stop within {:?}, abandoning it", timeout);
                drop(handle);
                Err(EngineError::StopTimeout(timeout))
            }
        }
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        if let Err(err) = self.stop() {
            log::warn!("Frame loop teardown: {}", err);
        }
    }
}

fn run<S: Surface>(
    surface: &Mutex<S>,
    stage: &Mutex<Stage>,
    shared: &LoopShared,
    mut pacer: FramePacer,
) {
    while shared.state() == LoopState::Running {
        let start = Instant::now();

        run_frame(surface, stage);

        if let Some(rest) = pacer.remaining(start.elapsed()) {
            // Early wakeups only shorten this frame
            thread::park_timeout(rest);
        }

        shared.frames.fetch_add(1, Ordering::Relaxed);
        if let Some(fps) = pacer.record(start.elapsed()) {
            shared.average_fps.store(fps.to_bits(), Ordering::Relaxed);
            log::trace!("Average FPS {:.1}", fps);
        }
    }
}

/// One iteration: acquire, tick and draw, present
fn run_frame<S: Surface>(surface: &Mutex<S>, stage: &Mutex<Stage>) {
    // Holding the surface lock keeps the host from reconfiguring mid-frame
    let mut surface = lock(surface);

    let mut target = match surface.try_acquire() {
        Ok(target) => Some(target),
        Err(err) => {
            log::debug!("No render target this frame: {}", err);
            None
        }
    };

    lock(stage).tick(target.as_mut().map(|t| t as &mut dyn RenderTarget));

    if let Some(target) = target {
        if let Err(err) = surface.present(target) {
            log::warn!("Failed to present frame: {}", err);
        }
    }
}
