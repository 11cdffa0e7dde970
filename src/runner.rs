//! Background simulation thread
//!
//! Decouples the tick rate from the frame rate. The thread owns the state;
//! setters arrive as [`Command`]s and results leave as [`Snapshot`]s through a
//! bounded ring that drops the oldest entry on overflow. Consumers call
//! [`SimulationThread::latest`] once per frame.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};
use std::sync::{Arc, Mutex, MutexGuard};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use thiserror::Error;

pub use crate::sim::Command;
use crate::sim::{SimulationState, Snapshot};

/// Errors from the background runner
#[derive(Error, Debug)]
pub enum RunnerError {
    /// The OS refused to start the thread
    #[error("failed to spawn simulation thread: {0}")]
    Spawn(#[from] std::io::Error),

    /// The simulation thread has already exited
    #[error("simulation thread is not running")]
    Disconnected,

    /// The simulation thread panicked
    #[error("simulation thread panicked")]
    Panicked,
}

/// Bounded snapshot queue shared by the simulation thread and the consumer
#[derive(Debug)]
struct SnapshotRing {
    capacity: usize,
    entries: Mutex<VecDeque<Snapshot>>,
}

impl SnapshotRing {
    fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            capacity,
            entries: Mutex::new(VecDeque::with_capacity(capacity)),
        }
    }

    fn lock(&self) -> MutexGuard<'_, VecDeque<Snapshot>> {
        // Snapshots are plain data, so a poisoned lock is still usable
        self.entries.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Append, evicting the oldest snapshot when full
    fn push(&self, snap: Snapshot) {
        let mut entries = self.lock();
        if entries.len() >= self.capacity {
            entries.pop_front();
            log::trace!("Snapshot queue full, evicted oldest before tick {}", snap.tick);
        }
        entries.push_back(snap);
    }

    /// Remove every pending snapshot and return the newest
    fn take_latest(&self) -> Option<Snapshot> {
        let mut entries = self.lock();
        let latest = entries.pop_back();
        entries.clear();
        latest
    }
}

/// Handle to a running simulation thread
pub struct SimulationThread {
    commands: Sender<Command>,
    snapshots: Arc<SnapshotRing>,
    running: Arc<AtomicBool>,
    handle: Option<JoinHandle<SimulationState>>,
}

impl SimulationThread {
    /// Start stepping `state` at `tick_rate_hz` (0 runs unpaced).
    ///
    /// At most `queue_capacity` snapshots wait for the consumer; older ones
    /// are evicted as new ticks arrive.
    pub fn spawn(
        state: SimulationState,
        tick_rate_hz: u32,
        queue_capacity: usize,
    ) -> Result<Self, RunnerError> {
        let (command_tx, command_rx) = mpsc::channel();
        let snapshots = Arc::new(SnapshotRing::new(queue_capacity));
        let running = Arc::new(AtomicBool::new(true));

        let period = (tick_rate_hz > 0).then(|| Duration::from_secs_f64(1.0 / tick_rate_hz as f64));
        let flag = Arc::clone(&running);
        let ring = Arc::clone(&snapshots);
        let handle = thread::Builder::new()
            .name("incline-sim".into())
            .spawn(move || run_loop(state, period, flag, command_rx, ring))?;

        log::info!(
            "Simulation thread started ({} Hz, queue {})",
            tick_rate_hz,
            snapshots.capacity
        );

        Ok(Self {
            commands: command_tx,
            snapshots,
            running,
            handle: Some(handle),
        })
    }

    /// Queue a setter call; applied before the next tick
    pub fn send(&self, command: Command) -> Result<(), RunnerError> {
        self.commands.send(command).map_err(|_| RunnerError::Disconnected)
    }

    pub fn set_forces(&self, left: f64, right: f64) -> Result<(), RunnerError> {
        self.send(Command::SetForces { left, right })
    }

    pub fn set_environment(&self, gravity: f64, friction: f64, angle: f64) -> Result<(), RunnerError> {
        self.send(Command::SetEnvironment {
            gravity,
            friction,
            angle,
        })
    }

    pub fn set_mass(&self, mass: f64) -> Result<(), RunnerError> {
        self.send(Command::SetMass(mass))
    }

    pub fn reset(&self) -> Result<(), RunnerError> {
        self.send(Command::Reset)
    }

    /// Drain every pending snapshot and return the newest
    pub fn latest(&self) -> Option<Snapshot> {
        self.snapshots.take_latest()
    }

    /// Whether the thread is still alive (it may be finishing after `stop`)
    pub fn is_running(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| !h.is_finished())
    }

    /// Ask the loop to exit after the current tick
    pub fn stop(&self) {
        self.running.store(false, Ordering::Release);
    }

    /// Stop the thread and return its final state
    pub fn join(mut self) -> Result<SimulationState, RunnerError> {
        self.stop();
        let handle = self.handle.take().ok_or(RunnerError::Disconnected)?;
        let state = handle.join().map_err(|_| RunnerError::Panicked)?;
        log::info!("Simulation thread stopped after {} ticks", state.tick);
        Ok(state)
    }
}

impl Drop for SimulationThread {
    fn drop(&mut self) {
        self.stop();
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                log::warn!("Simulation thread panicked during shutdown");
            }
        }
    }
}

fn run_loop(
    mut state: SimulationState,
    period: Option<Duration>,
    running: Arc<AtomicBool>,
    commands: Receiver<Command>,
    snapshots: Arc<SnapshotRing>,
) -> SimulationState {
    while running.load(Ordering::Acquire) {
        loop {
            match commands.try_recv() {
                Ok(command) => command.apply(&mut state),
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    running.store(false, Ordering::Release);
                    break;
                }
            }
        }
        if !running.load(Ordering::Acquire) {
            break;
        }

        state.step();
        snapshots.push(state.snapshot());

        if let Some(period) = period {
            thread::sleep(period);
        }
    }
    state
}
