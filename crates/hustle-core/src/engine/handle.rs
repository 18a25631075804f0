//! Engine: the public surface.

use std::sync::Arc;

use tokio::sync::{Mutex, watch};
use tracing::debug;

use crate::domain::{TaskId, Viewport};
use crate::engine::config::EngineConfig;
use crate::engine::loops::ScheduleGroup;
use crate::engine::snapshot::Snapshot;
use crate::engine::state::{DismissOutcome, EngineState};

/// One simulation instance.
///
/// Owns its state, score, and schedules; multiple engines coexist without
/// interference. The four timer loops are registered and cancelled together
/// through `start()`/`stop()`, independent of any render mount cycle.
///
/// The mutex serializes every event against the state, which preserves the
/// cooperative single-thread guarantee the simulation semantics assume: a
/// decay pass finishes for the whole set before any queued activation runs.
pub struct Engine {
    state: Arc<Mutex<EngineState>>,
    publish: watch::Sender<Snapshot>,
    snapshot_rx: watch::Receiver<Snapshot>,
    schedules: Mutex<Option<ScheduleGroup>>,
    config: EngineConfig,
}

impl Engine {
    pub(crate) fn new(config: EngineConfig) -> Self {
        let state = EngineState::new(&config);
        let (publish, snapshot_rx) = watch::channel(state.snapshot());
        Self {
            state: Arc::new(Mutex::new(state)),
            publish,
            snapshot_rx,
            schedules: Mutex::new(None),
            config,
        }
    }

    /// Start the four schedules. Idempotent: a running engine is left alone.
    pub async fn start(&self) {
        let mut slot = self.schedules.lock().await;
        if slot.is_some() {
            return;
        }
        debug!("engine started");
        *slot = Some(ScheduleGroup::spawn(
            Arc::clone(&self.state),
            self.publish.clone(),
            self.config.clone(),
        ));
    }

    /// Stop all schedules and wait for them to wind down. Idempotent, and
    /// safe to race: the group is taken out of the slot before being torn
    /// down. No snapshot is published after this returns.
    pub async fn stop(&self) {
        let group = self.schedules.lock().await.take();
        if let Some(group) = group {
            group.shutdown_and_join().await;
            debug!("engine stopped");
        }
    }

    /// User activation of a task (the click path). Swallowed while an
    /// interrupt window is open; unknown and missed ids are ignored.
    pub async fn activate(&self, id: TaskId) -> DismissOutcome {
        let (outcome, snapshot) = {
            let mut state = self.state.lock().await;
            let outcome = state.dismiss(id);
            // Only an actual mutation publishes.
            let snapshot = (outcome == DismissOutcome::Rewarded).then(|| state.snapshot());
            (outcome, snapshot)
        };
        debug!(%id, ?outcome, "activation");
        if let Some(snapshot) = snapshot {
            self.publish.send_replace(snapshot);
        }
        outcome
    }

    /// The playable region changed size. Takes effect from the next
    /// placement query.
    pub async fn set_viewport(&self, width: f64, height: f64) {
        let snapshot = {
            let mut state = self.state.lock().await;
            state.set_viewport(Viewport::new(width, height));
            state.snapshot()
        };
        self.publish.send_replace(snapshot);
    }

    /// Push interface: yields the latest snapshot after every mutation.
    pub fn subscribe(&self) -> watch::Receiver<Snapshot> {
        self.snapshot_rx.clone()
    }

    /// Pull interface: the latest snapshot.
    pub fn snapshot(&self) -> Snapshot {
        self.snapshot_rx.borrow().clone()
    }
}
