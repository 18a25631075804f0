//! Timer loops: the four periodic schedules.
//!
//! Each loop holds a clone of the shutdown watch receiver and selects it
//! against its own sleep, so teardown cancels every pending timer together
//! and nothing fires afterwards.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{Mutex, watch};
use tokio::task::JoinHandle;
use tracing::{debug, trace};

use crate::engine::config::EngineConfig;
use crate::engine::snapshot::Snapshot;
use crate::engine::state::EngineState;

/// Schedule group handle.
/// - `shutdown_tx` を drop するとループ全体が止まる
/// - `shutdown_and_join()` で全ループの終了を待てる
pub(crate) struct ScheduleGroup {
    shutdown_tx: watch::Sender<bool>,
    joins: Vec<JoinHandle<()>>,
}

impl ScheduleGroup {
    /// Spawn the four schedules against a shared state.
    pub(crate) fn spawn(
        state: Arc<Mutex<EngineState>>,
        publish: watch::Sender<Snapshot>,
        config: EngineConfig,
    ) -> Self {
        let (shutdown_tx, shutdown_rx) = watch::channel(false);

        let joins = vec![
            tokio::spawn(spawn_loop(
                Arc::clone(&state),
                publish.clone(),
                config.spawn_period,
                shutdown_rx.clone(),
            )),
            tokio::spawn(decay_loop(
                Arc::clone(&state),
                publish.clone(),
                config.decay_period,
                shutdown_rx.clone(),
            )),
            tokio::spawn(decoration_loop(
                Arc::clone(&state),
                publish.clone(),
                config.decoration_period,
                shutdown_rx.clone(),
            )),
            tokio::spawn(interrupt_loop(
                state,
                publish,
                config.interrupt_duration,
                shutdown_rx,
            )),
        ];

        Self { shutdown_tx, joins }
    }

    /// Request shutdown for all loops. In-flight callbacks run to
    /// completion; no new timer firings happen afterwards.
    pub(crate) fn request_shutdown(&self) {
        // ignore send error: receivers may already be dropped
        let _ = self.shutdown_tx.send(true);
    }

    /// Shutdown and wait for all loops.
    pub(crate) async fn shutdown_and_join(self) {
        self.request_shutdown();
        for join in self.joins {
            let _ = join.await;
        }
    }
}

/// Sleep for `period`, or return true if shutdown was requested first.
/// A dropped sender also counts as shutdown.
async fn sleep_or_shutdown(period: Duration, shutdown_rx: &mut watch::Receiver<bool>) -> bool {
    if *shutdown_rx.borrow() {
        return true;
    }
    tokio::select! {
        _ = shutdown_rx.changed() => true,
        _ = tokio::time::sleep(period) => false,
    }
}

async fn spawn_loop(
    state: Arc<Mutex<EngineState>>,
    publish: watch::Sender<Snapshot>,
    period: Duration,
    mut shutdown_rx: watch::Receiver<bool>,
) {
    loop {
        if sleep_or_shutdown(period, &mut shutdown_rx).await {
            break;
        }
        let snapshot = {
            let mut state = state.lock().await;
            let id = state.spawn_task();
            trace!(%id, "task spawned");
            state.snapshot()
        };
        publish.send_replace(snapshot);
    }
}

async fn decay_loop(
    state: Arc<Mutex<EngineState>>,
    publish: watch::Sender<Snapshot>,
    period: Duration,
    mut shutdown_rx: watch::Receiver<bool>,
) {
    loop {
        if sleep_or_shutdown(period, &mut shutdown_rx).await {
            break;
        }
        let snapshot = {
            let mut state = state.lock().await;
            let expiries = state.run_decay_tick();
            if !expiries.is_empty() {
                debug!(missed = expiries.len(), "tasks expired");
            }
            state.snapshot()
        };
        publish.send_replace(snapshot);
    }
}

async fn decoration_loop(
    state: Arc<Mutex<EngineState>>,
    publish: watch::Sender<Snapshot>,
    period: Duration,
    mut shutdown_rx: watch::Receiver<bool>,
) {
    loop {
        if sleep_or_shutdown(period, &mut shutdown_rx).await {
            break;
        }
        let snapshot = {
            let mut state = state.lock().await;
            let seq = state.emit_decoration();
            trace!(seq, "decoration emitted");
            state.snapshot()
        };
        publish.send_replace(snapshot);
    }
}

/// Self-rescheduling: idle for a drawn delay, hold the active window for a
/// fixed duration, repeat. Teardown during either sleep leaves without a
/// trailing transition.
async fn interrupt_loop(
    state: Arc<Mutex<EngineState>>,
    publish: watch::Sender<Snapshot>,
    duration: Duration,
    mut shutdown_rx: watch::Receiver<bool>,
) {
    loop {
        let delay = {
            let mut state = state.lock().await;
            state.draw_interrupt_delay()
        };
        if sleep_or_shutdown(delay, &mut shutdown_rx).await {
            break;
        }

        let snapshot = {
            let mut state = state.lock().await;
            let kind = state.begin_interrupt();
            debug!(?kind, "interrupt window opened");
            state.snapshot()
        };
        publish.send_replace(snapshot);

        if sleep_or_shutdown(duration, &mut shutdown_rx).await {
            break;
        }

        let snapshot = {
            let mut state = state.lock().await;
            state.end_interrupt();
            debug!("interrupt window closed");
            state.snapshot()
        };
        publish.send_replace(snapshot);
    }
}
