//! Single-owner engine state.
//!
//! Every externally-driven event (spawn period, decay tick, decoration
//! period, interrupt transition, activation, viewport change) is one sync
//! method on [`EngineState`]. The surrounding [`Engine`](crate::Engine)
//! serializes access with a mutex, so each event runs to completion against
//! the state before the next one is dispatched, the same guarantee a
//! cooperatively scheduled single thread gives.
//!
//! The state is also usable on its own: embedders that bring their own
//! timers can drive it directly.

use std::ops::RangeInclusive;
use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::decor::DecorationLog;
use crate::domain::{TaskId, Viewport};
use crate::engine::config::EngineConfig;
use crate::engine::snapshot::Snapshot;
use crate::interrupt::{InterruptKind, InterruptScheduler, InterruptState};
use crate::ports::{IdGenerator, SystemClock, UlidGenerator};
use crate::registry::{Expiry, TaskRegistry};
use crate::score::ScoreBoard;

/// What happened to an activation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DismissOutcome {
    /// A live task was removed and the reward applied.
    Rewarded,
    /// Unknown id or an already-missed task. Nothing changed.
    Ignored,
    /// An interrupt window is open; the click was swallowed.
    Locked,
}

/// The single source of truth for one engine instance. No process-wide
/// state: independent instances never interfere.
pub struct EngineState {
    registry: TaskRegistry,
    score: ScoreBoard,
    decorations: DecorationLog,
    interrupt: InterruptScheduler,
    viewport: Viewport,
    interrupt_delay: RangeInclusive<Duration>,
    rng: StdRng,
    ids: Box<dyn IdGenerator>,
}

impl EngineState {
    pub fn new(config: &EngineConfig) -> Self {
        let rng = match config.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            registry: TaskRegistry::new(
                config.box_size,
                config.reserved_top,
                config.lifespan.clone(),
            ),
            score: ScoreBoard::new(),
            decorations: DecorationLog::new(
                config.decoration_size,
                config.reserved_top,
                config.decoration_cap,
            ),
            interrupt: InterruptScheduler::new(config.interrupt_kind_policy),
            viewport: config.viewport,
            interrupt_delay: config.interrupt_delay.clone(),
            rng,
            ids: Box::new(UlidGenerator::new(SystemClock)),
        }
    }

    /// Spawn period fired: add one task.
    pub fn spawn_task(&mut self) -> TaskId {
        self.registry.spawn(&mut self.rng, &*self.ids, self.viewport)
    }

    /// Decay period fired: age the whole set, route penalties into the
    /// score, and report what expired.
    pub fn run_decay_tick(&mut self) -> Vec<Expiry> {
        let expiries = self.registry.tick(&mut self.rng, self.viewport);
        for expiry in &expiries {
            self.score.apply_penalty(expiry.severity);
        }
        expiries
    }

    /// Decoration period fired: append one marker.
    pub fn emit_decoration(&mut self) -> u64 {
        self.decorations.emit(&mut self.rng, self.viewport)
    }

    /// Interrupt delay elapsed: open an active window.
    pub fn begin_interrupt(&mut self) -> InterruptKind {
        self.interrupt.begin(&mut self.rng)
    }

    /// Interrupt window elapsed: back to idle.
    pub fn end_interrupt(&mut self) {
        self.interrupt.end();
    }

    /// Draw the idle delay before the next interrupt event.
    pub fn draw_interrupt_delay(&mut self) -> Duration {
        let min = self.interrupt_delay.start().as_millis() as u64;
        let max = self.interrupt_delay.end().as_millis() as u64;
        Duration::from_millis(self.rng.gen_range(min..=max))
    }

    /// User activation. Gated by the interrupt state before the registry is
    /// consulted at all: while a window is open, clicks are swallowed, not
    /// queued.
    pub fn dismiss(&mut self, id: TaskId) -> DismissOutcome {
        if self.interrupt.is_active() {
            return DismissOutcome::Locked;
        }
        match self.registry.dismiss(id) {
            Some(_) => {
                self.score.apply_reward();
                DismissOutcome::Rewarded
            }
            None => DismissOutcome::Ignored,
        }
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    pub fn registry(&self) -> &TaskRegistry {
        &self.registry
    }

    pub fn score_total(&self) -> i64 {
        self.score.total()
    }

    pub fn interrupt_state(&self) -> InterruptState {
        self.interrupt.state()
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Copy out the visible state.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            tasks: self.registry.records().to_vec(),
            score: self.score.total(),
            decorations: self.decorations.markers().copied().collect(),
            interrupt: self.interrupt.state(),
            viewport: self.viewport,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_with(lifespan: RangeInclusive<u32>, seed: u64) -> EngineState {
        let config = EngineConfig {
            lifespan,
            rng_seed: Some(seed),
            ..EngineConfig::default()
        };
        EngineState::new(&config)
    }

    #[test]
    fn decay_routes_each_penalty_exactly_once() {
        let mut state = state_with(1..=1, 1);
        let id = state.spawn_task();
        let severity = state
            .registry()
            .get(id)
            .map(|task| task.severity)
            .expect("spawned");

        let expiries = state.run_decay_tick();
        assert_eq!(expiries.len(), 1);
        assert_eq!(state.score_total(), severity.penalty());

        // The missed task is frozen: a second tick changes nothing.
        let expiries = state.run_decay_tick();
        assert!(expiries.is_empty());
        assert_eq!(state.score_total(), severity.penalty());
    }

    #[test]
    fn dismissal_rewards_and_removes() {
        let mut state = state_with(5..=10, 2);
        let id = state.spawn_task();

        assert_eq!(state.dismiss(id), DismissOutcome::Rewarded);
        assert_eq!(state.score_total(), 1);
        assert!(state.registry().get(id).is_none());

        // Second activation of the same id: no-op.
        assert_eq!(state.dismiss(id), DismissOutcome::Ignored);
        assert_eq!(state.score_total(), 1);
    }

    #[test]
    fn open_interrupt_window_swallows_activations() {
        let mut state = state_with(5..=10, 3);
        let id = state.spawn_task();
        state.begin_interrupt();

        assert_eq!(state.dismiss(id), DismissOutcome::Locked);
        assert_eq!(state.registry().len(), 1, "registry unchanged");
        assert_eq!(state.score_total(), 0, "score unchanged");

        state.end_interrupt();
        assert_eq!(state.dismiss(id), DismissOutcome::Rewarded);
    }

    #[test]
    fn dismissing_a_missed_task_is_ignored() {
        let mut state = state_with(1..=1, 4);
        let id = state.spawn_task();
        state.run_decay_tick();
        let after_miss = state.score_total();

        assert_eq!(state.dismiss(id), DismissOutcome::Ignored);
        assert_eq!(state.score_total(), after_miss);
    }

    #[test]
    fn interrupt_delay_is_drawn_from_the_window() {
        let mut state = state_with(1..=10, 5);
        for _ in 0..20 {
            let delay = state.draw_interrupt_delay();
            assert!(delay >= Duration::from_secs(10));
            assert!(delay <= Duration::from_secs(20));
        }
    }

    #[test]
    fn snapshot_copies_the_visible_state() {
        let mut state = state_with(5..=10, 6);
        let id = state.spawn_task();
        state.emit_decoration();
        state.set_viewport(Viewport::new(800.0, 600.0));

        let snapshot = state.snapshot();
        assert_eq!(snapshot.tasks.len(), 1);
        assert_eq!(snapshot.tasks[0].id, id);
        assert_eq!(snapshot.decorations.len(), 1);
        assert_eq!(snapshot.interrupt, InterruptState::Idle);
        assert_eq!(snapshot.viewport, Viewport::new(800.0, 600.0));
        assert_eq!(snapshot.alive_count(), 1);
        assert_eq!(snapshot.missed_count(), 0);
    }

    #[test]
    fn independent_instances_do_not_interfere() {
        let mut a = state_with(5..=10, 7);
        let mut b = state_with(5..=10, 8);

        let id = a.spawn_task();
        a.dismiss(id);

        assert_eq!(a.score_total(), 1);
        assert_eq!(b.score_total(), 0);
        assert!(b.registry().is_empty());
    }

    #[test]
    fn penalties_accumulate_across_severities() {
        let mut state = state_with(1..=1, 9);
        let mut expected = 0i64;
        for _ in 0..6 {
            state.spawn_task();
        }
        for expiry in state.run_decay_tick() {
            expected += expiry.severity.penalty();
        }
        assert!(expected <= -6, "six misses, each at least -1");
        assert_eq!(state.score_total(), expected);
    }
}
