//! Interrupt scheduler: time-boxed events that lock out dismissal.
//!
//! The state machine lives here; the timing (idle delay, active window)
//! is driven by the engine's interrupt loop.

use rand::Rng;
use serde::Serialize;

/// The two interruption events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InterruptKind {
    SickDay,
    FriendsDay,
}

impl InterruptKind {
    fn other(self) -> Self {
        match self {
            InterruptKind::SickDay => InterruptKind::FriendsDay,
            InterruptKind::FriendsDay => InterruptKind::SickDay,
        }
    }
}

/// Scheduler-owned state, read by the engine to gate dismissal.
/// While active, clicks are swallowed entirely, not queued.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InterruptState {
    Idle,
    Active { kind: InterruptKind },
}

impl InterruptState {
    pub fn is_active(&self) -> bool {
        matches!(self, InterruptState::Active { .. })
    }
}

/// How the kind of the next event is chosen.
///
/// Both variants exist in the wild for this family of simulations: a coin
/// flip per occurrence, or strict round robin. The default is the coin flip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InterruptKindPolicy {
    #[default]
    Random,
    Alternating,
}

/// State machine behind the interrupt schedule.
#[derive(Debug)]
pub struct InterruptScheduler {
    state: InterruptState,
    policy: InterruptKindPolicy,
    last_kind: Option<InterruptKind>,
}

impl InterruptScheduler {
    pub fn new(policy: InterruptKindPolicy) -> Self {
        Self {
            state: InterruptState::Idle,
            policy,
            last_kind: None,
        }
    }

    pub fn state(&self) -> InterruptState {
        self.state
    }

    pub fn is_active(&self) -> bool {
        self.state.is_active()
    }

    /// Open an active window. The kind is chosen per policy; alternation
    /// starts with SickDay.
    pub fn begin<R: Rng + ?Sized>(&mut self, rng: &mut R) -> InterruptKind {
        let kind = match self.policy {
            InterruptKindPolicy::Random => {
                if rng.gen_bool(0.5) {
                    InterruptKind::SickDay
                } else {
                    InterruptKind::FriendsDay
                }
            }
            InterruptKindPolicy::Alternating => match self.last_kind {
                Some(last) => last.other(),
                None => InterruptKind::SickDay,
            },
        };
        self.last_kind = Some(kind);
        self.state = InterruptState::Active { kind };
        kind
    }

    /// Close the active window and return to idle.
    pub fn end(&mut self) {
        self.state = InterruptState::Idle;
    }
}
