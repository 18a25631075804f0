//! Task record: the unit that spawns, decays, and gets dismissed or missed.

use serde::Serialize;

use super::{Rect, Severity, TaskId};

/// Lifecycle phase of a task.
///
/// State transitions:
/// - Alive -> Alive (decay tick, life still positive; position re-rolled)
/// - Alive -> Expired (decay tick hits zero; terminal, frozen)
/// - Alive -> removed from the registry (user dismissal)
///
/// Expired has no outgoing transition here: missed records stay visible
/// until the render layer prunes them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskPhase {
    Alive,
    Expired,
}

impl TaskPhase {
    /// Is this a terminal phase (no further decay, no reposition)?
    pub fn is_terminal(self) -> bool {
        matches!(self, TaskPhase::Expired)
    }
}

/// Metadata for one task token.
///
/// Single source of truth for task state; the registry owns the records and
/// all transitions happen through it.
#[derive(Debug, Clone, Serialize)]
pub struct TaskRecord {
    pub id: TaskId,
    pub severity: Severity,
    /// Drawn from the severity's label pool at spawn.
    pub label: &'static str,
    /// Decay ticks left. Pinned to 0 once the record expires.
    pub remaining_life: u32,
    pub rect: Rect,
    pub phase: TaskPhase,
}

impl TaskRecord {
    pub fn is_alive(&self) -> bool {
        matches!(self.phase, TaskPhase::Alive)
    }

    /// Freeze as missed. Life pins to 0 and the position stops churning.
    /// The caller emits the penalty exactly once, on this transition.
    pub(crate) fn mark_expired(&mut self) {
        self.remaining_life = 0;
        self.phase = TaskPhase::Expired;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Size;
    use ulid::Ulid;

    fn record() -> TaskRecord {
        TaskRecord {
            id: TaskId::from_ulid(Ulid::new()),
            severity: Severity::Minor,
            label: "eat",
            remaining_life: 3,
            rect: Rect::new(190.0, 0.0, Size::new(140.0, 90.0)),
            phase: TaskPhase::Alive,
        }
    }

    #[test]
    fn expiring_freezes_the_record() {
        let mut task = record();
        task.mark_expired();

        assert_eq!(task.phase, TaskPhase::Expired);
        assert_eq!(task.remaining_life, 0);
        assert!(!task.is_alive());
        assert!(task.phase.is_terminal());
    }

    #[test]
    fn alive_is_not_terminal() {
        assert!(!TaskPhase::Alive.is_terminal());
    }
}
