//! Snapshot: the immutable view published to the render boundary.

use serde::Serialize;

use crate::decor::DecorationMarker;
use crate::domain::{TaskRecord, Viewport};
use crate::interrupt::InterruptState;

/// A full copy of the visible state, published after every mutation.
///
/// The render boundary only ever sees these; it feeds nothing back except
/// the defined events (activate, viewport change).
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    /// Task records in stable insertion order (render keys: `TaskRecord::id`).
    pub tasks: Vec<TaskRecord>,
    pub score: i64,
    pub decorations: Vec<DecorationMarker>,
    pub interrupt: InterruptState,
    pub viewport: Viewport,
}

impl Snapshot {
    /// Tasks still decaying (clickable).
    pub fn alive_count(&self) -> usize {
        self.tasks.iter().filter(|task| task.is_alive()).count()
    }

    /// Tasks frozen as missed.
    pub fn missed_count(&self) -> usize {
        self.tasks.len() - self.alive_count()
    }
}
