//! Task registry: owns the live and missed task records.
//!
//! Mutated only through spawn, decay ticks, and dismissal. Insertion order
//! doubles as the stable processing and render order.

use std::ops::RangeInclusive;

use rand::Rng;

use crate::domain::{Rect, Severity, Size, TaskId, TaskPhase, TaskRecord, Viewport};
use crate::placement;
use crate::ports::IdGenerator;

/// A task that ran out of life during a decay tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Expiry {
    pub id: TaskId,
    pub severity: Severity,
}

/// Registry of task records.
///
/// Design:
/// - `records` is the single source of truth, in insertion order.
/// - Missed (expired) records stay in the set; only dismissal removes.
/// - Expired boxes still occupy screen space, so placement queries run
///   against every record, not just the alive ones.
#[derive(Debug)]
pub struct TaskRegistry {
    records: Vec<TaskRecord>,
    box_size: Size,
    reserved_top: f64,
    lifespan: RangeInclusive<u32>,
}

impl TaskRegistry {
    pub fn new(box_size: Size, reserved_top: f64, lifespan: RangeInclusive<u32>) -> Self {
        Self {
            records: Vec::new(),
            box_size,
            reserved_top,
            lifespan,
        }
    }

    /// Spawn one task: uniform severity, uniform life from the configured
    /// range, uniform label from the severity's pool, position resolved
    /// against every current record's box.
    pub fn spawn<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        ids: &dyn IdGenerator,
        viewport: Viewport,
    ) -> TaskId {
        let severity = Severity::ALL[rng.gen_range(0..Severity::ALL.len())];
        let pool = severity.label_pool();
        let label = pool[rng.gen_range(0..pool.len())];
        let remaining_life = rng.gen_range(self.lifespan.clone());

        let occupied: Vec<Rect> = self.records.iter().map(|task| task.rect).collect();
        let rect = placement::resolve(rng, &occupied, viewport, self.reserved_top, self.box_size);

        let id = ids.generate_task_id();
        self.records.push(TaskRecord {
            id,
            severity,
            label,
            remaining_life,
            rect,
            phase: TaskPhase::Alive,
        });
        id
    }

    /// One decay tick over the whole set.
    ///
    /// Every alive record loses one life; a record that would hit zero is
    /// frozen as missed and reported exactly once. Survivors are re-placed
    /// against the *previous* positions of all other records, so the result
    /// does not depend on processing order.
    pub fn tick<R: Rng + ?Sized>(&mut self, rng: &mut R, viewport: Viewport) -> Vec<Expiry> {
        let boxes: Vec<(TaskId, Rect)> = self
            .records
            .iter()
            .map(|task| (task.id, task.rect))
            .collect();

        let mut expiries = Vec::new();
        for task in &mut self.records {
            if !task.is_alive() {
                continue;
            }
            if task.remaining_life <= 1 {
                task.mark_expired();
                expiries.push(Expiry {
                    id: task.id,
                    severity: task.severity,
                });
                continue;
            }
            task.remaining_life -= 1;

            let occupied: Vec<Rect> = boxes
                .iter()
                .filter(|(id, _)| *id != task.id)
                .map(|(_, rect)| *rect)
                .collect();
            task.rect =
                placement::resolve(rng, &occupied, viewport, self.reserved_top, self.box_size);
        }
        expiries
    }

    /// Remove a live task and hand its record back. Unknown ids and missed
    /// records are a no-op (`None`), not an error: the render layer may keep
    /// showing a missed box and route clicks on it here.
    pub fn dismiss(&mut self, id: TaskId) -> Option<TaskRecord> {
        let index = self
            .records
            .iter()
            .position(|task| task.id == id && task.is_alive())?;
        Some(self.records.remove(index))
    }

    pub fn records(&self) -> &[TaskRecord] {
        &self.records
    }

    pub fn get(&self, id: TaskId) -> Option<&TaskRecord> {
        self.records.iter().find(|task| task.id == id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
