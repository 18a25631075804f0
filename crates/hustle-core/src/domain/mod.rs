//! Domain model (IDs, severity table, geometry, task records).

pub mod geometry;
pub mod ids;
pub mod severity;
pub mod task;

pub use self::geometry::{Rect, Size, Viewport};
pub use self::ids::TaskId;
pub use self::severity::Severity;
pub use self::task::{TaskPhase, TaskRecord};
