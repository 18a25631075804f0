//! Engine configuration.

use std::ops::RangeInclusive;
use std::time::Duration;

use crate::domain::{Size, Viewport};
use crate::interrupt::InterruptKindPolicy;

/// All knobs for one engine instance.
///
/// The defaults mirror the classic parameters of this simulation family:
/// 140x90 task boxes below a 190px header, one spawn and one decay tick per
/// second, a decoration every three seconds, and an interruption every
/// 10-20 seconds lasting five.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Footprint of a task box.
    pub box_size: Size,
    /// Footprint of a decoration marker.
    pub decoration_size: Size,
    /// Header strip at the top of the viewport that nothing spawns into.
    pub reserved_top: f64,
    /// Initial viewport; updated through `Engine::set_viewport`.
    pub viewport: Viewport,
    /// Decay ticks a fresh task lives for, drawn uniformly.
    pub lifespan: RangeInclusive<u32>,
    pub spawn_period: Duration,
    pub decay_period: Duration,
    pub decoration_period: Duration,
    /// Idle delay before each interrupt event, drawn uniformly.
    pub interrupt_delay: RangeInclusive<Duration>,
    /// Length of an interrupt's active window.
    pub interrupt_duration: Duration,
    pub interrupt_kind_policy: InterruptKindPolicy,
    /// `None` reproduces the historical unbounded decoration growth.
    pub decoration_cap: Option<usize>,
    /// Fixed seed for reproducible runs; `None` seeds from entropy.
    pub rng_seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            box_size: Size::new(140.0, 90.0),
            decoration_size: Size::new(100.0, 50.0),
            reserved_top: 190.0,
            viewport: Viewport::new(1280.0, 720.0),
            lifespan: 1..=10,
            spawn_period: Duration::from_secs(1),
            decay_period: Duration::from_secs(1),
            decoration_period: Duration::from_secs(3),
            interrupt_delay: Duration::from_secs(10)..=Duration::from_secs(20),
            interrupt_duration: Duration::from_secs(5),
            interrupt_kind_policy: InterruptKindPolicy::default(),
            decoration_cap: Some(512),
            rng_seed: None,
        }
    }
}
