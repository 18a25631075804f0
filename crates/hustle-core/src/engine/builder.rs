//! EngineBuilder - 構築と起動時検証
//!
//! # Fail-fast 設計
//! - 退化した設定（空の寿命レンジ、ゼロ周期など）は build() で弾く
//! - 実行中の「失敗」はすべてポリシー上の degrade であり、エラーは構築時のみ

use std::ops::RangeInclusive;
use std::time::Duration;

use crate::domain::{Size, Viewport};
use crate::engine::config::EngineConfig;
use crate::engine::handle::Engine;
use crate::interrupt::InterruptKindPolicy;

/// BuildError はエンジン構築時のエラー
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("lifespan range is empty: {0}..={1}")]
    EmptyLifespan(u32, u32),

    #[error("box size must have a positive area: {0}x{1}")]
    DegenerateBox(f64, f64),

    #[error("decoration size must have a positive area: {0}x{1}")]
    DegenerateDecoration(f64, f64),

    #[error("interrupt delay window is empty: {0:?}..={1:?}")]
    EmptyInterruptWindow(Duration, Duration),

    #[error("schedule period must be non-zero: {0}")]
    ZeroPeriod(&'static str),
}

/// EngineBuilder はエンジンを構築
///
/// # 使用例
/// ```ignore
/// let engine = EngineBuilder::new()
///     .viewport(1920.0, 1080.0)
///     .rng_seed(42)
///     .build()?;
/// ```
#[derive(Debug, Default)]
pub struct EngineBuilder {
    config: EngineConfig,
}

impl EngineBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing config instead of the defaults.
    pub fn from_config(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn viewport(mut self, width: f64, height: f64) -> Self {
        self.config.viewport = Viewport::new(width, height);
        self
    }

    pub fn box_size(mut self, size: Size) -> Self {
        self.config.box_size = size;
        self
    }

    pub fn lifespan(mut self, lifespan: RangeInclusive<u32>) -> Self {
        self.config.lifespan = lifespan;
        self
    }

    pub fn spawn_period(mut self, period: Duration) -> Self {
        self.config.spawn_period = period;
        self
    }

    pub fn decay_period(mut self, period: Duration) -> Self {
        self.config.decay_period = period;
        self
    }

    pub fn decoration_period(mut self, period: Duration) -> Self {
        self.config.decoration_period = period;
        self
    }

    pub fn interrupt_delay(mut self, window: RangeInclusive<Duration>) -> Self {
        self.config.interrupt_delay = window;
        self
    }

    pub fn interrupt_duration(mut self, duration: Duration) -> Self {
        self.config.interrupt_duration = duration;
        self
    }

    pub fn interrupt_kind_policy(mut self, policy: InterruptKindPolicy) -> Self {
        self.config.interrupt_kind_policy = policy;
        self
    }

    pub fn decoration_cap(mut self, cap: Option<usize>) -> Self {
        self.config.decoration_cap = cap;
        self
    }

    pub fn rng_seed(mut self, seed: u64) -> Self {
        self.config.rng_seed = Some(seed);
        self
    }

    /// Validate the configuration and build the engine.
    pub fn build(self) -> Result<Engine, BuildError> {
        let config = self.config;

        if config.lifespan.is_empty() {
            return Err(BuildError::EmptyLifespan(
                *config.lifespan.start(),
                *config.lifespan.end(),
            ));
        }
        if config.box_size.width <= 0.0 || config.box_size.height <= 0.0 {
            return Err(BuildError::DegenerateBox(
                config.box_size.width,
                config.box_size.height,
            ));
        }
        if config.decoration_size.width <= 0.0 || config.decoration_size.height <= 0.0 {
            return Err(BuildError::DegenerateDecoration(
                config.decoration_size.width,
                config.decoration_size.height,
            ));
        }
        if config.interrupt_delay.is_empty() {
            return Err(BuildError::EmptyInterruptWindow(
                *config.interrupt_delay.start(),
                *config.interrupt_delay.end(),
            ));
        }
        for (name, period) in [
            ("spawn_period", config.spawn_period),
            ("decay_period", config.decay_period),
            ("decoration_period", config.decoration_period),
            ("interrupt_duration", config.interrupt_duration),
        ] {
            if period.is_zero() {
                return Err(BuildError::ZeroPeriod(name));
            }
        }

        Ok(Engine::new(config))
    }
}
