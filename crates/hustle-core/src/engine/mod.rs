//! Engine - アプリケーション層
//!
//! 部品（registry, interrupt, decor, score）を束ねてワイヤリングします。
//!
//! # 主要コンポーネント
//! - **EngineConfig / EngineBuilder**: 構築と起動時検証（Fail-fast 設計）
//! - **EngineState**: 単一オーナーの状態（イベントごとの同期メソッド）
//! - **ScheduleGroup**: 4 本のタイマーループ（spawn / decay / decoration / interrupt）
//! - **Engine**: 公開ハンドル（start/stop, activate, set_viewport, subscribe）

pub mod builder;
pub mod config;
pub mod handle;
pub mod loops;
pub mod snapshot;
pub mod state;

pub use self::builder::{BuildError, EngineBuilder};
pub use self::config::EngineConfig;
pub use self::handle::Engine;
pub use self::snapshot::Snapshot;
pub use self::state::{DismissOutcome, EngineState};
