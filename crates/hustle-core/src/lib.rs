//! hustle-core
//!
//! Core building blocks for the Hustle attrition simulation: task tokens
//! spawn at random spots, decay tick by tick, and are either dismissed by the
//! user (reward) or expire as "missed" (penalty scaled by severity).
//!
//! # モジュール構成
//! - **domain**: ドメインモデル（ids, severity, geometry, task）
//! - **ports**: 抽象化レイヤー（Clock, IdGenerator）
//! - **placement / registry / interrupt / decor / score**: 部品ロジック
//! - **engine**: アプリケーション層（config, builder, state, timer loops, handle）
//!
//! The engine publishes an immutable [`Snapshot`] after every mutation; the
//! render boundary consumes snapshots and feeds back only the defined events
//! (activate, viewport change).

pub mod domain;
pub mod ports;

pub mod placement;
pub mod registry;
pub mod interrupt;
pub mod decor;
pub mod score;

pub mod engine;

// 主要な型を再エクスポート
pub use domain::{Rect, Severity, Size, TaskId, TaskPhase, TaskRecord, Viewport};
pub use engine::{BuildError, DismissOutcome, Engine, EngineBuilder, EngineConfig, Snapshot};
pub use interrupt::{InterruptKind, InterruptKindPolicy, InterruptState};
