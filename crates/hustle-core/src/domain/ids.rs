//! Domain identifiers (strongly-typed IDs).
//!
//! # ULID ベースの ID
//! ULID (Universally Unique Lexicographically Sortable Identifier) を使用します。
//! - **分散生成可能**: 調整なしで生成できる（カウンタ不要）
//! - **時刻でソート可能**: timestamp が先頭にあるため生成順に並ぶ
//!
//! The registry and the render boundary rely only on uniqueness; the sort
//! order is incidental.

use serde::{Deserialize, Serialize};
use std::fmt;
use ulid::Ulid;

/// Identifier of a task token (spawn / dismiss / render-key unit).
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TaskId(Ulid);

impl TaskId {
    /// ULID から TaskId を作成
    pub fn from_ulid(ulid: Ulid) -> Self {
        Self(ulid)
    }

    /// 内部の ULID を取得
    pub fn as_ulid(&self) -> Ulid {
        self.0
    }
}

impl From<Ulid> for TaskId {
    fn from(ulid: Ulid) -> Self {
        Self::from_ulid(ulid)
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "task-{}", self.0)
    }
}
