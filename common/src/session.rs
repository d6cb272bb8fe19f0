//! 閲覧セッション状態
//!
//! ページ番号と元のクエリだけを持つ値型。サービスは状態を保持せず、
//! 操作ごとに受け取って新しい値を返す。呼び出し側がセッションIDごとに保管する。

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_SESSION: AtomicU64 = AtomicU64::new(1);

/// セッション識別子
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(pub u64);

impl SessionId {
    /// プロセス内で一意なIDを払い出す
    pub fn fresh() -> Self {
        SessionId(NEXT_SESSION.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "session-{}", self.0)
    }
}

/// 閲覧セッション
///
/// `query` が `None` なら全件閲覧。結果リストはクエリから毎回再生成する。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrowseSession {
    pub id: SessionId,
    #[serde(default)]
    pub query: Option<String>,
    #[serde(default)]
    pub page_index: usize,
}

impl BrowseSession {
    pub fn new(query: Option<String>) -> Self {
        Self {
            id: SessionId::fresh(),
            query,
            page_index: 0,
        }
    }

    pub fn at_page(&self, page_index: usize) -> Self {
        Self {
            page_index,
            ..self.clone()
        }
    }
}
