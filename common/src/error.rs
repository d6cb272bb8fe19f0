//! エラー型定義

use thiserror::Error;

/// 共通エラー型
///
/// `Usage` / `NoMatch` / `NotFound` / `LoadEmpty` はリクエスト単位で回復可能。
#[derive(Error, Debug)]
pub enum Error {
    #[error("Usage: {0}")]
    Usage(String),

    #[error("No plates found for \"{query}\"")]
    NoMatch { query: String },

    #[error("Plate not found: {0}")]
    NotFound(String),

    #[error("No plates loaded: {0}")]
    LoadEmpty(String),

    #[error("Invalid state: {0}")]
    InvalidState(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// そのリクエストだけで完結するエラーか
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Error::Usage(_) | Error::NoMatch { .. } | Error::NotFound(_) | Error::LoadEmpty(_)
        )
    }
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;
