use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlateFinderError {
    #[error("{0}")]
    Core(#[from] plate_finder_common::Error),

    #[error("設定エラー: {0}")]
    Config(String),

    #[error("入力エラー: {0}")]
    Prompt(String),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),
}

impl PlateFinderError {
    /// 表示だけして処理を続けられるエラーか
    pub fn is_recoverable(&self) -> bool {
        matches!(self, PlateFinderError::Core(e) if e.is_recoverable())
    }
}

pub type Result<T> = std::result::Result<T, PlateFinderError>;
