//! カタログの型定義
//!
//! CLIと将来のフロントエンドで共有される型:
//! - Plate: カタログの1レコード（名前・説明・サムネイル）
//! - PlateId: 現行カタログに対して解決される安定した識別子
//! - ScoredPlate: 検索1回ごとに生成されるスコア付きの参照

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// プレート（カタログの1レコード）
///
/// 構築後は変更しない。リロード時はカタログ全体を差し替える。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Plate {
    pub name: String,
    pub description: String,

    /// サムネイル画像のローカルパス
    #[serde(default)]
    pub image_path: Option<PathBuf>,
}

impl Plate {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            image_path: None,
        }
    }

    pub fn with_image(mut self, path: impl Into<PathBuf>) -> Self {
        self.image_path = Some(path.into());
        self
    }

    /// 検索対象テキスト（名前 + 説明、小文字化）
    pub fn search_text(&self) -> String {
        format!("{} {}", self.name, self.description).to_lowercase()
    }
}

/// プレート識別子
///
/// 名前は重複し得るので名前と説明の両方で照合し、
/// 完全に同じ内容のプレートが複数ある場合だけ「何番目か」で区別する。
/// メニューの value には `encode` した文字列を使う。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlateId {
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub ordinal: usize,
}

impl PlateId {
    /// カタログ内の位置から識別子を作る
    pub fn at(catalog: &[Plate], position: usize) -> Option<Self> {
        let plate = catalog.get(position)?;
        let ordinal = catalog[..position]
            .iter()
            .filter(|p| p.name == plate.name && p.description == plate.description)
            .count();
        Some(Self {
            name: plate.name.clone(),
            description: plate.description.clone(),
            ordinal,
        })
    }

    /// 現行カタログから該当プレートを探す
    pub fn resolve<'a>(&self, catalog: &'a [Plate]) -> Option<&'a Plate> {
        catalog
            .iter()
            .filter(|p| p.name == self.name && p.description == self.description)
            .nth(self.ordinal)
    }

    /// メニュー value 用の文字列
    pub fn encode(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| self.name.clone())
    }

    /// `encode` の逆変換（不正な文字列は `None`）
    pub fn decode(value: &str) -> Option<Self> {
        serde_json::from_str(value).ok()
    }
}

impl fmt::Display for PlateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.ordinal == 0 {
            write!(f, "{}", self.name)
        } else {
            write!(f, "{} (#{})", self.name, self.ordinal + 1)
        }
    }
}

/// スコア付きプレート（検索ごとに生成）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoredPlate<'a> {
    pub plate: &'a Plate,
    /// カタログ内の位置
    pub position: usize,
    pub score: u32,
}
