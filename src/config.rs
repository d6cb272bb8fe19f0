use crate::error::{PlateFinderError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const SOURCE_ENV: &str = "PLATE_FINDER_SOURCE";
const IMAGES_ENV: &str = "PLATE_FINDER_IMAGES";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 読み込み候補のHTMLファイル（先に見つかったものを使う）
    pub source_files: Vec<PathBuf>,
    /// サムネイル画像フォルダ
    pub image_folder: PathBuf,
    /// 検索結果の表示件数
    pub list_limit: usize,
    /// メニューのラベル最大長
    pub label_max_len: usize,
    /// シェルのキーワード短縮コマンド
    pub shortcuts: Vec<String>,
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source_files: vec!["plates.html".into(), "123.htm".into()],
            image_folder: "plates_files".into(),
            list_limit: 5,
            label_max_len: 100,
            shortcuts: ["trap", "bleed", "botch", "multiply", "yellow", "black"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            log_level: "warn".into(),
        }
    }
}

impl Config {
    /// 設定ファイル + 環境変数
    pub fn load() -> Result<Self> {
        let mut config = Self::load_from(&Self::config_path()?)?;
        config.apply_env();
        config.validate()?;
        Ok(config)
    }

    /// 設定ファイルのみ（なければ既定値）
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            Ok(serde_json::from_str(&content)?)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// 設定ファイルを作成する
    ///
    /// 環境変数やCLIオプションの上書きは書き込まない。
    pub fn init() -> Result<PathBuf> {
        let config_path = Self::config_path()?;
        Self::init_at(&config_path)?;
        Ok(config_path)
    }

    pub fn init_at(path: &Path) -> Result<Self> {
        let config = Self::load_from(path)?;
        config.validate()?;
        config.save_to(path)?;
        Ok(config)
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| PlateFinderError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("plate-finder").join("config.json"))
    }

    /// 環境変数を優先
    pub fn apply_env(&mut self) {
        if let Ok(source) = std::env::var(SOURCE_ENV) {
            if !source.trim().is_empty() {
                self.source_files = vec![PathBuf::from(source.trim())];
            }
        }
        if let Ok(images) = std::env::var(IMAGES_ENV) {
            if !images.trim().is_empty() {
                self.image_folder = PathBuf::from(images.trim());
            }
        }
    }

    /// CLIオプションでの上書き
    pub fn override_paths(&mut self, source: Option<PathBuf>, images: Option<PathBuf>) {
        if let Some(source) = source {
            self.source_files = vec![source];
        }
        if let Some(images) = images {
            self.image_folder = images;
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.source_files.is_empty() {
            return Err(PlateFinderError::Config("source_files が空です".into()));
        }
        if self.list_limit == 0 {
            return Err(PlateFinderError::Config("list_limit は1以上にしてください".into()));
        }
        if self.label_max_len == 0 {
            return Err(PlateFinderError::Config("label_max_len は1以上にしてください".into()));
        }
        Ok(())
    }

    /// シェルの短縮コマンドか
    pub fn is_shortcut(&self, word: &str) -> bool {
        self.shortcuts.iter().any(|s| s.eq_ignore_ascii_case(word))
    }
}
