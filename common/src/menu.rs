//! 選択メニュー
//!
//! ページ一覧とおすすめ検索の各段階で共通に使うメニュー型。
//! 選択肢リストと、選択後に処理を再開するためのトークンを持つ。

use serde::{Deserialize, Serialize};

/// ラベルの既定最大長（文字数）
pub const DEFAULT_LABEL_MAX: usize = 100;

/// メニューの選択肢
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuOption {
    pub label: String,
    pub value: String,
}

impl MenuOption {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// 汎用選択メニュー
///
/// `token` は呼び出し側がそのまま持ち回る継続情報（セッション状態など）。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectMenu<T> {
    pub placeholder: String,
    pub options: Vec<MenuOption>,
    /// 前後ページ移動を出すか
    pub navigation: bool,
    pub token: T,
}

impl<T> SelectMenu<T> {
    pub fn new(placeholder: impl Into<String>, options: Vec<MenuOption>, token: T) -> Self {
        Self {
            placeholder: placeholder.into(),
            options,
            navigation: false,
            token,
        }
    }

    pub fn with_navigation(mut self, navigation: bool) -> Self {
        self.navigation = navigation;
        self
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }
}

/// メニュー操作の結果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MenuEvent {
    /// 選択肢を選んだ（value）
    Pick(String),
    Prev,
    Next,
    Close,
}

/// 表示上限に合わせてラベルを切り詰める（文字単位）
pub fn truncate_label(label: &str, max_chars: usize) -> String {
    label.chars().take(max_chars).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_label_short() {
        assert_eq!(truncate_label("Trap Red", 100), "Trap Red");
    }

    #[test]
    fn test_truncate_label_multibyte() {
        assert_eq!(truncate_label("トラップ赤", 3), "トラッ");
    }

    #[test]
    fn test_menu_defaults_without_navigation() {
        let menu = SelectMenu::new(
            "Select a plate",
            vec![MenuOption::new("Trap Red", "trap-red")],
            (),
        );
        assert!(!menu.navigation);
        assert!(!menu.is_empty());
        assert!(menu.with_navigation(true).navigation);
    }
}
