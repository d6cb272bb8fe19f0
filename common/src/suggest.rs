//! おすすめ検索（2段階の絞り込み）
//!
//! 色 → 種類の順に1つずつ選び、`"<色> <種類>"` で検索する。
//! 状態は `GuidedSelectionState` として段階間で明示的に受け渡す。
//!
//! 遷移: AwaitingColor → AwaitingType → Completed（終端）

use crate::error::{Error, Result};
use crate::menu::{MenuOption, SelectMenu};
use crate::search;
use crate::types::Plate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 関連候補の最大件数（2位〜4位）
pub const RELATED_LIMIT: usize = 3;

/// 色
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Red,
    Yellow,
    Blue,
    Green,
    Purple,
    Black,
}

impl Color {
    pub const ALL: [Color; 6] = [
        Color::Red,
        Color::Yellow,
        Color::Blue,
        Color::Green,
        Color::Purple,
        Color::Black,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Color::Red => "Red",
            Color::Yellow => "Yellow",
            Color::Blue => "Blue",
            Color::Green => "Green",
            Color::Purple => "Purple",
            Color::Black => "Black",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Color {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Color::ALL
            .into_iter()
            .find(|c| c.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("Unknown color: {}", s))
    }
}

/// 種類
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlateType {
    Trap,
    Bleed,
    Botch,
    Multiply,
    Stun,
    Heal,
}

impl PlateType {
    pub const ALL: [PlateType; 6] = [
        PlateType::Trap,
        PlateType::Bleed,
        PlateType::Botch,
        PlateType::Multiply,
        PlateType::Stun,
        PlateType::Heal,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            PlateType::Trap => "Trap",
            PlateType::Bleed => "Bleed",
            PlateType::Botch => "Botch",
            PlateType::Multiply => "Multiply",
            PlateType::Stun => "Stun",
            PlateType::Heal => "Heal",
        }
    }
}

impl fmt::Display for PlateType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for PlateType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        PlateType::ALL
            .into_iter()
            .find(|t| t.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("Unknown type: {}", s))
    }
}

/// 現在の段階
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuidedStage {
    AwaitingColor,
    AwaitingType,
    Completed,
}

/// 絞り込み状態（1回のフロー内だけで使う）
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuidedSelectionState {
    #[serde(default)]
    pub chosen_color: Option<Color>,
    #[serde(default)]
    pub chosen_type: Option<PlateType>,
}

impl GuidedSelectionState {
    pub fn stage(&self) -> GuidedStage {
        match (self.chosen_color, self.chosen_type) {
            (None, _) => GuidedStage::AwaitingColor,
            (Some(_), None) => GuidedStage::AwaitingType,
            (Some(_), Some(_)) => GuidedStage::Completed,
        }
    }

    /// 完了時の検索クエリ `"<色> <種類>"`
    pub fn query(&self) -> Option<String> {
        match (self.chosen_color, self.chosen_type) {
            (Some(color), Some(kind)) => Some(format!("{} {}", color, kind)),
            _ => None,
        }
    }
}

/// 検索結果（1位 + 関連候補）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    pub query: String,
    pub primary: Plate,
    pub related: Vec<Plate>,
}

pub fn start() -> GuidedSelectionState {
    GuidedSelectionState::default()
}

pub fn choose_color(state: &GuidedSelectionState, color: Color) -> Result<GuidedSelectionState> {
    if state.stage() != GuidedStage::AwaitingColor {
        return Err(Error::InvalidState("color has already been chosen".into()));
    }
    Ok(GuidedSelectionState {
        chosen_color: Some(color),
        chosen_type: None,
    })
}

pub fn choose_type(state: &GuidedSelectionState, kind: PlateType) -> Result<GuidedSelectionState> {
    if state.stage() != GuidedStage::AwaitingType {
        return Err(Error::InvalidState("type must be chosen after a color".into()));
    }
    Ok(GuidedSelectionState {
        chosen_type: Some(kind),
        ..state.clone()
    })
}

/// 完了状態から検索し、1位と関連候補を組み立てる
pub fn resolve(state: &GuidedSelectionState, catalog: &[Plate]) -> Result<Suggestion> {
    let query = state
        .query()
        .ok_or_else(|| Error::InvalidState("suggestion is not complete".into()))?;

    let mut ranked = search::search(&query, catalog)?.into_iter();
    let primary = ranked.next().ok_or_else(|| Error::NoMatch {
        query: query.clone(),
    })?;
    let related = ranked.take(RELATED_LIMIT).collect();

    Ok(Suggestion {
        query,
        primary,
        related,
    })
}

/// 1段階目のメニュー
pub fn color_menu(state: &GuidedSelectionState) -> SelectMenu<GuidedSelectionState> {
    let options = Color::ALL
        .iter()
        .map(|c| MenuOption::new(c.label(), c.label()))
        .collect();
    SelectMenu::new("Pick a color", options, state.clone())
}

/// 2段階目のメニュー（選んだ色を表示に含める）
pub fn type_menu(state: &GuidedSelectionState) -> SelectMenu<GuidedSelectionState> {
    let placeholder = match state.chosen_color {
        Some(color) => format!("Pick a type for {} plates", color),
        None => "Pick a type".to_string(),
    };
    let options = PlateType::ALL
        .iter()
        .map(|t| MenuOption::new(t.label(), t.label()))
        .collect();
    SelectMenu::new(placeholder, options, state.clone())
}
