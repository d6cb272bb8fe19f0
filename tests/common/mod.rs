//! テスト用ヘルパー

#![allow(dead_code)]

use plate_finder_common::{MenuEvent, Plate, Presenter, ResultPage, SelectMenu};
use std::collections::VecDeque;
use std::path::Path;

/// 記録した表示呼び出し
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Shown {
    List(Vec<String>),
    Single(String),
    Related(Vec<String>),
    Page { index: usize, total: usize, names: Vec<String>, nav: bool },
    Menu { placeholder: String, values: Vec<String> },
    Error(String),
    Info(String),
}

/// 操作を台本どおりに返すプレゼンター
#[derive(Default)]
pub struct ScriptedPresenter {
    events: VecDeque<MenuEvent>,
    pub shown: Vec<Shown>,
}

impl ScriptedPresenter {
    pub fn new(events: Vec<MenuEvent>) -> Self {
        Self {
            events: events.into(),
            shown: Vec::new(),
        }
    }

    pub fn errors(&self) -> Vec<&str> {
        self.shown
            .iter()
            .filter_map(|s| match s {
                Shown::Error(msg) => Some(msg.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn pages(&self) -> Vec<(usize, usize)> {
        self.shown
            .iter()
            .filter_map(|s| match s {
                Shown::Page { index, total, .. } => Some((*index, *total)),
                _ => None,
            })
            .collect()
    }

    pub fn singles(&self) -> Vec<&str> {
        self.shown
            .iter()
            .filter_map(|s| match s {
                Shown::Single(name) => Some(name.as_str()),
                _ => None,
            })
            .collect()
    }
}

fn names(plates: &[Plate]) -> Vec<String> {
    plates.iter().map(|p| p.name.clone()).collect()
}

impl Presenter for ScriptedPresenter {
    fn present_list(&mut self, plates: &[Plate], limit: usize) -> plate_finder_common::Result<()> {
        let shown: Vec<Plate> = plates.iter().take(limit).cloned().collect();
        self.shown.push(Shown::List(names(&shown)));
        Ok(())
    }

    fn present_single(&mut self, plate: &Plate) -> plate_finder_common::Result<()> {
        self.shown.push(Shown::Single(plate.name.clone()));
        Ok(())
    }

    fn present_related(&mut self, plates: &[Plate]) -> plate_finder_common::Result<()> {
        self.shown.push(Shown::Related(names(plates)));
        Ok(())
    }

    fn present_page(
        &mut self,
        page: &ResultPage<Plate>,
        nav_available: bool,
    ) -> plate_finder_common::Result<()> {
        self.shown.push(Shown::Page {
            index: page.index,
            total: page.total_pages,
            names: names(&page.items),
            nav: nav_available,
        });
        Ok(())
    }

    fn present_menu<T>(&mut self, menu: &SelectMenu<T>) -> plate_finder_common::Result<MenuEvent> {
        self.shown.push(Shown::Menu {
            placeholder: menu.placeholder.clone(),
            values: menu.options.iter().map(|o| o.value.clone()).collect(),
        });
        Ok(self.events.pop_front().unwrap_or(MenuEvent::Close))
    }

    fn present_error(&mut self, message: &str) -> plate_finder_common::Result<()> {
        self.shown.push(Shown::Error(message.to_string()));
        Ok(())
    }

    fn present_info(&mut self, message: &str) -> plate_finder_common::Result<()> {
        self.shown.push(Shown::Info(message.to_string()));
        Ok(())
    }
}

/// `<tr><td>name</td><td>desc</td></tr>` の表を書き出す
pub fn write_table(path: &Path, rows: &[(&str, &str)]) {
    let body: String = rows
        .iter()
        .map(|(name, desc)| format!("<tr><td>{}</td><td>{}</td></tr>\n", name, desc))
        .collect();
    let html = format!("<html><body><table>\n{}</table></body></html>", body);
    std::fs::write(path, html).expect("HTML書き込み失敗");
}
