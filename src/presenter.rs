//! 端末向けの表示
//!
//! 一覧・カード・ページは標準出力へ、メニューは dialoguer で表示する。

use dialoguer::Select;
use plate_finder_common::{MenuEvent, Plate, Presenter, ResultPage, SelectMenu};
use std::io::Write;

const PREV_LABEL: &str = "◀ Prev page";
const NEXT_LABEL: &str = "▶ Next page";
const CLOSE_LABEL: &str = "✖ Close";

/// プレート1件のカード表示
pub fn format_card(plate: &Plate) -> String {
    let mut card = format!("■ {}\n  {}", plate.name, plate.description);
    if let Some(image) = &plate.image_path {
        card.push_str(&format!("\n  🖼 {}", image.display()));
    }
    card
}

/// ページ見出しと名前一覧
pub fn format_page(page: &ResultPage<Plate>) -> String {
    let mut text = format!("📄 Skill Plates — Page {}", page.label());
    if page.items.is_empty() {
        text.push_str("\n  (no plates)");
    }
    for plate in &page.items {
        text.push_str(&format!("\n  • {}", plate.name));
    }
    text
}

/// メニューの表示項目と対応するイベント
pub fn menu_entries<T>(menu: &SelectMenu<T>) -> Vec<(String, MenuEvent)> {
    let mut entries: Vec<(String, MenuEvent)> = menu
        .options
        .iter()
        .map(|o| (o.label.clone(), MenuEvent::Pick(o.value.clone())))
        .collect();

    if menu.navigation {
        entries.push((PREV_LABEL.to_string(), MenuEvent::Prev));
        entries.push((NEXT_LABEL.to_string(), MenuEvent::Next));
    }
    entries.push((CLOSE_LABEL.to_string(), MenuEvent::Close));
    entries
}

pub struct TerminalPresenter<W> {
    out: W,
}

impl TerminalPresenter<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self {
            out: std::io::stdout(),
        }
    }
}

impl<W: Write> TerminalPresenter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Presenter for TerminalPresenter<W> {
    fn present_list(&mut self, plates: &[Plate], limit: usize) -> plate_finder_common::Result<()> {
        for plate in plates.iter().take(limit) {
            writeln!(self.out, "{}\n", format_card(plate))?;
        }
        if plates.len() > limit {
            writeln!(self.out, "… {} more (use browse to see all)", plates.len() - limit)?;
        }
        Ok(())
    }

    fn present_single(&mut self, plate: &Plate) -> plate_finder_common::Result<()> {
        writeln!(self.out, "{}\n", format_card(plate))?;
        Ok(())
    }

    fn present_related(&mut self, plates: &[Plate]) -> plate_finder_common::Result<()> {
        if plates.is_empty() {
            return Ok(());
        }
        writeln!(self.out, "Related plates:")?;
        for plate in plates {
            writeln!(self.out, "{}\n", format_card(plate))?;
        }
        Ok(())
    }

    fn present_page(
        &mut self,
        page: &ResultPage<Plate>,
        _nav_available: bool,
    ) -> plate_finder_common::Result<()> {
        writeln!(self.out, "{}\n", format_page(page))?;
        Ok(())
    }

    fn present_menu<T>(&mut self, menu: &SelectMenu<T>) -> plate_finder_common::Result<MenuEvent> {
        let entries = menu_entries(menu);
        let labels: Vec<&str> = entries.iter().map(|(label, _)| label.as_str()).collect();
        self.out.flush()?;

        let picked = Select::new()
            .with_prompt(&menu.placeholder)
            .items(&labels)
            .default(0)
            .interact_opt()
            .map_err(|e| std::io::Error::other(e.to_string()))?;

        // Esc / q はメニューを閉じる
        Ok(picked
            .and_then(|i| entries.get(i).map(|(_, event)| event.clone()))
            .unwrap_or(MenuEvent::Close))
    }

    fn present_error(&mut self, message: &str) -> plate_finder_common::Result<()> {
        writeln!(self.out, "❌ {}", message)?;
        Ok(())
    }

    fn present_info(&mut self, message: &str) -> plate_finder_common::Result<()> {
        writeln!(self.out, "{}", message)?;
        Ok(())
    }
}
