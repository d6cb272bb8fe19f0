//! HTML表からプレートを抽出する
//!
//! `<tr>` ごとに先頭セルを名前、末尾セルを説明として読み取る。
//! 行内の最初の `<img src>` をサムネイルとし、画像フォルダにある場合のみ採用する。

mod images;

pub use images::ImageIndex;

use plate_finder_common::{CatalogSource, Plate};
use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use std::path::{Path, PathBuf};

lazy_static::lazy_static! {
    static ref WHITESPACE_RE: Regex = Regex::new(r"\s+").unwrap();
    static ref ROW: Selector = Selector::parse("tr").unwrap();
    static ref CELL: Selector = Selector::parse("td").unwrap();
    static ref IMG: Selector = Selector::parse("img[src]").unwrap();
}

/// 連続する空白を1つにまとめて前後を削る
pub fn clean(text: &str) -> String {
    WHITESPACE_RE.replace_all(text, " ").trim().to_string()
}

fn cell_text(cell: &ElementRef<'_>) -> String {
    let parts: Vec<&str> = cell
        .text()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect();
    clean(&parts.join(" "))
}

/// HTML文字列からプレート一覧を作る
pub fn parse_plates(html: &str, images: &ImageIndex) -> Vec<Plate> {
    let document = Html::parse_document(html);
    let mut plates = Vec::new();

    for row in document.select(&ROW) {
        let cells: Vec<ElementRef<'_>> = row.select(&CELL).collect();
        if cells.len() < 2 {
            continue;
        }

        let name = cell_text(&cells[0]);
        let description = cell_text(&cells[cells.len() - 1]);
        if name.is_empty() || description.is_empty() {
            continue;
        }

        let image = row
            .select(&IMG)
            .next()
            .and_then(|img| img.value().attr("src"))
            .and_then(|src| images.resolve(src));

        let plate = Plate::new(name, description);
        plates.push(match image {
            Some(path) => plate.with_image(path),
            None => plate,
        });
    }

    plates
}

/// ローカルHTMLファイルを読み込み元とする
#[derive(Debug, Clone)]
pub struct HtmlTableSource {
    candidates: Vec<PathBuf>,
    image_folder: PathBuf,
}

impl HtmlTableSource {
    pub fn new(candidates: Vec<PathBuf>, image_folder: impl Into<PathBuf>) -> Self {
        Self {
            candidates,
            image_folder: image_folder.into(),
        }
    }

    /// 最初に存在する候補ファイル
    pub fn locate(&self) -> Option<&Path> {
        self.candidates
            .iter()
            .map(PathBuf::as_path)
            .find(|p| p.is_file())
    }
}

impl CatalogSource for HtmlTableSource {
    fn describe(&self) -> String {
        match self.locate() {
            Some(path) => path.display().to_string(),
            None => self
                .candidates
                .iter()
                .map(|p| p.display().to_string())
                .collect::<Vec<_>>()
                .join(" / "),
        }
    }

    fn load_catalog(&self) -> plate_finder_common::Result<Vec<Plate>> {
        let Some(path) = self.locate() else {
            tracing::warn!(candidates = %self.describe(), "no plate source file found");
            return Ok(Vec::new());
        };

        tracing::info!(path = %path.display(), "loading plates");
        let bytes = std::fs::read(path)?;
        let html = String::from_utf8_lossy(&bytes);

        let images = ImageIndex::scan(&self.image_folder);
        let plates = parse_plates(&html, &images);
        tracing::info!(
            count = plates.len(),
            thumbnails = plates.iter().filter(|p| p.image_path.is_some()).count(),
            "plates parsed"
        );
        Ok(plates)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TABLE: &str = r#"
        <html><body><table>
          <tr><th>Name</th><th>Effect</th></tr>
          <tr>
            <td><img src="./plates_files/trap_red.png"> Trap
                Red</td>
            <td>x</td>
            <td>Deals   damage
                 over time</td>
          </tr>
          <tr><td>Bleed Yellow</td><td>causes bleed</td></tr>
          <tr><td>Orphan</td></tr>
          <tr><td>  </td><td>no name</td></tr>
          <tr><td>No desc</td><td> </td></tr>
        </table></body></html>
    "#;

    #[test]
    fn test_clean_collapses_whitespace() {
        assert_eq!(clean("  Trap \n\t Red  "), "Trap Red");
        assert_eq!(clean(""), "");
    }

    #[test]
    fn test_parse_plates_reads_first_and_last_cells() {
        let plates = parse_plates(TABLE, &ImageIndex::default());
        assert_eq!(plates.len(), 2);
        assert_eq!(plates[0].name, "Trap Red");
        assert_eq!(plates[0].description, "Deals damage over time");
        assert_eq!(plates[1].name, "Bleed Yellow");
    }

    #[test]
    fn test_parse_plates_drops_missing_images() {
        let plates = parse_plates(TABLE, &ImageIndex::default());
        assert!(plates[0].image_path.is_none());
    }

    #[test]
    fn test_missing_source_yields_empty_catalog() {
        let source = HtmlTableSource::new(vec!["/nonexistent/plates.html".into()], "plates_files");
        assert!(source.locate().is_none());
        assert!(source.load_catalog().unwrap().is_empty());
    }
}
