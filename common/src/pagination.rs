//! ページング
//!
//! 並び済みの結果リストを固定サイズのページに分割する。
//! ページ番号は常にページ数で剰余を取るので範囲外にならない。

use serde::{Deserialize, Serialize};

/// 1ページの件数
pub const PAGE_SIZE: usize = 25;

/// ページ数（空リストも1ページとして描画する）
pub fn page_count(len: usize) -> usize {
    len.div_ceil(PAGE_SIZE).max(1)
}

/// ページ移動の向き
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Prev,
    Next,
}

impl Direction {
    /// 移動後のページ番号（両端で折り返す）
    pub fn advance(self, index: usize, total_pages: usize) -> usize {
        let total = total_pages.max(1);
        let index = index % total;
        match self {
            Direction::Next => (index + 1) % total,
            Direction::Prev => (index + total - 1) % total,
        }
    }
}

/// 1ページ分の結果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultPage<T> {
    pub items: Vec<T>,
    pub index: usize,
    pub total_pages: usize,
}

impl<T> ResultPage<T> {
    /// 前後ボタンを出すか
    pub fn nav_available(&self) -> bool {
        self.total_pages > 1
    }

    /// 表示用の「i/n」
    pub fn label(&self) -> String {
        format!("{}/{}", self.index + 1, self.total_pages)
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> ResultPage<U> {
        ResultPage {
            items: self.items.into_iter().map(f).collect(),
            index: self.index,
            total_pages: self.total_pages,
        }
    }
}

/// `index` 番目のページを切り出す
pub fn page<T: Clone>(list: &[T], index: usize) -> ResultPage<T> {
    let total_pages = page_count(list.len());
    let index = index % total_pages;
    let start = (index * PAGE_SIZE).min(list.len());
    let end = ((index + 1) * PAGE_SIZE).min(list.len());

    ResultPage {
        items: list[start..end].to_vec(),
        index,
        total_pages,
    }
}
