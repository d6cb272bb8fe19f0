//! プレートストア
//!
//! 現行カタログを `Arc` で保持し、リロード時は新しいカタログを
//! 別に組み立ててから参照ごと差し替える。読み手は常に旧版か新版の
//! どちらか一方だけを見る。

use crate::types::Plate;
use parking_lot::RwLock;
use std::sync::Arc;

/// 読み取り専用のカタログスナップショット
pub type Catalog = Arc<[Plate]>;

#[derive(Debug)]
pub struct PlateStore {
    current: RwLock<Catalog>,
}

impl PlateStore {
    pub fn new() -> Self {
        Self {
            current: RwLock::new(Arc::from(Vec::new())),
        }
    }

    /// 現行カタログを取得（ロックはすぐ解放される）
    pub fn snapshot(&self) -> Catalog {
        Arc::clone(&self.current.read())
    }

    /// カタログ全体を差し替え、件数を返す
    pub fn replace(&self, plates: Vec<Plate>) -> usize {
        let next: Catalog = Arc::from(plates);
        let count = next.len();
        *self.current.write() = next;
        count
    }

    pub fn len(&self) -> usize {
        self.current.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for PlateStore {
    fn default() -> Self {
        Self::new()
    }
}
