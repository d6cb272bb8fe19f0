//! 描画側のインターフェース
//!
//! 端末・チャットなど実際の表示はこのトレイトの実装に任せる。

use crate::error::Result;
use crate::menu::{MenuEvent, SelectMenu};
use crate::pagination::ResultPage;
use crate::types::Plate;

pub trait Presenter {
    /// 検索結果を先頭 `limit` 件だけ表示
    fn present_list(&mut self, plates: &[Plate], limit: usize) -> Result<()>;

    fn present_single(&mut self, plate: &Plate) -> Result<()>;

    /// 関連候補（空なら何も出さない実装でよい）
    fn present_related(&mut self, plates: &[Plate]) -> Result<()>;

    fn present_page(&mut self, page: &ResultPage<Plate>, nav_available: bool) -> Result<()>;

    /// メニューを出してユーザー操作を1つ受け取る
    fn present_menu<T>(&mut self, menu: &SelectMenu<T>) -> Result<MenuEvent>;

    fn present_error(&mut self, message: &str) -> Result<()>;

    /// 状態通知（リロード件数・ヘルプなど）
    fn present_info(&mut self, message: &str) -> Result<()>;
}
