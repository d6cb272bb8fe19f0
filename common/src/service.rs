//! プレート検索サービス
//!
//! 外部（CLI・チャット連携など）から呼ばれる操作の入口。
//! 共有するのはストアのみで、閲覧・おすすめの状態は引数で受け取り戻り値で返す。

use crate::error::{Error, Result};
use crate::menu::{truncate_label, MenuOption, SelectMenu, DEFAULT_LABEL_MAX};
use crate::pagination::{self, Direction, ResultPage};
use crate::search;
use crate::session::BrowseSession;
use crate::store::{Catalog, PlateStore};
use crate::suggest::{self, Color, GuidedSelectionState, PlateType, Suggestion};
use crate::types::{Plate, PlateId};

/// カタログの読み込み元（HTML抽出など）
pub trait CatalogSource {
    /// ログ・警告用の説明
    fn describe(&self) -> String;

    fn load_catalog(&self) -> Result<Vec<Plate>>;
}

/// 閲覧画面1回分
#[derive(Debug, Clone)]
pub struct BrowseView {
    pub session: BrowseSession,
    pub page: ResultPage<Plate>,
    pub menu: SelectMenu<BrowseSession>,
}

pub struct PlateService<S> {
    source: S,
    store: PlateStore,
    label_max: usize,
}

impl<S: CatalogSource> PlateService<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            store: PlateStore::new(),
            label_max: DEFAULT_LABEL_MAX,
        }
    }

    pub fn with_label_max(mut self, label_max: usize) -> Self {
        self.label_max = label_max.max(1);
        self
    }

    pub fn store(&self) -> &PlateStore {
        &self.store
    }

    pub fn catalog(&self) -> Catalog {
        self.store.snapshot()
    }

    /// カタログを読み直して丸ごと差し替える
    ///
    /// 0件の場合もストアは空に差し替え、`Error::LoadEmpty` を返す。
    /// 読み込み自体が失敗した場合は旧カタログを残す。
    pub fn reload(&self) -> Result<usize> {
        let plates = self.source.load_catalog()?;
        let count = self.store.replace(plates);

        if count == 0 {
            tracing::warn!(source = %self.source.describe(), "catalog loaded with no plates");
            return Err(Error::LoadEmpty(self.source.describe()));
        }

        tracing::info!(count, source = %self.source.describe(), "catalog reloaded");
        Ok(count)
    }

    /// 検索コマンド: 順位順のプレート
    pub fn search_command(&self, query: Option<&str>) -> Result<Vec<Plate>> {
        let query = query.unwrap_or_default();
        let results = search::search(query, &self.catalog())?;
        if results.is_empty() {
            return Err(Error::NoMatch {
                query: query.trim().to_string(),
            });
        }
        Ok(results)
    }

    /// 閲覧開始（クエリなしは全件をストア順で）
    pub fn browse(&self, query: Option<&str>) -> Result<BrowseView> {
        let query = query.map(str::trim).filter(|q| !q.is_empty());
        let session = BrowseSession::new(query.map(str::to_string));
        tracing::debug!(session = %session.id, query = ?session.query, "browse started");
        self.render(session)
    }

    /// 前後ページへ移動
    pub fn navigate(&self, session: &BrowseSession, direction: Direction) -> Result<BrowseView> {
        let catalog = self.catalog();
        let positions = self.positions(session, &catalog)?;
        let total = pagination::page_count(positions.len());
        let next = direction.advance(session.page_index, total);
        tracing::debug!(session = %session.id, from = session.page_index, to = next, "navigate");
        self.render_with(session.at_page(next), &catalog, &positions)
    }

    /// 選択肢を現行カタログに対して解決する
    pub fn select(&self, session: &BrowseSession, item_id: &str) -> Result<Plate> {
        let id = PlateId::decode(item_id).ok_or_else(|| Error::NotFound(item_id.to_string()))?;
        let catalog = self.catalog();

        match id.resolve(&catalog) {
            Some(plate) => Ok(plate.clone()),
            None => {
                tracing::debug!(session = %session.id, item = %id, "selected plate no longer in catalog");
                Err(Error::NotFound(id.to_string()))
            }
        }
    }

    pub fn suggest_start(&self) -> GuidedSelectionState {
        suggest::start()
    }

    pub fn suggest_choose_color(
        &self,
        state: &GuidedSelectionState,
        color: Color,
    ) -> Result<GuidedSelectionState> {
        suggest::choose_color(state, color)
    }

    pub fn suggest_choose_type(
        &self,
        state: &GuidedSelectionState,
        kind: PlateType,
    ) -> Result<Suggestion> {
        let completed = suggest::choose_type(state, kind)?;
        suggest::resolve(&completed, &self.catalog())
    }

    fn render(&self, session: BrowseSession) -> Result<BrowseView> {
        let catalog = self.catalog();
        let positions = self.positions(&session, &catalog)?;
        self.render_with(session, &catalog, &positions)
    }

    /// セッションの結果リスト（カタログ内の位置）を再生成する
    fn positions(&self, session: &BrowseSession, catalog: &[Plate]) -> Result<Vec<usize>> {
        match session.query.as_deref() {
            None => Ok((0..catalog.len()).collect()),
            Some(query) => {
                let positions = search::search_positions(query, catalog)?;
                if positions.is_empty() {
                    return Err(Error::NoMatch {
                        query: query.to_string(),
                    });
                }
                Ok(positions)
            }
        }
    }

    fn render_with(
        &self,
        session: BrowseSession,
        catalog: &[Plate],
        positions: &[usize],
    ) -> Result<BrowseView> {
        let window = pagination::page(positions, session.page_index);
        let session = session.at_page(window.index);

        let options = window
            .items
            .iter()
            .filter_map(|&pos| {
                let id = PlateId::at(catalog, pos)?;
                Some(MenuOption::new(
                    truncate_label(&id.name, self.label_max),
                    id.encode(),
                ))
            })
            .collect();

        let page = window.map(|pos| catalog[pos].clone());
        let menu = SelectMenu::new("Select a plate", options, session.clone())
            .with_navigation(page.nav_available());

        Ok(BrowseView {
            session,
            page,
            menu,
        })
    }
}
