//! 対話フロー（検索・ページ閲覧・おすすめ）
//!
//! ユーザー操作1回ごとにサービスを呼び直し、状態は戻り値で持ち回る。
//! 回復可能なエラーは表示だけして続行する。

use crate::error::Result;
use plate_finder_common::{
    CatalogSource, Color, Direction, MenuEvent, PlateService, PlateType, Presenter,
};

/// 回復可能なエラーなら表示して `None` を返す
fn report<P: Presenter, T>(
    presenter: &mut P,
    result: plate_finder_common::Result<T>,
) -> Result<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(e) if e.is_recoverable() => {
            tracing::debug!(error = %e, "request finished without result");
            presenter.present_error(&e.to_string())?;
            Ok(None)
        }
        Err(e) => Err(e.into()),
    }
}

/// キーワード検索して上位を表示
pub fn run_search<S: CatalogSource, P: Presenter>(
    service: &PlateService<S>,
    presenter: &mut P,
    query: Option<&str>,
    limit: usize,
) -> Result<()> {
    if let Some(plates) = report(presenter, service.search_command(query))? {
        presenter.present_list(&plates, limit)?;
    }
    Ok(())
}

/// ページ単位で閲覧する（クエリなしは全件）
pub fn run_browse<S: CatalogSource, P: Presenter>(
    service: &PlateService<S>,
    presenter: &mut P,
    query: Option<&str>,
) -> Result<()> {
    let Some(mut view) = report(presenter, service.browse(query))? else {
        return Ok(());
    };
    let mut redraw = true;

    loop {
        if redraw {
            presenter.present_page(&view.page, view.page.nav_available())?;
            redraw = false;
        }

        let direction = match presenter.present_menu(&view.menu)? {
            MenuEvent::Pick(value) => {
                if let Some(plate) = report(presenter, service.select(&view.menu.token, &value))? {
                    presenter.present_single(&plate)?;
                }
                continue;
            }
            MenuEvent::Prev => Direction::Prev,
            MenuEvent::Next => Direction::Next,
            MenuEvent::Close => return Ok(()),
        };

        match report(presenter, service.navigate(&view.session, direction))? {
            Some(next) => {
                view = next;
                redraw = true;
            }
            // リロードで結果が消えた
            None => return Ok(()),
        }
    }
}

/// 色 → 種類の2段階で絞り込んで表示
pub fn run_suggest<S: CatalogSource, P: Presenter>(
    service: &PlateService<S>,
    presenter: &mut P,
) -> Result<()> {
    let state = service.suggest_start();

    let color = match presenter.present_menu(&plate_finder_common::suggest::color_menu(&state))? {
        MenuEvent::Pick(value) => value.parse::<Color>(),
        _ => return Ok(()),
    };
    let color = match color {
        Ok(color) => color,
        Err(message) => {
            presenter.present_error(&message)?;
            return Ok(());
        }
    };
    let Some(state) = report(presenter, service.suggest_choose_color(&state, color))? else {
        return Ok(());
    };

    let kind = match presenter.present_menu(&plate_finder_common::suggest::type_menu(&state))? {
        MenuEvent::Pick(value) => value.parse::<PlateType>(),
        _ => return Ok(()),
    };
    let kind = match kind {
        Ok(kind) => kind,
        Err(message) => {
            presenter.present_error(&message)?;
            return Ok(());
        }
    };

    if let Some(suggestion) = report(presenter, service.suggest_choose_type(&state, kind))? {
        presenter.present_single(&suggestion.primary)?;
        presenter.present_related(&suggestion.related)?;
    }
    Ok(())
}
