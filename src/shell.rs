//! 対話シェル
//!
//! `sp trap red` / `browse` / `suggest` / `reload` などを1行ずつ受け付ける。
//! 設定の短縮キーワード（`trap red` など）は `sp` と同じ扱い。

use crate::config::Config;
use crate::error::{PlateFinderError, Result};
use crate::interactive;
use dialoguer::Input;
use plate_finder_common::{CatalogSource, Error, PlateService, Presenter};

/// シェルコマンド
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Search(String),
    Browse(Option<String>),
    Suggest,
    Reload,
    Help,
    Quit,
    Empty,
    Unknown(String),
}

/// 続行するか
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub const HELP: &str = "\
Commands:
  sp <keywords>      search plates (e.g. sp trap red)
  <shortcut> [more]  same as sp, e.g. trap red
  browse [keywords]  page through plates
  suggest            pick a color, then a type
  reload             reload the plate source
  help               show this help
  quit               leave the shell";

/// 1行をコマンドに変換
pub fn parse_command(line: &str, config: &Config) -> ShellCommand {
    let line = line.trim();
    let line = line
        .strip_prefix('!')
        .or_else(|| line.strip_prefix('/'))
        .unwrap_or(line)
        .trim_start();

    if line.is_empty() {
        return ShellCommand::Empty;
    }

    let (head, rest) = match line.split_once(char::is_whitespace) {
        Some((head, rest)) => (head, rest.trim()),
        None => (line, ""),
    };

    match head.to_lowercase().as_str() {
        "sp" | "search" => ShellCommand::Search(rest.to_string()),
        "browse" => ShellCommand::Browse((!rest.is_empty()).then(|| rest.to_string())),
        "suggest" => ShellCommand::Suggest,
        "reload" => ShellCommand::Reload,
        "help" | "?" => ShellCommand::Help,
        "quit" | "exit" | "q" => ShellCommand::Quit,
        word if config.is_shortcut(word) => {
            ShellCommand::Search(format!("{} {}", word, rest).trim().to_string())
        }
        _ => ShellCommand::Unknown(head.to_string()),
    }
}

/// リロードして結果を表示
pub fn reload<S: CatalogSource, P: Presenter>(
    service: &PlateService<S>,
    presenter: &mut P,
) -> Result<Option<usize>> {
    match service.reload() {
        Ok(count) => {
            presenter.present_info(&format!("🔄 Reload complete: {} plates", count))?;
            Ok(Some(count))
        }
        Err(e @ Error::LoadEmpty(_)) => {
            presenter.present_error(&e.to_string())?;
            Ok(None)
        }
        Err(e) => Err(e.into()),
    }
}

/// コマンドを1つ実行
pub fn execute<S: CatalogSource, P: Presenter>(
    command: ShellCommand,
    service: &PlateService<S>,
    presenter: &mut P,
    config: &Config,
) -> Result<Flow> {
    match command {
        ShellCommand::Search(query) => {
            interactive::run_search(service, presenter, Some(&query), config.list_limit)?;
        }
        ShellCommand::Browse(query) => {
            interactive::run_browse(service, presenter, query.as_deref())?;
        }
        ShellCommand::Suggest => interactive::run_suggest(service, presenter)?,
        ShellCommand::Reload => {
            reload(service, presenter)?;
        }
        ShellCommand::Help => presenter.present_info(HELP)?,
        ShellCommand::Quit => return Ok(Flow::Quit),
        ShellCommand::Empty => {}
        ShellCommand::Unknown(word) => {
            presenter.present_error(&format!("Unknown command: {} (type help)", word))?;
        }
    }
    Ok(Flow::Continue)
}

/// 対話ループ
pub fn run_shell<S: CatalogSource, P: Presenter>(
    service: &PlateService<S>,
    presenter: &mut P,
    config: &Config,
) -> Result<()> {
    presenter.present_info(&format!(
        "🤖 plate-finder shell ({} plates). Type help for commands.",
        service.store().len()
    ))?;

    loop {
        let line: String = Input::new()
            .with_prompt("plates")
            .allow_empty(true)
            .interact_text()
            .map_err(|e| PlateFinderError::Prompt(e.to_string()))?;

        let command = parse_command(&line, config);
        tracing::debug!(?command, "shell command");

        if execute(command, service, presenter, config)? == Flow::Quit {
            return Ok(());
        }
    }
}
