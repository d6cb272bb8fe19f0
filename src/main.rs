use clap::Parser;
use plate_finder::{cli, config, error, extractor, interactive, presenter, shell};
use cli::{Cli, Commands};
use config::Config;
use error::Result;
use extractor::HtmlTableSource;
use plate_finder_common::{PlateService, Presenter};
use presenter::TerminalPresenter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // 上書き前のファイル内容だけを保存する
    if let Commands::Config { init: true, .. } = cli.command {
        let path = Config::init()?;
        println!("✔ 設定ファイルを作成しました: {}", path.display());
    }

    let mut config = Config::load()?;
    config.override_paths(cli.source.clone(), cli.images.clone());
    plate_finder::init_tracing(&config.log_level, cli.verbose);

    if let Commands::Config { show, init } = cli.command {
        if show || !init {
            println!("設定:");
            let sources: Vec<String> = config
                .source_files
                .iter()
                .map(|p| p.display().to_string())
                .collect();
            println!("  読み込み候補: {}", sources.join(", "));
            println!("  画像フォルダ: {}", config.image_folder.display());
            println!("  表示件数: {}", config.list_limit);
            println!("  ラベル最大長: {}", config.label_max_len);
            println!("  短縮コマンド: {}", config.shortcuts.join(", "));
            println!("  ログレベル: {}", config.log_level);
        }
        return Ok(());
    }

    let source = HtmlTableSource::new(config.source_files.clone(), config.image_folder.clone());
    let service = PlateService::new(source).with_label_max(config.label_max_len);
    let mut presenter = TerminalPresenter::stdout();

    // 0件でも終了せず空カタログで続行
    if let Err(e) = service.reload() {
        if !e.is_recoverable() {
            return Err(e.into());
        }
        presenter.present_error(&e.to_string())?;
    }

    match cli.command {
        Commands::Search { words, limit } => {
            let query = cli::join_words(&words);
            let limit = limit.unwrap_or(config.list_limit).max(1);
            interactive::run_search(&service, &mut presenter, query.as_deref(), limit)?;
        }

        Commands::Browse { words } => {
            let query = cli::join_words(&words);
            interactive::run_browse(&service, &mut presenter, query.as_deref())?;
        }

        Commands::Suggest => {
            interactive::run_suggest(&service, &mut presenter)?;
        }

        Commands::Shell => {
            shell::run_shell(&service, &mut presenter, &config)?;
        }

        Commands::Config { .. } => {}
    }

    Ok(())
}
