pub mod cli;
pub mod config;
pub mod error;
pub mod extractor;
pub mod interactive;
pub mod presenter;
pub mod shell;

/// ログ初期化（RUST_LOG があればそれを優先）
pub fn init_tracing(level: &str, verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let default = if verbose { "debug" } else { level };
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
