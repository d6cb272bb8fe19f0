use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "plate-finder")]
#[command(about = "スキルプレートの検索・閲覧ツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// プレート一覧のHTMLファイル（設定より優先）
    #[arg(long, global = true)]
    pub source: Option<PathBuf>,

    /// サムネイル画像フォルダ（設定より優先）
    #[arg(long, global = true)]
    pub images: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// キーワードで検索（例: search trap red）
    Search {
        /// 検索キーワード
        words: Vec<String>,

        /// 表示件数（省略時は設定値）
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// ページ単位で閲覧（キーワード省略時は全件）
    Browse {
        /// 絞り込みキーワード
        words: Vec<String>,
    },

    /// 色と種類を選んでおすすめを表示
    Suggest,

    /// 対話シェルを起動
    Shell,

    /// 設定を表示/初期化
    Config {
        /// 設定を表示
        #[arg(long)]
        show: bool,

        /// 既定値で設定ファイルを作成
        #[arg(long)]
        init: bool,
    },
}

/// 位置引数を1つのクエリにまとめる（空なら None）
pub fn join_words(words: &[String]) -> Option<String> {
    let query = words.join(" ");
    let query = query.trim();
    (!query.is_empty()).then(|| query.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_words() {
        assert_eq!(join_words(&["trap".into(), "red".into()]).as_deref(), Some("trap red"));
        assert_eq!(join_words(&[]), None);
        assert_eq!(join_words(&["  ".into()]), None);
    }

    #[test]
    fn test_parse_search_command() {
        let cli = Cli::parse_from(["plate-finder", "search", "trap", "red", "-l", "3"]);
        match cli.command {
            Commands::Search { words, limit } => {
                assert_eq!(words, vec!["trap", "red"]);
                assert_eq!(limit, Some(3));
            }
            _ => panic!("search expected"),
        }
    }

    #[test]
    fn test_global_source_option() {
        let cli = Cli::parse_from(["plate-finder", "browse", "--source", "123.htm"]);
        assert_eq!(cli.source, Some(PathBuf::from("123.htm")));
        assert!(matches!(cli.command, Commands::Browse { .. }));
    }
}
