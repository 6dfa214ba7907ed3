use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "movie-browser")]
#[command(about = "映画カタログのカルーセル/検索グリッド プレビューツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// カルーセル行に描画されるタイルを表示
    Rows {
        /// カタログJSONファイル（省略時は設定ファイルの値）
        catalog: Option<PathBuf>,

        /// ビューポート幅(px)
        #[arg(short, long)]
        width: Option<f64>,

        /// 指定したコレクションのみ
        #[arg(short, long)]
        collection: Option<String>,
    },

    /// 検索グリッドに描画されるタイルを表示
    Search {
        /// カタログJSONファイル（省略時は設定ファイルの値）
        catalog: Option<PathBuf>,

        /// 検索キーワード
        #[arg(short, long, required = true)]
        keywords: String,

        /// ビューポート幅(px)
        #[arg(short, long)]
        width: Option<f64>,
    },

    /// 設定を表示/編集
    Config {
        /// 既定のカタログを設定
        #[arg(long)]
        set_catalog: Option<PathBuf>,

        /// 既定のビューポート幅を設定
        #[arg(long)]
        set_width: Option<f64>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}
