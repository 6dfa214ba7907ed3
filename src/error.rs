use thiserror::Error;

#[derive(Error, Debug)]
pub enum BrowserError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("カタログが指定されていません。`movie-browser config --set-catalog PATH` で設定するか引数で指定してください")]
    MissingCatalog,

    #[error("カタログが見つかりません: {0}")]
    CatalogNotFound(String),

    #[error("コレクションが見つかりません: {0}")]
    CollectionNotFound(String),

    #[error("カタログ読み込みエラー: {0}")]
    Catalog(#[from] movie_browser_common::Error),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, BrowserError>;
