//! Movie Browser Common Library
//!
//! CLIとWeb(WASM)で共有される型とUIロジック

pub mod types;
pub mod layout;
pub mod images;
pub mod filter;
pub mod gesture;
pub mod scroll;
pub mod store;
pub mod query;
pub mod catalog;
pub mod config;
pub mod error;

pub use types::{ArtVariant, MediaType, Movie};
pub use layout::{grid_columns, grid_template_columns, row_template_columns, RowTileTier};
pub use images::ImageConfig;
pub use filter::{has_search_results, row_tiles, search_tiles, Tile};
pub use gesture::DragGesture;
pub use scroll::{plan_scroll, ScrollDirection, ScrollMetrics, ScrollSettings, SmoothScroll};
pub use store::{select_movie, Action, BrowseState, BrowseStore, Dispatch};
pub use query::{keywords_from_search, search_for_keywords, KeywordTracker};
pub use catalog::{Catalog, Collection};
pub use config::{BrowseConfig, NO_RESULTS_MESSAGE};
pub use error::{Error, Result};
