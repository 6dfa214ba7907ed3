//! カタログのプレビュー
//!
//! Web版と同じフィルタ・レイアウト計算で、描画されるタイルを文字で出力する

use crate::error::{BrowserError, Result};
use movie_browser_common::{
    grid_columns, has_search_results, row_tiles, search_tiles, BrowseConfig, Catalog,
    RowTileTier, Tile, NO_RESULTS_MESSAGE,
};

/// カルーセル1行分
#[derive(Debug, Clone)]
pub struct RowPreview {
    pub id: String,
    pub title: String,
    pub tier: RowTileTier,
    pub tiles: Vec<Tile>,
    /// 画像不足で除外された件数
    pub skipped: usize,
}

pub fn preview_rows(
    catalog: &Catalog,
    width: f64,
    config: &BrowseConfig,
    only: Option<&str>,
) -> Result<Vec<RowPreview>> {
    let collections: Vec<_> = match only {
        Some(id) => vec![catalog
            .collection(id)
            .ok_or_else(|| BrowserError::CollectionNotFound(id.to_string()))?],
        None => catalog.collections.iter().collect(),
    };

    let tier = RowTileTier::for_width(width);
    Ok(collections
        .into_iter()
        .map(|c| {
            let tiles = row_tiles(&c.movies, c.variant, &config.images);
            RowPreview {
                id: c.id.clone(),
                title: c.title.clone(),
                tier,
                skipped: c.movies.len() - tiles.len(),
                tiles,
            }
        })
        .collect())
}

/// 検索グリッド
#[derive(Debug, Clone)]
pub struct SearchPreview {
    pub columns: u32,
    pub tiles: Vec<Tile>,
    pub has_results: bool,
}

impl SearchPreview {
    /// 結果なしのときのメッセージ
    pub fn message(&self) -> Option<&'static str> {
        (!self.has_results).then_some(NO_RESULTS_MESSAGE)
    }
}

pub fn preview_search(
    catalog: &Catalog,
    keywords: &str,
    width: f64,
    config: &BrowseConfig,
) -> SearchPreview {
    let results = Some(keywords.trim())
        .filter(|k| !k.is_empty())
        .map(|k| catalog.search(k));

    SearchPreview {
        columns: grid_columns(width),
        tiles: search_tiles(results.as_deref(), &config.images),
        has_results: has_search_results(results.as_deref()),
    }
}

pub fn print_rows(rows: &[RowPreview], verbose: bool) {
    for row in rows {
        println!(
            "■ {} (#{}) - {} / {}px - {}件",
            row.title,
            row.id,
            row.tier.as_str(),
            row.tier.tile_width(),
            row.tiles.len()
        );
        for tile in &row.tiles {
            print_tile(tile, verbose);
        }
        if verbose && row.skipped > 0 {
            println!("  (画像なしで除外: {}件)", row.skipped);
        }
    }
}

pub fn print_search(preview: &SearchPreview, verbose: bool) {
    if let Some(message) = preview.message() {
        println!("{}", message);
        return;
    }

    println!("列数: {} / {}件", preview.columns, preview.tiles.len());
    for (i, row) in preview.tiles.chunks(preview.columns.max(1) as usize).enumerate() {
        println!("  [{}行目]", i + 1);
        for tile in row {
            print_tile(tile, verbose);
        }
    }
}

fn print_tile(tile: &Tile, verbose: bool) {
    let caption = if tile.caption.is_empty() { "-" } else { &tile.caption };
    if verbose {
        println!("  - {} ({}) {}", caption, tile.movie.id, tile.image_url);
    } else {
        println!("  - {}", caption);
    }
}
