//! 描画対象タイルの抽出
//!
//! 画像が欠けた作品はエラーにせず、描画対象から静かに除外する

use crate::images::ImageConfig;
use crate::types::{ArtVariant, Movie};

/// 描画するタイル1枚
#[derive(Debug, Clone, PartialEq)]
pub struct Tile {
    /// 元リスト内の位置（描画キーに使用）
    pub index: usize,
    pub movie: Movie,
    pub image_url: String,
    pub caption: String,
}

impl Tile {
    pub fn key(&self) -> (usize, u64) {
        (self.index, self.movie.id)
    }
}

/// カルーセル行に描画する作品か
///
/// ポスターと背景画像の両方が揃っている作品のみ
pub fn is_row_renderable(movie: &Movie) -> bool {
    movie.poster().is_some() && movie.backdrop().is_some()
}

/// 検索グリッドに描画する作品か
///
/// 人物と背景画像なしは除外
pub fn is_search_renderable(movie: &Movie) -> bool {
    !movie.is_person() && movie.backdrop().is_some()
}

/// カルーセル行のタイル一覧
pub fn row_tiles(movies: &[Movie], variant: ArtVariant, images: &ImageConfig) -> Vec<Tile> {
    movies
        .iter()
        .enumerate()
        .filter(|(_, m)| is_row_renderable(m))
        .filter_map(|(index, m)| {
            let image_url = images.row_image_url(m, variant)?;
            Some(Tile {
                index,
                movie: m.clone(),
                image_url,
                caption: m.display_name().to_string(),
            })
        })
        .collect()
}

/// 検索グリッドのタイル一覧
pub fn search_tiles(movies: Option<&[Movie]>, images: &ImageConfig) -> Vec<Tile> {
    movies
        .unwrap_or_default()
        .iter()
        .enumerate()
        .filter(|(_, m)| is_search_renderable(m))
        .filter_map(|(index, m)| {
            let image_url = images.search_image_url(m)?;
            Some(Tile {
                index,
                movie: m.clone(),
                image_url,
                caption: m.display_name().to_string(),
            })
        })
        .collect()
}

/// 検索結果が空（未取得を含む）か
pub fn has_search_results(movies: Option<&[Movie]>) -> bool {
    movies.is_some_and(|m| !m.is_empty())
}
