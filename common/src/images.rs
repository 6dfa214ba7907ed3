//! 画像URL生成
//!
//! TMDBの画像CDNに対するURLを作品データから組み立てる

use serde::{Deserialize, Serialize};
use crate::types::{ArtVariant, Movie};

pub const POSTER_BASE_URL: &str = "https://image.tmdb.org/t/p/original";
pub const BACKDROP_BASE_URL: &str = "https://image.tmdb.org/t/p/w500";

/// 画像のベースURL設定
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ImageConfig {
    pub poster_base: String,
    pub backdrop_base: String,
}

impl Default for ImageConfig {
    fn default() -> Self {
        Self {
            poster_base: POSTER_BASE_URL.to_string(),
            backdrop_base: BACKDROP_BASE_URL.to_string(),
        }
    }
}

impl ImageConfig {
    /// カルーセル行のタイル画像URL
    ///
    /// ポスター行は原寸ポスター、それ以外はw500の背景画像
    pub fn row_image_url(&self, movie: &Movie, variant: ArtVariant) -> Option<String> {
        match variant {
            ArtVariant::Poster => movie.poster().map(|p| join(&self.poster_base, p)),
            ArtVariant::Backdrop => movie.backdrop().map(|p| join(&self.backdrop_base, p)),
        }
    }

    /// 検索結果タイルの画像URL（常に背景画像）
    pub fn search_image_url(&self, movie: &Movie) -> Option<String> {
        movie.backdrop().map(|p| join(&self.backdrop_base, p))
    }
}

fn join(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie() -> Movie {
        Movie {
            id: 1,
            poster_path: Some("/poster.jpg".to_string()),
            backdrop_path: Some("/backdrop.jpg".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_row_image_url_poster_variant() {
        let config = ImageConfig::default();
        assert_eq!(
            config.row_image_url(&movie(), ArtVariant::Poster).as_deref(),
            Some("https://image.tmdb.org/t/p/original/poster.jpg")
        );
    }

    #[test]
    fn test_row_image_url_backdrop_variant() {
        let config = ImageConfig::default();
        assert_eq!(
            config.row_image_url(&movie(), ArtVariant::Backdrop).as_deref(),
            Some("https://image.tmdb.org/t/p/w500/backdrop.jpg")
        );
    }

    #[test]
    fn test_search_image_url_uses_backdrop() {
        let config = ImageConfig::default();
        assert_eq!(
            config.search_image_url(&movie()).as_deref(),
            Some("https://image.tmdb.org/t/p/w500/backdrop.jpg")
        );
        assert_eq!(config.search_image_url(&Movie::default()), None);
    }

    #[test]
    fn test_custom_base_with_trailing_slash() {
        let config = ImageConfig {
            poster_base: "http://localhost:8080/img/".to_string(),
            ..Default::default()
        };
        assert_eq!(
            config.row_image_url(&movie(), ArtVariant::Poster).as_deref(),
            Some("http://localhost:8080/img/poster.jpg")
        );
    }
}
