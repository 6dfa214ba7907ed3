//! 表示設定
//!
//! 画像のベースURLとスクロールアニメーションの設定。
//! 既定値はそのままWeb版で使われる。

use serde::{Deserialize, Serialize};
use crate::images::ImageConfig;
use crate::scroll::ScrollSettings;

/// 検索結果が無いときのメッセージ
///
/// 検索語は埋め込まれない（既知の不具合として固定文言を維持）
pub const NO_RESULTS_MESSAGE: &str = r#"Your search for "key word" did not have any matches."#;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BrowseConfig {
    pub images: ImageConfig,
    pub scroll_duration_ms: u32,
    pub scroll_steps: u32,
    pub tiles_per_scroll: f64,
}

impl Default for BrowseConfig {
    fn default() -> Self {
        let scroll = ScrollSettings::default();
        Self {
            images: ImageConfig::default(),
            scroll_duration_ms: scroll.duration_ms,
            scroll_steps: scroll.steps,
            tiles_per_scroll: scroll.tiles_per_scroll,
        }
    }
}

impl BrowseConfig {
    pub fn scroll_settings(&self) -> ScrollSettings {
        ScrollSettings {
            duration_ms: self.scroll_duration_ms,
            steps: self.scroll_steps,
            tiles_per_scroll: self.tiles_per_scroll,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_reference_constants() {
        let config = BrowseConfig::default();
        assert_eq!(config.scroll_duration_ms, 250);
        assert_eq!(config.scroll_steps, 100);
        assert_eq!(config.tiles_per_scroll, 2.0);
        assert_eq!(config.images.poster_base, "https://image.tmdb.org/t/p/original");
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let json = r#"{"scrollDurationMs": 400, "images": {"posterBase": "http://cdn/p"}}"#;
        let config: BrowseConfig = serde_json::from_str(json).expect("デシリアライズ失敗");
        assert_eq!(config.scroll_duration_ms, 400);
        assert_eq!(config.scroll_steps, 100);
        assert_eq!(config.images.poster_base, "http://cdn/p");
        assert_eq!(config.images.backdrop_base, "https://image.tmdb.org/t/p/w500");
        assert_eq!(config.scroll_settings().duration_ms, 400);
    }

    #[test]
    fn test_no_results_message_is_literal() {
        assert_eq!(
            NO_RESULTS_MESSAGE,
            "Your search for \"key word\" did not have any matches."
        );
    }
}
