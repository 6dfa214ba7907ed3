//! 映画データの型定義
//!
//! TMDBのレスポンス形式に合わせた型:
//! - Movie: 作品1件（映画・TV・人物を含む検索結果の1行）
//! - MediaType: 作品種別
//! - ArtVariant: 行ごとのアートワーク種別（ポスター/背景画像）

use serde::{Deserialize, Serialize};

/// 作品種別
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Movie,
    Tv,
    Person,
    #[serde(other)]
    Other,
}

/// 作品1件
///
/// UIからは読み取り専用。`id` 以外はすべて欠落しうる。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub id: u64,
    pub title: Option<String>,
    pub name: Option<String>,
    pub poster_path: Option<String>,
    pub backdrop_path: Option<String>,
    pub media_type: Option<MediaType>,

    // 詳細表示用
    pub overview: Option<String>,
    pub release_date: Option<String>,
    pub first_air_date: Option<String>,
    pub vote_average: Option<f32>,
}

impl Movie {
    /// 表示名（映画はtitle、TVはname）
    pub fn display_name(&self) -> &str {
        non_empty(&self.title)
            .or_else(|| non_empty(&self.name))
            .unwrap_or("")
    }

    /// ポスター画像パス（空文字は欠落扱い）
    pub fn poster(&self) -> Option<&str> {
        non_empty(&self.poster_path)
    }

    /// 背景画像パス（空文字は欠落扱い）
    pub fn backdrop(&self) -> Option<&str> {
        non_empty(&self.backdrop_path)
    }

    pub fn is_person(&self) -> bool {
        self.media_type == Some(MediaType::Person)
    }

    /// 公開日（TVは初回放送日）
    pub fn air_date(&self) -> Option<&str> {
        non_empty(&self.release_date).or_else(|| non_empty(&self.first_air_date))
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

/// 行ごとのアートワーク種別
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArtVariant {
    /// 縦長ポスター（原寸）
    Poster,
    /// 横長背景画像（w500）
    #[default]
    Backdrop,
}

impl From<bool> for ArtVariant {
    fn from(is_poster: bool) -> Self {
        if is_poster {
            ArtVariant::Poster
        } else {
            ArtVariant::Backdrop
        }
    }
}

impl ArtVariant {
    pub fn is_poster(&self) -> bool {
        matches!(self, ArtVariant::Poster)
    }
}
