//! 作品カタログ
//!
//! トップ画面の各行（コレクション）と、ローカル検索の対象になる作品群。
//! TMDB APIは呼ばず、JSONファイルから読み込む。

use std::collections::HashSet;
use std::path::Path;
use serde::{Deserialize, Serialize};
use crate::error::{Error, Result};
use crate::types::{ArtVariant, Movie};

/// 1行分のコレクション
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Collection {
    /// DOM要素のid
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub variant: ArtVariant,
    #[serde(default)]
    pub movies: Vec<Movie>,
}

/// カタログ全体
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    pub collections: Vec<Collection>,
}

impl Catalog {
    pub fn from_json(json: &str) -> Result<Self> {
        let catalog: Catalog = serde_json::from_str(json)?;
        catalog.validate()?;
        Ok(catalog)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for c in &self.collections {
            if c.id.is_empty() {
                return Err(Error::Catalog(format!("コレクション「{}」にidがありません", c.title)));
            }
            if !seen.insert(c.id.as_str()) {
                return Err(Error::Catalog(format!("コレクションidが重複しています: {}", c.id)));
            }
        }
        Ok(())
    }

    pub fn collection(&self, id: &str) -> Option<&Collection> {
        self.collections.iter().find(|c| c.id == id)
    }

    /// 表示名の部分一致検索（大文字小文字を区別しない）
    ///
    /// 複数のコレクションに出てくる作品は最初の1件のみ
    pub fn search(&self, keyword: &str) -> Vec<Movie> {
        let needle = keyword.trim().to_lowercase();
        if needle.is_empty() {
            return vec![];
        }

        let mut seen = HashSet::new();
        self.collections
            .iter()
            .flat_map(|c| c.movies.iter())
            .filter(|m| m.display_name().to_lowercase().contains(&needle))
            .filter(|m| seen.insert(m.id))
            .cloned()
            .collect()
    }

    pub fn movie_count(&self) -> usize {
        self.collections.iter().map(|c| c.movies.len()).sum()
    }
}
