//! レイアウト設定モジュール
//!
//! ビューポート幅からタイルサイズ・列数を決める純粋関数

/// カルーセル行のタイル幅段階
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowTileTier {
    Wide,
    Medium,
    Small,
    Narrow,
}

impl RowTileTier {
    /// ビューポート幅(px)から段階を決定
    pub fn for_width(width: f64) -> Self {
        if width > 1200.0 {
            RowTileTier::Wide
        } else if width > 992.0 {
            RowTileTier::Medium
        } else if width > 768.0 {
            RowTileTier::Small
        } else {
            RowTileTier::Narrow
        }
    }

    /// タイル幅(px)
    pub fn tile_width(&self) -> u32 {
        match self {
            RowTileTier::Wide => 360,
            RowTileTier::Medium => 300,
            RowTileTier::Small => 250,
            RowTileTier::Narrow => 200,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RowTileTier::Wide => "wide",
            RowTileTier::Medium => "medium",
            RowTileTier::Small => "small",
            RowTileTier::Narrow => "narrow",
        }
    }
}

/// カルーセル行の `grid-template-columns`
///
/// 作品が無い場合は指定しない
pub fn row_template_columns(movie_count: usize, width: f64) -> Option<String> {
    if movie_count == 0 {
        return None;
    }
    let tile = RowTileTier::for_width(width).tile_width();
    Some(format!("repeat({}, {}px)", movie_count, tile))
}

/// 検索グリッドの列数
pub fn grid_columns(width: f64) -> u32 {
    if width > 1200.0 {
        5
    } else if width > 992.0 {
        4
    } else if width > 768.0 {
        3
    } else if width > 600.0 {
        2
    } else {
        1
    }
}

/// 検索グリッドの `grid-template-columns`
pub fn grid_template_columns(width: f64) -> String {
    format!("repeat({}, auto)", grid_columns(width))
}
