//! 横スクロールの計画
//!
//! 左右ボタン・ドラッグ操作から、スクロールコンテナに適用する
//! アニメーションのフレーム列を作る。DOMへの適用はWeb側で行う。

/// スクロール方向
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollDirection {
    Left,
    Right,
}

/// スクロールコンテナの寸法(px)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollMetrics {
    pub scroll_left: f64,
    pub scroll_width: f64,
    pub client_width: f64,
}

impl ScrollMetrics {
    /// スクロール可能な最大オフセット
    pub fn max_scroll_left(&self) -> f64 {
        (self.scroll_width - self.client_width).max(0.0)
    }

    pub fn at_start(&self) -> bool {
        self.scroll_left <= 0.0
    }

    pub fn at_end(&self) -> bool {
        self.scroll_left >= self.max_scroll_left()
    }
}

/// スクロールアニメーション設定
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollSettings {
    pub duration_ms: u32,
    pub steps: u32,
    /// 1回のスクロールで動かすタイル数
    pub tiles_per_scroll: f64,
}

impl Default for ScrollSettings {
    fn default() -> Self {
        Self {
            duration_ms: 250,
            steps: 100,
            tiles_per_scroll: 2.0,
        }
    }
}

/// スクロールを計画する
///
/// 端に達している方向へのスクロールは `None`（何もしない）
pub fn plan_scroll(
    direction: ScrollDirection,
    metrics: ScrollMetrics,
    tile_width: f64,
    settings: &ScrollSettings,
) -> Option<SmoothScroll> {
    let distance = tile_width * settings.tiles_per_scroll;
    let amount = match direction {
        ScrollDirection::Right if !metrics.at_end() => distance,
        ScrollDirection::Left if !metrics.at_start() => -distance,
        _ => return None,
    };

    Some(SmoothScroll {
        start: metrics.scroll_left,
        amount,
        max: metrics.max_scroll_left(),
        duration_ms: settings.duration_ms,
        steps: settings.steps.max(1),
    })
}

/// 等間隔フレームによるスムーズスクロール
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SmoothScroll {
    pub start: f64,
    pub amount: f64,
    pub max: f64,
    pub duration_ms: u32,
    pub steps: u32,
}

/// アニメーションの1フレーム
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollFrame {
    pub delay_ms: u32,
    pub position: f64,
}

impl SmoothScroll {
    /// `0..=steps` のフレーム列（最終フレームが目的位置）
    pub fn frames(&self) -> impl Iterator<Item = ScrollFrame> + '_ {
        (0..=self.steps).map(move |i| ScrollFrame {
            delay_ms: self.duration_ms * i / self.steps,
            position: self.position_at(i),
        })
    }

    fn position_at(&self, step: u32) -> f64 {
        let raw = self.start + self.amount * f64::from(step) / f64::from(self.steps);
        raw.clamp(0.0, self.max)
    }

    pub fn target(&self) -> f64 {
        self.position_at(self.steps)
    }
}
