//! スクロールコンテナへのアニメーション適用

use gloo::timers::callback::Timeout;
use movie_browser_common::{ScrollMetrics, SmoothScroll};
use web_sys::Element;

pub fn metrics(el: &Element) -> ScrollMetrics {
    ScrollMetrics {
        scroll_left: f64::from(el.scroll_left()),
        scroll_width: f64::from(el.scroll_width()),
        client_width: f64::from(el.client_width()),
    }
}

/// 先頭タイルの実幅（未描画なら `None`）
pub fn first_tile_width(el: &Element) -> Option<f64> {
    el.first_element_child()
        .map(|child| f64::from(child.client_width()))
        .filter(|w| *w > 0.0)
}

/// フレームごとにタイマーを仕掛けて scrollLeft を更新
pub fn animate(el: &Element, scroll: SmoothScroll) {
    for frame in scroll.frames() {
        let el = el.clone();
        let position = frame.position.round() as i32;
        Timeout::new(frame.delay_ms, move || el.set_scroll_left(position)).forget();
    }
}
