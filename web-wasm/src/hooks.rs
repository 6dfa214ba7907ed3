//! ブラウザ状態を読むフック
//!
//! - use_viewport: ウィンドウ幅（resizeで更新）
//! - use_search_location: URLの `keywords`（popstate/検索フォームで更新）

use gloo::console;
use leptos::ev;
use leptos::prelude::*;
use movie_browser_common::{keywords_from_search, search_for_keywords};
use wasm_bindgen::JsValue;

/// 現在のウィンドウ幅シグナル
pub fn use_viewport() -> ReadSignal<f64> {
    let (width, set_width) = signal(current_width());

    let handle = window_event_listener(ev::resize, move |_| {
        set_width.set(current_width());
    });
    on_cleanup(move || handle.remove());

    width
}

fn current_width() -> f64 {
    window()
        .inner_width()
        .ok()
        .and_then(|w| w.as_f64())
        .unwrap_or(0.0)
}

/// URLの検索キーワード
#[derive(Clone, Copy)]
pub struct SearchLocation {
    pub keywords: ReadSignal<Option<String>>,
    set_keywords: WriteSignal<Option<String>>,
}

impl SearchLocation {
    /// キーワードをURLに反映（空ならクエリを外す）
    pub fn navigate(&self, keywords: &str) {
        let keywords = keywords.trim();
        let location = window().location();
        let path = location.pathname().unwrap_or_default();
        let url = if keywords.is_empty() {
            path
        } else {
            format!("{}{}", path, search_for_keywords(keywords))
        };

        if let Ok(history) = window().history() {
            if let Err(e) = history.push_state_with_url(&JsValue::NULL, "", Some(&url)) {
                console::warn!(format!("pushState失敗: {:?}", e));
            }
        }

        self.set_keywords
            .set(Some(keywords.to_string()).filter(|k| !k.is_empty()));
    }
}

pub fn use_search_location() -> SearchLocation {
    let (keywords, set_keywords) = signal(current_keywords());

    let handle = window_event_listener(ev::popstate, move |_| {
        set_keywords.set(current_keywords());
    });
    on_cleanup(move || handle.remove());

    SearchLocation {
        keywords,
        set_keywords,
    }
}

fn current_keywords() -> Option<String> {
    window()
        .location()
        .search()
        .ok()
        .and_then(|search| keywords_from_search(&search))
}
