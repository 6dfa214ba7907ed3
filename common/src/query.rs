//! URLクエリからの検索キーワード
//!
//! `?keywords=...` を読み取り、キーワードが変わったときだけ検索を要求する

use url::form_urlencoded;
use crate::store::{Action, Dispatch};

/// 検索キーワードのクエリパラメータ名
pub const KEYWORDS_PARAM: &str = "keywords";

/// `location.search` 形式の文字列から `keywords` を取り出す
///
/// 先頭の `?` は省略可。値が空なら `None`
pub fn keywords_from_search(search: &str) -> Option<String> {
    let query = search.strip_prefix('?').unwrap_or(search);
    form_urlencoded::parse(query.as_bytes())
        .find(|(key, _)| key == KEYWORDS_PARAM)
        .map(|(_, value)| value.into_owned())
        .filter(|value| !value.is_empty())
}

/// `keywords` を含むクエリ文字列（先頭 `?` 付き）を作る
pub fn search_for_keywords(keywords: &str) -> String {
    let encoded: String = form_urlencoded::Serializer::new(String::new())
        .append_pair(KEYWORDS_PARAM, keywords)
        .finish();
    format!("?{}", encoded)
}

/// 直前のキーワードを覚えておき、変化時のみ検索を発火する
#[derive(Debug, Clone, Default, PartialEq)]
pub struct KeywordTracker {
    last: Option<String>,
}

impl KeywordTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// 新しいキーワードを観測
    ///
    /// 変化していて、かつ空でなければ検索すべきキーワードを返す
    pub fn observe(&mut self, keyword: Option<&str>) -> Option<String> {
        let keyword = keyword.filter(|k| !k.is_empty());
        if self.last.as_deref() == keyword {
            return None;
        }
        self.last = keyword.map(str::to_string);
        self.last.clone()
    }

    /// 観測して、必要なら `GetSearchMovies` を送る
    pub fn sync<D: Dispatch + ?Sized>(&mut self, store: &D, keyword: Option<&str>) -> bool {
        match self.observe(keyword) {
            Some(k) => {
                store.dispatch(Action::GetSearchMovies(k));
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::testing::RecordingStore;

    #[test]
    fn test_keywords_from_search() {
        assert_eq!(keywords_from_search("?keywords=matrix").as_deref(), Some("matrix"));
        assert_eq!(keywords_from_search("keywords=matrix").as_deref(), Some("matrix"));
        assert_eq!(
            keywords_from_search("?page=2&keywords=star%20wars").as_deref(),
            Some("star wars")
        );
        assert_eq!(keywords_from_search("?keywords=the+thing").as_deref(), Some("the thing"));
    }

    #[test]
    fn test_keywords_missing_or_empty() {
        assert_eq!(keywords_from_search(""), None);
        assert_eq!(keywords_from_search("?"), None);
        assert_eq!(keywords_from_search("?keywords="), None);
        assert_eq!(keywords_from_search("?q=matrix"), None);
    }

    #[test]
    fn test_search_for_keywords_round_trips() {
        let search = search_for_keywords("amélie & co");
        assert!(search.starts_with("?keywords="));
        assert_eq!(keywords_from_search(&search).as_deref(), Some("amélie & co"));
    }

    #[test]
    fn test_keyword_change_fires_once() {
        let store = RecordingStore::default();
        let mut tracker = KeywordTracker::new();

        assert!(tracker.sync(&store, Some("a")));
        assert!(tracker.sync(&store, Some("b")));
        assert!(!tracker.sync(&store, Some("b")));

        let actions = store.actions.borrow();
        assert_eq!(
            *actions,
            vec![
                Action::GetSearchMovies("a".to_string()),
                Action::GetSearchMovies("b".to_string()),
            ]
        );
    }

    #[test]
    fn test_absent_keyword_does_not_search() {
        let store = RecordingStore::default();
        let mut tracker = KeywordTracker::new();

        assert!(!tracker.sync(&store, None));
        assert!(!tracker.sync(&store, Some("")));
        assert!(store.actions.borrow().is_empty());
    }

    #[test]
    fn test_keyword_reappearing_searches_again() {
        let mut tracker = KeywordTracker::new();
        assert_eq!(tracker.observe(Some("a")).as_deref(), Some("a"));
        assert_eq!(tracker.observe(None), None);
        assert_eq!(tracker.observe(Some("a")).as_deref(), Some("a"));
    }
}
