//! 共有状態とディスパッチ
//!
//! コンポーネントはグローバルなストアを直接参照せず、
//! `Dispatch` / `BrowseStore` を実装した値をpropsとして受け取る。

use crate::types::Movie;

/// ストアに送るアクション
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// 選択中の作品を置き換える
    SetMovieDetail(Movie),
    /// キーワード検索を要求する
    GetSearchMovies(String),
    /// 検索結果の到着
    SearchMoviesLoaded { keyword: String, movies: Vec<Movie> },
}

/// アクションの送り先
pub trait Dispatch {
    fn dispatch(&self, action: Action);
}

/// コンポーネントが読む状態 + ディスパッチ
pub trait BrowseStore: Dispatch {
    /// 検索結果（未取得は `None`）
    fn search_movies(&self) -> Option<Vec<Movie>>;

    fn selected_movie(&self) -> Option<Movie>;
}

/// ストアの状態
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BrowseState {
    pub selected: Option<Movie>,
    pub search_movies: Option<Vec<Movie>>,
    /// 最後に要求された検索キーワード
    pub search_keyword: Option<String>,
}

impl BrowseState {
    /// アクションを状態に適用
    pub fn reduce(&mut self, action: Action) {
        match action {
            Action::SetMovieDetail(movie) => {
                self.selected = Some(movie);
            }
            Action::GetSearchMovies(keyword) => {
                self.search_keyword = Some(keyword);
            }
            Action::SearchMoviesLoaded { keyword, movies } => {
                // 古い検索の結果は捨てる
                if self.search_keyword.as_deref() == Some(keyword.as_str()) {
                    self.search_movies = Some(movies);
                }
            }
        }
    }
}

/// 作品クリック時の処理
pub fn select_movie<D: Dispatch + ?Sized>(store: &D, movie: &Movie) {
    store.dispatch(Action::SetMovieDetail(movie.clone()));
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use std::cell::RefCell;

    /// 送られたアクションを記録するだけのストア
    #[derive(Default)]
    pub struct RecordingStore {
        pub actions: RefCell<Vec<Action>>,
        pub results: Option<Vec<Movie>>,
    }

    impl Dispatch for RecordingStore {
        fn dispatch(&self, action: Action) {
            self.actions.borrow_mut().push(action);
        }
    }

    impl BrowseStore for RecordingStore {
        fn search_movies(&self) -> Option<Vec<Movie>> {
            self.results.clone()
        }

        fn selected_movie(&self) -> Option<Movie> {
            None
        }
    }
}
