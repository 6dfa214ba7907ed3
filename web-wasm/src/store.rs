//! シグナルで保持するストア
//!
//! 検索はバンドル済みカタログに対してローカルで行う

use leptos::prelude::*;
use movie_browser_common::{Action, BrowseState, BrowseStore, Catalog, Dispatch, Movie};

#[derive(Clone, Copy)]
pub struct SignalStore {
    state: RwSignal<BrowseState>,
    catalog: StoredValue<Catalog>,
}

impl SignalStore {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            state: RwSignal::new(BrowseState::default()),
            catalog: StoredValue::new(catalog),
        }
    }
}

impl Dispatch for SignalStore {
    fn dispatch(&self, action: Action) {
        let search = match &action {
            Action::GetSearchMovies(keyword) => Some(keyword.clone()),
            _ => None,
        };

        self.state.update(|s| s.reduce(action));

        if let Some(keyword) = search {
            let movies = self.catalog.with_value(|c| c.search(&keyword));
            self.dispatch(Action::SearchMoviesLoaded { keyword, movies });
        }
    }
}

impl BrowseStore for SignalStore {
    fn search_movies(&self) -> Option<Vec<Movie>> {
        self.state.with(|s| s.search_movies.clone())
    }

    fn selected_movie(&self) -> Option<Movie> {
        self.state.with(|s| s.selected.clone())
    }
}
