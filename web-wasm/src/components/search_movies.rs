//! 検索結果グリッドコンポーネント
//!
//! URLの `keywords` が変わるたびに検索を要求し、結果をグリッド表示する。

use gloo::console;
use leptos::prelude::*;
use movie_browser_common::{
    grid_template_columns, has_search_results, search_tiles, select_movie, BrowseConfig,
    BrowseStore, KeywordTracker, Tile, NO_RESULTS_MESSAGE,
};

#[component]
pub fn SearchMovies<S>(
    store: S,
    #[prop(into)] keywords: Signal<Option<String>>,
    viewport: ReadSignal<f64>,
    config: BrowseConfig,
) -> impl IntoView
where
    S: BrowseStore + Send + Sync + 'static,
{
    let store = StoredValue::new(store);
    let images = StoredValue::new(config.images);
    let tracker = StoredValue::new(KeywordTracker::new());

    Effect::new(move |_| {
        let keyword = keywords.get();
        console::debug!(format!("keywords: {:?}", keyword));
        tracker.update_value(|t| {
            store.with_value(|s| t.sync(s, keyword.as_deref()));
        });
    });

    let results = move || store.with_value(|s| s.search_movies());
    let tiles = move || images.with_value(|i| search_tiles(results().as_deref(), i));

    view! {
        <div class="search-pane">
            <Show
                when=move || has_search_results(results().as_deref())
                fallback=|| view! {
                    <div class="not-found">
                        <h1>{NO_RESULTS_MESSAGE}</h1>
                    </div>
                }
            >
                <div
                    class="search-content"
                    style=move || format!("grid-template-columns: {}", grid_template_columns(viewport.get()))
                >
                    <For
                        each=tiles
                        key=|tile| tile.key()
                        children=move |tile: Tile| {
                            let movie = tile.movie;
                            view! {
                                <div
                                    class="movie-item"
                                    on:click=move |_| store.with_value(|s| select_movie(s, &movie))
                                >
                                    <img src=tile.image_url alt=tile.caption.clone() />
                                    <span>{tile.caption}</span>
                                </div>
                            }
                        }
                    />
                </div>
            </Show>
        </div>
    }
}
