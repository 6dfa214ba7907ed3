//! メインアプリケーションコンポーネント

use gloo::console;
use leptos::prelude::*;
use movie_browser_common::{BrowseConfig, Catalog};
use crate::components::{
    header::Header,
    movie_detail::MovieDetail,
    movies_row::MoviesRow,
    search_movies::SearchMovies,
};
use crate::hooks::{use_search_location, use_viewport};
use crate::store::SignalStore;

const BUNDLED_CATALOG: &str = include_str!("../assets/catalog.json");

/// バンドル済みカタログ（壊れていれば空で起動）
fn load_bundled_catalog() -> Catalog {
    match Catalog::from_json(BUNDLED_CATALOG) {
        Ok(catalog) => catalog,
        Err(e) => {
            console::error!(format!("カタログ読込失敗: {}", e));
            Catalog::default()
        }
    }
}

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    let config = BrowseConfig::default();
    let catalog = load_bundled_catalog();
    let collections = catalog.collections.clone();
    let store = SignalStore::new(catalog);

    let viewport = use_viewport();
    let location = use_search_location();
    let keywords = location.keywords;

    let rows_config = config.clone();
    let rows = move || {
        collections
            .iter()
            .map(|c| {
                view! {
                    <MoviesRow
                        store=store
                        movies=c.movies.clone()
                        title=c.title.clone()
                        variant=c.variant
                        id_section=c.id.clone()
                        viewport=viewport
                        config=rows_config.clone()
                    />
                }
            })
            .collect_view()
    };

    view! {
        <div class="container">
            <Header location=location />
            <MovieDetail store=store />
            <Show when=move || keywords.get().is_some() fallback=rows>
                <SearchMovies
                    store=store
                    keywords=keywords
                    viewport=viewport
                    config=config.clone()
                />
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use movie_browser_common::{row_tiles, ArtVariant, ImageConfig};

    #[test]
    fn test_bundled_catalog_is_valid() {
        let catalog = Catalog::from_json(BUNDLED_CATALOG).expect("バンドル済みカタログが不正");
        assert!(!catalog.collections.is_empty());
        assert!(catalog
            .collections
            .iter()
            .any(|c| c.variant == ArtVariant::Poster));
    }

    #[test]
    fn test_bundled_catalog_rows_render_tiles() {
        let catalog = Catalog::from_json(BUNDLED_CATALOG).expect("バンドル済みカタログが不正");
        for c in &catalog.collections {
            let tiles = row_tiles(&c.movies, c.variant, &ImageConfig::default());
            assert!(!tiles.is_empty(), "{} に描画できる作品がない", c.id);
        }
    }
}
