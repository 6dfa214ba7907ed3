//! 選択中の作品の詳細

use leptos::prelude::*;
use movie_browser_common::{BrowseStore, Movie};

#[component]
pub fn MovieDetail<S>(store: S) -> impl IntoView
where
    S: BrowseStore + Send + Sync + 'static,
{
    let store = StoredValue::new(store);
    let selected = move || store.with_value(|s| s.selected_movie());

    view! {
        {move || selected().map(|movie| view! {
            <section class="movie-detail">
                <h2>{movie.display_name().to_string()}</h2>
                <p class="movie-meta">{detail_meta(&movie)}</p>
                <p class="movie-overview">{movie.overview.clone().unwrap_or_default()}</p>
            </section>
        })}
    }
}

/// "2019 · ★ 7.8" 形式の補足行
fn detail_meta(movie: &Movie) -> String {
    let year = movie.air_date().and_then(|d| d.get(..4));
    let rating = movie.vote_average.map(|v| format!("★ {:.1}", v));
    [year.map(str::to_string), rating]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join(" · ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_meta() {
        let movie = Movie {
            release_date: Some("2019-11-01".to_string()),
            vote_average: Some(7.83),
            ..Default::default()
        };
        assert_eq!(detail_meta(&movie), "2019 · ★ 7.8");
    }

    #[test]
    fn test_detail_meta_partial() {
        let movie = Movie {
            first_air_date: Some("2016-07-15".to_string()),
            ..Default::default()
        };
        assert_eq!(detail_meta(&movie), "2016");
        assert_eq!(detail_meta(&Movie::default()), "");
    }
}
