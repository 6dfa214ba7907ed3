//! カルーセル行コンポーネント
//!
//! 作品のサムネイルを横一列に並べる。クリックで作品選択、
//! 左右ボタンとドラッグで横スクロール。

use gloo::console;
use leptos::html::Div;
use leptos::prelude::*;
use movie_browser_common::{
    plan_scroll, row_template_columns, row_tiles, select_movie, ArtVariant, BrowseConfig,
    BrowseStore, DragGesture, Movie, RowTileTier, ScrollDirection,
};
use crate::dom_scroll;

#[component]
pub fn MoviesRow<S>(
    store: S,
    movies: Vec<Movie>,
    #[prop(into)] title: String,
    variant: ArtVariant,
    #[prop(into)] id_section: String,
    viewport: ReadSignal<f64>,
    config: BrowseConfig,
) -> impl IntoView
where
    S: BrowseStore + Send + Sync + 'static,
{
    let store = StoredValue::new(store);
    let slider_ref = NodeRef::<Div>::new();
    let drag = StoredValue::new(DragGesture::new());
    let settings = config.scroll_settings();
    let movie_count = movies.len();
    let tiles = row_tiles(&movies, variant, &config.images);

    let scroll = move |direction: ScrollDirection| {
        let Some(slider) = slider_ref.get_untracked() else {
            return;
        };
        let metrics = dom_scroll::metrics(&slider);
        if direction == ScrollDirection::Right {
            console::debug!(format!("max scroll: {}", metrics.max_scroll_left()));
        }

        let tier_width = f64::from(RowTileTier::for_width(viewport.get_untracked()).tile_width());
        let tile_width = dom_scroll::first_tile_width(&slider).unwrap_or(tier_width);
        if let Some(plan) = plan_scroll(direction, metrics, tile_width, &settings) {
            dom_scroll::animate(&slider, plan);
        }
    };

    let on_drag_move = move |x: f64| {
        let mut direction = None;
        drag.update_value(|g| direction = g.move_to(x));
        if let Some(direction) = direction {
            scroll(direction);
        }
    };

    let tile_views = tiles
        .into_iter()
        .map(|tile| {
            let movie = tile.movie;
            view! {
                <div
                    class="movie-item"
                    draggable="false"
                    on:click=move |_| store.with_value(|s| select_movie(s, &movie))
                >
                    <img src=tile.image_url alt="" draggable="false" />
                    <div class="movie-name">{tile.caption}</div>
                </div>
            }
        })
        .collect_view();

    view! {
        <div class="movie-row" id=id_section draggable="false">
            <h3 class="heading">{title}</h3>
            <div
                class="movie-slider"
                node_ref=slider_ref
                draggable="true"
                style=move || slider_style(movie_count, viewport.get())
                on:dragstart=move |ev| {
                    drag.update_value(|g| g.start(f64::from(ev.screen_x())));
                }
                on:dragend=move |_| {
                    drag.update_value(|g| g.end());
                }
                on:dragenter=move |ev| on_drag_move(f64::from(ev.screen_x()))
            >
                {tile_views}
            </div>
            <div class=arrow_class("left", variant) on:click=move |_| scroll(ScrollDirection::Left)>
                "‹"
            </div>
            <div class=arrow_class("right", variant) on:click=move |_| scroll(ScrollDirection::Right)>
                "›"
            </div>
        </div>
    }
}

fn slider_style(movie_count: usize, width: f64) -> String {
    row_template_columns(movie_count, width)
        .map(|columns| format!("grid-template-columns: {}", columns))
        .unwrap_or_default()
}

fn arrow_class(side: &str, variant: ArtVariant) -> String {
    if variant.is_poster() {
        format!("row-arrow {} poster", side)
    } else {
        format!("row-arrow {}", side)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slider_style() {
        assert_eq!(slider_style(0, 1400.0), "");
        assert_eq!(slider_style(3, 1400.0), "grid-template-columns: repeat(3, 360px)");
        assert_eq!(slider_style(3, 480.0), "grid-template-columns: repeat(3, 200px)");
    }

    #[test]
    fn test_arrow_class_marks_poster_rows() {
        assert_eq!(arrow_class("left", ArtVariant::Poster), "row-arrow left poster");
        assert_eq!(arrow_class("right", ArtVariant::Backdrop), "row-arrow right");
    }
}
