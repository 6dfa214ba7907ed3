//! ヘッダーコンポーネント（検索フォーム付き）

use leptos::html::Input;
use leptos::prelude::*;
use crate::hooks::SearchLocation;

#[component]
pub fn Header(location: SearchLocation) -> impl IntoView {
    let input_ref = NodeRef::<Input>::new();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if let Some(input) = input_ref.get_untracked() {
            location.navigate(&input.value());
        }
    };

    view! {
        <header class="header">
            <h1 on:click=move |_| location.navigate("")>"Movie Browser"</h1>
            <form class="search-form" on:submit=on_submit>
                <input
                    type="search"
                    node_ref=input_ref
                    placeholder="Titles, people, genres"
                    prop:value=move || location.keywords.get().unwrap_or_default()
                />
            </form>
        </header>
    }
}
