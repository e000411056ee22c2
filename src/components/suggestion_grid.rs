//! Interest-suggestions grid for the public marketing page.

use leptos::prelude::*;

/// Genres shown as interest suggestions to anonymous visitors.
const SUGGESTIONS: &[&str] = &[
    "Action",
    "Comedy",
    "Drama",
    "Documentary",
    "Horror",
    "Romance",
    "Sci-Fi",
    "Thrillers",
];

/// Static grid of interest cards. Purely presentational.
#[component]
pub fn SuggestionGrid() -> impl IntoView {
    view! {
        <div class="suggestion-grid">
            {SUGGESTIONS
                .iter()
                .map(|genre| {
                    view! {
                        <div class="suggestion-grid__card">
                            <span class="suggestion-grid__name">{*genre}</span>
                        </div>
                    }
                })
                .collect::<Vec<_>>()}
        </div>
    }
}
