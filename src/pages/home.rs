//! Public marketing page with the interest-suggestions grid.

use leptos::prelude::*;

use crate::components::suggestion_grid::SuggestionGrid;

/// Landing page shown to anonymous visitors.
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home-page">
            <header class="home-page__hero">
                <h1>"Marquee"</h1>
                <p>"Unlimited films, series, and more."</p>
            </header>
            <section class="home-page__suggestions">
                <h2>"What are you into?"</h2>
                <SuggestionGrid/>
            </section>
        </div>
    }
}
