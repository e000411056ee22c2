//! Admin catalog page listing titles inside the shell's content region.

use leptos::prelude::*;

/// A catalog row. Placeholder data until the catalog API lands.
struct TitleRow {
    name: &'static str,
    kind: &'static str,
    year: &'static str,
}

const TITLES: &[TitleRow] = &[
    TitleRow { name: "Midnight Reel", kind: "Film", year: "2024" },
    TitleRow { name: "Static City", kind: "Series", year: "2023" },
    TitleRow { name: "The Long Intermission", kind: "Film", year: "2025" },
    TitleRow { name: "Projector Ghosts", kind: "Series", year: "2022" },
];

/// Catalog listing.
#[component]
pub fn CatalogPage() -> impl IntoView {
    view! {
        <div class="catalog-page">
            <h1>"Catalog"</h1>
            <table class="catalog-page__table">
                <thead>
                    <tr>
                        <th>"Title"</th>
                        <th>"Type"</th>
                        <th>"Year"</th>
                    </tr>
                </thead>
                <tbody>
                    {TITLES
                        .iter()
                        .map(|t| {
                            view! {
                                <tr>
                                    <td>{t.name}</td>
                                    <td>{t.kind}</td>
                                    <td>{t.year}</td>
                                </tr>
                            }
                        })
                        .collect::<Vec<_>>()}
                </tbody>
            </table>
        </div>
    }
}
