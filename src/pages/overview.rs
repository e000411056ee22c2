//! Admin overview page, the default nested view inside the shell.

use leptos::prelude::*;

/// Overview of the catalog and audience at a glance.
#[component]
pub fn OverviewPage() -> impl IntoView {
    view! {
        <div class="overview-page">
            <h1>"Overview"</h1>
            <div class="overview-page__cards">
                <StatCard label="Titles" value="1,284"/>
                <StatCard label="Series" value="312"/>
                <StatCard label="Active viewers" value="58,402"/>
            </div>
        </div>
    }
}

/// Single headline metric card.
#[component]
fn StatCard(label: &'static str, value: &'static str) -> impl IntoView {
    view! {
        <div class="stat-card">
            <span class="stat-card__value">{value}</span>
            <span class="stat-card__label">{label}</span>
        </div>
    }
}
