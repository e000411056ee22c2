//! Pulse-placeholder skeleton shown while a region's data is pending.

use leptos::prelude::*;

/// Static loading placeholder. No interaction, no side effects.
#[component]
pub fn SkeletonLoader() -> impl IntoView {
    view! {
        <div class="skeleton" aria-busy="true">
            <div class="skeleton__bar skeleton__bar--wide"></div>
            {(0..5)
                .map(|_| view! { <div class="skeleton__bar"></div> })
                .collect::<Vec<_>>()}
        </div>
    }
}
