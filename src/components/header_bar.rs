//! Top header bar for the admin shell.

use leptos::prelude::*;

use crate::state::session::Identity;

/// Header bar showing the signed-in identity with sidebar-toggle and
/// sign-out controls. Stateless; both actions are forwarded to the shell.
#[component]
pub fn HeaderBar(
    identity: Identity,
    #[prop(into)] open: Signal<bool>,
    on_toggle_sidebar: Callback<()>,
    on_logout: Callback<()>,
) -> impl IntoView {
    view! {
        <header class="header-bar">
            <button
                class="header-bar__toggle"
                title="Toggle sidebar"
                on:click=move |_| on_toggle_sidebar.run(())
            >
                {move || if open.get() { "\u{25C0}" } else { "\u{25B6}" }}
            </button>
            <span class="header-bar__spacer"></span>
            <span class="header-bar__user">{identity.display_name}</span>
            <button class="header-bar__logout" on:click=move |_| on_logout.run(())>
                "Sign out"
            </button>
        </header>
    }
}
