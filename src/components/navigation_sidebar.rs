//! Collapsible left navigation panel for the admin shell.

use leptos::prelude::*;
use leptos_router::components::A;

/// Side navigation. Stateless; visibility is passed in by the shell.
#[component]
pub fn NavigationSidebar(#[prop(into)] open: Signal<bool>) -> impl IntoView {
    view! {
        <aside class="nav-sidebar" class:nav-sidebar--collapsed=move || !open.get()>
            <div class="nav-sidebar__brand">"Marquee Admin"</div>
            <Show when=move || open.get()>
                <nav class="nav-sidebar__links">
                    <A href="/admin">"Overview"</A>
                    <A href="/admin/catalog">"Catalog"</A>
                </nav>
            </Show>
        </aside>
    }
}
