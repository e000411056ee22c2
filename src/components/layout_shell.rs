//! Authorized admin shell composing sidebar, header, and content regions.

use leptos::prelude::*;

use crate::components::header_bar::HeaderBar;
use crate::components::navigation_sidebar::NavigationSidebar;
use crate::state::layout::LayoutState;
use crate::state::session::Identity;

/// Admin layout shell.
///
/// Owns the sidebar-visibility state for the lifetime of the authorized
/// view; it assumes the caller has already authorized the visitor and knows
/// nothing about authentication rules. The content region renders whatever
/// children the surrounding router supplies.
#[component]
pub fn LayoutShell(
    identity: Identity,
    on_logout: Callback<()>,
    children: Children,
) -> impl IntoView {
    let layout = RwSignal::new(LayoutState::default());

    let sidebar_open = Signal::derive(move || layout.get().sidebar_open);
    let toggle_sidebar = Callback::new(move |()| layout.update(LayoutState::toggle_sidebar));

    view! {
        <div class="admin-shell">
            <NavigationSidebar open=sidebar_open/>
            <div class="admin-shell__main">
                <HeaderBar
                    identity=identity
                    open=sidebar_open
                    on_toggle_sidebar=toggle_sidebar
                    on_logout=on_logout
                />
                <main class="admin-shell__content">{children()}</main>
            </div>
        </div>
    }
}
