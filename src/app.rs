//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{ParentRoute, Route, Router, Routes},
};

use crate::pages::{admin::AdminSection, catalog::CatalogPage, home::HomePage, overview::OverviewPage};
use crate::state::session::SessionState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the shared session context, starts session resolution, and sets
/// up client-side routing. Nested admin routes render inside the admin
/// shell's content region; they are never mounted for an unauthorized
/// session because `AdminSection` gates them behind `AccessGate`.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // The session starts pending; the admin area shows its loading mode
    // until resolution lands.
    let session = RwSignal::new(SessionState::default());
    provide_context(session);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        crate::state::session::resolve_session(session).await;
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/marquee.css"/>
        <Title text="Marquee"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <ParentRoute path=StaticSegment("admin") view=AdminSection>
                    <Route path=StaticSegment("") view=OverviewPage/>
                    <Route path=StaticSegment("catalog") view=CatalogPage/>
                </ParentRoute>
            </Routes>
        </Router>
    }
}
