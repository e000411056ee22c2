//! Admin section entry: wires the session provider into the access gate.

use leptos::prelude::*;
use leptos_router::components::Outlet;

use crate::components::access_gate::AccessGate;
use crate::state::session::{self, Credentials, SessionError, SessionState};

/// `/admin` parent view.
///
/// Reads the app-level session context and injects it, together with the
/// provider's login/logout actions, into [`AccessGate`]. Nested route
/// content renders inside the shell's content region via `Outlet`, so it is
/// only mounted for an authorized session.
#[component]
pub fn AdminSection() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let login_error = RwSignal::new(None::<SessionError>);

    let on_login = Callback::new(move |credentials: Credentials| {
        login_error.set(None);
        leptos::task::spawn_local(async move {
            if let Err(err) = session::login(session, credentials).await {
                // try_set: the form may be gone by the time the API answers.
                let _ = login_error.try_set(Some(err));
            }
        });
    });

    let on_logout = Callback::new(move |()| {
        leptos::task::spawn_local(async move {
            session::logout(session).await;
        });
    });

    view! {
        <AccessGate
            session=session
            on_login=on_login
            on_logout=on_logout
            login_error=login_error
        >
            <Outlet/>
        </AccessGate>
    }
}
