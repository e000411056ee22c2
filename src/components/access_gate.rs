//! Admin access gate: session state in, exactly one render mode out.

use leptos::prelude::*;

use crate::components::layout_shell::LayoutShell;
use crate::components::login_form::LoginForm;
use crate::components::skeleton_loader::SkeletonLoader;
use crate::state::session::{AccessDecision, Credentials, SessionError, SessionState};

/// Decides between the loading, login, and authorized views.
///
/// The session and both provider actions arrive as props, so the gate can be
/// driven by any session provider and never reaches into ambient state. The
/// gate itself never mutates the session; it only forwards `login`/`logout`
/// invocations. `children` (the nested admin content) is mounted only while
/// the decision is [`AccessDecision::Authorized`].
#[component]
pub fn AccessGate(
    #[prop(into)] session: Signal<SessionState>,
    on_login: Callback<Credentials>,
    on_logout: Callback<()>,
    #[prop(into)] login_error: Signal<Option<SessionError>>,
    children: ChildrenFn,
) -> impl IntoView {
    view! {
        {move || {
            // Fresh handle per evaluation; the view macro consumes one.
            let children = children.clone();
            let state = session.get();
            match (AccessDecision::from_session(&state), state.identity) {
                (AccessDecision::Loading, _) => view! { <SkeletonLoader/> }.into_any(),
                (AccessDecision::Authorized, Some(identity)) => {
                    view! {
                        <LayoutShell identity=identity on_logout=on_logout>
                            {children()}
                        </LayoutShell>
                    }
                        .into_any()
                }
                // Authorized without an identity cannot be derived; deny
                // anyway rather than trust an inconsistent session.
                _ => {
                    view! { <LoginForm on_login=on_login error=login_error/> }.into_any()
                }
            }
        }}
    }
}
