//! Credential form shown by the access gate when the visitor is not
//! authorized.

use leptos::prelude::*;

use crate::state::session::{Credentials, SessionError};

/// Admin sign-in form.
///
/// Submission runs the injected login action; a failed attempt surfaces the
/// error message locally and leaves the render mode to the gate.
#[component]
pub fn LoginForm(
    on_login: Callback<Credentials>,
    #[prop(into)] error: Signal<Option<SessionError>>,
) -> impl IntoView {
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());

    let submit = Callback::new(move |()| {
        let credentials = Credentials {
            email: email.get().trim().to_owned(),
            password: password.get(),
        };
        if credentials.email.is_empty() || credentials.password.is_empty() {
            return;
        }
        on_login.run(credentials);
    });

    view! {
        <div class="login-view">
            <h1>"Marquee"</h1>
            <p>"Admin sign in"</p>
            <label class="login-view__label">
                "Email"
                <input
                    class="login-view__input"
                    type="email"
                    prop:value=move || email.get()
                    on:input=move |ev| {
                        email.set(event_target_value(&ev));
                    }
                />
            </label>
            <label class="login-view__label">
                "Password"
                <input
                    class="login-view__input"
                    type="password"
                    prop:value=move || password.get()
                    on:input=move |ev| {
                        password.set(event_target_value(&ev));
                    }
                    on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                        if ev.key() == "Enter" {
                            ev.prevent_default();
                            submit.run(());
                        }
                    }
                />
            </label>
            <Show when=move || error.get().is_some()>
                <p class="login-view__error">
                    {move || error.get().map(|e| e.to_string())}
                </p>
            </Show>
            <button class="btn btn--primary" on:click=move |_| submit.run(())>
                "Sign in"
            </button>
        </div>
    }
}
