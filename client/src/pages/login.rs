//! Login page: email + password form backed by the identity provider.
//!
//! SYSTEM CONTEXT
//! ==============
//! Submission runs the shared `login-flow` pipeline with the transports found
//! in context. A verified login records the user in `AuthState` and navigates
//! to the home route; any failure is shown inline under the form.

use leptos::prelude::*;

use crate::state::login::LoginFormState;

#[component]
pub fn LoginPage() -> impl IntoView {
    let form = RwSignal::new(LoginFormState::default());

    #[cfg(feature = "hydrate")]
    let submit = {
        use leptos_router::NavigateOptions;
        use leptos_router::hooks::use_navigate;

        use crate::app::AppRoute;
        use crate::net::LoginServices;
        use crate::state::auth::AuthState;

        let auth = expect_context::<RwSignal<AuthState>>();
        let services = expect_context::<LoginServices>();
        let navigate = use_navigate();

        move |credentials: flow::Credentials| {
            let services = services.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let outcome =
                    flow::submit_credentials(&*services.provider, &*services.verifier, &credentials).await;
                form.update(|f| f.finish(&outcome));
                if let flow::LoginOutcome::Verified(user) = outcome {
                    auth.update(|a| a.user = Some(user));
                    navigate(AppRoute::Home.path(), NavigateOptions::default());
                }
            });
        }
    };
    #[cfg(not(feature = "hydrate"))]
    let submit = |_credentials: flow::Credentials| {};

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if let Some(credentials) = form.try_update(LoginFormState::begin_submit).flatten() {
            submit(credentials);
        }
    };

    view! {
        <div class="login-form">
            <h2>"Login"</h2>
            <form on:submit=on_submit>
                <div>
                    <label for="login-email">"Email:"</label>
                    <input
                        id="login-email"
                        type="email"
                        required
                        prop:value=move || form.with(|f| f.email.clone())
                        on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                    />
                </div>
                <div>
                    <label for="login-password">"Password:"</label>
                    <input
                        id="login-password"
                        type="password"
                        required
                        prop:value=move || form.with(|f| f.password.clone())
                        on:input=move |ev| form.update(|f| f.password = event_target_value(&ev))
                    />
                </div>
                <div>
                    <button type="submit" disabled=move || form.with(LoginFormState::in_flight)>
                        "Login"
                    </button>
                </div>
            </form>
            <Show when=move || form.with(|f| f.error.is_some())>
                <p class="error-message">{move || form.with(|f| f.error.clone().unwrap_or_default())}</p>
            </Show>
        </div>
    }
}
