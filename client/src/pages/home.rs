//! Home page: greets a signed-in user or links to the login screen.

use leptos::prelude::*;

use crate::app::AppRoute;
use crate::state::auth::AuthState;

#[component]
pub fn HomePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    view! {
        <div class="home-page">
            <h1>"Safe Upload"</h1>
            <Show
                when=move || auth.get().user.is_some()
                fallback=|| {
                    view! {
                        <p class="home-page__status">"You are not signed in."</p>
                        <a href=AppRoute::Login.path() class="login-link">"Log in"</a>
                    }
                }
            >
                <p class="home-page__status">{move || auth.get().greeting().unwrap_or_default()}</p>
            </Show>
        </div>
    }
}
