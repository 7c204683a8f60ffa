//! Root application component: route shell and context providers.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::net::LoginServices;
use crate::pages::{home::HomePage, login::LoginPage};
use crate::state::auth::AuthState;

/// The two views the shell knows about.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppRoute {
    Home,
    Login,
}

impl AppRoute {
    /// Absolute path used for links and navigation.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Login => "/login",
        }
    }

    /// Router segment for the route table.
    #[must_use]
    pub const fn segment(self) -> &'static str {
        match self {
            Self::Home => "",
            Self::Login => "login",
        }
    }
}

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
/// Provides the auth context and the login transports, then maps `/` to Home
/// and `/login` to Login. Any other path renders nothing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    provide_context(auth);
    provide_context(LoginServices::from_build_env());

    view! {
        <Stylesheet id="leptos" href="/pkg/safe-upload.css"/>
        <Title text="Safe Upload"/>

        <Router>
            <Routes fallback=|| ()>
                <Route path=StaticSegment(AppRoute::Home.segment()) view=HomePage/>
                <Route path=StaticSegment(AppRoute::Login.segment()) view=LoginPage/>
            </Routes>
        </Router>
    }
}
