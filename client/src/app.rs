//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{journal::JournalPage, sign_in::SignInPage};
use crate::state::auth::AuthState;

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
/// Provides the shared auth context, restores any cookie-backed session in
/// the browser, and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Route guards wait for the session check instead of redirecting early.
    let auth = RwSignal::new(AuthState { loading: true, ..AuthState::default() });
    provide_context(auth);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(crate::state::auth::restore_session(auth));

    view! {
        <Stylesheet id="leptos" href="/pkg/concert-journal.css"/>
        <Title text="Concert Journal"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("sign-in") view=SignInPage/>
                <Route path=StaticSegment("your-journal") view=JournalPage/>
                <Route path=StaticSegment("") view=JournalPage/>
            </Routes>
        </Router>
    }
}
