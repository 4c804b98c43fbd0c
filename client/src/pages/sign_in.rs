//! Sign-in page: email + password card.
//!
//! SYSTEM CONTEXT
//! ==============
//! Renders `SignInForm` state and forwards submissions to the shared
//! `state::sign_in::submit` driver. A signed-in visitor is sent home before
//! interacting, and a successful login replaces this page in history.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::net::types::Credentials;
use crate::state::auth::{AuthState, HttpAuthSession};
use crate::state::sign_in::{SignInForm, submit};
use crate::util::auth::install_home_redirect;

#[component]
pub fn SignInPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let session = HttpAuthSession::new(auth);
    let navigate = use_navigate();
    install_home_redirect(session, navigate.clone());

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let form = RwSignal::new(SignInForm::default());

    // Enter inside a field and the button both arrive here as a submit event.
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let credentials = Credentials::new(email.get_untracked(), password.get_untracked());
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            submit(&form, credentials, &session, &navigate).await;
        });
    };

    let email_error = move || form.with(|f| f.validation().email.has_error);
    let password_error = move || form.with(|f| f.validation().password.has_error);

    view! {
        <div class="sign-in-page">
            <div class="sign-in-card">
                <h1 class="sign-in-card__title">"Sign in"</h1>
                <form class="sign-in-form" novalidate=true on:submit=on_submit>
                    <label class="sign-in-label" for="email">"Email"</label>
                    <input
                        class="sign-in-input"
                        class:sign-in-input--error=email_error
                        id="email"
                        name="email"
                        type="email"
                        placeholder="your@email.com"
                        autocomplete="email"
                        autofocus=true
                        required=true
                        aria-invalid=move || email_error().to_string()
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <p class="sign-in-helper">{move || form.with(|f| f.validation().email.message.clone())}</p>

                    <label class="sign-in-label" for="password">"Password"</label>
                    <input
                        class="sign-in-input"
                        class:sign-in-input--error=password_error
                        id="password"
                        name="password"
                        type="password"
                        placeholder="••••••"
                        autocomplete="current-password"
                        required=true
                        aria-invalid=move || password_error().to_string()
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <p class="sign-in-helper">{move || form.with(|f| f.validation().password.message.clone())}</p>

                    <button class="sign-in-button" type="submit" disabled=move || form.with(SignInForm::is_submitting)>
                        "Sign in"
                    </button>
                    <Show when=move || form.with(|f| f.submission_error().is_some())>
                        <p class="sign-in-error">
                            {move || form.with(|f| f.submission_error().unwrap_or_default().to_owned())}
                        </p>
                    </Show>
                </form>
            </div>
        </div>
    }
}
