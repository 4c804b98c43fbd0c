//! Journal page listing the signed-in user's concerts.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::event_card::EventCard;
use crate::state::auth::AuthState;
use crate::util::auth::install_unauth_redirect;

/// Concert list with a sign-out action.
/// Redirects to `/sign-in` once auth has loaded without a session.
#[component]
pub fn JournalPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    install_unauth_redirect(auth, use_navigate());

    let events = LocalResource::new(|| crate::net::api::fetch_events());

    let user_email = move || auth.with(|state| state.user.as_ref().map(|u| u.email.clone()).unwrap_or_default());

    let on_sign_out = move |_| {
        leptos::task::spawn_local(async move {
            crate::net::api::logout().await;
            auth.update(AuthState::sign_out);
        });
    };

    view! {
        <div class="journal-page">
            <header class="journal-page__header">
                <h1>"Your Journal"</h1>
                <span class="journal-page__user">{user_email}</span>
                <button class="btn btn--secondary" on:click=on_sign_out>
                    "Sign out"
                </button>
            </header>

            <Suspense fallback=move || view! { <p>"Loading concerts..."</p> }>
                {move || {
                    events
                        .get()
                        .map(|result| match result {
                            Ok(list) if list.is_empty() => {
                                view! { <p class="journal-page__empty">"No concerts yet."</p> }.into_any()
                            }
                            Ok(list) => {
                                view! {
                                    <ul class="journal-page__list">
                                        {list
                                            .into_iter()
                                            .map(|event| view! { <EventCard event=event/> })
                                            .collect::<Vec<_>>()}
                                    </ul>
                                }
                                    .into_any()
                            }
                            Err(e) => view! { <p class="journal-page__error">{e}</p> }.into_any(),
                        })
                }}
            </Suspense>
        </div>
    }
}
