//! Top chrome: brand link plus the session-aware account controls.

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
#[cfg(feature = "hydrate")]
use leptos_router::hooks::use_navigate;

use crate::state::session::SessionStore;
use crate::util::routes;

/// Header shown on every route. Signed-out visitors get a sign-in link;
/// signed-in users see their role badge and a sign-out button.
#[component]
pub fn SiteHeader() -> impl IntoView {
    let session = SessionStore::expect_from_context();
    #[cfg(feature = "hydrate")]
    let navigate = use_navigate();

    let on_sign_out = Callback::new(move |()| {
        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                crate::net::api::sign_out().await;
                session.sign_out();
                navigate(
                    routes::LANDING,
                    NavigateOptions { replace: true, ..NavigateOptions::default() },
                );
            });
        }
    });

    view! {
        <header class="site-header">
            <a class="site-header__brand" href=routes::ROOT>
                "Procura"
            </a>
            <nav class="site-header__session">
                {move || {
                    let state = session.state();
                    if state.is_authenticated() {
                        let badge = state.role().map_or("member", |role| role.as_str());
                        view! {
                            <span class="site-header__account">
                                <span class="site-header__role">{badge}</span>
                                <button class="btn" on:click=move |_| on_sign_out.run(())>
                                    "Sign out"
                                </button>
                            </span>
                        }
                            .into_any()
                    } else if state.settled() {
                        view! {
                            <a class="btn btn--primary" href=routes::AUTH>
                                "Sign in"
                            </a>
                        }
                            .into_any()
                    } else {
                        view! { <span class="site-header__role">"…"</span> }.into_any()
                    }
                }}
            </nav>
        </header>
    }
}
