//! Root route: resolves where a visitor belongs once the session settles.
//!
//! SYSTEM CONTEXT
//! ==============
//! The sign-in flow always returns here, and `/` is the app's entry path, so
//! this page is the single place that turns a settled session into a
//! canonical destination. All navigation is replace-style: resolving a
//! landing spot must not grow history.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

#[cfg(feature = "hydrate")]
use std::sync::Arc;
#[cfg(feature = "hydrate")]
use std::sync::atomic::{AtomicBool, Ordering};

use crate::state::session::SessionStore;
use crate::util::redirect;

fn replace() -> NavigateOptions {
    NavigateOptions { replace: true, ..NavigateOptions::default() }
}

/// Neutral splash; the effect below performs the actual routing.
#[component]
pub fn RootPage() -> impl IntoView {
    let session = SessionStore::expect_from_context();
    let navigate = use_navigate();

    // The verification lookup runs at most once per identity; the guard
    // resets only when the user id changes (or the page remounts).
    let checked_user = RwSignal::new(None::<String>);
    let bounced_anonymous = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    let alive = {
        let alive = Arc::new(AtomicBool::new(true));
        let alive_on_cleanup = alive.clone();
        on_cleanup(move || alive_on_cleanup.store(false, Ordering::Relaxed));
        alive
    };

    Effect::new(move || {
        let state = session.state();
        if !state.settled() {
            return;
        }

        // Authenticated branch first: a fast sign-in settling mid-flight
        // must not flash the public landing page before the dashboard.
        if state.is_authenticated() {
            let fallback = redirect::role_fallback_destination(&state);
            if let Some(user_id) = redirect::requires_verification_check(&state) {
                let already_checked = checked_user
                    .with_untracked(|checked| checked.as_deref() == Some(user_id));
                if already_checked {
                    return;
                }
                checked_user.set(Some(user_id.to_owned()));

                #[cfg(feature = "hydrate")]
                {
                    let user_id = user_id.to_owned();
                    let navigate = navigate.clone();
                    let alive = alive.clone();
                    leptos::task::spawn_local(async move {
                        let lookup = crate::net::api::fetch_kyc_submission(&user_id).await;
                        if let Err(err) = &lookup {
                            log::warn!("verification lookup failed, using role landing: {err}");
                        }
                        if !alive.load(Ordering::Relaxed) {
                            return;
                        }
                        let destination =
                            redirect::verified_client_destination(&lookup).unwrap_or(fallback);
                        navigate(destination, replace());
                    });
                }
                #[cfg(not(feature = "hydrate"))]
                navigate(fallback, replace());
            } else {
                navigate(fallback, replace());
            }
        } else {
            if bounced_anonymous.get_untracked() {
                return;
            }
            bounced_anonymous.set(true);
            navigate(redirect::anonymous_destination(), replace());
        }
    });

    view! {
        <div class="route-gate__pending" aria-busy="true">
            <p>"Loading your workspace..."</p>
        </div>
    }
}
