//! Sign-in page: email + one-time access code.
//!
//! SYSTEM CONTEXT
//! ==============
//! Successful verification is an identity-change event: the page refreshes
//! the session store and hands control to the root route, which resolves
//! the role- and verification-aware destination.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
#[cfg(feature = "hydrate")]
use leptos_router::hooks::use_navigate;

#[cfg(feature = "hydrate")]
use crate::state::session::SessionStore;
#[cfg(feature = "hydrate")]
use crate::util::routes;

/// Lowercased, trimmed email, if it looks like one.
fn normalized_email(raw: &str) -> Option<String> {
    let email = raw.trim().to_ascii_lowercase();
    let (local, domain) = email.split_once('@')?;
    if local.is_empty() || domain.is_empty() {
        return None;
    }
    Some(email)
}

/// Uppercased 6-character access code, if well-formed.
fn normalized_code(raw: &str) -> Option<String> {
    let code = raw.trim().to_ascii_uppercase();
    if code.len() == 6 && code.chars().all(|ch| ch.is_ascii_alphanumeric()) {
        Some(code)
    } else {
        None
    }
}

#[component]
pub fn AuthPage() -> impl IntoView {
    #[cfg(feature = "hydrate")]
    let session = SessionStore::expect_from_context();
    #[cfg(feature = "hydrate")]
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let code = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_request_code = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let Some(email_value) = normalized_email(&email.get()) else {
            info.set("Enter a valid email first.".to_owned());
            return;
        };
        busy.set(true);
        info.set("Requesting code...".to_owned());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::request_sign_in_code(&email_value).await {
                Ok(()) => info.set("Code sent. Check your email.".to_owned()),
                Err(err) => info.set(format!("Code request failed: {err}")),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = email_value;
            busy.set(false);
        }
    };

    let on_verify_code = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let Some(email_value) = normalized_email(&email.get()) else {
            info.set("Enter a valid email first.".to_owned());
            return;
        };
        let Some(code_value) = normalized_code(&code.get()) else {
            info.set("Enter the 6-character code from your email.".to_owned());
            return;
        };
        busy.set(true);
        info.set("Verifying code...".to_owned());

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::verify_sign_in_code(&email_value, &code_value).await {
                    Ok(()) => {
                        session.refresh();
                        navigate(routes::ROOT, NavigateOptions::default());
                    }
                    Err(err) => {
                        info.set(format!("Verification failed: {err}"));
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (email_value, code_value);
            busy.set(false);
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Procura"</h1>
                <p class="auth-card__subtitle">"Sign in with an email access code"</p>
                <form class="auth-form" on:submit=on_request_code>
                    <input
                        class="auth-input"
                        type="email"
                        placeholder="you@company.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <button class="btn" type="submit" disabled=move || busy.get()>
                        "Send code"
                    </button>
                </form>
                <form class="auth-form" on:submit=on_verify_code>
                    <input
                        class="auth-input auth-input--code"
                        type="text"
                        maxlength="6"
                        placeholder="ABC123"
                        prop:value=move || code.get()
                        on:input=move |ev| code.set(event_target_value(&ev).to_ascii_uppercase())
                    />
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        "Sign in"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="auth-message">{move || info.get()}</p>
                </Show>
            </div>
        </div>
    }
}
