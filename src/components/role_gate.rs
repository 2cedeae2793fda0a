//! Route-level access gate.
//!
//! SYSTEM CONTEXT
//! ==============
//! Wraps each protected route's page. Admission comes from the pure
//! `util::gate::decide`; this component owns the side effects (the one-shot
//! sign-in notice and the bounce to `/auth`) and the views for the
//! non-admitted outcomes.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::access_denied::AccessDenied;
use crate::state::notify::Notifier;
use crate::state::session::SessionStore;
use crate::util::gate::{Decision, RouteRequirement, decide};
use crate::util::routes;

/// Gate a route's content behind a [`RouteRequirement`].
///
/// Renders children on `Admit` and a neutral pending view while the session
/// resolves. An unauthenticated visitor gets exactly one "please sign in"
/// notice per mount and a replace-navigation to the sign-in page. A
/// role mismatch renders the in-place access-denied view; the user decides
/// where to go next.
#[component]
pub fn RoleGate(requirement: RouteRequirement, children: ChildrenFn) -> impl IntoView {
    let session = SessionStore::expect_from_context();
    let notify = Notifier::expect_from_context();
    let navigate = use_navigate();

    // One-shot per mount; a re-render must not repeat the notice.
    let notified = RwSignal::new(false);

    Effect::new(move || {
        let decision = decide(&session.state(), &requirement);
        if decision == Decision::DenyUnauthenticated && !notified.get_untracked() {
            notified.set(true);
            notify.info("Please sign in to continue.");
            navigate(routes::AUTH, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });

    view! {
        {move || match decide(&session.state(), &requirement) {
            Decision::Admit => children().into_any(),
            Decision::Pending | Decision::DenyUnauthenticated => view! {
                <div class="route-gate__pending" aria-busy="true">
                    <p>"Loading..."</p>
                </div>
            }
                .into_any(),
            Decision::DenyForbidden { suggested_route } => {
                view! { <AccessDenied suggested_route/> }.into_any()
            }
        }}
    }
}
