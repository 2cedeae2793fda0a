//! In-place access-denied view for role mismatches.

use leptos::prelude::*;

use crate::util::routes;

/// Shown when a signed-in user opens a route their role cannot use.
/// Never a dead end: links to the role's own home and the public landing.
#[component]
pub fn AccessDenied(suggested_route: &'static str) -> impl IntoView {
    view! {
        <section class="access-denied">
            <h2>"Access denied"</h2>
            <p>"Your account does not have access to this page."</p>
            <p class="access-denied__links">
                <a class="btn btn--primary" href=suggested_route>
                    "Go to your dashboard"
                </a>
                <a class="btn" href=routes::LANDING>
                    "Back to the marketplace"
                </a>
            </p>
        </section>
    }
}
