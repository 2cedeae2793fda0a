//! Public marketing landing page for signed-out visitors.

use leptos::prelude::*;

use crate::util::routes;

#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <div class="landing-page">
            <section class="landing-page__hero">
                <h1>"Procurement without the paper chase"</h1>
                <p>
                    "Post a request for quotation, collect competing bids from "
                    "verified suppliers, and award the work in one place."
                </p>
                <a class="btn btn--primary" href=routes::AUTH>
                    "Get started"
                </a>
            </section>
            <section class="landing-page__features">
                <div class="landing-page__feature">
                    <h3>"For buyers"</h3>
                    <p>"Describe what you need once and let suppliers come to you."</p>
                </div>
                <div class="landing-page__feature">
                    <h3>"For suppliers"</h3>
                    <p>"Browse open requests and bid on the work that fits."</p>
                </div>
                <div class="landing-page__feature">
                    <h3>"Verified counterparties"</h3>
                    <p>"Every buying account is KYC-checked before awarding work."</p>
                </div>
            </section>
        </div>
    }
}
