//! Vendor dashboard: open RFQs to bid on, plus the vendor's own bids.

use leptos::prelude::*;

use crate::components::rfq_card::RfqCard;
use crate::util::money::format_amount;
use crate::util::routes;

#[component]
pub fn VendorDashboardPage() -> impl IntoView {
    let open_rfqs = LocalResource::new(|| crate::net::api::fetch_open_rfqs());
    let my_bids = LocalResource::new(|| crate::net::api::fetch_my_bids());

    view! {
        <div class="dashboard-page">
            <header class="dashboard-page__header">
                <h1>"Open requests"</h1>
            </header>

            <div class="dashboard-page__grid">
                <Suspense fallback=move || view! { <p>"Loading open requests..."</p> }>
                    {move || {
                        open_rfqs
                            .get()
                            .map(|result| match result {
                                Ok(list) => {
                                    if list.is_empty() {
                                        view! {
                                            <p class="dashboard-page__empty">
                                                "Nothing open for bidding right now."
                                            </p>
                                        }
                                            .into_any()
                                    } else {
                                        view! {
                                            <div class="dashboard-page__cards">
                                                {list
                                                    .into_iter()
                                                    .map(|rfq| view! { <RfqCard rfq/> })
                                                    .collect::<Vec<_>>()}
                                            </div>
                                        }
                                            .into_any()
                                    }
                                }
                                Err(err) => {
                                    view! {
                                        <p class="dashboard-page__error">
                                            {format!("Could not load open requests: {err}")}
                                        </p>
                                    }
                                        .into_any()
                                }
                            })
                    }}
                </Suspense>
            </div>

            <header class="dashboard-page__header">
                <h2>"Your bids"</h2>
            </header>

            <Suspense fallback=move || view! { <p>"Loading your bids..."</p> }>
                {move || {
                    my_bids
                        .get()
                        .map(|result| match result {
                            Ok(bids) => {
                                if bids.is_empty() {
                                    view! {
                                        <p class="dashboard-page__empty">"No bids placed yet."</p>
                                    }
                                        .into_any()
                                } else {
                                    view! {
                                        <ul class="bid-list">
                                            {bids
                                                .into_iter()
                                                .map(|bid| {
                                                    let href = routes::rfq_detail(&bid.rfq_id);
                                                    let amount = format_amount(bid.amount);
                                                    view! {
                                                        <li class="bid-list__row">
                                                            <a class="bid-list__link" href=href>
                                                                {format!("Bid {amount}")}
                                                            </a>
                                                            <span class="bid-list__status">{bid.status}</span>
                                                        </li>
                                                    }
                                                })
                                                .collect::<Vec<_>>()}
                                        </ul>
                                    }
                                        .into_any()
                                }
                            }
                            Err(err) => {
                                view! {
                                    <p class="dashboard-page__error">
                                        {format!("Could not load your bids: {err}")}
                                    </p>
                                }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>
        </div>
    }
}
