//! RFQ detail: the request, its bids, and role-scoped actions.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reachable by any authenticated role. Vendors see a bid form while the
//! request is open; the owning client can accept a bid. The route gate has
//! already handled authentication, so this page only branches on role and
//! ownership.

#[cfg(test)]
#[path = "rfq_detail_test.rs"]
mod rfq_detail_test;

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::net::error::ApiResult;
use crate::net::types::{BidSummary, PlaceBidRequest, RfqSummary, Role};
use crate::state::notify::Notifier;
use crate::state::session::SessionStore;
use crate::util::money::{format_amount, parse_amount};

/// Build a bid body from the raw form fields.
fn new_bid_request(amount_raw: &str, message: &str) -> Result<PlaceBidRequest, String> {
    let amount = parse_amount(amount_raw)?;
    let message = message.trim();
    Ok(PlaceBidRequest { amount, message: (!message.is_empty()).then(|| message.to_owned()) })
}

type Detail = (ApiResult<Option<RfqSummary>>, ApiResult<Vec<BidSummary>>);

#[component]
pub fn RfqDetailPage() -> impl IntoView {
    let session = SessionStore::expect_from_context();
    let params = use_params_map();

    let detail: LocalResource<Detail> = LocalResource::new(move || {
        let rfq_id = params.read().get("id").unwrap_or_default();
        async move {
            let rfq = crate::net::api::fetch_rfq(&rfq_id).await;
            let bids = crate::net::api::fetch_bids(&rfq_id).await;
            (rfq, bids)
        }
    });

    view! {
        <div class="rfq-detail">
            <Suspense fallback=move || view! { <p>"Loading request..."</p> }>
                {move || {
                    detail
                        .get()
                        .map(|(rfq_result, bids_result)| match rfq_result {
                            Ok(Some(rfq)) => {
                                let state = session.state();
                                let is_vendor = state.role() == Some(Role::Vendor);
                                let is_owner = state.user_id.as_deref() == Some(rfq.created_by.as_str());
                                let open_for_bids = rfq.status == "open";
                                view! {
                                    <RfqHeader rfq=rfq.clone()/>
                                    <BidSection
                                        bids_result=bids_result
                                        can_accept=is_owner && open_for_bids
                                        detail=detail
                                    />
                                    <Show when=move || is_vendor && open_for_bids>
                                        <BidForm rfq_id=rfq.id.clone() detail=detail/>
                                    </Show>
                                }
                                    .into_any()
                            }
                            Ok(None) => view! { <p>"Request not found."</p> }.into_any(),
                            Err(err) => {
                                view! {
                                    <p class="dashboard-page__error">
                                        {format!("Could not load the request: {err}")}
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

/// Title block with status, category, and budget.
#[component]
fn RfqHeader(rfq: RfqSummary) -> impl IntoView {
    let budget = rfq.budget.map_or_else(|| "Open budget".to_owned(), format_amount);
    view! {
        <header class="rfq-detail__header">
            <h1>{rfq.title}</h1>
            <p class="rfq-detail__meta">
                <span class="rfq-detail__status">{rfq.status}</span>
                <span class="rfq-detail__category">
                    {rfq.category.unwrap_or_else(|| "General".to_owned())}
                </span>
                <span class="rfq-detail__budget">{budget}</span>
            </p>
        </header>
    }
}

/// The bid list, with accept actions for the owning client.
#[component]
fn BidSection(
    bids_result: ApiResult<Vec<BidSummary>>,
    can_accept: bool,
    detail: LocalResource<Detail>,
) -> impl IntoView {
    let notify = Notifier::expect_from_context();

    match bids_result {
        Ok(bids) => {
            if bids.is_empty() {
                return view! { <p class="dashboard-page__empty">"No bids yet."</p> }.into_any();
            }
            view! {
                <ul class="bid-list">
                    {bids
                        .into_iter()
                        .map(|bid| {
                            let accept_id = bid.id.clone();
                            let acceptable = can_accept && bid.status == "submitted";
                            let on_accept = Callback::new(move |()| {
                                #[cfg(feature = "hydrate")]
                                {
                                    let accept_id = accept_id.clone();
                                    let detail = detail.clone();
                                    leptos::task::spawn_local(async move {
                                        match crate::net::api::accept_bid(&accept_id).await {
                                            Ok(()) => {
                                                notify.success("Bid accepted.");
                                                detail.refetch();
                                            }
                                            Err(err) => {
                                                notify.error(format!("Could not accept the bid: {err}"));
                                            }
                                        }
                                    });
                                }
                                #[cfg(not(feature = "hydrate"))]
                                {
                                    let _ = (&accept_id, &detail, &notify);
                                }
                            });
                            let vendor = bid.vendor_name.unwrap_or_else(|| bid.vendor_id.clone());
                            let amount = format_amount(bid.amount);
                            view! {
                                <li class="bid-list__row">
                                    <span class="bid-list__vendor">{vendor}</span>
                                    <span class="bid-list__amount">{amount}</span>
                                    <span class="bid-list__status">{bid.status}</span>
                                    <span class="bid-list__message">
                                        {bid.message.unwrap_or_default()}
                                    </span>
                                    <Show when=move || acceptable>
                                        <button
                                            class="btn btn--primary"
                                            on:click=move |_| on_accept.run(())
                                        >
                                            "Accept bid"
                                        </button>
                                    </Show>
                                </li>
                            }
                        })
                        .collect::<Vec<_>>()}
                </ul>
            }
            .into_any()
        }
        Err(err) => view! {
            <p class="dashboard-page__error">{format!("Could not load bids: {err}")}</p>
        }
        .into_any(),
    }
}

/// Vendor-only form to place a bid on an open request.
#[component]
fn BidForm(rfq_id: String, detail: LocalResource<Detail>) -> impl IntoView {
    let notify = Notifier::expect_from_context();
    let amount = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        match new_bid_request(&amount.get(), &message.get()) {
            Err(msg) => info.set(msg),
            Ok(request) => {
                busy.set(true);
                info.set(String::new());
                #[cfg(feature = "hydrate")]
                {
                    let rfq_id = rfq_id.clone();
                    let detail = detail.clone();
                    leptos::task::spawn_local(async move {
                        match crate::net::api::place_bid(&rfq_id, &request).await {
                            Ok(()) => {
                                notify.success("Bid placed.");
                                amount.set(String::new());
                                message.set(String::new());
                                detail.refetch();
                            }
                            Err(err) => info.set(format!("Could not place the bid: {err}")),
                        }
                        busy.set(false);
                    });
                }
                #[cfg(not(feature = "hydrate"))]
                {
                    let _ = (request, &rfq_id, &detail, &notify);
                    busy.set(false);
                }
            }
        }
    };

    view! {
        <form class="bid-form" on:submit=on_submit>
            <h2>"Place a bid"</h2>
            <label class="bid-form__label">
                "Amount"
                <input
                    class="bid-form__input"
                    type="text"
                    inputmode="decimal"
                    prop:value=move || amount.get()
                    on:input=move |ev| amount.set(event_target_value(&ev))
                />
            </label>
            <label class="bid-form__label">
                "Message (optional)"
                <input
                    class="bid-form__input"
                    type="text"
                    prop:value=move || message.get()
                    on:input=move |ev| message.set(event_target_value(&ev))
                />
            </label>
            <Show when=move || !info.get().is_empty()>
                <p class="bid-form__info">{move || info.get()}</p>
            </Show>
            <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                "Submit bid"
            </button>
        </form>
    }
}
