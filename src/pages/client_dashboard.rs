//! Client dashboard: the buyer's own RFQs with create and open actions.

#[cfg(test)]
#[path = "client_dashboard_test.rs"]
mod client_dashboard_test;

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
#[cfg(feature = "hydrate")]
use leptos_router::hooks::use_navigate;

use crate::components::rfq_card::RfqCard;
use crate::net::error::ApiResult;
use crate::net::types::{CreateRfqRequest, RfqSummary};
use crate::util::money::parse_amount;
#[cfg(feature = "hydrate")]
use crate::util::routes;

/// Build a creation body from the raw dialog fields.
fn new_rfq_request(
    title: &str,
    category: &str,
    budget_raw: &str,
) -> Result<CreateRfqRequest, String> {
    let title = title.trim();
    if title.is_empty() {
        return Err("Enter a title for the request.".to_owned());
    }
    let category = category.trim();
    let budget_raw = budget_raw.trim();
    let budget = if budget_raw.is_empty() { None } else { Some(parse_amount(budget_raw)?) };
    Ok(CreateRfqRequest {
        title: title.to_owned(),
        category: (!category.is_empty()).then(|| category.to_owned()),
        budget,
    })
}

/// Dashboard page: RFQ inventory plus a create dialog.
#[component]
pub fn ClientDashboardPage() -> impl IntoView {
    let rfqs = LocalResource::new(|| crate::net::api::fetch_my_rfqs());

    let show_create = RwSignal::new(false);
    let on_create = move |_| show_create.set(true);
    let on_cancel = Callback::new(move |()| show_create.set(false));

    view! {
        <div class="dashboard-page">
            <header class="dashboard-page__header">
                <h1>"Your requests"</h1>
                <button class="btn btn--primary" on:click=on_create>
                    "+ New request"
                </button>
            </header>

            <div class="dashboard-page__grid">
                <Suspense fallback=move || view! { <p>"Loading requests..."</p> }>
                    {move || {
                        rfqs.get()
                            .map(|result| match result {
                                Ok(list) => {
                                    if list.is_empty() {
                                        view! {
                                            <p class="dashboard-page__empty">
                                                "No requests yet. Create the first one."
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
                                            {format!("Could not load requests: {err}")}
                                        </p>
                                    }
                                        .into_any()
                                }
                            })
                    }}
                </Suspense>
            </div>

            <Show when=move || show_create.get()>
                <CreateRfqDialog on_cancel=on_cancel rfqs=rfqs/>
            </Show>
        </div>
    }
}

/// Modal dialog for posting a new RFQ.
#[component]
fn CreateRfqDialog(
    on_cancel: Callback<()>,
    rfqs: LocalResource<ApiResult<Vec<RfqSummary>>>,
) -> impl IntoView {
    #[cfg(feature = "hydrate")]
    let navigate = use_navigate();

    let title = RwSignal::new(String::new());
    let category = RwSignal::new(String::new());
    let budget = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());

    let submit = Callback::new(move |()| {
        match new_rfq_request(&title.get(), &category.get(), &budget.get()) {
            Err(message) => info.set(message),
            Ok(request) => {
                #[cfg(feature = "hydrate")]
                {
                    let navigate = navigate.clone();
                    let rfqs = rfqs.clone();
                    leptos::task::spawn_local(async move {
                        match crate::net::api::create_rfq(&request).await {
                            Ok(created) => {
                                rfqs.refetch();
                                navigate(
                                    &routes::rfq_detail(&created.id),
                                    NavigateOptions::default(),
                                );
                            }
                            Err(err) => info.set(format!("Could not create the request: {err}")),
                        }
                    });
                }
                #[cfg(not(feature = "hydrate"))]
                {
                    let _ = (request, &rfqs);
                }
            }
        }
    });

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"New request for quotation"</h2>
                <label class="dialog__label">
                    "Title"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || title.get()
                        on:input=move |ev| title.set(event_target_value(&ev))
                        on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                            if ev.key() == "Enter" {
                                ev.prevent_default();
                                submit.run(());
                            }
                        }
                    />
                </label>
                <label class="dialog__label">
                    "Category (optional)"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || category.get()
                        on:input=move |ev| category.set(event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Budget (optional)"
                    <input
                        class="dialog__input"
                        type="text"
                        inputmode="decimal"
                        prop:value=move || budget.get()
                        on:input=move |ev| budget.set(event_target_value(&ev))
                    />
                </label>
                <Show when=move || !info.get().is_empty()>
                    <p class="dialog__info">{move || info.get()}</p>
                </Show>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button class="btn btn--primary" on:click=move |_| submit.run(())>
                        "Create"
                    </button>
                </div>
            </div>
        </div>
    }
}
