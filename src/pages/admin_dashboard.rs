//! Admin dashboard: the KYC submission review queue.

#[cfg(test)]
#[path = "admin_dashboard_test.rs"]
mod admin_dashboard_test;

use leptos::prelude::*;

use crate::net::error::ApiResult;
use crate::net::types::{KycQueueItem, KycReviewRequest, SubmissionStatus};
use crate::state::notify::Notifier;

/// Build a review body; a rejection always carries a note for the applicant.
fn review_request(approve: bool, note: &str) -> Result<KycReviewRequest, String> {
    let note = note.trim();
    if !approve && note.is_empty() {
        return Err("Add a note explaining the rejection.".to_owned());
    }
    Ok(KycReviewRequest { approve, note: (!note.is_empty()).then(|| note.to_owned()) })
}

fn status_label(status: SubmissionStatus) -> &'static str {
    match status {
        SubmissionStatus::Pending => "pending",
        SubmissionStatus::Approved => "approved",
        SubmissionStatus::Rejected => "rejected",
        SubmissionStatus::Unknown => "unknown",
    }
}

#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    let queue = LocalResource::new(|| crate::net::api::fetch_kyc_queue());

    view! {
        <div class="dashboard-page">
            <header class="dashboard-page__header">
                <h1>"Verification queue"</h1>
            </header>

            <Suspense fallback=move || view! { <p>"Loading the queue..."</p> }>
                {move || {
                    queue
                        .get()
                        .map(|result| match result {
                            Ok(items) => {
                                if items.is_empty() {
                                    view! {
                                        <p class="dashboard-page__empty">
                                            "Nothing waiting for review."
                                        </p>
                                    }
                                        .into_any()
                                } else {
                                    view! {
                                        <ul class="review-queue">
                                            {items
                                                .into_iter()
                                                .map(|item| view! { <QueueRow item=item queue=queue/> })
                                                .collect::<Vec<_>>()}
                                        </ul>
                                    }
                                        .into_any()
                                }
                            }
                            Err(err) => {
                                view! {
                                    <p class="dashboard-page__error">
                                        {format!("Could not load the queue: {err}")}
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

/// One queue entry with approve / reject controls.
#[component]
fn QueueRow(item: KycQueueItem, queue: LocalResource<ApiResult<Vec<KycQueueItem>>>) -> impl IntoView {
    let notify = Notifier::expect_from_context();
    let note = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let user_id = item.user_id.clone();
    let review = Callback::new(move |approve: bool| {
        if busy.get() {
            return;
        }
        match review_request(approve, &note.get()) {
            Err(message) => notify.error(message),
            Ok(request) => {
                busy.set(true);
                #[cfg(feature = "hydrate")]
                {
                    let user_id = user_id.clone();
                    let queue = queue.clone();
                    leptos::task::spawn_local(async move {
                        match crate::net::api::review_kyc(&user_id, &request).await {
                            Ok(()) => {
                                notify.success(if request.approve {
                                    "Submission approved."
                                } else {
                                    "Submission rejected."
                                });
                                queue.refetch();
                            }
                            Err(err) => notify.error(format!("Review failed: {err}")),
                        }
                        busy.set(false);
                    });
                }
                #[cfg(not(feature = "hydrate"))]
                {
                    let _ = (request, &user_id, &queue);
                    busy.set(false);
                }
            }
        }
    });

    view! {
        <li class="review-queue__row">
            <span class="review-queue__company">{item.company_name}</span>
            <span class="review-queue__user">{item.user_id}</span>
            <span class="review-queue__submitted">
                {item.submitted_at.unwrap_or_else(|| "unknown date".to_owned())}
            </span>
            <span class="review-queue__status">{status_label(item.submission_status)}</span>
            <input
                class="review-queue__note"
                type="text"
                placeholder="Reviewer note"
                prop:value=move || note.get()
                on:input=move |ev| note.set(event_target_value(&ev))
            />
            <span class="review-queue__actions">
                <button
                    class="btn btn--primary"
                    disabled=move || busy.get()
                    on:click=move |_| review.run(true)
                >
                    "Approve"
                </button>
                <button class="btn" disabled=move || busy.get() on:click=move |_| review.run(false)>
                    "Reject"
                </button>
            </span>
        </li>
    }
}
