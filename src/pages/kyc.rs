//! KYC intake and resubmission screens for client accounts.

use leptos::prelude::*;

use crate::components::kyc_form::KycForm;
use crate::state::session::SessionStore;

/// First-time verification intake.
#[component]
pub fn KycIntakePage() -> impl IntoView {
    view! {
        <div class="kyc-page">
            <h1>"Verify your company"</h1>
            <p>
                "Before you can award work on the marketplace, our team reviews "
                "your company details. This usually takes one business day."
            </p>
            <KycForm submit_label="Submit for review"/>
        </div>
    }
}

/// Resubmission after a rejection; surfaces the reviewer's note.
#[component]
pub fn KycResubmitPage() -> impl IntoView {
    let session = SessionStore::expect_from_context();

    let reviewer_note = LocalResource::new(move || {
        let user_id = session.state().user_id;
        async move {
            let Some(user_id) = user_id else {
                return None;
            };
            match crate::net::api::fetch_kyc_submission(&user_id).await {
                Ok(submission) => submission.and_then(|s| s.reviewer_note),
                Err(err) => {
                    log::warn!("could not load the previous submission: {err}");
                    None
                }
            }
        }
    });

    view! {
        <div class="kyc-page">
            <h1>"Resubmit your verification"</h1>
            <Suspense fallback=move || view! { <p>"Loading review feedback..."</p> }>
                {move || {
                    reviewer_note
                        .get()
                        .map(|note| match note {
                            Some(note) => {
                                view! {
                                    <p class="kyc-page__rejection">
                                        <strong>"Reviewer feedback: "</strong>
                                        {note}
                                    </p>
                                }
                                    .into_any()
                            }
                            None => {
                                view! {
                                    <p>"Your previous submission was rejected. Update the details and resubmit."</p>
                                }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>
            <KycForm submit_label="Resubmit for review"/>
        </div>
    }
}
