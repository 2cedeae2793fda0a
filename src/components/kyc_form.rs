//! Shared KYC submission form for the intake and resubmission screens.

#[cfg(test)]
#[path = "kyc_form_test.rs"]
mod kyc_form_test;

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
#[cfg(feature = "hydrate")]
use leptos_router::hooks::use_navigate;

use crate::net::types::KycSubmissionRequest;
use crate::state::notify::Notifier;
#[cfg(feature = "hydrate")]
use crate::util::routes;

/// Validate the form fields into a submission body.
///
/// # Errors
///
/// Returns a user-facing message naming the first invalid field.
pub fn validate_kyc_fields(
    company_name: &str,
    registration_number: &str,
    document_url: &str,
) -> Result<KycSubmissionRequest, String> {
    let company_name = company_name.trim();
    if company_name.is_empty() {
        return Err("Enter the registered company name.".to_owned());
    }
    let registration_number = registration_number.trim();
    if registration_number.is_empty() {
        return Err("Enter the company registration number.".to_owned());
    }
    let document_url = document_url.trim();
    if !(document_url.starts_with("https://") || document_url.starts_with("http://")) {
        return Err("Provide an http(s) link to the registration document.".to_owned());
    }
    Ok(KycSubmissionRequest {
        company_name: company_name.to_owned(),
        registration_number: registration_number.to_owned(),
        document_url: document_url.to_owned(),
    })
}

/// Controlled form; on success notifies and returns to the client dashboard.
#[component]
pub fn KycForm(submit_label: &'static str) -> impl IntoView {
    let notify = Notifier::expect_from_context();
    #[cfg(feature = "hydrate")]
    let navigate = use_navigate();

    let company = RwSignal::new(String::new());
    let registration = RwSignal::new(String::new());
    let document_url = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        match validate_kyc_fields(&company.get(), &registration.get(), &document_url.get()) {
            Err(message) => info.set(message),
            Ok(request) => {
                busy.set(true);
                info.set(String::new());
                #[cfg(feature = "hydrate")]
                {
                    let navigate = navigate.clone();
                    leptos::task::spawn_local(async move {
                        match crate::net::api::submit_kyc(&request).await {
                            Ok(()) => {
                                notify.success("Verification submitted for review.");
                                navigate(routes::CLIENT_DASHBOARD, NavigateOptions::default());
                            }
                            Err(err) => {
                                info.set(format!("Submission failed: {err}"));
                                busy.set(false);
                            }
                        }
                    });
                }
                #[cfg(not(feature = "hydrate"))]
                {
                    let _ = (request, notify);
                    busy.set(false);
                }
            }
        }
    };

    view! {
        <form class="kyc-form" on:submit=on_submit>
            <label class="kyc-form__label">
                "Company name"
                <input
                    class="kyc-form__input"
                    type="text"
                    prop:value=move || company.get()
                    on:input=move |ev| company.set(event_target_value(&ev))
                />
            </label>
            <label class="kyc-form__label">
                "Registration number"
                <input
                    class="kyc-form__input"
                    type="text"
                    prop:value=move || registration.get()
                    on:input=move |ev| registration.set(event_target_value(&ev))
                />
            </label>
            <label class="kyc-form__label">
                "Registration document URL"
                <input
                    class="kyc-form__input"
                    type="url"
                    prop:value=move || document_url.get()
                    on:input=move |ev| document_url.set(event_target_value(&ev))
                />
            </label>
            <p class="kyc-form__info">{move || info.get()}</p>
            <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                {submit_label}
            </button>
        </form>
    }
}
