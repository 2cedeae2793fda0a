//! REST adapter over the hosted backend's capability surface.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, each bounded by a
//! per-request deadline. Server-side (SSR): inert stubs, since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Record lookups return `ApiResult<Option<T>>` so "no record" (401/404)
//! stays distinct from "the request failed". Session and redirect code
//! degrades on `Err`; page code reports it.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::ApiResult;
use super::types::{
    BidSummary, CreateRfqRequest, Identity, KycQueueItem, KycReviewRequest, KycSubmission,
    KycSubmissionRequest, PlaceBidRequest, ProfileRecord, RfqSummary,
};
#[cfg(feature = "hydrate")]
use super::error::ApiError;

/// Deadline applied to every backend request.
#[cfg(feature = "hydrate")]
const LOOKUP_TIMEOUT_MS: u64 = 10_000;

#[cfg(any(test, feature = "hydrate"))]
fn profile_endpoint(user_id: &str) -> String {
    format!("/api/profiles/{user_id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn kyc_submission_endpoint(user_id: &str) -> String {
    format!("/api/kyc/submissions/{user_id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn kyc_review_endpoint(user_id: &str) -> String {
    format!("/api/admin/kyc/{user_id}/review")
}

#[cfg(any(test, feature = "hydrate"))]
fn rfq_endpoint(rfq_id: &str) -> String {
    format!("/api/rfqs/{rfq_id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn rfq_bids_endpoint(rfq_id: &str) -> String {
    format!("/api/rfqs/{rfq_id}/bids")
}

#[cfg(any(test, feature = "hydrate"))]
fn bid_accept_endpoint(bid_id: &str) -> String {
    format!("/api/bids/{bid_id}/accept")
}

/// Race a request against the lookup deadline.
#[cfg(feature = "hydrate")]
async fn with_deadline<T>(
    fut: impl std::future::Future<Output = Result<T, gloo_net::Error>>,
) -> ApiResult<T> {
    use futures::FutureExt as _;

    let fut = fut.fuse();
    let deadline =
        gloo_timers::future::sleep(std::time::Duration::from_millis(LOOKUP_TIMEOUT_MS)).fuse();
    futures::pin_mut!(fut, deadline);
    futures::select! {
        result = fut => result.map_err(|err| ApiError::Network(err.to_string())),
        () = deadline => Err(ApiError::Timeout),
    }
}

/// GET a single record; 401/404 mean "no record" rather than failure.
#[cfg(feature = "hydrate")]
async fn get_record<T: serde::de::DeserializeOwned>(url: &str) -> ApiResult<Option<T>> {
    let resp = with_deadline(gloo_net::http::Request::get(url).send()).await?;
    if resp.status() == 401 || resp.status() == 404 {
        return Ok(None);
    }
    if !resp.ok() {
        return Err(ApiError::Status(resp.status()));
    }
    let record = resp
        .json::<T>()
        .await
        .map_err(|err| ApiError::Decode(err.to_string()))?;
    Ok(Some(record))
}

/// GET a collection endpoint.
#[cfg(feature = "hydrate")]
async fn get_list<T: serde::de::DeserializeOwned>(url: &str) -> ApiResult<Vec<T>> {
    let resp = with_deadline(gloo_net::http::Request::get(url).send()).await?;
    if !resp.ok() {
        return Err(ApiError::Status(resp.status()));
    }
    resp.json::<Vec<T>>()
        .await
        .map_err(|err| ApiError::Decode(err.to_string()))
}

/// POST a JSON body, returning the raw response on 2xx.
#[cfg(feature = "hydrate")]
async fn post_json<B: serde::Serialize>(
    url: &str,
    body: &B,
) -> ApiResult<gloo_net::http::Response> {
    let request = gloo_net::http::Request::post(url)
        .json(body)
        .map_err(|err| ApiError::Decode(err.to_string()))?;
    let resp = with_deadline(request.send()).await?;
    if !resp.ok() {
        return Err(ApiError::Status(resp.status()));
    }
    Ok(resp)
}

/// Look up the current authenticated identity.
/// `Ok(None)` means no active session.
///
/// # Errors
///
/// Returns an error when the lookup fails or times out; callers resolve that
/// to the signed-out state rather than surfacing it.
pub async fn fetch_identity() -> ApiResult<Option<Identity>> {
    #[cfg(feature = "hydrate")]
    {
        get_record("/api/auth/identity").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Ok(None)
    }
}

/// Look up the profile record for an identity.
///
/// # Errors
///
/// Returns an error when the lookup fails or times out; callers treat that
/// as "no profile" rather than surfacing it.
pub async fn fetch_profile(user_id: &str) -> ApiResult<Option<ProfileRecord>> {
    #[cfg(feature = "hydrate")]
    {
        get_record(&profile_endpoint(user_id)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = user_id;
        Ok(None)
    }
}

/// Look up a user's KYC submission record, if any.
///
/// # Errors
///
/// Returns an error when the lookup fails or times out.
pub async fn fetch_kyc_submission(user_id: &str) -> ApiResult<Option<KycSubmission>> {
    #[cfg(feature = "hydrate")]
    {
        get_record(&kyc_submission_endpoint(user_id)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = user_id;
        Ok(None)
    }
}

/// Request a one-time sign-in code for an email address.
///
/// # Errors
///
/// Returns an error when the request fails, times out, or is rejected.
pub async fn request_sign_in_code(email: &str) -> ApiResult<()> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "email": email });
        post_json("/api/auth/email/request-code", &payload).await?;
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = email;
        Err(super::error::ApiError::Network("not available on server".to_owned()))
    }
}

/// Exchange an emailed code for an authenticated session cookie.
///
/// # Errors
///
/// Returns an error when the request fails, times out, or the code is
/// rejected.
pub async fn verify_sign_in_code(email: &str, code: &str) -> ApiResult<()> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "email": email, "code": code });
        post_json("/api/auth/email/verify-code", &payload).await?;
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, code);
        Err(super::error::ApiError::Network("not available on server".to_owned()))
    }
}

/// End the current session. Failures are ignorable: the follow-up session
/// refresh resolves the true state either way.
pub async fn sign_out() {
    #[cfg(feature = "hydrate")]
    {
        let _ = gloo_net::http::Request::post("/api/auth/logout").send().await;
    }
}

/// Create or replace the caller's KYC submission.
///
/// # Errors
///
/// Returns an error when the request fails or times out.
pub async fn submit_kyc(request: &KycSubmissionRequest) -> ApiResult<()> {
    #[cfg(feature = "hydrate")]
    {
        post_json("/api/kyc/submissions", request).await?;
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err(super::error::ApiError::Network("not available on server".to_owned()))
    }
}

/// Fetch RFQs owned by the current client.
///
/// # Errors
///
/// Returns an error when the request fails or times out.
pub async fn fetch_my_rfqs() -> ApiResult<Vec<RfqSummary>> {
    #[cfg(feature = "hydrate")]
    {
        get_list("/api/rfqs?scope=mine").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Ok(Vec::new())
    }
}

/// Fetch RFQs currently open for bidding.
///
/// # Errors
///
/// Returns an error when the request fails or times out.
pub async fn fetch_open_rfqs() -> ApiResult<Vec<RfqSummary>> {
    #[cfg(feature = "hydrate")]
    {
        get_list("/api/rfqs?scope=open").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Ok(Vec::new())
    }
}

/// Create a new RFQ and return the stored record.
///
/// # Errors
///
/// Returns an error when the request fails or times out.
pub async fn create_rfq(request: &CreateRfqRequest) -> ApiResult<RfqSummary> {
    #[cfg(feature = "hydrate")]
    {
        let resp = post_json("/api/rfqs", request).await?;
        resp.json::<RfqSummary>()
            .await
            .map_err(|err| ApiError::Decode(err.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err(super::error::ApiError::Network("not available on server".to_owned()))
    }
}

/// Fetch one RFQ by id.
///
/// # Errors
///
/// Returns an error when the request fails or times out.
pub async fn fetch_rfq(rfq_id: &str) -> ApiResult<Option<RfqSummary>> {
    #[cfg(feature = "hydrate")]
    {
        get_record(&rfq_endpoint(rfq_id)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = rfq_id;
        Ok(None)
    }
}

/// Fetch all bids on an RFQ.
///
/// # Errors
///
/// Returns an error when the request fails or times out.
pub async fn fetch_bids(rfq_id: &str) -> ApiResult<Vec<BidSummary>> {
    #[cfg(feature = "hydrate")]
    {
        get_list(&rfq_bids_endpoint(rfq_id)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = rfq_id;
        Ok(Vec::new())
    }
}

/// Fetch the current vendor's bids across all RFQs.
///
/// # Errors
///
/// Returns an error when the request fails or times out.
pub async fn fetch_my_bids() -> ApiResult<Vec<BidSummary>> {
    #[cfg(feature = "hydrate")]
    {
        get_list("/api/bids?scope=mine").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Ok(Vec::new())
    }
}

/// Place a bid on an RFQ.
///
/// # Errors
///
/// Returns an error when the request fails or times out.
pub async fn place_bid(rfq_id: &str, request: &PlaceBidRequest) -> ApiResult<()> {
    #[cfg(feature = "hydrate")]
    {
        post_json(&rfq_bids_endpoint(rfq_id), request).await?;
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (rfq_id, request);
        Err(super::error::ApiError::Network("not available on server".to_owned()))
    }
}

/// Accept a bid on behalf of the owning client.
///
/// # Errors
///
/// Returns an error when the request fails or times out.
pub async fn accept_bid(bid_id: &str) -> ApiResult<()> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({});
        post_json(&bid_accept_endpoint(bid_id), &payload).await?;
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = bid_id;
        Err(super::error::ApiError::Network("not available on server".to_owned()))
    }
}

/// Fetch the pending KYC review queue.
///
/// # Errors
///
/// Returns an error when the request fails or times out.
pub async fn fetch_kyc_queue() -> ApiResult<Vec<KycQueueItem>> {
    #[cfg(feature = "hydrate")]
    {
        get_list("/api/admin/kyc/queue").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Ok(Vec::new())
    }
}

/// Record an admin review decision for a user's KYC submission.
///
/// # Errors
///
/// Returns an error when the request fails or times out.
pub async fn review_kyc(user_id: &str, request: &KycReviewRequest) -> ApiResult<()> {
    #[cfg(feature = "hydrate")]
    {
        post_json(&kyc_review_endpoint(user_id), request).await?;
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (user_id, request);
        Err(super::error::ApiError::Network("not available on server".to_owned()))
    }
}
