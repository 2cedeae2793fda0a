//! Canonical landing decisions for the root route.
//!
//! DESIGN
//! ======
//! The root route resolves where a visitor belongs once the session settles.
//! These helpers are pure; `pages::root` owns the lookup scheduling, the
//! once-per-identity guard, and the replace-navigation.

#[cfg(test)]
#[path = "redirect_test.rs"]
mod redirect_test;

use crate::net::error::ApiResult;
use crate::net::types::{KycSubmission, Role, SubmissionStatus};
use crate::state::session::SessionState;
use crate::util::routes;

/// Destination for an anonymous visitor sitting at the root path.
pub fn anonymous_destination() -> &'static str {
    routes::LANDING
}

/// The user id to run the verification lookup for, when one is needed.
///
/// Only clients go through verification; other roles (and role-less
/// sessions) land directly.
pub fn requires_verification_check(session: &SessionState) -> Option<&str> {
    if session.role() == Some(Role::Client) {
        session.user_id.as_deref()
    } else {
        None
    }
}

/// Destination override derived from a client's verification lookup.
///
/// `None` means "no override": continue to the role landing. A failed
/// lookup also falls through so navigation never stalls on a flaky backend.
pub fn verified_client_destination(
    lookup: &ApiResult<Option<KycSubmission>>,
) -> Option<&'static str> {
    match lookup {
        Ok(None) => Some(routes::KYC_INTAKE),
        Ok(Some(submission)) if submission.submission_status == SubmissionStatus::Rejected => {
            Some(routes::KYC_RESUBMIT)
        }
        Ok(Some(_)) | Err(_) => None,
    }
}

/// Role landing for a settled authenticated session.
///
/// Role-less sessions land on the client dashboard, where the route gate
/// shows the forbidden view with a way forward.
pub fn role_fallback_destination(session: &SessionState) -> &'static str {
    session.role().map_or(routes::CLIENT_DASHBOARD, routes::role_landing)
}
