use super::*;
use crate::net::error::ApiError;
use crate::state::session::{AuthStatus, Profile};
use crate::net::types::VerificationStatus;

fn authenticated(role: Role) -> SessionState {
    SessionState {
        status: AuthStatus::Authenticated,
        user_id: Some("u1".to_owned()),
        profile: Some(Profile { role, verification: Some(VerificationStatus::Pending) }),
    }
}

fn submission(status: SubmissionStatus) -> KycSubmission {
    KycSubmission {
        user_id: "u1".to_owned(),
        submission_status: status,
        reviewer_note: None,
        submitted_at: None,
    }
}

#[test]
fn anonymous_visitors_are_sent_to_the_landing_page() {
    assert_eq!(anonymous_destination(), "/landing");
}

#[test]
fn only_clients_need_a_verification_lookup() {
    assert_eq!(requires_verification_check(&authenticated(Role::Client)), Some("u1"));
    assert_eq!(requires_verification_check(&authenticated(Role::Vendor)), None);
    assert_eq!(requires_verification_check(&authenticated(Role::Admin)), None);
}

#[test]
fn role_less_sessions_skip_the_verification_lookup() {
    let session = SessionState {
        status: AuthStatus::Authenticated,
        user_id: Some("u1".to_owned()),
        profile: None,
    };
    assert_eq!(requires_verification_check(&session), None);
}

#[test]
fn missing_submission_routes_to_intake() {
    let lookup: ApiResult<Option<KycSubmission>> = Ok(None);
    assert_eq!(verified_client_destination(&lookup), Some("/kyc"));
}

#[test]
fn rejected_submission_routes_to_resubmission() {
    let lookup = Ok(Some(submission(SubmissionStatus::Rejected)));
    assert_eq!(verified_client_destination(&lookup), Some("/kyc/resubmit"));
}

#[test]
fn pending_and_approved_submissions_fall_through_to_the_role_landing() {
    for status in [SubmissionStatus::Pending, SubmissionStatus::Approved] {
        let lookup = Ok(Some(submission(status)));
        assert_eq!(verified_client_destination(&lookup), None);
    }
}

#[test]
fn unrecognized_submission_status_falls_through() {
    let lookup = Ok(Some(submission(SubmissionStatus::Unknown)));
    assert_eq!(verified_client_destination(&lookup), None);
}

#[test]
fn failed_lookup_falls_through_instead_of_blocking_navigation() {
    let lookup: ApiResult<Option<KycSubmission>> = Err(ApiError::Timeout);
    assert_eq!(verified_client_destination(&lookup), None);
}

#[test]
fn role_landings_follow_the_landing_table() {
    assert_eq!(role_fallback_destination(&authenticated(Role::Admin)), "/admin/dashboard");
    assert_eq!(role_fallback_destination(&authenticated(Role::Vendor)), "/vendor-dashboard");
    assert_eq!(role_fallback_destination(&authenticated(Role::Client)), "/dashboard");
}

#[test]
fn role_less_sessions_land_on_the_client_dashboard() {
    let session = SessionState {
        status: AuthStatus::Authenticated,
        user_id: Some("u1".to_owned()),
        profile: None,
    };
    assert_eq!(role_fallback_destination(&session), "/dashboard");
}

#[test]
fn client_with_no_record_lands_on_intake_not_the_dashboard() {
    let session = authenticated(Role::Client);
    let lookup: ApiResult<Option<KycSubmission>> = Ok(None);
    let destination = verified_client_destination(&lookup)
        .unwrap_or_else(|| role_fallback_destination(&session));
    assert_eq!(destination, "/kyc");
}

#[test]
fn client_with_rejected_record_lands_on_resubmission_not_intake() {
    let session = authenticated(Role::Client);
    let lookup = Ok(Some(submission(SubmissionStatus::Rejected)));
    let destination = verified_client_destination(&lookup)
        .unwrap_or_else(|| role_fallback_destination(&session));
    assert_eq!(destination, "/kyc/resubmit");
}
