use super::*;

#[test]
fn role_round_trips_lowercase() {
    for (role, wire) in [
        (Role::Client, "\"client\""),
        (Role::Vendor, "\"vendor\""),
        (Role::Admin, "\"admin\""),
    ] {
        assert_eq!(serde_json::to_string(&role).unwrap(), wire);
        assert_eq!(serde_json::from_str::<Role>(wire).unwrap(), role);
    }
}

#[test]
fn role_as_str_matches_wire_name() {
    assert_eq!(Role::Client.as_str(), "client");
    assert_eq!(Role::Vendor.as_str(), "vendor");
    assert_eq!(Role::Admin.as_str(), "admin");
}

#[test]
fn verification_status_uses_kebab_case() {
    assert_eq!(
        serde_json::to_string(&VerificationStatus::NoneSubmitted).unwrap(),
        "\"none-submitted\""
    );
    assert_eq!(
        serde_json::from_str::<VerificationStatus>("\"none-submitted\"").unwrap(),
        VerificationStatus::NoneSubmitted
    );
    assert_eq!(
        serde_json::from_str::<VerificationStatus>("\"approved\"").unwrap(),
        VerificationStatus::Approved
    );
}

#[test]
fn unknown_submission_status_degrades_instead_of_failing() {
    let parsed: SubmissionStatus = serde_json::from_str("\"escalated\"").unwrap();
    assert_eq!(parsed, SubmissionStatus::Unknown);
}

#[test]
fn profile_record_parses_without_verification_status() {
    let json = r#"{"user_id":"u1","display_name":"Acme Buyer","role":"client"}"#;
    let record: ProfileRecord = serde_json::from_str(json).unwrap();
    assert_eq!(record.role, Role::Client);
    assert_eq!(record.verification_status, None);
}

#[test]
fn kyc_submission_parses_rejection_with_note() {
    let json = r#"{
        "user_id": "u1",
        "submission_status": "rejected",
        "reviewer_note": "registration number illegible",
        "submitted_at": "2025-11-02T09:30:00Z"
    }"#;
    let sub: KycSubmission = serde_json::from_str(json).unwrap();
    assert_eq!(sub.submission_status, SubmissionStatus::Rejected);
    assert_eq!(sub.reviewer_note.as_deref(), Some("registration number illegible"));
}

#[test]
fn rfq_summary_defaults_bid_count_to_zero() {
    let json = r#"{"id":"r1","title":"Office chairs","category":null,"budget":null,"status":"open","created_by":"u1"}"#;
    let rfq: RfqSummary = serde_json::from_str(json).unwrap();
    assert_eq!(rfq.bid_count, 0);
}
