use super::*;

#[test]
fn approval_does_not_require_a_note() {
    let request = review_request(true, "").unwrap();
    assert!(request.approve);
    assert_eq!(request.note, None);
}

#[test]
fn approval_keeps_a_trimmed_note_when_given() {
    let request = review_request(true, "  looks good ").unwrap();
    assert_eq!(request.note.as_deref(), Some("looks good"));
}

#[test]
fn rejection_requires_a_note() {
    let err = review_request(false, "   ").unwrap_err();
    assert_eq!(err, "Add a note explaining the rejection.");
}

#[test]
fn rejection_with_note_builds_the_request() {
    let request = review_request(false, "document illegible").unwrap();
    assert!(!request.approve);
    assert_eq!(request.note.as_deref(), Some("document illegible"));
}

#[test]
fn status_labels_cover_every_variant() {
    assert_eq!(status_label(SubmissionStatus::Pending), "pending");
    assert_eq!(status_label(SubmissionStatus::Approved), "approved");
    assert_eq!(status_label(SubmissionStatus::Rejected), "rejected");
    assert_eq!(status_label(SubmissionStatus::Unknown), "unknown");
}
