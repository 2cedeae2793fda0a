use super::*;

#[test]
fn new_bid_request_parses_amount_into_minor_units() {
    let request = new_bid_request("1250.50", "Can deliver in two weeks").unwrap();
    assert_eq!(request.amount, 125_050);
    assert_eq!(request.message.as_deref(), Some("Can deliver in two weeks"));
}

#[test]
fn new_bid_request_treats_blank_message_as_absent() {
    let request = new_bid_request("100", "   ").unwrap();
    assert_eq!(request.message, None);
}

#[test]
fn new_bid_request_rejects_missing_amount() {
    assert!(new_bid_request("", "hello").is_err());
    assert!(new_bid_request("a lot", "").is_err());
}
