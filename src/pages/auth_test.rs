use super::*;

#[test]
fn normalized_email_trims_and_lowercases() {
    assert_eq!(normalized_email("  Buyer@Acme.COM "), Some("buyer@acme.com".to_owned()));
}

#[test]
fn normalized_email_rejects_malformed_input() {
    assert_eq!(normalized_email("not-an-email"), None);
    assert_eq!(normalized_email("@acme.com"), None);
    assert_eq!(normalized_email("buyer@"), None);
    assert_eq!(normalized_email("   "), None);
}

#[test]
fn normalized_code_uppercases_six_char_codes() {
    assert_eq!(normalized_code(" ab12cd "), Some("AB12CD".to_owned()));
}

#[test]
fn normalized_code_rejects_wrong_length_or_symbols() {
    assert_eq!(normalized_code("ABC12"), None);
    assert_eq!(normalized_code("ABC1234"), None);
    assert_eq!(normalized_code("AB-12C"), None);
}
