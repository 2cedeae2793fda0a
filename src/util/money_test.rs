use super::*;

#[test]
fn format_amount_renders_two_decimal_places() {
    assert_eq!(format_amount(125_000), "1250.00");
    assert_eq!(format_amount(5), "0.05");
    assert_eq!(format_amount(0), "0.00");
}

#[test]
fn format_amount_keeps_the_sign_in_front() {
    assert_eq!(format_amount(-150), "-1.50");
}

#[test]
fn parse_amount_accepts_integers_and_decimals() {
    assert_eq!(parse_amount("1250"), Ok(125_000));
    assert_eq!(parse_amount(" 12.5 "), Ok(1250));
    assert_eq!(parse_amount("0.05"), Ok(5));
}

#[test]
fn parse_amount_rejects_non_numeric_input() {
    assert!(parse_amount("about 100").is_err());
    assert!(parse_amount("").is_err());
}

#[test]
fn parse_amount_rejects_negative_input() {
    assert!(parse_amount("-3").is_err());
}
