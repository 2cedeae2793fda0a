use super::*;

#[test]
fn budget_label_formats_minor_units() {
    assert_eq!(budget_label(Some(250_000)), "Budget 2500.00");
}

#[test]
fn budget_label_handles_undisclosed_budgets() {
    assert_eq!(budget_label(None), "Open budget");
}

#[test]
fn bid_count_label_is_singular_for_one() {
    assert_eq!(bid_count_label(1), "1 bid");
    assert_eq!(bid_count_label(0), "0 bids");
    assert_eq!(bid_count_label(7), "7 bids");
}
