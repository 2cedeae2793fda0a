//! Card component for RFQ list entries on the dashboards.

#[cfg(test)]
#[path = "rfq_card_test.rs"]
mod rfq_card_test;

use leptos::prelude::*;

use crate::net::types::RfqSummary;
use crate::util::money::format_amount;
use crate::util::routes;

fn budget_label(budget: Option<i64>) -> String {
    match budget {
        Some(minor) => format!("Budget {}", format_amount(minor)),
        None => "Open budget".to_owned(),
    }
}

fn bid_count_label(count: i64) -> String {
    if count == 1 {
        "1 bid".to_owned()
    } else {
        format!("{count} bids")
    }
}

/// A clickable card linking to the RFQ detail page.
#[component]
pub fn RfqCard(rfq: RfqSummary) -> impl IntoView {
    let href = routes::rfq_detail(&rfq.id);
    let budget = budget_label(rfq.budget);
    let bids = bid_count_label(rfq.bid_count);

    view! {
        <a class="rfq-card" href=href>
            <span class="rfq-card__title">{rfq.title}</span>
            <span class="rfq-card__category">{rfq.category.unwrap_or_else(|| "General".to_owned())}</span>
            <span class="rfq-card__meta">
                <span class="rfq-card__status">{rfq.status}</span>
                <span class="rfq-card__budget">{budget}</span>
                <span class="rfq-card__bids">{bids}</span>
            </span>
        </a>
    }
}
