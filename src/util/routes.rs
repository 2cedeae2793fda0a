//! Route paths and the two role tables that reference them.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use crate::net::types::Role;

pub const ROOT: &str = "/";
/// Public marketing page for signed-out visitors.
pub const LANDING: &str = "/landing";
/// Email + one-time-code sign-in.
pub const AUTH: &str = "/auth";
/// Client RFQ dashboard (canonical post-auth landing for clients).
pub const CLIENT_DASHBOARD: &str = "/dashboard";
/// Alias of the client dashboard, linked from forbidden views.
pub const CLIENT_HOME: &str = "/client-dashboard";
/// Vendor dashboard (canonical post-auth landing for vendors).
pub const VENDOR_DASHBOARD: &str = "/vendor-dashboard";
/// Legacy alias of the vendor dashboard, linked from forbidden views.
pub const SUPPLIER_DASHBOARD: &str = "/supplier-dashboard";
/// Admin area entry point.
pub const ADMIN_HOME: &str = "/admin";
/// Admin KYC review dashboard (canonical post-auth landing for admins).
pub const ADMIN_DASHBOARD: &str = "/admin/dashboard";
/// KYC intake form for clients with no submission on record.
pub const KYC_INTAKE: &str = "/kyc";
/// KYC form preloaded with the rejection context.
pub const KYC_RESUBMIT: &str = "/kyc/resubmit";
/// Offered from forbidden views when the session has no resolved role.
pub const FALLBACK_HOME: &str = LANDING;

/// Detail page for one RFQ.
pub fn rfq_detail(rfq_id: &str) -> String {
    format!("/rfq/{rfq_id}")
}

/// Default home per role, suggested from access-denied views.
pub fn role_home(role: Role) -> &'static str {
    match role {
        Role::Client => CLIENT_HOME,
        Role::Vendor => SUPPLIER_DASHBOARD,
        Role::Admin => ADMIN_HOME,
    }
}

/// Canonical landing per role once authentication settles.
pub fn role_landing(role: Role) -> &'static str {
    match role {
        Role::Admin => ADMIN_DASHBOARD,
        Role::Vendor => VENDOR_DASHBOARD,
        Role::Client => CLIENT_DASHBOARD,
    }
}
