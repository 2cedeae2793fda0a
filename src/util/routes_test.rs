use super::*;

#[test]
fn role_home_table_matches_forbidden_view_suggestions() {
    assert_eq!(role_home(Role::Client), "/client-dashboard");
    assert_eq!(role_home(Role::Vendor), "/supplier-dashboard");
    assert_eq!(role_home(Role::Admin), "/admin");
}

#[test]
fn role_landing_table_matches_post_auth_destinations() {
    assert_eq!(role_landing(Role::Admin), "/admin/dashboard");
    assert_eq!(role_landing(Role::Vendor), "/vendor-dashboard");
    assert_eq!(role_landing(Role::Client), "/dashboard");
}

#[test]
fn rfq_detail_formats_expected_path() {
    assert_eq!(rfq_detail("r42"), "/rfq/r42");
}
