use super::*;
use crate::state::session::Profile;
use crate::net::types::VerificationStatus;

fn loading() -> SessionState {
    SessionState::default()
}

fn anonymous() -> SessionState {
    SessionState { status: AuthStatus::Anonymous, user_id: None, profile: None }
}

fn authenticated(role: Role) -> SessionState {
    SessionState {
        status: AuthStatus::Authenticated,
        user_id: Some("u1".to_owned()),
        profile: Some(Profile { role, verification: Some(VerificationStatus::Approved) }),
    }
}

fn authenticated_role_less() -> SessionState {
    SessionState {
        status: AuthStatus::Authenticated,
        user_id: Some("u1".to_owned()),
        profile: None,
    }
}

#[test]
fn loading_session_is_pending_for_every_requirement() {
    let requirements = [
        RouteRequirement::public(),
        RouteRequirement::any_authenticated(),
        RouteRequirement::only(&[Role::Admin]),
    ];
    for requirement in &requirements {
        assert_eq!(decide(&loading(), requirement), Decision::Pending);
    }
}

#[test]
fn public_routes_admit_settled_sessions_regardless_of_auth() {
    let requirement = RouteRequirement::public();
    assert_eq!(decide(&anonymous(), &requirement), Decision::Admit);
    assert_eq!(decide(&authenticated(Role::Vendor), &requirement), Decision::Admit);
}

#[test]
fn anonymous_session_on_protected_route_is_denied_unauthenticated() {
    let requirement = RouteRequirement::any_authenticated();
    assert_eq!(decide(&anonymous(), &requirement), Decision::DenyUnauthenticated);
}

#[test]
fn vendor_on_admin_route_is_forbidden_with_supplier_home_suggested() {
    let requirement = RouteRequirement::only(&[Role::Admin]);
    assert_eq!(
        decide(&authenticated(Role::Vendor), &requirement),
        Decision::DenyForbidden { suggested_route: "/supplier-dashboard" }
    );
}

#[test]
fn forbidden_suggestions_follow_the_role_home_table() {
    let admin_only = RouteRequirement::only(&[Role::Admin]);
    assert_eq!(
        decide(&authenticated(Role::Client), &admin_only),
        Decision::DenyForbidden { suggested_route: "/client-dashboard" }
    );
    let client_only = RouteRequirement::only(&[Role::Client]);
    assert_eq!(
        decide(&authenticated(Role::Admin), &client_only),
        Decision::DenyForbidden { suggested_route: "/admin" }
    );
}

#[test]
fn matching_role_is_admitted() {
    let requirement = RouteRequirement::only(&[Role::Client]);
    assert_eq!(decide(&authenticated(Role::Client), &requirement), Decision::Admit);
}

#[test]
fn multi_role_requirement_admits_any_listed_role() {
    let requirement = RouteRequirement::only(&[Role::Client, Role::Vendor]);
    assert_eq!(decide(&authenticated(Role::Vendor), &requirement), Decision::Admit);
    assert_eq!(
        decide(&authenticated(Role::Admin), &requirement),
        Decision::DenyForbidden { suggested_route: "/admin" }
    );
}

#[test]
fn missing_profile_is_insufficient_for_role_restricted_routes() {
    let requirement = RouteRequirement::only(&[Role::Client]);
    assert_eq!(
        decide(&authenticated_role_less(), &requirement),
        Decision::DenyForbidden { suggested_route: "/landing" }
    );
}

#[test]
fn missing_profile_still_admits_unrestricted_authenticated_routes() {
    let requirement = RouteRequirement::any_authenticated();
    assert_eq!(decide(&authenticated_role_less(), &requirement), Decision::Admit);
}

#[test]
fn decide_is_idempotent_for_an_unchanged_session() {
    let session = authenticated(Role::Vendor);
    let requirement = RouteRequirement::only(&[Role::Admin]);
    let first = decide(&session, &requirement);
    let second = decide(&session, &requirement);
    assert_eq!(first, second);
}
