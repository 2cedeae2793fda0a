use super::*;
use crate::net::types::{Identity, Role, VerificationStatus};

fn identity(user_id: &str) -> Identity {
    Identity { user_id: user_id.to_owned(), email: None }
}

fn client_profile() -> Profile {
    Profile { role: Role::Client, verification: Some(VerificationStatus::Pending) }
}

#[test]
fn new_cell_starts_loading() {
    let cell = SessionCell::new();
    assert_eq!(cell.state().status, AuthStatus::Loading);
    assert_eq!(cell.state().user_id, None);
    assert_eq!(cell.state().profile, None);
}

#[test]
fn empty_identity_lookup_settles_anonymous() {
    let mut cell = SessionCell::new();
    let token = cell.begin_resolve();
    assert_eq!(cell.resolve_anonymous(token), Apply::Applied);
    assert_eq!(cell.state().status, AuthStatus::Anonymous);
    assert!(cell.state().settled());
}

#[test]
fn full_resolution_exposes_identity_and_profile_together() {
    let mut cell = SessionCell::new();
    let token = cell.begin_resolve();

    assert_eq!(cell.note_identity(token, identity("u1")), Apply::Applied);
    // Still loading: the profile lookup has not settled, and no user id leaks.
    assert_eq!(cell.state().status, AuthStatus::Loading);
    assert_eq!(cell.state().user_id, None);

    assert_eq!(cell.resolve_profile(token, Some(client_profile())), Apply::Applied);
    assert_eq!(cell.state().status, AuthStatus::Authenticated);
    assert_eq!(cell.state().user_id.as_deref(), Some("u1"));
    assert_eq!(cell.state().role(), Some(Role::Client));
}

#[test]
fn failed_profile_lookup_leaves_session_role_less() {
    let mut cell = SessionCell::new();
    let token = cell.begin_resolve();
    cell.note_identity(token, identity("u1"));

    assert_eq!(cell.resolve_profile(token, None), Apply::Applied);
    assert_eq!(cell.state().status, AuthStatus::Authenticated);
    assert_eq!(cell.state().user_id.as_deref(), Some("u1"));
    assert_eq!(cell.state().role(), None);
}

#[test]
fn identity_from_superseded_cycle_is_discarded() {
    let mut cell = SessionCell::new();
    let stale = cell.begin_resolve();
    let current = cell.begin_resolve();

    assert_eq!(cell.note_identity(stale, identity("old")), Apply::Stale);
    assert_eq!(cell.state().status, AuthStatus::Loading);
    assert_eq!(cell.state().user_id, None);

    cell.note_identity(current, identity("new"));
    cell.resolve_profile(current, Some(client_profile()));
    assert_eq!(cell.state().user_id.as_deref(), Some("new"));
}

#[test]
fn profile_resolved_for_old_identity_never_lands_on_new_one() {
    let mut cell = SessionCell::new();
    let first = cell.begin_resolve();
    cell.note_identity(first, identity("a"));

    // Identity changes to B before A's profile lookup completes.
    let second = cell.begin_resolve();
    cell.note_identity(second, identity("b"));

    // A's profile completes out of order and must be discarded.
    assert_eq!(cell.resolve_profile(first, Some(client_profile())), Apply::Stale);
    assert_eq!(cell.state().status, AuthStatus::Loading);

    let vendor = Profile { role: Role::Vendor, verification: None };
    assert_eq!(cell.resolve_profile(second, Some(vendor)), Apply::Applied);
    assert_eq!(cell.state().user_id.as_deref(), Some("b"));
    assert_eq!(cell.state().role(), Some(Role::Vendor));
}

#[test]
fn profile_without_a_noted_identity_is_discarded() {
    let mut cell = SessionCell::new();
    let token = cell.begin_resolve();
    assert_eq!(cell.resolve_profile(token, Some(client_profile())), Apply::Stale);
    assert_eq!(cell.state().status, AuthStatus::Loading);
}

#[test]
fn sign_out_resets_state_and_invalidates_in_flight_lookups() {
    let mut cell = SessionCell::new();
    let token = cell.begin_resolve();
    cell.note_identity(token, identity("u1"));

    cell.sign_out();
    assert_eq!(cell.state().status, AuthStatus::Anonymous);
    assert_eq!(cell.resolve_profile(token, Some(client_profile())), Apply::Stale);
    assert_eq!(cell.state().status, AuthStatus::Anonymous);
    assert_eq!(cell.state().user_id, None);
}

#[test]
fn user_id_is_stable_when_the_same_identity_resolves_again() {
    let mut cell = SessionCell::new();
    let first = cell.begin_resolve();
    cell.note_identity(first, identity("u1"));
    cell.resolve_profile(first, Some(client_profile()));

    let second = cell.begin_resolve();
    cell.note_identity(second, identity("u1"));
    cell.resolve_profile(second, Some(client_profile()));
    assert_eq!(cell.state().user_id.as_deref(), Some("u1"));
}

#[test]
fn profile_is_never_populated_before_authentication() {
    let mut cell = SessionCell::new();
    let token = cell.begin_resolve();
    cell.note_identity(token, identity("u1"));
    assert_eq!(cell.state().profile, None);
    assert_eq!(cell.state().status, AuthStatus::Loading);
}
