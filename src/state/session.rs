//! Session resolution: one consistent auth + profile state for all consumers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route gates and the landing redirect both read the session produced here.
//! The state is single-writer: only this module mutates it, everything else
//! subscribes read-only.
//!
//! DESIGN
//! ======
//! The transition core (`SessionCell`) is synchronous and pure so the
//! ordering rules are unit-testable. Every resolution cycle gets an epoch
//! token; a completion whose token no longer matches the current epoch is a
//! leftover from a superseded identity and is discarded, never applied.
//! Last writer wins by event recency, not completion order.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use crate::net::api;
use crate::net::types::{Identity, ProfileRecord, Role, VerificationStatus};

/// Authentication lifecycle of the current browser session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthStatus {
    /// No identity; the signed-out experience.
    Anonymous,
    /// An identity or profile lookup is outstanding. Consumers must not
    /// make allow/deny decisions until this settles.
    #[default]
    Loading,
    /// Identity resolved and the profile lookup has settled.
    Authenticated,
}

/// Resolved profile attached to an authenticated session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Profile {
    pub role: Role,
    pub verification: Option<VerificationStatus>,
}

impl From<ProfileRecord> for Profile {
    fn from(record: ProfileRecord) -> Self {
        Self { role: record.role, verification: record.verification_status }
    }
}

/// The derived session state.
///
/// `user_id` and `profile` are populated only when `status` is
/// [`AuthStatus::Authenticated`]; `profile` stays `None` when the profile
/// lookup failed or no record exists, in which case role-restricted routes
/// treat the user as role-less.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    pub status: AuthStatus,
    pub user_id: Option<String>,
    pub profile: Option<Profile>,
}

impl SessionState {
    fn loading() -> Self {
        Self::default()
    }

    fn anonymous() -> Self {
        Self { status: AuthStatus::Anonymous, user_id: None, profile: None }
    }

    /// True once no lookup is outstanding.
    pub fn settled(&self) -> bool {
        self.status != AuthStatus::Loading
    }

    pub fn is_authenticated(&self) -> bool {
        self.status == AuthStatus::Authenticated
    }

    /// The resolved role, if the session is authenticated with a profile.
    pub fn role(&self) -> Option<Role> {
        self.profile.as_ref().map(|profile| profile.role)
    }
}

/// Whether a lookup completion was applied or discarded as stale.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Apply {
    Applied,
    Stale,
}

impl Apply {
    pub fn is_stale(self) -> bool {
        self == Apply::Stale
    }
}

/// Synchronous transition core for session resolution.
///
/// The epoch increments on every `begin_resolve` and `sign_out`; completion
/// methods take the token handed out by `begin_resolve` and refuse to apply
/// when it no longer matches. The identity resolved mid-cycle rides in
/// `pending_identity` so the exposed state never carries a `user_id` before
/// the session is fully authenticated.
#[derive(Clone, Debug, Default)]
pub struct SessionCell {
    state: SessionState,
    epoch: u64,
    pending_identity: Option<Identity>,
}

impl SessionCell {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Start a resolution cycle: invalidate outstanding lookups and return
    /// the token their completions must present.
    pub fn begin_resolve(&mut self) -> u64 {
        self.epoch += 1;
        self.pending_identity = None;
        self.state = SessionState::loading();
        self.epoch
    }

    /// Identity lookup came back empty or failed: settle as signed out.
    pub fn resolve_anonymous(&mut self, token: u64) -> Apply {
        if token != self.epoch {
            return Apply::Stale;
        }
        self.pending_identity = None;
        self.state = SessionState::anonymous();
        Apply::Applied
    }

    /// Identity lookup succeeded; the profile lookup is still outstanding,
    /// so the exposed state remains `Loading`.
    pub fn note_identity(&mut self, token: u64, identity: Identity) -> Apply {
        if token != self.epoch {
            return Apply::Stale;
        }
        self.pending_identity = Some(identity);
        Apply::Applied
    }

    /// Profile lookup settled: expose the authenticated state. `None` means
    /// the profile was missing or its lookup failed; the session is then
    /// authenticated but role-less.
    pub fn resolve_profile(&mut self, token: u64, profile: Option<Profile>) -> Apply {
        if token != self.epoch {
            return Apply::Stale;
        }
        let Some(identity) = self.pending_identity.take() else {
            return Apply::Stale;
        };
        self.state = SessionState {
            status: AuthStatus::Authenticated,
            user_id: Some(identity.user_id),
            profile,
        };
        Apply::Applied
    }

    /// Immediate local sign-out. Bumps the epoch so in-flight lookups from
    /// the previous identity can no longer land.
    pub fn sign_out(&mut self) {
        self.epoch += 1;
        self.pending_identity = None;
        self.state = SessionState::anonymous();
    }
}

/// Injectable handle over the session cell.
///
/// Created once in the application root and provided via context; pages and
/// components read reactively through [`SessionStore::state`].
#[derive(Clone, Copy)]
pub struct SessionStore {
    cell: RwSignal<SessionCell>,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionStore {
    pub fn new() -> Self {
        Self { cell: RwSignal::new(SessionCell::new()) }
    }

    /// Reactive read of the current session state.
    pub fn state(&self) -> SessionState {
        self.cell.with(|cell| cell.state().clone())
    }

    /// Non-tracking read, for code running outside the reactive graph.
    pub fn state_untracked(&self) -> SessionState {
        self.cell.with_untracked(|cell| cell.state().clone())
    }

    /// The store, when a provider is present.
    pub fn from_context() -> Option<Self> {
        use_context::<SessionStore>()
    }

    /// The store, in contexts that cannot render without one.
    pub fn expect_from_context() -> Self {
        expect_context::<SessionStore>()
    }

    /// Re-derive the session from the backend.
    ///
    /// This is the identity-change entry point: called once at application
    /// start and again after every sign-in or sign-out event. The profile
    /// lookup is issued only after the identity lookup succeeds, and at most
    /// one is in flight per cycle.
    pub fn refresh(self) {
        let token = self.cell.try_update(SessionCell::begin_resolve).unwrap_or(0);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match api::fetch_identity().await {
                Ok(Some(identity)) => {
                    let user_id = identity.user_id.clone();
                    if self.apply(|cell| cell.note_identity(token, identity)).is_stale() {
                        return;
                    }
                    let profile = match api::fetch_profile(&user_id).await {
                        Ok(record) => record.map(Profile::from),
                        Err(err) => {
                            log::warn!("profile lookup failed, continuing role-less: {err}");
                            None
                        }
                    };
                    self.apply(|cell| cell.resolve_profile(token, profile));
                }
                Ok(None) => {
                    self.apply(|cell| cell.resolve_anonymous(token));
                }
                Err(err) => {
                    log::warn!("identity lookup failed, treating session as signed out: {err}");
                    self.apply(|cell| cell.resolve_anonymous(token));
                }
            }
        });

        // Lookups are browser-only; elsewhere the session settles signed out.
        #[cfg(not(feature = "hydrate"))]
        {
            self.apply(|cell| cell.resolve_anonymous(token));
        }
    }

    /// Apply a completion, logging discarded stale results.
    fn apply(self, transition: impl FnOnce(&mut SessionCell) -> Apply) -> Apply {
        let outcome = self.cell.try_update(transition).unwrap_or(Apply::Stale);
        if outcome.is_stale() {
            log::debug!("discarded stale session lookup result");
        }
        outcome
    }

    /// Local sign-out; callers also tell the backend via `api::sign_out`.
    pub fn sign_out(self) {
        self.cell.update(SessionCell::sign_out);
    }
}
