//! Route admission decisions.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every protected route declares a static [`RouteRequirement`];
//! [`decide`] maps it and the current session to one of four outcomes. The
//! function is pure and idempotent; side effects (notices, navigation)
//! belong to the component wiring in `components::role_gate`.

#[cfg(test)]
#[path = "gate_test.rs"]
mod gate_test;

use crate::net::types::Role;
use crate::state::session::{AuthStatus, SessionState};
use crate::util::routes;

/// Which roles a route admits.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoleSet {
    /// Any authenticated profile (or none) is acceptable.
    Any,
    /// Only the listed roles are admitted.
    Only(&'static [Role]),
}

impl RoleSet {
    fn allows(self, role: Role) -> bool {
        match self {
            RoleSet::Any => true,
            RoleSet::Only(roles) => roles.contains(&role),
        }
    }
}

/// Static access declaration for one route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouteRequirement {
    pub requires_auth: bool,
    pub allowed_roles: RoleSet,
}

impl RouteRequirement {
    /// No authentication needed.
    pub const fn public() -> Self {
        Self { requires_auth: false, allowed_roles: RoleSet::Any }
    }

    /// Any signed-in user.
    pub const fn any_authenticated() -> Self {
        Self { requires_auth: true, allowed_roles: RoleSet::Any }
    }

    /// Signed-in users holding one of the listed roles.
    pub const fn only(roles: &'static [Role]) -> Self {
        Self { requires_auth: true, allowed_roles: RoleSet::Only(roles) }
    }
}

/// Outcome of a gate evaluation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Decision {
    Admit,
    /// Session still resolving: render a neutral view, no navigation.
    Pending,
    /// Not signed in on a protected route.
    DenyUnauthenticated,
    /// Signed in but the role does not match; the suggested route gives the
    /// user a way forward.
    DenyForbidden { suggested_route: &'static str },
}

/// Decide admission for a session/requirement pair.
///
/// Rule order matters: an unsettled session is always `Pending`, even on
/// public routes, so consumers never act on a half-resolved session.
pub fn decide(session: &SessionState, requirement: &RouteRequirement) -> Decision {
    if session.status == AuthStatus::Loading {
        return Decision::Pending;
    }
    if !requirement.requires_auth {
        return Decision::Admit;
    }
    if session.status != AuthStatus::Authenticated {
        return Decision::DenyUnauthenticated;
    }
    if let RoleSet::Only(_) = requirement.allowed_roles {
        return match session.role() {
            Some(role) if requirement.allowed_roles.allows(role) => Decision::Admit,
            Some(role) => Decision::DenyForbidden { suggested_route: routes::role_home(role) },
            // Profile missing or its lookup failed: insufficient for any
            // role-restricted route.
            None => Decision::DenyForbidden { suggested_route: routes::FALLBACK_HOME },
        };
    }
    Decision::Admit
}
