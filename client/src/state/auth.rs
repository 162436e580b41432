//! Identity state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Read by the shell to pick between the empty, restricted, and full
//! layouts. Written exactly once, when the identity fetch settles.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::UserSession;

/// Identity status of the browser user.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum AuthState {
    /// The identity fetch has not settled yet.
    #[default]
    Unknown,
    /// The identity endpoint answered with anything but a session.
    Absent,
    /// A signed-in session.
    Present(UserSession),
}

impl AuthState {
    /// Settle an unresolved state from a fetch outcome.
    ///
    /// Every failure collapses to `Absent`. Once resolved, further outcomes
    /// are ignored and `false` is returned.
    pub fn resolve<E>(&mut self, outcome: Result<UserSession, E>) -> bool {
        if !matches!(self, Self::Unknown) {
            return false;
        }
        *self = match outcome {
            Ok(session) => Self::Present(session),
            Err(_) => Self::Absent,
        };
        true
    }

    #[must_use]
    pub fn is_present(&self) -> bool {
        matches!(self, Self::Present(_))
    }
}
