//! Shared wire DTOs for the client/server boundary.
//!
//! DESIGN
//! ======
//! Field names follow the identity provider's camelCase JSON so the host can
//! pass bodies through with a plain serde projection.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// The signed-in identity as reported by `/api/auth/me`.
///
/// Extra fields in the response body are ignored.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSession {
    /// Human-readable name shown in the user badge.
    pub display_name: String,
    /// Directory login name (usually an email-shaped UPN).
    pub user_principal_name: String,
    /// Primary mail address.
    pub mail: String,
}
