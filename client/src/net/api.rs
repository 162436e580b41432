//! REST API helpers for communicating with the host.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning an error since identity is only
//! resolved in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result` outputs instead of panics so an identity failure
//! degrades to the restricted view without crashing hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::UserSession;

/// Identity endpoint consumed once per shell mount.
pub const ME_ENDPOINT: &str = "/api/auth/me";

/// Plain navigation target for signing out.
pub const SIGNOUT_ENDPOINT: &str = "/api/auth/signout";

#[cfg(any(test, feature = "hydrate"))]
fn me_request_failed_message(status: u16) -> String {
    format!("identity request failed: {status}")
}

/// Fetch the currently authenticated user from `/api/auth/me`.
///
/// # Errors
///
/// Returns an error string on a non-success status, a transport failure, a
/// malformed body, or when called outside the browser.
pub async fn fetch_current_user() -> Result<UserSession, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(ME_ENDPOINT)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(me_request_failed_message(resp.status()));
        }
        resp.json::<UserSession>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}
