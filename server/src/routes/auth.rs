//! Auth routes: identity lookup and sign-out for the console shell.

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Json, Redirect, Response};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use time::Duration;

use crate::services::identity::IdentityError;
use crate::state::AppState;

/// `GET /api/auth/me` — resolve the caller through the upstream identity provider.
///
/// Answers 200 with `{displayName, userPrincipalName, mail}` or a non-success
/// status. Without an upstream every caller is unauthenticated.
pub async fn me(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let Some(identity) = &state.identity else {
        return StatusCode::UNAUTHORIZED.into_response();
    };

    match identity.fetch_me(&headers).await {
        Ok(session) => Json(session).into_response(),
        Err(e) => {
            if let IdentityError::Rejected(status) = &e {
                tracing::debug!(status, "identity upstream rejected caller");
            } else {
                tracing::warn!(error = %e, upstream = identity.upstream_url(), "identity lookup failed");
            }
            e.status_code().into_response()
        }
    }
}

/// `GET /api/auth/signout` — clear the session cookie and leave the console.
pub async fn signout(State(state): State<AppState>, jar: CookieJar) -> impl IntoResponse {
    let cookie = Cookie::build((state.config.session_cookie_name.clone(), ""))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(state.config.cookie_secure)
        .max_age(Duration::ZERO);

    (jar.add(cookie), Redirect::temporary(&state.config.signout_redirect_url))
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
