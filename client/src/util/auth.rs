//! Identity bootstrap shared by auth-aware components.
//!
//! SYSTEM CONTEXT
//! ==============
//! The shell resolves identity once per mount. The fetch runs only in the
//! browser; server rendering leaves the state `Unknown` so SSR output is the
//! empty layout and hydration settles it.

use leptos::prelude::*;

use crate::state::auth::AuthState;

/// Issue the one-shot identity request and settle `auth` with its outcome.
///
/// There is no retry and no timeout. If the owning component is disposed
/// before the request settles, the outcome is dropped.
pub fn install_identity_fetch(auth: RwSignal<AuthState>) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let outcome = crate::net::api::fetch_current_user().await;
        if let Err(e) = &outcome {
            log::debug!("identity unavailable: {e}");
        }
        let Some(mut state) = auth.try_get_untracked() else {
            return;
        };
        if state.resolve(outcome) {
            let _ = auth.try_set(state);
        }
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = auth;
    }
}
