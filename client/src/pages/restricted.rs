//! Restricted-access view shown when the identity endpoint reports no session.

use leptos::prelude::*;

#[component]
pub fn RestrictedPage() -> impl IntoView {
    view! {
        <div class="restricted-page">
            <div class="restricted-card">
                <h1>"Restricted"</h1>
                <p class="restricted-card__message">
                    "You do not have access to this console. Sign in with an authorized account."
                </p>
            </div>
        </div>
    }
}

#[cfg(all(test, feature = "ssr"))]
#[path = "restricted_test.rs"]
mod restricted_test;
