//! User badge with the user-options popover.
//!
//! The badge and the popover stop click propagation so the shell's
//! document-wide dismissal listener only ever sees outside clicks.

use leptos::prelude::*;

use crate::net::api::SIGNOUT_ENDPOINT;
use crate::net::types::UserSession;
use crate::state::auth::AuthState;
use crate::state::ui::{ClickTarget, ShellUiState};

#[component]
pub fn UserMenu(user: UserSession, options_open: Memo<bool>) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<ShellUiState>>();

    let on_target = move |target: ClickTarget| {
        let Some(current) = auth.try_get_untracked() else {
            return;
        };
        ui.maybe_update(|state| state.apply_click(target, &current));
    };

    let UserSession { display_name, user_principal_name, mail } = user;
    let badge_title = user_principal_name.clone();

    view! {
        <div class="user-menu">
            <button
                class="user-menu__badge"
                title=badge_title
                on:click=move |ev| {
                    ev.stop_propagation();
                    on_target(ClickTarget::Badge);
                }
            >
                <span class="user-menu__name">{display_name}</span>
            </button>
            <Show when=move || options_open.get()>
                <div
                    class="user-menu__popover"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        on_target(ClickTarget::Popover);
                    }
                >
                    <div class="user-menu__identity">
                        <span class="user-menu__upn">{user_principal_name.clone()}</span>
                        <span class="user-menu__mail">{mail.clone()}</span>
                    </div>
                    <a class="user-menu__signout" href=SIGNOUT_ENDPOINT rel="external">
                        "Sign out"
                    </a>
                </div>
            </Show>
        </div>
    }
}

#[cfg(all(test, feature = "ssr"))]
#[path = "user_menu_test.rs"]
mod user_menu_test;
