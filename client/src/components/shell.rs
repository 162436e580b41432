//! Top-level console layout hosting navigation and the routed view.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounted as the parent route of every console page. `Shell` resolves
//! identity once and owns the click-away subscription; `ShellLayout` renders
//! one of three layouts chosen by `ShellView::layout`: nothing while
//! unresolved, the restricted view without a session, or the full chrome
//! with the nested route in the content region.

use leptos::prelude::*;
use leptos_router::components::Outlet;

use crate::components::sidebar::Sidebar;
use crate::components::user_menu::UserMenu;
use crate::pages::restricted::RestrictedPage;
use crate::state::auth::AuthState;
use crate::state::shell::ShellView;
use crate::state::ui::{ClickTarget, ShellUiState};
use crate::util::auth::install_identity_fetch;
use crate::util::click_away::ClickAwaySubscription;

#[component]
pub fn Shell() -> impl IntoView {
    let auth = RwSignal::new(AuthState::default());
    let ui = RwSignal::new(ShellUiState::default());
    provide_context(auth);
    provide_context(ui);

    install_identity_fetch(auth);

    let mut dismiss = ClickAwaySubscription::register(move || {
        let Some(current) = auth.try_get_untracked() else {
            return;
        };
        ui.maybe_update(|state| state.apply_click(ClickTarget::Elsewhere, &current));
    });
    on_cleanup(move || dismiss.release());

    view! {
        <ShellLayout auth=auth ui=ui>
            <Outlet/>
        </ShellLayout>
    }
}

/// Shell chrome for the given identity and popover state.
///
/// `children` is the nested view placed in the content region of the full
/// layout. `UserMenu` reads `auth`/`ui` from context, so both signals must
/// also be provided there.
#[component]
pub fn ShellLayout(auth: RwSignal<AuthState>, ui: RwSignal<ShellUiState>, children: ChildrenFn) -> impl IntoView {
    // Popover visibility changes must not rebuild the layout (and the
    // nested route), so it is derived separately from the layout branch.
    let options_open = Memo::new(move |_| {
        matches!(ShellView::derive(&auth.get(), &ui.get()), ShellView::Full { options_open: true, .. })
    });

    move || match ShellView::layout(&auth.get()) {
        ShellView::Empty => ().into_any(),
        ShellView::Restricted => view! { <RestrictedPage/> }.into_any(),
        ShellView::Full { user, nav, .. } => view! {
            <div class="shell">
                <Sidebar nav=nav/>
                <div class="shell__main">
                    <header class="shell__header">
                        <span class="shell__spacer"></span>
                        <UserMenu user=user options_open=options_open/>
                    </header>
                    <main class="shell__content">{children()}</main>
                </div>
            </div>
        }
        .into_any(),
    }
}

#[cfg(all(test, feature = "ssr"))]
#[path = "shell_test.rs"]
mod shell_test;
