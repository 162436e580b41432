//! Sidebar with the console logo and the fixed navigation links.
//!
//! Links are plain anchors; the router intercepts same-origin anchor clicks
//! for client-side navigation.

use leptos::prelude::*;

use crate::state::shell::NavEntry;

#[component]
pub fn Sidebar(nav: &'static [NavEntry]) -> impl IntoView {
    view! {
        <nav class="sidebar">
            <div class="sidebar__logo">
                <span class="sidebar__logo-mark">"STAIR"</span>
                <span class="sidebar__logo-text">"Console"</span>
            </div>
            <ul class="sidebar__links">
                {nav
                    .iter()
                    .map(|entry| {
                        view! {
                            <li class="sidebar__link">
                                <a href=entry.href>{entry.label}</a>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </nav>
    }
}

#[cfg(all(test, feature = "ssr"))]
#[path = "sidebar_test.rs"]
mod sidebar_test;
