//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{ParentRoute, Route, Router, Routes},
};

use crate::components::shell::Shell;
use crate::pages::{
    announcements::AnnouncementsPage, discord_users::DiscordUsersPage,
    promotion_schedule::PromotionSchedulePage,
};

/// HTML document rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Every console route is nested under `Shell`, which owns identity and
/// chrome state for the routed pages.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/stair-console.css"/>
        <Title text="STAIR Console"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <ParentRoute path=StaticSegment("") view=Shell>
                    <Route path=StaticSegment("") view=AnnouncementsPage/>
                    <Route path=StaticSegment("announcements") view=AnnouncementsPage/>
                    <Route path=(StaticSegment("discord"), StaticSegment("users")) view=DiscordUsersPage/>
                    <Route path=StaticSegment("promotion-schedule") view=PromotionSchedulePage/>
                </ParentRoute>
            </Routes>
        </Router>
    }
}
