//! Announcements destination (also the console landing route).

use leptos::prelude::*;

#[component]
pub fn AnnouncementsPage() -> impl IntoView {
    view! {
        <section class="page page--announcements">
            <h2 class="page__title">"Announcements"</h2>
        </section>
    }
}
