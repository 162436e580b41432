use leptos::prelude::*;

#[component]
pub fn DiscordUsersPage() -> impl IntoView {
    view! {
        <section class="page page--discord-users">
            <h2 class="page__title">"Discord Users"</h2>
        </section>
    }
}
