//! Promotion schedule destination.

use leptos::prelude::*;

#[component]
pub fn PromotionSchedulePage() -> impl IntoView {
    view! {
        <section class="page page--promotion-schedule">
            <h2 class="page__title">"Promotion Schedule"</h2>
        </section>
    }
}
