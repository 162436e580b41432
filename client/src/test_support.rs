//! Server-render helpers for component tests.

use leptos::prelude::*;

use crate::net::types::UserSession;

/// Render a view to HTML under a fresh reactive owner.
///
/// Contexts provided inside `build` are visible to the rendered components.
pub fn render_html<F, V>(build: F) -> String
where
    F: FnOnce() -> V,
    V: RenderHtml,
{
    let owner = Owner::new();
    owner.with(|| build().to_html())
}

/// Every `href` attribute value in document order.
pub fn hrefs(html: &str) -> Vec<String> {
    html.split("href=\"")
        .skip(1)
        .filter_map(|rest| rest.split_once('"').map(|(value, _)| value.to_owned()))
        .collect()
}

pub fn scenario_session() -> UserSession {
    UserSession {
        display_name: "A. User".to_owned(),
        user_principal_name: "auser@example.com".to_owned(),
        mail: "auser@example.com".to_owned(),
    }
}
