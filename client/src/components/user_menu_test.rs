use super::*;
use crate::test_support::{render_html, scenario_session};

fn render_menu(open: bool) -> String {
    render_html(move || {
        provide_context(RwSignal::new(AuthState::Present(scenario_session())));
        provide_context(RwSignal::new(ShellUiState { options_visible: open }));
        let options_open = Memo::new(move |_| open);
        view! { <UserMenu user=scenario_session() options_open=options_open/> }
    })
}

#[test]
fn badge_shows_display_name() {
    let html = render_menu(false);
    assert!(html.contains("A. User"), "{html}");
}

#[test]
fn closed_menu_hides_popover() {
    let html = render_menu(false);
    assert!(!html.contains("user-menu__popover"), "{html}");
    assert!(!html.contains(SIGNOUT_ENDPOINT), "{html}");
}

#[test]
fn open_menu_shows_identity_and_signout_link() {
    let html = render_menu(true);
    assert!(html.contains("user-menu__popover"), "{html}");
    assert!(html.contains("auser@example.com"), "{html}");
    assert!(html.contains(&format!("href=\"{SIGNOUT_ENDPOINT}\"")), "{html}");
}
