use super::*;
use crate::test_support::{hrefs, render_html, scenario_session};

fn render_layout(auth: AuthState, ui: ShellUiState) -> String {
    render_html(move || {
        let auth = RwSignal::new(auth);
        let ui = RwSignal::new(ui);
        provide_context(auth);
        provide_context(ui);
        view! {
            <ShellLayout auth=auth ui=ui>
                <p class="nested-view">"nested"</p>
            </ShellLayout>
        }
    })
}

#[test]
fn unresolved_identity_renders_neither_shell_nor_restricted_view() {
    let html = render_layout(AuthState::Unknown, ShellUiState::default());
    assert!(!html.contains("class=\"shell\""), "{html}");
    assert!(!html.contains("Restricted"), "{html}");
    assert!(!html.contains("nested"), "{html}");
}

#[test]
fn absent_identity_renders_restricted_view_without_navigation() {
    let html = render_layout(AuthState::Absent, ShellUiState::default());
    assert!(html.contains("Restricted"), "{html}");
    assert!(!html.contains("class=\"shell\""), "{html}");
    assert!(hrefs(&html).is_empty(), "{html}");
}

#[test]
fn present_identity_renders_full_shell() {
    let html = render_layout(AuthState::Present(scenario_session()), ShellUiState::default());
    assert!(html.contains("class=\"shell\""), "{html}");
    assert!(html.contains("A. User"), "{html}");
    assert!(html.contains("nested"), "{html}");
    assert_eq!(hrefs(&html), ["/announcements", "/discord/users", "/promotion-schedule"]);
    assert!(!html.contains("user-menu__popover"), "{html}");
}

#[test]
fn open_popover_renders_inside_full_shell() {
    let html = render_layout(AuthState::Present(scenario_session()), ShellUiState { options_visible: true });
    assert!(html.contains("user-menu__popover"), "{html}");
}

#[test]
fn stale_popover_flag_is_not_rendered_without_session() {
    let html = render_layout(AuthState::Absent, ShellUiState { options_visible: true });
    assert!(!html.contains("user-menu__popover"), "{html}");
}
