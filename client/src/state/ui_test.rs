use super::*;
use crate::net::types::UserSession;

fn present() -> AuthState {
    AuthState::Present(UserSession {
        display_name: "A. User".to_owned(),
        user_principal_name: "auser@example.com".to_owned(),
        mail: "auser@example.com".to_owned(),
    })
}

#[test]
fn shell_ui_state_default_popover_hidden() {
    assert!(!ShellUiState::default().options_visible);
}

#[test]
fn badge_click_opens_popover_when_signed_in() {
    let mut ui = ShellUiState::default();
    assert!(ui.apply_click(ClickTarget::Badge, &present()));
    assert!(ui.options_visible);
}

#[test]
fn badge_click_is_ignored_without_session() {
    for auth in [AuthState::Unknown, AuthState::Absent] {
        let mut ui = ShellUiState::default();
        assert!(!ui.apply_click(ClickTarget::Badge, &auth));
        assert!(!ui.options_visible);
    }
}

#[test]
fn outside_click_hides_open_popover() {
    let auth = present();
    let mut ui = ShellUiState::default();
    ui.apply_click(ClickTarget::Badge, &auth);
    assert!(ui.apply_click(ClickTarget::Elsewhere, &auth));
    assert!(!ui.options_visible);
}

#[test]
fn popover_click_keeps_popover_open() {
    let auth = present();
    let mut ui = ShellUiState::default();
    ui.apply_click(ClickTarget::Badge, &auth);
    assert!(!ui.apply_click(ClickTarget::Popover, &auth));
    assert!(ui.options_visible);
}

#[test]
fn repeated_badge_clicks_keep_popover_open() {
    let auth = present();
    let mut ui = ShellUiState::default();
    ui.apply_click(ClickTarget::Badge, &auth);
    assert!(!ui.apply_click(ClickTarget::Badge, &auth));
    assert!(ui.options_visible);
}

#[test]
fn outside_click_on_closed_popover_is_a_noop() {
    let mut ui = ShellUiState::default();
    assert!(!ui.apply_click(ClickTarget::Elsewhere, &present()));
    assert!(!ui.options_visible);
}
