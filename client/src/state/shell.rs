//! Render model for the shell layout.
//!
//! DESIGN
//! ======
//! `ShellView::derive` is the pure half of rendering: it maps identity and
//! chrome state onto one of three layouts, matching `AuthState`
//! exhaustively. The `Shell` component only turns the result into markup.

#[cfg(test)]
#[path = "shell_test.rs"]
mod shell_test;

use super::auth::AuthState;
use super::ui::ShellUiState;
use crate::net::types::UserSession;

/// One fixed sidebar destination.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavEntry {
    pub label: &'static str,
    pub href: &'static str,
}

/// Sidebar destinations, in display order.
pub const NAV_ENTRIES: [NavEntry; 3] = [
    NavEntry { label: "Announcements", href: "/announcements" },
    NavEntry { label: "Discord Users", href: "/discord/users" },
    NavEntry { label: "Promotion Schedule", href: "/promotion-schedule" },
];

/// Which layout the shell shows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ShellView {
    /// Identity still unresolved; nothing is rendered.
    Empty,
    /// No session; restricted-access view without navigation.
    Restricted,
    /// Signed in; full chrome around the nested view.
    Full {
        user: UserSession,
        nav: &'static [NavEntry],
        options_open: bool,
    },
}

impl ShellView {
    /// Layout branch for an identity state, with the popover closed.
    ///
    /// Used where only the branch matters, so popover toggles do not
    /// rebuild the layout.
    #[must_use]
    pub fn layout(auth: &AuthState) -> Self {
        match auth {
            AuthState::Unknown => Self::Empty,
            AuthState::Absent => Self::Restricted,
            AuthState::Present(user) => Self::Full {
                user: user.clone(),
                nav: &NAV_ENTRIES,
                options_open: false,
            },
        }
    }

    #[must_use]
    pub fn derive(auth: &AuthState, ui: &ShellUiState) -> Self {
        let mut view = Self::layout(auth);
        if let Self::Full { options_open, .. } = &mut view {
            *options_open = ui.options_visible;
        }
        view
    }
}
