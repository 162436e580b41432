//! Local chrome state for the shell (user-options popover).
//!
//! DESIGN
//! ======
//! Keeps the popover toggle out of identity state. Clicks are classified by
//! where they land and folded in by a two-rule policy: the badge opens, any
//! click outside the popover closes.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use super::auth::AuthState;

/// Where a click landed relative to the user-options popover.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClickTarget {
    /// The user badge in the shell header.
    Badge,
    /// Anywhere inside the open popover.
    Popover,
    /// Anywhere else in the document.
    Elsewhere,
}

/// UI state for the shell chrome.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ShellUiState {
    pub options_visible: bool,
}

impl ShellUiState {
    /// Fold one click into the popover flag. Returns whether it changed.
    ///
    /// The badge only opens the popover while a session is present.
    pub fn apply_click(&mut self, target: ClickTarget, auth: &AuthState) -> bool {
        let next = match target {
            ClickTarget::Badge => auth.is_present(),
            ClickTarget::Popover => self.options_visible,
            ClickTarget::Elsewhere => false,
        };
        let changed = next != self.options_visible;
        self.options_visible = next;
        changed
    }
}
