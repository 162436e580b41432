//! Document-wide click subscription for dismissing popovers.
//!
//! SYSTEM CONTEXT
//! ==============
//! The listener is process-wide browser state, so it is owned by a value
//! whose lifetime is tied to the component that registered it. Dropping or
//! releasing the subscription removes the listener.

#[cfg(test)]
#[path = "click_away_test.rs"]
mod click_away_test;

/// Live registration of a window `click` listener.
///
/// On the server there is no window, so registration is inert.
pub struct ClickAwaySubscription {
    #[cfg(feature = "hydrate")]
    handle: Option<leptos::prelude::WindowListenerHandle>,
}

impl ClickAwaySubscription {
    /// Start calling `on_click` for every click that reaches the window.
    ///
    /// Handlers that must not dismiss (badge, popover) stop propagation, so
    /// anything arriving here is an outside click.
    pub fn register<F>(on_click: F) -> Self
    where
        F: Fn() + 'static,
    {
        #[cfg(feature = "hydrate")]
        {
            let handle = leptos::prelude::window_event_listener(leptos::ev::click, move |_| on_click());
            Self { handle: Some(handle) }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = on_click;
            Self {}
        }
    }

    /// Remove the listener. Safe to call more than once.
    pub fn release(&mut self) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(handle) = self.handle.take() {
                handle.remove();
            }
        }
    }
}

impl Drop for ClickAwaySubscription {
    fn drop(&mut self) {
        self.release();
    }
}
