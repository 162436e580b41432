//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! The three console destinations render inside the shell's `<Outlet/>`.
//! Their features live outside this crate; the pages here only anchor the
//! routes. `restricted` is rendered by the shell itself when no session
//! exists.

pub mod announcements;
pub mod discord_users;
pub mod promotion_schedule;
pub mod restricted;
