//! Plain data models shared through Leptos context.
//!
//! DESIGN
//! ======
//! State types carry no signals themselves; components wrap them in
//! `RwSignal` and provide them via context so the logic stays unit-testable.

pub mod auth;
pub mod shell;
pub mod ui;
