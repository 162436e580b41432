//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the console chrome while reading/writing shared state
//! from Leptos context providers installed by `Shell`.

pub mod shell;
pub mod sidebar;
pub mod user_menu;
