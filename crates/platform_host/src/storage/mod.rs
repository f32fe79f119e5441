//! Storage contracts for shell preferences and desktop-item layout.

pub mod desktop_items;
pub mod prefs;
