//! `localStorage`-backed storage adapters.

pub mod desktop_items;
pub mod local_prefs;
