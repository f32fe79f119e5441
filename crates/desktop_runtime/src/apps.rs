//! Read-only app catalog and session seed generated from `app_catalog.toml` at build time.

use serde::{Deserialize, Serialize};

use crate::{
    desktop_items::{DesktopItem, DesktopItemKind, DesktopItemLayout},
    model::{AppId, DesktopItemId, DesktopState, ItemPosition},
};

include!(concat!(env!("OUT_DIR"), "/app_catalog_generated.rs"));

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppEntry {
    pub id: AppId,
    pub name: String,
    pub url: String,
}

impl AppEntry {
    pub fn new(id: &str, name: &str, url: &str) -> Self {
        Self {
            id: AppId::new(id),
            name: name.to_string(),
            url: url.to_string(),
        }
    }
}

/// Ordered application list. Order matters: lookups return the first match.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppCatalog {
    apps: Vec<AppEntry>,
}

impl AppCatalog {
    pub fn new(apps: Vec<AppEntry>) -> Self {
        Self { apps }
    }

    pub fn get(&self, app_id: &AppId) -> Option<&AppEntry> {
        self.apps.iter().find(|app| &app.id == app_id)
    }

    /// Returns the first app whose name occurs, case-insensitively, inside `lowered_text`.
    ///
    /// `lowered_text` must already be lower-cased.
    pub fn first_named_in(&self, lowered_text: &str) -> Option<&AppEntry> {
        self.apps
            .iter()
            .find(|app| lowered_text.contains(&app.name.to_lowercase()))
    }

    /// Command-center search: apps whose name contains `query`, ignoring case. An empty query
    /// lists every app.
    pub fn search(&self, query: &str) -> Vec<&AppEntry> {
        let needle = query.trim().to_lowercase();
        self.apps
            .iter()
            .filter(|app| needle.is_empty() || app.name.to_lowercase().contains(&needle))
            .collect()
    }
}

#[derive(Debug, Deserialize)]
struct DesktopItemSeed {
    id: DesktopItemId,
    label: String,
    #[serde(default)]
    app: Option<AppId>,
    x: i32,
    y: i32,
}

#[derive(Debug, Deserialize)]
struct CatalogDocument {
    apps: Vec<AppEntry>,
    #[serde(default)]
    dock: Vec<AppId>,
    #[serde(default)]
    desktop: Vec<DesktopItemSeed>,
}

/// Parses a catalog document into the initial desktop state.
///
/// # Errors
///
/// Returns an error when `json` does not match the catalog document shape.
pub fn desktop_state_from_catalog_json(json: &str) -> Result<DesktopState, serde_json::Error> {
    let doc: CatalogDocument = serde_json::from_str(json)?;
    let items = doc
        .desktop
        .into_iter()
        .map(|seed| DesktopItem {
            id: seed.id,
            label: seed.label,
            kind: match seed.app {
                Some(app_id) => DesktopItemKind::AppShortcut(app_id),
                None => DesktopItemKind::Folder,
            },
            position: ItemPosition {
                x: seed.x,
                y: seed.y,
            },
        })
        .collect();
    Ok(DesktopState::with_catalog(
        AppCatalog::new(doc.apps),
        DesktopItemLayout::new(items),
        doc.dock,
    ))
}

/// Builds the initial desktop state from the compiled-in catalog.
///
/// # Errors
///
/// Returns an error when the generated catalog JSON cannot be parsed.
pub fn builtin_desktop_state() -> Result<DesktopState, serde_json::Error> {
    desktop_state_from_catalog_json(APP_CATALOG_JSON)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn catalog() -> AppCatalog {
        AppCatalog::new(vec![
            AppEntry::new("notes-app", "Notes", "https://notes.example"),
            AppEntry::new("mail-app", "Mail", "https://mail.example"),
        ])
    }

    #[test]
    fn builtin_catalog_parses_and_seeds_the_desktop() {
        let state = builtin_desktop_state().expect("generated catalog parses");
        assert!(!state.catalog.search("").is_empty());
        for pinned in state.dock.pinned() {
            assert!(state.catalog.get(pinned).is_some(), "unknown pin {pinned}");
        }
        assert!(!state.desktop_items.items().is_empty());
    }

    #[test]
    fn first_named_in_respects_catalog_order() {
        let catalog = catalog();
        let hit = catalog.first_named_in("open mail and notes").expect("match");
        assert_eq!(hit.id, AppId::new("notes-app"));
    }

    #[test]
    fn search_is_case_insensitive_and_empty_lists_all() {
        let catalog = catalog();
        let names: Vec<_> = catalog.search("MA").iter().map(|a| a.name.clone()).collect();
        assert_eq!(names, vec!["Mail".to_string()]);
        assert_eq!(catalog.search("  ").len(), 2);
    }

    #[test]
    fn seed_without_app_becomes_folder() {
        let state = desktop_state_from_catalog_json(
            r#"{"apps":[],"desktop":[{"id":"docs","label":"Docs","x":5,"y":6}]}"#,
        )
        .expect("parse");
        let item = state
            .desktop_items
            .item(&DesktopItemId::new("docs"))
            .expect("item");
        assert_eq!(item.kind, DesktopItemKind::Folder);
        assert_eq!(item.position, ItemPosition { x: 5, y: 6 });
    }
}
