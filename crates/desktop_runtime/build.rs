use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
struct AppEntry {
    id: String,
    name: String,
    url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct DesktopItemSeed {
    id: String,
    label: String,
    #[serde(default)]
    app: Option<String>,
    x: i32,
    y: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct CatalogDocument {
    schema_version: u32,
    #[serde(default)]
    dock: Vec<String>,
    apps: Vec<AppEntry>,
    #[serde(default)]
    desktop: Vec<DesktopItemSeed>,
}

fn validate(doc: &CatalogDocument) -> Result<(), String> {
    if doc.schema_version != 1 {
        return Err(format!(
            "catalog schema mismatch: expected 1 found {}",
            doc.schema_version
        ));
    }

    let mut app_ids = HashSet::new();
    for app in &doc.apps {
        if app.name.trim().is_empty() {
            return Err(format!("app `{}` has an empty name", app.id));
        }
        if !(app.url.starts_with("https://") || app.url.starts_with("http://")) {
            return Err(format!("app `{}` url must be http(s): {}", app.id, app.url));
        }
        if !app_ids.insert(app.id.as_str()) {
            return Err(format!("duplicate app id `{}`", app.id));
        }
    }

    for pinned in &doc.dock {
        if !app_ids.contains(pinned.as_str()) {
            return Err(format!("dock pins unknown app `{pinned}`"));
        }
    }

    let mut item_ids = HashSet::new();
    for item in &doc.desktop {
        if !item_ids.insert(item.id.as_str()) {
            return Err(format!("duplicate desktop item id `{}`", item.id));
        }
        if let Some(app) = &item.app {
            if !app_ids.contains(app.as_str()) {
                return Err(format!(
                    "desktop item `{}` points at unknown app `{app}`",
                    item.id
                ));
            }
        }
    }
    Ok(())
}

fn main() {
    let crate_root = PathBuf::from(std::env::var("CARGO_MANIFEST_DIR").expect("manifest dir"));
    let path = crate_root.join("app_catalog.toml");
    println!("cargo:rerun-if-changed={}", path.display());

    let raw = fs::read_to_string(&path)
        .unwrap_or_else(|err| panic!("failed to read {}: {err}", path.display()));
    let doc: CatalogDocument = toml::from_str(&raw)
        .unwrap_or_else(|err| panic!("failed to parse {}: {err}", path.display()));
    if let Err(err) = validate(&doc) {
        panic!("invalid app catalog {}: {err}", path.display());
    }

    let json = serde_json::to_string_pretty(&doc).expect("serialize app catalog");
    let generated = format!(
        "/// Build-time generated app catalog JSON.\n\
pub const APP_CATALOG_JSON: &str = r##\"{}\"##;\n",
        json
    );

    let out_dir = PathBuf::from(std::env::var("OUT_DIR").expect("OUT_DIR"));
    let out_file = out_dir.join("app_catalog_generated.rs");
    fs::write(&out_file, generated)
        .unwrap_or_else(|err| panic!("failed to write {}: {err}", out_file.display()));
}
