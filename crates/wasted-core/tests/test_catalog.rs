mod common;

use std::io::Write;
use std::path::PathBuf;

use tempfile::{NamedTempFile, TempDir};
use wasted_core::catalog::Catalog;
use wasted_core::config::StoreConfig;
use wasted_core::error::WastedError;

use common::{cyan_gold_tee, plain_tee, CYAN};

// ---------------------------------------------------------------------------
// Built-in catalog
// ---------------------------------------------------------------------------

#[test]
fn test_builtin_catalog_contents() {
    let catalog = Catalog::builtin();
    assert_eq!(catalog.len(), 6);
    let ids: Vec<u32> = catalog.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);

    let fire = catalog.get(3).unwrap();
    assert_eq!(fire.colors.first().unwrap().color, "cyan");
    assert_eq!(fire.initial_image(), "/Tees/FireTees/cyanwastedfire.png");
    assert!(!catalog.get(1).unwrap().has_variants());
}

#[test]
fn test_unknown_product() {
    let err = Catalog::builtin().get(42).unwrap_err();
    assert!(matches!(err, WastedError::UnknownProduct(42)));
}

#[test]
fn test_duplicate_ids_rejected() {
    let err = Catalog::new(vec![plain_tee(), plain_tee()]).unwrap_err();
    assert!(matches!(err, WastedError::DuplicateProductId(2)));
}

// ---------------------------------------------------------------------------
// Product queries
// ---------------------------------------------------------------------------

#[test]
fn test_image_refs_deduplicates_base_image() {
    let catalog = Catalog::builtin();
    let fire = catalog.get(3).unwrap();
    // The orange variant reuses the base image.
    let refs = fire.image_refs();
    assert_eq!(refs.len(), 8);
    assert_eq!(refs[0], fire.image);

    let plain = plain_tee();
    assert_eq!(plain.image_refs(), vec![plain.image.as_str()]);
}

#[test]
fn test_initial_image() {
    assert_eq!(cyan_gold_tee().initial_image(), CYAN);
    let plain = plain_tee();
    assert_eq!(plain.initial_image(), plain.image);
}

// ---------------------------------------------------------------------------
// TOML
// ---------------------------------------------------------------------------

#[test]
fn test_catalog_toml_round_trip_preserves_builtin() {
    let catalog = Catalog::builtin();
    let text = catalog.to_toml_string().unwrap();
    assert_eq!(Catalog::from_toml_str(&text).unwrap(), catalog);
}

#[test]
fn test_catalog_without_colors_field() {
    let text = r#"
[[products]]
id = 7
name = "Blank"
image = "/Tees/blank.png"
price = "$9.99"
sizes = "M"
description = "Nothing on it."
verdict = "Still wasted."
"#;
    let catalog = Catalog::from_toml_str(text).unwrap();
    assert!(catalog.get(7).unwrap().colors.is_empty());
}

#[test]
fn test_catalog_load_missing_field_is_parse_error() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "[[products]]\nid = 1\nname = \"x\"").unwrap();
    let err = Catalog::load(file.path()).unwrap_err();
    assert!(matches!(err, WastedError::CatalogParse(_)));
}

// ---------------------------------------------------------------------------
// StoreConfig
// ---------------------------------------------------------------------------

#[test]
fn test_config_defaults() {
    let config = StoreConfig::from_toml_str("").unwrap();
    assert_eq!(config, StoreConfig::default());
    assert_eq!(config.asset_root, PathBuf::from("public"));
    assert_eq!(config.catalog().unwrap(), Catalog::builtin());
    assert_eq!(config.site().unwrap().as_str(), "http://localhost:3000/");
}

#[test]
fn test_config_load_resolves_relative_paths() {
    let dir = TempDir::new().unwrap();
    let catalog_path = dir.path().join("catalog.toml");
    let small = Catalog::new(vec![plain_tee()]).unwrap();
    std::fs::write(&catalog_path, small.to_toml_string().unwrap()).unwrap();

    let config_path = dir.path().join("store.toml");
    std::fs::write(
        &config_path,
        "asset_root = \"assets\"\ncatalog = \"catalog.toml\"\nsite_url = \"https://wasted.example/\"\n",
    )
    .unwrap();

    let config = StoreConfig::load(&config_path).unwrap();
    assert_eq!(config.asset_root, dir.path().join("assets"));
    assert_eq!(config.catalog().unwrap(), small);
}

#[test]
fn test_config_bad_site_url() {
    let config = StoreConfig {
        site_url: "not a url".into(),
        ..StoreConfig::default()
    };
    assert!(matches!(config.site().unwrap_err(), WastedError::InvalidLink(_)));
}
