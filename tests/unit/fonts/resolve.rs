use super::*;
use crate::fonts::catalog::FontCatalog;
use std::{collections::BTreeMap, fs, sync::Arc};

fn fake_face(dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, b"\x00\x01\x00\x00").unwrap();
    path
}

fn resolver_with(dir: &Path, config: FontConfig) -> FontResolver {
    let mut resolver = FontResolver::with_catalog(Arc::new(FontCatalog::from_families(&[])));
    resolver.config = Some(LoadedConfig {
        config,
        base_dir: dir.to_path_buf(),
    });
    resolver
}

fn entry(regular: Option<&str>, fallbacks: &[&str]) -> FontConfigEntry {
    FontConfigEntry {
        regular: regular.map(PathBuf::from),
        bold: None,
        light: None,
        fallbacks: fallbacks.iter().map(|f| f.to_string()).collect(),
    }
}

#[test]
fn config_entry_resolves_relative_to_config_dir() {
    let dir = tempfile::tempdir().unwrap();
    let face = fake_face(dir.path(), "myfont.ttf");

    let mut fonts = BTreeMap::new();
    fonts.insert("MyFont".to_string(), entry(Some("myfont.ttf"), &[]));
    let resolver = resolver_with(dir.path(), FontConfig {
        search_paths: Vec::new(),
        fonts,
    });

    assert_eq!(resolver.resolve_path("MyFont", WeightClass::Regular), face);
}

#[test]
fn config_lookup_is_case_insensitive_and_strips_labels() {
    let dir = tempfile::tempdir().unwrap();
    let face = fake_face(dir.path(), "myfont.ttf");

    let mut fonts = BTreeMap::new();
    fonts.insert("MyFont".to_string(), entry(Some("myfont.ttf"), &[]));
    let resolver = resolver_with(dir.path(), FontConfig {
        search_paths: Vec::new(),
        fonts,
    });

    assert_eq!(resolver.resolve_path("myfont", WeightClass::Regular), face);
    assert_eq!(
        resolver.resolve_path("[CN] MyFont", WeightClass::Regular),
        face
    );
}

#[test]
fn missing_weight_falls_back_to_regular() {
    let dir = tempfile::tempdir().unwrap();
    let face = fake_face(dir.path(), "myfont.ttf");

    let mut fonts = BTreeMap::new();
    fonts.insert("MyFont".to_string(), entry(Some("myfont.ttf"), &[]));
    let resolver = resolver_with(dir.path(), FontConfig {
        search_paths: Vec::new(),
        fonts,
    });

    assert_eq!(resolver.resolve_path("MyFont", WeightClass::Bold), face);
    assert_eq!(resolver.resolve_path("MyFont", WeightClass::Light), face);
}

#[test]
fn search_paths_are_probed_for_relative_faces() {
    let dir = tempfile::tempdir().unwrap();
    let face = fake_face(&dir.path().join("extra"), "deep.ttf");

    let mut fonts = BTreeMap::new();
    fonts.insert("Deep".to_string(), entry(Some("deep.ttf"), &[]));
    let resolver = resolver_with(dir.path(), FontConfig {
        search_paths: vec![PathBuf::from("extra")],
        fonts,
    });

    assert_eq!(resolver.resolve_path("Deep", WeightClass::Regular), face);
}

#[test]
fn config_fallback_chain_is_walked() {
    let dir = tempfile::tempdir().unwrap();
    let face = fake_face(dir.path(), "b.ttf");

    let mut fonts = BTreeMap::new();
    fonts.insert("A".to_string(), entry(None, &["B"]));
    fonts.insert("B".to_string(), entry(Some("b.ttf"), &[]));
    let resolver = resolver_with(dir.path(), FontConfig {
        search_paths: Vec::new(),
        fonts,
    });

    assert_eq!(resolver.resolve_path("A", WeightClass::Regular), face);
}

#[test]
fn cyclic_fallbacks_terminate() {
    let dir = tempfile::tempdir().unwrap();
    let mut fonts = BTreeMap::new();
    fonts.insert("A".to_string(), entry(None, &["B"]));
    fonts.insert("B".to_string(), entry(None, &["A"]));
    let resolver = resolver_with(dir.path(), FontConfig {
        search_paths: Vec::new(),
        fonts,
    });

    // No config tier hit; the generic chain answers instead of looping.
    let path = resolver.resolve_path("A", WeightClass::Regular);
    assert!(FALLBACK_CHAIN.iter().any(|c| Path::new(c) == path));
}

#[test]
fn unknown_family_always_yields_a_path() {
    let resolver = FontResolver::with_catalog(Arc::new(FontCatalog::from_families(&[])));
    let path = resolver.resolve_path("Zyxwv Nonexistent Font", WeightClass::Regular);
    assert!(FALLBACK_CHAIN.iter().any(|c| Path::new(c) == path));
}

#[test]
fn results_are_memoized_per_family_and_weight() {
    let dir = tempfile::tempdir().unwrap();
    let face = fake_face(dir.path(), "myfont.ttf");

    let mut fonts = BTreeMap::new();
    fonts.insert("MyFont".to_string(), entry(Some("myfont.ttf"), &[]));
    let resolver = resolver_with(dir.path(), FontConfig {
        search_paths: Vec::new(),
        fonts,
    });

    let first = resolver.resolve_path("MyFont", WeightClass::Regular);
    // The face disappearing after the first hit does not change the answer.
    fs::remove_file(&face).unwrap();
    let second = resolver.resolve_path("MyFont", WeightClass::Regular);
    assert_eq!(first, second);
}

#[test]
fn family_list_takes_the_first_resolvable_candidate() {
    let dir = tempfile::tempdir().unwrap();
    let face = fake_face(dir.path(), "second.ttf");

    let mut fonts = BTreeMap::new();
    fonts.insert("Second".to_string(), entry(Some("second.ttf"), &[]));
    let resolver = resolver_with(dir.path(), FontConfig {
        search_paths: Vec::new(),
        fonts,
    });

    let path = resolver.resolve_family_list("Unknown One, Second, Third", WeightClass::Regular);
    assert_eq!(path, face);
}

#[test]
fn memoized_misses_do_not_hijack_candidate_lists() {
    let dir = tempfile::tempdir().unwrap();
    let face = fake_face(dir.path(), "second.ttf");

    let mut fonts = BTreeMap::new();
    fonts.insert("Second".to_string(), entry(Some("second.ttf"), &[]));
    let resolver = resolver_with(dir.path(), FontConfig {
        search_paths: Vec::new(),
        fonts,
    });

    // Resolving the unknown family alone caches a miss and answers with the
    // generic chain; the list must still move past it to the real candidate.
    let alone = resolver.resolve_path("Unknown One", WeightClass::Regular);
    assert!(FALLBACK_CHAIN.iter().any(|c| Path::new(c) == alone));
    let path = resolver.resolve_family_list("Unknown One,Second", WeightClass::Regular);
    assert_eq!(path, face);
}

#[test]
fn config_file_parse_errors_are_reported() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("font_config.json");
    fs::write(&path, "{ not json").unwrap();
    let err = FontConfig::load(&path).unwrap_err();
    assert!(err.to_string().starts_with("font error:"));
}

#[test]
fn config_round_trips_through_json() {
    let mut fonts = BTreeMap::new();
    fonts.insert(
        "MyFont".to_string(),
        FontConfigEntry {
            regular: Some(PathBuf::from("myfont.ttf")),
            bold: Some(PathBuf::from("myfont-bold.ttf")),
            light: None,
            fallbacks: vec!["DejaVu Sans".to_string()],
        },
    );
    let config = FontConfig {
        search_paths: vec![PathBuf::from("extra")],
        fonts,
    };
    let json = serde_json::to_string_pretty(&config).unwrap();
    let back: FontConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(back.search_paths, config.search_paths);
    assert_eq!(back.fonts.len(), 1);
}
