use std::fs;
use std::path::PathBuf;

use kino_page::{load_config, open_store, parse_config, read_config, ConfigError, PageConfig};
use kino_prefs::KeyValueStore;
use pretty_assertions::assert_eq;
use tempfile::TempDir;

#[test]
fn missing_file_yields_defaults() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("page.ron");
    assert!(matches!(read_config(&path), Err(ConfigError::Io(_))));
    let config = load_config(&path);
    assert_eq!(config, PageConfig::default());
    assert_eq!(config.preference_key, "js-player");
    assert!(!config.default_use_custom_player);
    assert_eq!(config.storage_path, None);
}

#[test]
fn partial_config_keeps_other_defaults() {
    let config = parse_config("(default_use_custom_player: true)").unwrap();
    assert!(config.default_use_custom_player);
    assert_eq!(config.preference_key, "js-player");
}

#[test]
fn full_config_round_trips_through_a_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("page.ron");
    fs::write(
        &path,
        r#"(
            preference_key: "board-player",
            default_use_custom_player: false,
            storage_path: Some("prefs/local.json"),
        )"#,
    )
    .unwrap();

    let config = load_config(&path);
    assert_eq!(
        config,
        PageConfig {
            preference_key: "board-player".to_string(),
            default_use_custom_player: false,
            storage_path: Some(PathBuf::from("prefs/local.json")),
        }
    );
}

#[test]
fn invalid_config_is_reported_and_load_falls_back() {
    assert!(matches!(
        parse_config("(preference_key: 12)"),
        Err(ConfigError::Parse(_))
    ));

    let temp = TempDir::new().unwrap();
    let path = temp.path().join("page.ron");
    fs::write(&path, "not ron at all (").unwrap();
    assert_eq!(load_config(&path), PageConfig::default());
}

#[test]
fn configured_storage_path_is_durable() {
    let temp = TempDir::new().unwrap();
    let config = PageConfig {
        storage_path: Some(temp.path().join("local.json")),
        ..PageConfig::default()
    };

    let mut store = open_store(&config);
    store.set_item("js-player", "true").unwrap();

    let reopened = open_store(&config);
    assert_eq!(reopened.get_item("js-player").unwrap().as_deref(), Some("true"));
}

#[test]
fn no_storage_path_means_memory_only() {
    let config = PageConfig::default();
    let mut store = open_store(&config);
    store.set_item("js-player", "true").unwrap();
    assert_eq!(open_store(&config).get_item("js-player").unwrap(), None);
}
