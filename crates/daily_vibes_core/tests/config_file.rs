use daily_vibes_core::{ConfigError, VibesConfig};
use std::io::Write;

#[test]
fn explicit_config_file_overrides_selected_fields() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
[storage]
slot_key = "family-vibes"

[users]
catalog = ["Ann", "Bo"]

[logging]
level = "warn"
"#
    )
    .unwrap();

    let config = VibesConfig::load(Some(file.path())).unwrap();
    assert_eq!(config.storage.slot_key, "family-vibes");
    assert_eq!(config.logging.level, "warn");

    let users = config.users.catalog().unwrap().unwrap();
    assert_eq!(users.first(), "Ann");
    assert_eq!(users.names().len(), 2);
}

#[test]
fn disabled_users_yield_no_catalog() {
    let config = VibesConfig::from_toml("[users]\nenabled = false\n").unwrap();
    assert_eq!(config.users.catalog().unwrap(), None);
}

#[test]
fn duplicate_user_names_are_rejected() {
    let config = VibesConfig::from_toml("[users]\ncatalog = [\"Zaw\", \"Zaw\"]\n").unwrap();
    assert!(matches!(
        config.users.catalog(),
        Err(ConfigError::Catalog(_))
    ));
}

#[test]
fn missing_explicit_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = VibesConfig::load(Some(&dir.path().join("absent.toml"))).unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
}

#[test]
fn invalid_toml_reports_path() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[storage\nslot_key = 3").unwrap();

    let err = VibesConfig::load(Some(file.path())).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
    assert!(err.to_string().contains(&file.path().display().to_string()));
}
