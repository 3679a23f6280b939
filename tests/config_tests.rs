use flowcast_core::{
    config::{ConfigManager, SolverConfig},
    currency::CurrencyCode,
    errors::ConfigError,
    ledger::CategoryKey,
};
use tempfile::TempDir;

#[test]
fn missing_file_loads_defaults() {
    let dir = TempDir::new().expect("temp dir");
    let manager = ConfigManager::with_path(dir.path().join("absent.json"));
    let config = manager.load().expect("load defaults");
    assert_eq!(config, SolverConfig::default());
}

#[test]
fn save_then_load_restores_settings() {
    let dir = TempDir::new().expect("temp dir");
    let manager = ConfigManager::with_path(dir.path().join("nested").join("config.json"));
    let config = SolverConfig {
        base_currency: CurrencyCode::new("eur"),
        excluded_categories: vec![CategoryKey::Account(4411), CategoryKey::Name("Gifts".into())],
        ignore_imported: true,
        log_filter: Some("flowcast_core=debug".into()),
    };

    manager.save(&config).expect("save config");
    assert!(manager.path().exists());
    assert!(!manager.path().with_extension("json.tmp").exists());

    let loaded = manager.load().expect("load config");
    assert_eq!(loaded, config);
    assert_eq!(loaded.base_currency.as_str(), "EUR");
}

#[test]
fn partial_file_fills_defaults() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{"base_currency":"USD"}"#).expect("write config");

    let loaded = ConfigManager::with_path(&path).load().expect("load config");
    assert_eq!(loaded.base_currency.as_str(), "USD");
    assert!(loaded.excluded_categories.is_empty());
    assert!(!loaded.ignore_imported);
    assert!(loaded.log_filter.is_none());
}

#[test]
fn malformed_json_is_a_serde_error() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("config.json");
    std::fs::write(&path, "{ not json").expect("write config");

    let err = ConfigManager::with_path(&path).load().unwrap_err();
    assert!(matches!(err, ConfigError::Serde(_)));
}

#[test]
fn invalid_currency_is_rejected_on_save() {
    let dir = TempDir::new().expect("temp dir");
    let manager = ConfigManager::with_path(dir.path().join("config.json"));
    let config = SolverConfig {
        base_currency: CurrencyCode::new("E1"),
        ..SolverConfig::default()
    };
    let err = manager.save(&config).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));
    assert!(!manager.path().exists());
}

#[test]
fn lowercase_base_currency_is_normalised_on_load() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{"base_currency":"usd"}"#).expect("write config");

    let loaded = ConfigManager::with_path(&path).load().expect("load config");
    assert_eq!(loaded.base_currency, CurrencyCode::new("USD"));

    let table = loaded.rate_table([("eur", 0.92)]);
    assert_eq!(table.rate("USD"), Some(1.0));
    assert_eq!(table.currency("EUR").map(|c| c.rate), Some(0.92));
}
