use budget_tracker::config::{Config, ConfigManager};

mod common;

#[test]
fn missing_file_yields_defaults() {
    let base = common::setup_home();
    let manager = ConfigManager::with_base_dir(base).unwrap();
    let config = manager.load().unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn save_then_load_round_trips() {
    let base = common::setup_home();
    let manager = ConfigManager::with_base_dir(base).unwrap();

    let config = Config {
        decimal_separator: ',',
        grouping_separator: '.',
        precision: 0,
    };
    manager.save(&config).unwrap();

    let reloaded = manager.load().unwrap();
    assert_eq!(reloaded, config);
    assert!(manager.path().exists());
}

#[test]
fn save_replaces_the_previous_contents() {
    let base = common::setup_home();
    let manager = ConfigManager::with_base_dir(base).unwrap();

    manager.save(&Config::default()).unwrap();
    let updated = Config {
        precision: 4,
        ..Config::default()
    };
    manager.save(&updated).unwrap();

    assert_eq!(manager.load().unwrap().precision, 4);
}
