use admin_dashboard::domain::Product;
use admin_dashboard::{initialize, AppState, Config, DashboardError, ThemeMode};
use std::collections::BTreeMap;
use std::io::Write;

#[test]
fn defaults_match_dashboard_layout() {
    let config = Config::default();
    assert_eq!(config.theme, ThemeMode::Light);
    assert_eq!(config.viewport_width, 1440);
    assert_eq!(config.order_page_size, 10);
    assert_eq!(config.product_page_size, 5);
    assert!(config.log_level.is_none());
    assert!(config.log_file.is_none());
}

#[test]
fn map_values_parse_with_fallbacks() {
    let map: BTreeMap<String, String> = [
        ("theme", "dark"),
        ("viewport_width", " 1100 "),
        ("order_page_size", "0"),
        ("product_page_size", "8"),
        ("log_level", "  "),
        ("log_file", "/tmp/dashboard.log"),
        ("unrelated", "ignored"),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect();

    let config = Config::from_map(&map);
    assert_eq!(config.theme, ThemeMode::Dark);
    assert_eq!(config.viewport_width, 1100);
    assert_eq!(config.order_page_size, 10);
    assert_eq!(config.product_page_size, 8);
    assert_eq!(config.log_level, None);
    assert_eq!(config.log_file.as_deref(), Some(std::path::Path::new("/tmp/dashboard.log")));
}

#[test]
fn toml_file_loads_partial_settings() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "theme = \"dark\"\norder_page_size = 25\nlog_level = \"admin_dashboard=debug\"").unwrap();

    let config = Config::from_file(file.path()).unwrap();
    assert_eq!(config.theme, ThemeMode::Dark);
    assert_eq!(config.order_page_size, 25);
    assert_eq!(config.product_page_size, 5);
    assert_eq!(config.log_level.as_deref(), Some("admin_dashboard=debug"));
}

#[test]
fn invalid_toml_is_a_config_error() {
    for contents in [
        "order_page_size = \"ten\"",
        "order_page_size = 0",
        "colour = \"blue\"",
        "log_level = \"admin_dashboard=loud\"",
        "theme = ",
    ] {
        let err = Config::from_toml_str(contents).unwrap_err();
        assert!(matches!(err, DashboardError::Config(_)), "{contents}: {err}");
    }
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = Config::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, DashboardError::Io(_)));
}

#[test]
fn initialize_creates_log_directory_and_state() {
    let dir = tempfile::tempdir().unwrap();
    let log_file = dir.path().join("logs").join("dashboard.log");
    let config = Config {
        viewport_width: 1100,
        order_page_size: 20,
        log_file: Some(log_file.clone()),
        ..Config::default()
    };

    let state = initialize(&config).unwrap();
    assert!(log_file.exists());
    assert!(state.sidebar_open);
    assert!(!state.activity_sidebar_open);
    assert_eq!(state.preferences.items_per_page, 20);
}

#[test]
fn page_sizes_flow_into_tables() {
    let config = Config {
        order_page_size: 4,
        product_page_size: 3,
        ..Config::default()
    };
    let products: Vec<Product> = (1..=7)
        .map(|i| Product::new(i.to_string(), format!("Product {i}"), 10.0, i))
        .collect();

    let state = AppState::from_config(&config).with_products(products);
    let table = state.product_table();

    assert_eq!(state.product_page_size, 3);
    assert_eq!(table.page_size(), 3);
    assert_eq!(table.total_pages(), 3);
    assert_eq!(state.order_table().page_size(), 4);
}
