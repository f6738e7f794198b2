use std::collections::HashMap;

use super::*;

fn config_from(pairs: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
    let vars: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect();
    AppConfig::from_lookup(|key| vars.get(key).cloned())
}

#[test]
fn from_lookup_defaults() {
    let cfg = config_from(&[]).unwrap();
    assert_eq!(cfg, AppConfig::default());
    assert_eq!(cfg.port, 3000);
    assert_eq!(cfg.base_url, DEFAULT_BASE_URL);
    assert_eq!(cfg.matrix, GridSpec::new(8, 7));
    assert!(cfg.concessions_file.is_none());
}

#[test]
fn from_lookup_parses_overrides() {
    let cfg = config_from(&[
        ("PORT", "8080"),
        ("CONCESSION_BASE_URL", "https://gopass.test/c/"),
        ("CONCESSIONS_FILE", "/etc/menu/concessions.yaml"),
        ("GRID_ROWS", "4"),
        ("GRID_COLUMNS", " 12 "),
    ])
    .unwrap();
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.base_url, "https://gopass.test/c/");
    assert_eq!(cfg.concessions_file, Some(PathBuf::from("/etc/menu/concessions.yaml")));
    assert_eq!(cfg.matrix, GridSpec::new(4, 12));
}

#[test]
fn from_lookup_invalid_port_errors() {
    let err = config_from(&[("PORT", "eighty")]).unwrap_err();
    assert_eq!(err, ConfigError::Invalid { var: "PORT", value: "eighty".into() });
}

#[test]
fn from_lookup_negative_rows_errors() {
    let err = config_from(&[("GRID_ROWS", "-1")]).unwrap_err();
    assert!(err.to_string().contains("GRID_ROWS"));
}

#[test]
fn from_lookup_empty_base_url_errors() {
    let err = config_from(&[("CONCESSION_BASE_URL", "  ")]).unwrap_err();
    assert_eq!(err, ConfigError::EmptyBaseUrl);
}

#[test]
fn from_lookup_ignores_blank_catalog_path() {
    let cfg = config_from(&[("CONCESSIONS_FILE", "")]).unwrap();
    assert!(cfg.concessions_file.is_none());
}

#[test]
fn from_lookup_rejects_grid_that_overflows() {
    let err = config_from(&[("GRID_ROWS", "4294967295"), ("GRID_COLUMNS", "4294967295")]).unwrap_err();
    assert_eq!(err, ConfigError::GridTooLarge { rows: u32::MAX, columns: u32::MAX });
}

#[test]
fn from_lookup_rejects_grid_above_cell_limit() {
    let err = config_from(&[("GRID_ROWS", "100000"), ("GRID_COLUMNS", "100000")]).unwrap_err();
    assert!(matches!(err, ConfigError::GridTooLarge { .. }));
    assert!(err.to_string().contains("10000"));
}

#[test]
fn from_lookup_accepts_grid_at_cell_limit() {
    let cfg = config_from(&[("GRID_ROWS", "100"), ("GRID_COLUMNS", "100")]).unwrap();
    assert_eq!(cfg.matrix.capacity(), i64::from(MAX_GRID_CELLS));
}

#[test]
fn from_lookup_rejects_base_url_with_markup_characters() {
    for raw in ["https://x.test/\"onclick=\"", "https://x.test/<b>", "https://x.test/?a=1&b=", "https://x.test/ a"] {
        let err = config_from(&[("CONCESSION_BASE_URL", raw)]).unwrap_err();
        assert_eq!(err, ConfigError::UnsafeBaseUrl(raw.to_string()));
    }
}
