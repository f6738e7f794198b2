//! Server configuration parsed from environment variables.

use std::path::PathBuf;

use crate::grid::GridSpec;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_BASE_URL: &str = "https://ejemplo.com/concesiones/";
pub const DEFAULT_GRID_ROWS: u32 = 8;
pub const DEFAULT_GRID_COLUMNS: u32 = 7;
/// Upper bound on rows × columns; every matrix request allocates this many cells.
pub const MAX_GRID_CELLS: u32 = 10_000;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
    #[error("CONCESSION_BASE_URL must not be empty")]
    EmptyBaseUrl,
    #[error("CONCESSION_BASE_URL must not contain whitespace, quotes, '<', '>' or '&': {0:?}")]
    UnsafeBaseUrl(String),
    #[error("grid {rows} x {columns} exceeds {MAX_GRID_CELLS} cells")]
    GridTooLarge { rows: u32, columns: u32 },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub port: u16,
    pub base_url: String,
    pub concessions_file: Option<PathBuf>,
    pub matrix: GridSpec,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            base_url: DEFAULT_BASE_URL.to_string(),
            concessions_file: None,
            matrix: GridSpec::new(DEFAULT_GRID_ROWS, DEFAULT_GRID_COLUMNS),
        }
    }
}

impl AppConfig {
    /// Build typed config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `CONCESSION_BASE_URL`: prefix for concession links
    /// - `CONCESSIONS_FILE`: YAML catalog replacing the built-in list
    /// - `GRID_ROWS` / `GRID_COLUMNS`: matrix layout, default 8 × 7, at most
    ///   [`MAX_GRID_CELLS`] cells
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a numeric variable does not parse, the grid
    /// is too large, or the base URL is empty or not safe to embed in an
    /// HTML attribute.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`AppConfig::from_env`], reading values through `lookup`.
    ///
    /// # Errors
    ///
    /// See [`AppConfig::from_env`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = parse_var(&lookup, "PORT", DEFAULT_PORT)?;
        let rows = parse_var(&lookup, "GRID_ROWS", DEFAULT_GRID_ROWS)?;
        let columns = parse_var(&lookup, "GRID_COLUMNS", DEFAULT_GRID_COLUMNS)?;
        if rows.checked_mul(columns).is_none_or(|cells| cells > MAX_GRID_CELLS) {
            return Err(ConfigError::GridTooLarge { rows, columns });
        }

        let base_url = lookup("CONCESSION_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        if base_url.trim().is_empty() {
            return Err(ConfigError::EmptyBaseUrl);
        }
        // Targets are written into href attributes without HTML escaping.
        if base_url.chars().any(|c| c.is_whitespace() || matches!(c, '"' | '\'' | '<' | '>' | '&')) {
            return Err(ConfigError::UnsafeBaseUrl(base_url));
        }

        let concessions_file = lookup("CONCESSIONS_FILE")
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from);

        Ok(Self { port, base_url, concessions_file, matrix: GridSpec::new(rows, columns) })
    }
}

fn parse_var<T>(lookup: &impl Fn(&str) -> Option<String>, key: &'static str, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|_| ConfigError::Invalid { var: key, value: raw }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
