//! Grid population — turns an ordered list of concessions into indexed cells.
//!
//! DESIGN
//! ======
//! `populate` is a pure function: one Active cell per name (in input order),
//! then Placeholder cells padding up to the requested capacity. Capacity is a
//! floor for padding, never a cap, so a list longer than the grid still gets a
//! cell for every name.
//!
//! Each Active cell carries its fully-formed target URL, built once here, so
//! the page needs no name-keyed dispatch when a cell is clicked.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use serde::Serialize;

use crate::catalog::ConcessionName;

/// Label shown on reserved cells.
pub const PLACEHOLDER_LABEL: &str = "PRÓXIMAMENTE";

/// Bytes left unescaped by a browser's `encodeURIComponent`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum GridError {
    #[error("invalid argument: capacity must be non-negative, got {0}")]
    InvalidArgument(i64),
}

/// Declared rows × columns of a fixed matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GridSpec {
    pub rows: u32,
    pub columns: u32,
}

impl GridSpec {
    #[must_use]
    pub fn new(rows: u32, columns: u32) -> Self {
        Self { rows, columns }
    }

    #[must_use]
    pub fn capacity(self) -> i64 {
        i64::from(self.rows).saturating_mul(i64::from(self.columns))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CellKind {
    Active,
    Placeholder,
}

/// One indexed unit of the rendered grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Cell {
    /// 1-based, dense.
    pub index: usize,
    pub label: String,
    pub kind: CellKind,
    pub target: Option<String>,
}

impl Cell {
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.kind == CellKind::Active
    }
}

// =============================================================================
// POPULATION
// =============================================================================

/// Build the target URL for a concession: `base_url` followed by the name
/// escaped as a URI component.
#[must_use]
pub fn concession_url(base_url: &str, name: &str) -> String {
    format!("{base_url}{}", utf8_percent_encode(name, URI_COMPONENT))
}

/// Emit one Active cell per name, then Placeholder cells up to `capacity`.
///
/// # Errors
///
/// Returns [`GridError::InvalidArgument`] when `capacity` is negative.
pub fn populate(names: &[ConcessionName], capacity: i64, base_url: &str) -> Result<Vec<Cell>, GridError> {
    let capacity = usize::try_from(capacity).map_err(|_| GridError::InvalidArgument(capacity))?;
    let padding = capacity.saturating_sub(names.len());

    let active = names.iter().enumerate().map(|(i, name)| Cell {
        index: i + 1,
        label: name.as_str().to_string(),
        kind: CellKind::Active,
        target: Some(concession_url(base_url, name.as_str())),
    });
    let reserved = (1..=padding).map(|j| Cell {
        index: names.len() + j,
        label: PLACEHOLDER_LABEL.to_string(),
        kind: CellKind::Placeholder,
        target: None,
    });

    Ok(active.chain(reserved).collect())
}

#[cfg(test)]
#[path = "grid_test.rs"]
mod tests;
