//! Concession catalog — the ordered list of names shown on the menu.
//!
//! The reference list is compiled in. A deployment can replace it with a YAML
//! file, either a bare sequence of names or a `concessions:` mapping.

use std::path::Path;

use serde::Deserialize;

const REFERENCE_NAMES: [&str; 46] = [
    "ACCENORTE",
    "ALT. VIALES",
    "ALMA",
    "AUT. EL CAFE",
    "APP GICA",
    "AUT. DEL CARIBE",
    "AUT. RIO GRANDE",
    "AUT. RIO MAGDA",
    "ALCA. ENVIGADO",
    "AUT. NORDESTE",
    "AUTOVIA BTS",
    "AUT. NEIVA-GIRAR",
    "PANAMERICANA",
    "COVIANDINA",
    "COVIORIENTE",
    "COVIPACIFICO",
    "DEVIMAR",
    "DEVIMED",
    "DEVISAB",
    "FINDETER",
    "LA PINTADA",
    "PACIFICO TRES",
    "PEAJES NACIONALES",
    "PERI. DEL ORIENTE",
    "CONCESIÓN PISA",
    "RUTA AL MAR",
    "RUTA AL SUR",
    "RUTA COSTERA C-B",
    "RUTA DEL CACAO",
    "R. MAGDALENA S.M",
    "RUTA DEL VALLE",
    "SABA. DE OCCIDENTE",
    "RUTA PORTUARIA",
    "TUNEL ABURRA OR.",
    "U.V CAMINO DEL P.",
    "VIA 40 EXPRESS",
    "VIAL DE LOS LLANOS",
    "TRANSV. SISGA",
    "MONTES DE MARIA",
    "RIO PAMPLONITA",
    "UNION DEL SUR",
    "VIAS DEL NUS",
    "YUMA",
    "ICCU",
    "AUT. URABÁ",
    "AUT. MAGDA MEDIO",
];

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read catalog: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid catalog yaml: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("blank concession name at position {position}")]
    BlankName { position: usize },
}

/// Display name of one concession. Trimmed and never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConcessionName(String);

impl ConcessionName {
    /// Returns `None` for empty or all-whitespace input.
    #[must_use]
    pub fn new(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(Self(trimmed.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// The 46 concessions of the reference menu, in display order.
#[must_use]
pub fn reference_names() -> Vec<ConcessionName> {
    REFERENCE_NAMES
        .iter()
        .map(|name| ConcessionName(String::from(*name)))
        .collect()
}

#[derive(Deserialize)]
#[serde(untagged)]
enum CatalogFile {
    Names(Vec<String>),
    Wrapped { concessions: Vec<String> },
}

/// Parse a YAML catalog. Order is kept; duplicates are allowed.
///
/// # Errors
///
/// Returns [`CatalogError::Yaml`] for malformed documents and
/// [`CatalogError::BlankName`] when an entry is empty.
pub fn from_yaml_str(raw: &str) -> Result<Vec<ConcessionName>, CatalogError> {
    let entries = match serde_yaml::from_str::<CatalogFile>(raw)? {
        CatalogFile::Names(names) | CatalogFile::Wrapped { concessions: names } => names,
    };
    entries
        .iter()
        .enumerate()
        .map(|(i, raw)| ConcessionName::new(raw).ok_or(CatalogError::BlankName { position: i + 1 }))
        .collect()
}

/// Read and parse a YAML catalog file.
///
/// # Errors
///
/// Returns [`CatalogError::Io`] when the file cannot be read, otherwise the
/// errors of [`from_yaml_str`].
pub fn load(path: &Path) -> Result<Vec<ConcessionName>, CatalogError> {
    let raw = std::fs::read_to_string(path)?;
    let names = from_yaml_str(&raw)?;
    tracing::info!(path = %path.display(), count = names.len(), "loaded concession catalog");
    Ok(names)
}

#[cfg(test)]
#[path = "catalog_test.rs"]
mod tests;
