use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::domain::BankId;

/// One selectable bank: identifier, display name, and a logo reference the
/// rendering layer resolves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BankEntry {
    pub id: BankId,
    pub name: String,
    pub logo: String,
}

/// Read-only list of banks a form client offers for selection.
///
/// The catalog is injected configuration: callers either take the built-in
/// list or supply their own JSON file. Nothing in the intake pipeline
/// depends on the catalog contents; submissions carry bare identifiers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BankCatalog {
    entries: Vec<BankEntry>,
}

impl BankCatalog {
    pub fn new(entries: Vec<BankEntry>) -> Self {
        Self { entries }
    }

    /// The nine banks the intake form has always offered.
    pub fn builtin() -> Self {
        let entries = [
            (1, "Chase Bank"),
            (2, "Bank of America"),
            (3, "Wells Fargo"),
            (4, "Citibank"),
            (5, "Capital One"),
            (6, "Goldman Sachs"),
            (7, "Morgan Stanley"),
            (8, "HSBC"),
            (9, "TD Bank"),
        ]
        .into_iter()
        .map(|(id, name)| BankEntry {
            id: BankId(id),
            name: name.to_string(),
            logo: format!("/assets/banks/{id}.png"),
        })
        .collect();

        Self { entries }
    }

    /// Load a replacement catalog from a JSON array of entries.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|source| CatalogError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let entries = serde_json::from_slice(&bytes).map_err(|source| CatalogError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::new(entries))
    }

    pub fn entries(&self) -> &[BankEntry] {
        &self.entries
    }

    pub fn get(&self, id: BankId) -> Option<&BankEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    pub fn contains(&self, id: BankId) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Catalog loading failures.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read bank catalog {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse bank catalog {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}
