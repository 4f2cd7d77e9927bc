use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use thiserror::Error;

use crate::models::{CertificationRecord, Tier};

/// Error types for catalog ingestion
#[derive(Debug, Error)]
pub enum CatalogLoadError {
    #[error("Failed to read catalog: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed record on line {line}: {source}")]
    Parse {
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid record on line {line}: {reason}")]
    InvalidRecord { line: usize, reason: String },

    #[error("Duplicate certificate name '{name}' on line {line}")]
    DuplicateName { line: usize, name: String },
}

/// Immutable list of certification records, in source order
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    records: Vec<CertificationRecord>,
    index: HashMap<String, usize>,
}

impl Catalog {
    /// Builds a catalog from already-parsed records, deriving each tier
    pub fn from_records(records: Vec<CertificationRecord>) -> Result<Self, CatalogLoadError> {
        let mut catalog = Self::default();
        for (i, record) in records.into_iter().enumerate() {
            catalog.push(i + 1, record)?;
        }
        Ok(catalog)
    }

    fn push(&mut self, line: usize, mut record: CertificationRecord) -> Result<(), CatalogLoadError> {
        record
            .validate()
            .map_err(|reason| CatalogLoadError::InvalidRecord { line, reason })?;

        if self.index.contains_key(&record.name) {
            return Err(CatalogLoadError::DuplicateName {
                line,
                name: record.name,
            });
        }

        record.tier = Tier::from_name(&record.name);
        self.index.insert(record.name.clone(), self.records.len());
        self.records.push(record);
        Ok(())
    }

    pub fn records(&self) -> &[CertificationRecord] {
        &self.records
    }

    pub fn get(&self, name: &str) -> Option<&CertificationRecord> {
        self.index.get(name).map(|&i| &self.records[i])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Certificate names in alphabetical order, for pickers
    pub fn sorted_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.records.iter().map(|r| r.name.as_str()).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Reads a line-delimited JSON catalog.
///
/// Whitespace-only lines are skipped. Any other line that fails to parse or
/// validate aborts the whole load.
pub fn load_catalog<R: BufRead>(reader: R) -> Result<Catalog, CatalogLoadError> {
    let mut catalog = Catalog::default();

    for (i, line) in reader.lines().enumerate() {
        let line_no = i + 1;
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let record: CertificationRecord = serde_json::from_str(&line)
            .map_err(|source| CatalogLoadError::Parse {
                line: line_no,
                source,
            })?;
        catalog.push(line_no, record)?;
    }

    tracing::info!(records = catalog.len(), "Catalog loaded");

    Ok(catalog)
}

/// Opens and reads a catalog file
pub fn load_catalog_file(path: impl AsRef<Path>) -> Result<Catalog, CatalogLoadError> {
    let path = path.as_ref();
    tracing::debug!(path = %path.display(), "Opening catalog file");
    let file = File::open(path)?;
    load_catalog(BufReader::new(file))
}
