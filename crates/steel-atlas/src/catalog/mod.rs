//! Steel catalog: record model, CSV import, browsing and comparison.

mod compare;
pub mod domain;
mod filter;
mod parser;

pub use compare::{MetricLeader, SteelComparison, MAX_COMPARE, MIN_COMPARE};
pub use domain::{Composition, Metric, PerformanceMetrics, SteelRecord};
pub use filter::{CatalogFilter, CatalogSort};

use chrono::{DateTime, Utc};
use std::collections::{BTreeSet, HashSet};
use std::io::Read;
use std::path::Path;
use thiserror::Error;
use tracing::info;

const BUNDLED_CATALOG: &str = include_str!("../../data/steels.csv");

#[derive(Debug, Error)]
pub enum CatalogImportError {
    #[error("failed to read steel catalog: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid steel catalog CSV data: {0}")]
    Csv(#[from] csv::Error),
    #[error("steel catalog row {row} has no id")]
    MissingId { row: usize },
    #[error("steel id '{0}' appears more than once in the catalog")]
    DuplicateId(String),
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("steel '{0}' not found")]
    SteelNotFound(String),
    #[error("tempering temperature must be a finite number, got {0}")]
    InvalidTemperature(f64),
    #[error("comparison needs at least {minimum} known steels, found {found}")]
    TooFewToCompare { found: usize, minimum: usize },
    #[error("comparison supports at most {maximum} steels, got {requested}")]
    TooManyToCompare { requested: usize, maximum: usize },
}

/// Immutable set of steels loaded for a session.
#[derive(Debug, Clone)]
pub struct SteelCatalog {
    steels: Vec<SteelRecord>,
    loaded_at: DateTime<Utc>,
}

impl SteelCatalog {
    pub fn new(steels: Vec<SteelRecord>) -> Result<Self, CatalogImportError> {
        let mut seen = HashSet::new();
        for steel in &steels {
            if !seen.insert(steel.id.as_str()) {
                return Err(CatalogImportError::DuplicateId(steel.id.clone()));
            }
        }

        Ok(Self {
            steels,
            loaded_at: Utc::now(),
        })
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, CatalogImportError> {
        let path = path.as_ref();
        let file = std::fs::File::open(path)?;
        let catalog = Self::from_reader(file)?;
        info!(path = %path.display(), steels = catalog.len(), "steel catalog imported");
        Ok(catalog)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, CatalogImportError> {
        let steels = parser::parse_records(reader)?;
        Ok(Self {
            steels,
            loaded_at: Utc::now(),
        })
    }

    /// The dataset shipped with the crate.
    pub fn bundled() -> Result<Self, CatalogImportError> {
        let catalog = Self::from_reader(BUNDLED_CATALOG.as_bytes())?;
        info!(steels = catalog.len(), "bundled steel catalog loaded");
        Ok(catalog)
    }

    pub fn all(&self) -> &[SteelRecord] {
        &self.steels
    }

    pub fn len(&self) -> usize {
        self.steels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steels.is_empty()
    }

    pub fn loaded_at(&self) -> DateTime<Utc> {
        self.loaded_at
    }

    pub fn get(&self, id: &str) -> Option<&SteelRecord> {
        let id = id.trim();
        self.steels.iter().find(|steel| steel.id == id)
    }

    pub fn require(&self, id: &str) -> Result<&SteelRecord, CatalogError> {
        self.get(id)
            .ok_or_else(|| CatalogError::SteelNotFound(id.trim().to_string()))
    }

    pub fn producers(&self) -> Vec<&str> {
        self.steels
            .iter()
            .map(|steel| steel.producer.as_str())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    pub fn filter(&self, filter: &CatalogFilter) -> Vec<&SteelRecord> {
        filter.apply(&self.steels)
    }

    pub fn compare(&self, ids: &[String]) -> Result<SteelComparison, CatalogError> {
        compare::compare(&self.steels, ids)
    }
}
