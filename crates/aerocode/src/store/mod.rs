//! In-memory record stores.
//!
//! Each domain has one [`RecordStore`], seeded once and never mutated. A
//! [`Catalog`] owns the stores of all five domains.

mod seed;

use std::collections::HashSet;
use std::path::Path;

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::aggregate::{status_summary, StatusSummary};
use crate::domain::{Aircraft, Categorized, Employee, Inspection, Part, Record, Stage};
use crate::error::{Error, Result};
use crate::query;

pub use seed::Seed;

/// An immutable, ordered collection of records with unique ids.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RecordStore<R> {
    records: Vec<R>,
}

impl<R: Record> RecordStore<R> {
    /// Build a store, checking id uniqueness and every record's invariants.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateId`] if two records share an id, or the
    /// record's own validation error.
    pub fn new(records: Vec<R>) -> Result<Self> {
        {
            let mut seen = HashSet::with_capacity(records.len());
            for record in &records {
                if !seen.insert(record.id()) {
                    return Err(Error::duplicate_id(R::DOMAIN, record.id()));
                }
                record.validate()?;
            }
        }
        debug!(domain = %R::DOMAIN, records = records.len(), "Built record store");
        Ok(Self { records })
    }

    /// All records in seed order.
    #[must_use]
    pub fn records(&self) -> &[R] {
        &self.records
    }

    /// Look up a record by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&R> {
        self.records.iter().find(|record| record.id() == id)
    }

    /// Look up a record by id, failing when it does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RecordNotFound`] if no record has this id.
    pub fn require(&self, id: &str) -> Result<&R> {
        self.get(id)
            .ok_or_else(|| Error::record_not_found(R::DOMAIN, id))
    }

    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the store has no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records matching `query` on the domain's default search fields.
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<&R> {
        query::search(&self.records, query)
    }
}

impl<R: Categorized> RecordStore<R> {
    /// Summary tiles over the full record set.
    #[must_use]
    pub fn summary(&self) -> StatusSummary {
        status_summary(&self.records)
    }
}

/// The record stores of every domain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Catalog {
    /// Aircraft.
    pub aircraft: RecordStore<Aircraft>,
    /// Employees.
    pub employees: RecordStore<Employee>,
    /// Parts.
    pub parts: RecordStore<Part>,
    /// Stages.
    pub stages: RecordStore<Stage>,
    /// Tests and inspections.
    pub tests: RecordStore<Inspection>,
}

impl Catalog {
    /// Build a catalog from seed data.
    ///
    /// # Errors
    ///
    /// Returns an error if any domain's records break a store invariant.
    pub fn from_seed(seed: Seed) -> Result<Self> {
        Ok(Self {
            aircraft: RecordStore::new(seed.aircraft)?,
            employees: RecordStore::new(seed.employees)?,
            parts: RecordStore::new(seed.parts)?,
            stages: RecordStore::new(seed.stages)?,
            tests: RecordStore::new(seed.tests)?,
        })
    }

    /// The built-in sample catalog.
    ///
    /// # Errors
    ///
    /// Returns an error if the embedded sample is invalid.
    pub fn sample() -> Result<Self> {
        Self::from_seed(Seed::sample()?)
    }

    /// Load a catalog from a seed file, or the built-in sample when `path`
    /// is `None`.
    ///
    /// # Errors
    ///
    /// Returns an error if the seed cannot be read or breaks an invariant.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let catalog = match path {
            Some(path) => Self::from_seed(Seed::from_file(path)?)?,
            None => Self::sample()?,
        };
        info!(
            aircraft = catalog.aircraft.len(),
            employees = catalog.employees.len(),
            parts = catalog.parts.len(),
            stages = catalog.stages.len(),
            tests = catalog.tests.len(),
            "Catalog loaded"
        );
        Ok(catalog)
    }

    /// Stages whose `aircraft` does not name any aircraft in the catalog.
    ///
    /// This check is opt-in; nothing else in the crate relies on stage
    /// references being valid.
    #[must_use]
    pub fn dangling_stage_refs(&self) -> Vec<&Stage> {
        let known: HashSet<&str> = self.aircraft.records().iter().map(|a| a.id.as_str()).collect();
        let dangling: Vec<&Stage> = self
            .stages
            .records()
            .iter()
            .filter(|stage| !known.contains(stage.aircraft.as_str()))
            .collect();
        for stage in &dangling {
            warn!(stage = %stage.id, aircraft = %stage.aircraft, "Stage references unknown aircraft");
        }
        dangling
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::StageStatus;

    #[test]
    fn test_sample_catalog() {
        let catalog = Catalog::sample().unwrap();
        assert_eq!(catalog.aircraft.len(), 5);
        assert_eq!(catalog.employees.len(), 7);
        assert_eq!(catalog.parts.len(), 8);
        assert_eq!(catalog.stages.len(), 8);
        assert_eq!(catalog.tests.len(), 7);
    }

    #[test]
    fn test_duplicate_id_is_rejected() {
        let mut seed = Seed::sample().unwrap();
        let copy = seed.parts[0].clone();
        seed.parts.push(copy);
        let err = Catalog::from_seed(seed).unwrap_err();
        assert!(matches!(err, Error::DuplicateId { ref id, .. } if id == "P001"));
    }

    #[test]
    fn test_progress_over_100_is_rejected() {
        let mut seed = Seed::sample().unwrap();
        seed.stages[2].progress = 101;
        let err = Catalog::from_seed(seed).unwrap_err();
        assert!(matches!(err, Error::ProgressOutOfRange { progress: 101, .. }));
    }

    #[test]
    fn test_get_by_id() {
        let catalog = Catalog::sample().unwrap();
        let stage = catalog.stages.get("ET008").unwrap();
        assert_eq!(stage.aircraft, "F35-012");
        assert_eq!(stage.status, StageStatus::Planned);
        assert!(catalog.stages.get("ET999").is_none());
    }

    #[test]
    fn test_require_missing_id() {
        let catalog = Catalog::sample().unwrap();
        assert_eq!(catalog.tests.require("T003").unwrap().id, "T003");
        let err = catalog.tests.require("T999").unwrap_err();
        assert!(matches!(err, Error::RecordNotFound { ref id, .. } if id == "T999"));
    }

    #[test]
    fn test_sample_stage_summary() {
        let catalog = Catalog::sample().unwrap();
        let summary = catalog.stages.summary();
        let tiles: Vec<(&str, usize)> = summary
            .tiles
            .iter()
            .map(|tile| (tile.label, tile.count))
            .collect();
        assert_eq!(
            tiles,
            vec![("Concluído", 4), ("Em Andamento", 3), ("Planejado", 1)]
        );
        assert_eq!(summary.total, 8);
        assert_eq!(summary.tallied(), summary.total);
    }

    #[test]
    fn test_store_search() {
        let catalog = Catalog::sample().unwrap();
        let ids: Vec<&str> = catalog
            .parts
            .search("estrutura")
            .iter()
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(ids, vec!["P002", "P004", "P006", "P008"]);
    }

    #[test]
    fn test_sample_references_are_consistent() {
        let catalog = Catalog::sample().unwrap();
        assert!(catalog.dangling_stage_refs().is_empty());
    }

    #[test]
    fn test_dangling_references_are_reported() {
        let mut seed = Seed::sample().unwrap();
        seed.stages[0].aircraft = "Z999-000".to_string();
        let catalog = Catalog::from_seed(seed).unwrap();
        let dangling = catalog.dangling_stage_refs();
        assert_eq!(dangling.len(), 1);
        assert_eq!(dangling[0].id, "ET001");
    }

    #[test]
    fn test_load_without_path_uses_sample() {
        assert_eq!(Catalog::load(None).unwrap(), Catalog::sample().unwrap());
    }

    #[test]
    fn test_empty_store() {
        let store: RecordStore<Stage> = RecordStore::new(Vec::new()).unwrap();
        assert!(store.is_empty());
        assert!(store.search("x").is_empty());
        let summary = store.summary();
        assert_eq!(summary.total, 0);
        assert_eq!(summary.tallied(), 0);
    }
}
