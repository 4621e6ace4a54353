//! Seed data for the record stores.
//!
//! A seed is the raw record lists of every domain, in the JSON layout of
//! `data/sample.json`. The built-in sample is compiled into the binary; a
//! file with the same layout can replace it.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::domain::{Aircraft, Employee, Inspection, Part, Stage};
use crate::error::{Error, Result};

/// The built-in sample data set.
const SAMPLE_JSON: &str = include_str!("../../data/sample.json");

/// Raw record lists for every domain.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Seed {
    /// Aircraft records.
    pub aircraft: Vec<Aircraft>,
    /// Employee records.
    pub employees: Vec<Employee>,
    /// Part records.
    pub parts: Vec<Part>,
    /// Stage records, in process order.
    pub stages: Vec<Stage>,
    /// Test and inspection records.
    pub tests: Vec<Inspection>,
}

impl Seed {
    /// The built-in sample data.
    ///
    /// # Errors
    ///
    /// Returns an error if the embedded sample fails to parse.
    pub fn sample() -> Result<Self> {
        Self::from_json(SAMPLE_JSON)
    }

    /// Parse a seed from JSON text.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not a valid seed document.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read a seed from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!("Reading seed file {}", path.display());
        let json = std::fs::read_to_string(path).map_err(|source| Error::SeedRead {
            path: path.to_path_buf(),
            source,
        })?;
        let seed = Self::from_json(&json)?;
        info!(
            aircraft = seed.aircraft.len(),
            employees = seed.employees.len(),
            parts = seed.parts.len(),
            stages = seed.stages.len(),
            tests = seed.tests.len(),
            "Loaded seed file {}",
            path.display()
        );
        Ok(seed)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_sample_sizes() {
        let seed = Seed::sample().unwrap();
        assert_eq!(seed.aircraft.len(), 5);
        assert_eq!(seed.employees.len(), 7);
        assert_eq!(seed.parts.len(), 8);
        assert_eq!(seed.stages.len(), 8);
        assert_eq!(seed.tests.len(), 7);
    }

    #[test]
    fn test_sample_keeps_stage_order() {
        let seed = Seed::sample().unwrap();
        let ids: Vec<&str> = seed.stages.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(
            ids,
            vec!["ET001", "ET002", "ET003", "ET004", "ET005", "ET006", "ET007", "ET008"]
        );
    }

    #[test]
    fn test_missing_sections_default_to_empty() {
        let seed = Seed::from_json(r#"{"aircraft": []}"#).unwrap();
        assert_eq!(seed, Seed::default());
    }

    #[test]
    fn test_unknown_status_is_rejected() {
        let json = r#"{"stages": [{"id":"ET1","name":"X","aircraft":"A","status":"Cancelado",
            "startDate":"2024-01-01","endDate":"2024-01-02","responsible":"R","progress":0}]}"#;
        assert!(matches!(Seed::from_json(json), Err(Error::Json(_))));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE_JSON.as_bytes()).unwrap();
        let seed = Seed::from_file(file.path()).unwrap();
        assert_eq!(seed, Seed::sample().unwrap());
    }

    #[test]
    fn test_from_missing_file() {
        let err = Seed::from_file("/nonexistent/seed.json").unwrap_err();
        assert!(matches!(err, Error::SeedRead { .. }));
        assert!(err.to_string().contains("/nonexistent/seed.json"));
    }
}
