//! Record types for the five production domains.
//!
//! Every record carries a stable string `id` and a fixed set of typed
//! attributes. The [`Record`] trait exposes those attributes by their
//! camelCase field name so the search engine can work over any domain, and
//! [`Categorized`] exposes the domain's closed status (or result) enumeration
//! to the tally and classification code.

mod aircraft;
mod employee;
mod inspection;
mod part;
mod stage;

use std::borrow::Cow;
use std::fmt;
use std::hash::Hash;

use serde::{Deserialize, Serialize};

use crate::classify::Tone;
use crate::error::Result;

pub use aircraft::{Aircraft, AircraftStatus};
pub use employee::{Employee, EmployeeStatus};
pub use inspection::{Inspection, TestResult};
pub use part::{Part, PartStatus};
pub use stage::{Stage, StageStatus};

/// One of the five entity kinds tracked by the console.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Domain {
    /// Aircraft under production.
    Aircraft,
    /// Production personnel.
    Employee,
    /// Parts inventory.
    Part,
    /// Production stages of an aircraft.
    Stage,
    /// Tests and inspections.
    Test,
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Aircraft => write!(f, "aircraft"),
            Self::Employee => write!(f, "employee"),
            Self::Part => write!(f, "part"),
            Self::Stage => write!(f, "stage"),
            Self::Test => write!(f, "test"),
        }
    }
}

/// A typed record with a stable id and named fields.
pub trait Record {
    /// The domain this record type belongs to.
    const DOMAIN: Domain;

    /// Fields searched by default when a view filters this domain.
    const SEARCH_FIELDS: &'static [&'static str];

    /// The record's id, unique within its domain.
    fn id(&self) -> &str;

    /// Display form of the named field, or `None` if the record has no such
    /// field. Numbers and dates are rendered the way they are shown to users.
    fn field(&self, name: &str) -> Option<Cow<'_, str>>;

    /// Check the record's own invariants.
    ///
    /// # Errors
    ///
    /// Returns an error if a field holds a value outside its allowed range.
    fn validate(&self) -> Result<()> {
        Ok(())
    }
}

/// A closed enumeration of status or result values for one domain.
pub trait Category: Copy + Eq + Hash + fmt::Debug + 'static {
    /// Every value, in summary display order.
    const ALL: &'static [Self];

    /// The literal label used in records and on screen.
    fn label(self) -> &'static str;

    /// Display tone for this value.
    fn tone(self) -> Tone;

    /// Parse a literal label. Matching is exact and case-sensitive.
    #[must_use]
    fn from_label(label: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|value| value.label() == label)
    }
}

/// A record whose domain has a categorical status field.
pub trait Categorized: Record {
    /// The domain's enumeration.
    type Category: Category;

    /// Name of the categorical field (`status` or `result`).
    const CATEGORY_FIELD: &'static str;

    /// The record's category value.
    fn category(&self) -> Self::Category;
}

/// Check that a progress percentage lies within 0..=100.
pub(crate) fn check_progress(domain: Domain, id: &str, progress: u8) -> Result<()> {
    if progress > 100 {
        return Err(crate::Error::ProgressOutOfRange {
            domain,
            id: id.to_string(),
            progress,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_display() {
        assert_eq!(Domain::Aircraft.to_string(), "aircraft");
        assert_eq!(Domain::Employee.to_string(), "employee");
        assert_eq!(Domain::Part.to_string(), "part");
        assert_eq!(Domain::Stage.to_string(), "stage");
        assert_eq!(Domain::Test.to_string(), "test");
    }

    #[test]
    fn test_from_label_is_exact() {
        assert_eq!(
            StageStatus::from_label("Concluído"),
            Some(StageStatus::Completed)
        );
        assert_eq!(StageStatus::from_label("concluído"), None);
        assert_eq!(StageStatus::from_label("Concluido"), None);
        assert_eq!(StageStatus::from_label(""), None);
    }

    #[test]
    fn test_labels_round_trip_for_every_domain() {
        fn check<C: Category>() {
            for value in C::ALL {
                assert_eq!(C::from_label(value.label()), Some(*value));
            }
        }
        check::<AircraftStatus>();
        check::<EmployeeStatus>();
        check::<PartStatus>();
        check::<StageStatus>();
        check::<TestResult>();
    }

    #[test]
    fn test_check_progress_bounds() {
        assert!(check_progress(Domain::Stage, "ET001", 0).is_ok());
        assert!(check_progress(Domain::Stage, "ET001", 100).is_ok());
        let err = check_progress(Domain::Stage, "ET001", 101).unwrap_err();
        assert!(err.is_invariant_violation());
    }
}
