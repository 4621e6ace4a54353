//! Category tallies for summary tiles.
//!
//! Counting is exact and case-sensitive, unlike search. Values that are not
//! among the requested categories are left out of every bucket, so the sum of
//! the buckets never exceeds the number of records.

use indexmap::IndexMap;
use serde::Serialize;
use tracing::debug;

use crate::classify::Tone;
use crate::domain::{Categorized, Category, Domain, Record};

/// Count records whose `field` equals each of `categories`.
///
/// The result has one entry per distinct category, in `categories` order,
/// including categories with no records. A category listed twice is counted
/// once.
#[must_use]
pub fn count_by<R, S>(records: &[R], field: &str, categories: &[S]) -> IndexMap<String, usize>
where
    R: Record,
    S: AsRef<str>,
{
    let mut counts: IndexMap<String, usize> = categories
        .iter()
        .map(|category| (category.as_ref().to_string(), 0))
        .collect();

    let mut excluded = 0usize;
    for record in records {
        match record
            .field(field)
            .and_then(|value| counts.get_mut(value.as_ref()))
        {
            Some(count) => *count += 1,
            None => excluded += 1,
        }
    }

    debug!(
        field,
        categories = counts.len(),
        total = records.len(),
        excluded,
        "Counted records by category"
    );
    counts
}

/// One summary tile: a category label and how many records carry it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tile {
    /// Category label.
    pub label: &'static str,
    /// Number of records.
    pub count: usize,
    /// Display tone.
    pub tone: Tone,
}

/// Summary tiles for one domain, computed from the live record set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusSummary {
    /// Domain summarised.
    pub domain: Domain,
    /// Number of records in the set.
    pub total: usize,
    /// One tile per category, in display order.
    pub tiles: Vec<Tile>,
}

impl StatusSummary {
    /// Count for a category label, or `None` if the label is not a tile.
    #[must_use]
    pub fn count(&self, label: &str) -> Option<usize> {
        self.tiles
            .iter()
            .find(|tile| tile.label == label)
            .map(|tile| tile.count)
    }

    /// Sum of all tile counts.
    #[must_use]
    pub fn tallied(&self) -> usize {
        self.tiles.iter().map(|tile| tile.count).sum()
    }
}

/// Build the summary tiles for a categorized record set.
#[must_use]
pub fn status_summary<R: Categorized>(records: &[R]) -> StatusSummary {
    let labels: Vec<&'static str> = R::Category::ALL.iter().map(|c| c.label()).collect();
    let counts = count_by(records, R::CATEGORY_FIELD, &labels);

    let tiles = R::Category::ALL
        .iter()
        .map(|category| Tile {
            label: category.label(),
            count: counts.get(category.label()).copied().unwrap_or(0),
            tone: category.tone(),
        })
        .collect();

    StatusSummary {
        domain: R::DOMAIN,
        total: records.len(),
        tiles,
    }
}
