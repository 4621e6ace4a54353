//! Stage timelines grouped by aircraft.
//!
//! Stages are partitioned by their `aircraft` id. Groups appear in the order
//! their aircraft is first seen in the input, and stages keep their input
//! order inside a group. Nothing is re-sorted by date or by key.

use indexmap::IndexMap;
use serde::Serialize;
use tracing::debug;

use crate::domain::Stage;

/// Group stages by parent aircraft id.
///
/// Keys follow first occurrence; an aircraft without stages never appears.
#[must_use]
pub fn group_by_parent<'a, I>(stages: I) -> IndexMap<&'a str, Vec<&'a Stage>>
where
    I: IntoIterator<Item = &'a Stage>,
{
    let mut groups: IndexMap<&'a str, Vec<&'a Stage>> = IndexMap::new();
    for stage in stages {
        groups.entry(stage.aircraft.as_str()).or_default().push(stage);
    }
    debug!(groups = groups.len(), "Grouped stages by aircraft");
    groups
}

/// A stage placed on its aircraft's timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimelineEntry<'a> {
    /// The stage.
    pub stage: &'a Stage,
    /// Position within the aircraft's group.
    pub index: usize,
    /// Number of stages in the group.
    pub group_len: usize,
}

impl TimelineEntry<'_> {
    /// Whether this is the group's final stage (no trailing connector).
    #[must_use]
    pub fn is_last(&self) -> bool {
        self.index + 1 == self.group_len
    }
}

/// Stages of every aircraft, ready to render as connected timelines.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct Timeline<'a> {
    groups: IndexMap<&'a str, Vec<&'a Stage>>,
}

impl<'a> Timeline<'a> {
    /// Build a timeline from stages in process order.
    #[must_use]
    pub fn build<I>(stages: I) -> Self
    where
        I: IntoIterator<Item = &'a Stage>,
    {
        Self {
            groups: group_by_parent(stages),
        }
    }

    /// Number of aircraft with at least one stage.
    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Whether there are no stages at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Aircraft ids in first-occurrence order.
    pub fn aircraft(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.groups.keys().copied()
    }

    /// Stages of one aircraft, in input order.
    #[must_use]
    pub fn stages(&self, aircraft: &str) -> Option<&[&'a Stage]> {
        self.groups.get(aircraft).map(Vec::as_slice)
    }

    /// Timeline entries of one aircraft.
    pub fn entries(&self, aircraft: &str) -> impl Iterator<Item = TimelineEntry<'a>> + '_ {
        let stages = self.stages(aircraft).unwrap_or_default();
        let group_len = stages.len();
        stages
            .iter()
            .enumerate()
            .map(move |(index, &stage)| TimelineEntry {
                stage,
                index,
                group_len,
            })
    }

    /// The underlying ordered groups.
    #[must_use]
    pub fn groups(&self) -> &IndexMap<&'a str, Vec<&'a Stage>> {
        &self.groups
    }

    /// Consume the timeline and return its groups.
    #[must_use]
    pub fn into_groups(self) -> IndexMap<&'a str, Vec<&'a Stage>> {
        self.groups
    }
}
