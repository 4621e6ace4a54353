use std::borrow::Cow;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{check_progress, Categorized, Category, Domain, Record};
use crate::classify::{StageState, Tone};
use crate::error::Result;

/// Status of a production stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StageStatus {
    /// Finished.
    #[serde(rename = "Concluído")]
    Completed,
    /// Under way.
    #[serde(rename = "Em Andamento")]
    InProgress,
    /// Not started.
    #[serde(rename = "Planejado")]
    Planned,
}

impl Category for StageStatus {
    const ALL: &'static [Self] = &[Self::Completed, Self::InProgress, Self::Planned];

    fn label(self) -> &'static str {
        match self {
            Self::Completed => "Concluído",
            Self::InProgress => "Em Andamento",
            Self::Planned => "Planejado",
        }
    }

    fn tone(self) -> Tone {
        StageState::from(self).tone()
    }
}

/// One step in building an aircraft.
///
/// `aircraft` names the parent [`Aircraft`](super::Aircraft) by id. The
/// reference is not checked when a store is built; see
/// [`Catalog::dangling_stage_refs`](crate::store::Catalog::dangling_stage_refs).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stage {
    /// Stage id, e.g. `ET001`.
    pub id: String,
    /// Stage name.
    pub name: String,
    /// Id of the parent aircraft.
    pub aircraft: String,
    /// Stage status.
    pub status: StageStatus,
    /// Planned start.
    pub start_date: NaiveDate,
    /// Planned end.
    pub end_date: NaiveDate,
    /// Person in charge.
    pub responsible: String,
    /// Completion percentage, 0..=100.
    pub progress: u8,
}

impl Record for Stage {
    const DOMAIN: Domain = Domain::Stage;
    const SEARCH_FIELDS: &'static [&'static str] = &["name", "aircraft", "id"];

    fn id(&self) -> &str {
        &self.id
    }

    fn field(&self, name: &str) -> Option<Cow<'_, str>> {
        match name {
            "id" => Some(Cow::Borrowed(&self.id)),
            "name" => Some(Cow::Borrowed(&self.name)),
            "aircraft" => Some(Cow::Borrowed(&self.aircraft)),
            "status" => Some(Cow::Borrowed(self.status.label())),
            "startDate" => Some(Cow::Owned(self.start_date.to_string())),
            "endDate" => Some(Cow::Owned(self.end_date.to_string())),
            "responsible" => Some(Cow::Borrowed(&self.responsible)),
            "progress" => Some(Cow::Owned(self.progress.to_string())),
            _ => None,
        }
    }

    fn validate(&self) -> Result<()> {
        check_progress(Self::DOMAIN, &self.id, self.progress)
    }
}

impl Categorized for Stage {
    type Category = StageStatus;
    const CATEGORY_FIELD: &'static str = "status";

    fn category(&self) -> StageStatus {
        self.status
    }
}
