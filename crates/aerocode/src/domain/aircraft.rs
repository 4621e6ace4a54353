use std::borrow::Cow;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{check_progress, Categorized, Category, Domain, Record};
use crate::classify::{AircraftPhase, Tone};
use crate::error::Result;

/// Production status of an aircraft.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AircraftStatus {
    /// On the assembly line.
    #[serde(rename = "Em Produção")]
    InProduction,
    /// Undergoing tests.
    #[serde(rename = "Testes")]
    Testing,
    /// Scheduled, not started.
    #[serde(rename = "Planejamento")]
    Planning,
    /// Delivered.
    #[serde(rename = "Concluído")]
    Completed,
}

impl Category for AircraftStatus {
    const ALL: &'static [Self] = &[
        Self::InProduction,
        Self::Testing,
        Self::Planning,
        Self::Completed,
    ];

    fn label(self) -> &'static str {
        match self {
            Self::InProduction => "Em Produção",
            Self::Testing => "Testes",
            Self::Planning => "Planejamento",
            Self::Completed => "Concluído",
        }
    }

    fn tone(self) -> Tone {
        AircraftPhase::from(self).tone()
    }
}

/// An aircraft being built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Aircraft {
    /// Serial id, e.g. `A380-001`.
    pub id: String,
    /// Commercial model name.
    pub model: String,
    /// Market segment (Comercial, Regional, Militar).
    #[serde(rename = "type")]
    pub kind: String,
    /// Production status.
    pub status: AircraftStatus,
    /// Completion percentage, 0..=100.
    pub progress: u8,
    /// Date production started.
    pub start_date: NaiveDate,
    /// Expected completion date.
    pub estimated_completion: NaiveDate,
}

impl Record for Aircraft {
    const DOMAIN: Domain = Domain::Aircraft;
    const SEARCH_FIELDS: &'static [&'static str] = &["id", "model"];

    fn id(&self) -> &str {
        &self.id
    }

    fn field(&self, name: &str) -> Option<Cow<'_, str>> {
        match name {
            "id" => Some(Cow::Borrowed(&self.id)),
            "model" => Some(Cow::Borrowed(&self.model)),
            "type" => Some(Cow::Borrowed(&self.kind)),
            "status" => Some(Cow::Borrowed(self.status.label())),
            "progress" => Some(Cow::Owned(self.progress.to_string())),
            "startDate" => Some(Cow::Owned(self.start_date.to_string())),
            "estimatedCompletion" => Some(Cow::Owned(self.estimated_completion.to_string())),
            _ => None,
        }
    }

    fn validate(&self) -> Result<()> {
        check_progress(Self::DOMAIN, &self.id, self.progress)
    }
}

impl Categorized for Aircraft {
    type Category = AircraftStatus;
    const CATEGORY_FIELD: &'static str = "status";

    fn category(&self) -> AircraftStatus {
        self.status
    }
}
