//! Status classification for display.
//!
//! Each domain maps its literal status strings to a small set of semantic
//! categories, and each category to a display [`Tone`]. Classification is
//! total: any string that is not one of the domain's labels maps to the
//! domain's `Unknown` category, which is shown in gray.

use std::fmt;

use serde::Serialize;

use crate::domain::{
    AircraftStatus, Category, Domain, EmployeeStatus, PartStatus, StageStatus, TestResult,
};

/// Colour family used to render a badge, tile or icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    /// Done, healthy, approved.
    Green,
    /// Active work.
    Blue,
    /// Needs attention.
    Yellow,
    /// Failed or critical.
    Red,
    /// Neutral or unrecognised.
    Gray,
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Green => write!(f, "green"),
            Self::Blue => write!(f, "blue"),
            Self::Yellow => write!(f, "yellow"),
            Self::Red => write!(f, "red"),
            Self::Gray => write!(f, "gray"),
        }
    }
}

/// Icon drawn on a stage timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StageIcon {
    /// Check mark.
    Check,
    /// Clock face.
    Clock,
    /// Hollow circle.
    Circle,
}

impl StageIcon {
    /// Terminal glyph for this icon.
    #[must_use]
    pub fn glyph(self) -> char {
        match self {
            Self::Check => '✔',
            Self::Clock => '◷',
            Self::Circle => '○',
        }
    }
}

/// Semantic category of a stage status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StageState {
    /// Stage finished.
    Done,
    /// Stage under way.
    InProgress,
    /// Stage not started.
    Planned,
    /// Unrecognised status.
    Unknown,
}

impl StageState {
    /// Classify a literal stage status.
    #[must_use]
    pub fn classify(status: &str) -> Self {
        StageStatus::from_label(status).map_or(Self::Unknown, Self::from)
    }

    /// Display tone.
    #[must_use]
    pub fn tone(self) -> Tone {
        match self {
            Self::Done => Tone::Green,
            Self::InProgress => Tone::Blue,
            Self::Planned | Self::Unknown => Tone::Gray,
        }
    }

    /// Timeline icon.
    #[must_use]
    pub fn icon(self) -> StageIcon {
        match self {
            Self::Done => StageIcon::Check,
            Self::InProgress => StageIcon::Clock,
            Self::Planned | Self::Unknown => StageIcon::Circle,
        }
    }
}

impl From<StageStatus> for StageState {
    fn from(status: StageStatus) -> Self {
        match status {
            StageStatus::Completed => Self::Done,
            StageStatus::InProgress => Self::InProgress,
            StageStatus::Planned => Self::Planned,
        }
    }
}

/// Semantic category of a test result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TestVerdict {
    /// Approved.
    Passed,
    /// Rejected.
    Failed,
    /// Under analysis.
    Pending,
    /// Unrecognised result.
    Unknown,
}

impl TestVerdict {
    /// Classify a literal test result.
    #[must_use]
    pub fn classify(result: &str) -> Self {
        TestResult::from_label(result).map_or(Self::Unknown, Self::from)
    }

    /// Display tone.
    #[must_use]
    pub fn tone(self) -> Tone {
        match self {
            Self::Passed => Tone::Green,
            Self::Failed => Tone::Red,
            Self::Pending => Tone::Yellow,
            Self::Unknown => Tone::Gray,
        }
    }
}

impl From<TestResult> for TestVerdict {
    fn from(result: TestResult) -> Self {
        match result {
            TestResult::Approved => Self::Passed,
            TestResult::Rejected => Self::Failed,
            TestResult::UnderReview => Self::Pending,
        }
    }
}

/// Semantic category of an aircraft status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AircraftPhase {
    /// On the line.
    InProduction,
    /// Being tested.
    Testing,
    /// Being planned.
    Planning,
    /// Delivered.
    Completed,
    /// Unrecognised status.
    Unknown,
}

impl AircraftPhase {
    /// Classify a literal aircraft status.
    #[must_use]
    pub fn classify(status: &str) -> Self {
        AircraftStatus::from_label(status).map_or(Self::Unknown, Self::from)
    }

    /// Display tone.
    #[must_use]
    pub fn tone(self) -> Tone {
        match self {
            Self::InProduction => Tone::Blue,
            Self::Testing => Tone::Yellow,
            Self::Completed => Tone::Green,
            Self::Planning | Self::Unknown => Tone::Gray,
        }
    }
}

impl From<AircraftStatus> for AircraftPhase {
    fn from(status: AircraftStatus) -> Self {
        match status {
            AircraftStatus::InProduction => Self::InProduction,
            AircraftStatus::Testing => Self::Testing,
            AircraftStatus::Planning => Self::Planning,
            AircraftStatus::Completed => Self::Completed,
        }
    }
}

/// Semantic category of a part's stock status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StockLevel {
    /// Enough stock.
    InStock,
    /// Low stock.
    Low,
    /// Critical stock.
    Critical,
    /// Unrecognised status.
    Unknown,
}

impl StockLevel {
    /// Classify a literal part status.
    #[must_use]
    pub fn classify(status: &str) -> Self {
        PartStatus::from_label(status).map_or(Self::Unknown, Self::from)
    }

    /// Display tone.
    #[must_use]
    pub fn tone(self) -> Tone {
        match self {
            Self::InStock => Tone::Green,
            Self::Low => Tone::Yellow,
            Self::Critical => Tone::Red,
            Self::Unknown => Tone::Gray,
        }
    }
}

impl From<PartStatus> for StockLevel {
    fn from(status: PartStatus) -> Self {
        match status {
            PartStatus::InStock => Self::InStock,
            PartStatus::LowStock => Self::Low,
            PartStatus::CriticalStock => Self::Critical,
        }
    }
}

/// Semantic category of an employee status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EmployeeAvailability {
    /// At work.
    Active,
    /// On vacation.
    OnVacation,
    /// On leave.
    OnLeave,
    /// Unrecognised status.
    Unknown,
}

impl EmployeeAvailability {
    /// Classify a literal employee status.
    #[must_use]
    pub fn classify(status: &str) -> Self {
        EmployeeStatus::from_label(status).map_or(Self::Unknown, Self::from)
    }

    /// Display tone.
    #[must_use]
    pub fn tone(self) -> Tone {
        match self {
            Self::Active => Tone::Green,
            Self::OnVacation => Tone::Yellow,
            Self::OnLeave => Tone::Red,
            Self::Unknown => Tone::Gray,
        }
    }
}

impl From<EmployeeStatus> for EmployeeAvailability {
    fn from(status: EmployeeStatus) -> Self {
        match status {
            EmployeeStatus::Active => Self::Active,
            EmployeeStatus::Vacation => Self::OnVacation,
            EmployeeStatus::Leave => Self::OnLeave,
        }
    }
}

/// A classified status from any domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "domain", content = "category", rename_all = "snake_case")]
pub enum Classification {
    /// Aircraft status.
    Aircraft(AircraftPhase),
    /// Employee status.
    Employee(EmployeeAvailability),
    /// Part status.
    Part(StockLevel),
    /// Stage status.
    Stage(StageState),
    /// Test result.
    Test(TestVerdict),
}

impl Classification {
    /// Display tone of the classified category.
    #[must_use]
    pub fn tone(self) -> Tone {
        match self {
            Self::Aircraft(c) => c.tone(),
            Self::Employee(c) => c.tone(),
            Self::Part(c) => c.tone(),
            Self::Stage(c) => c.tone(),
            Self::Test(c) => c.tone(),
        }
    }

    /// Whether the status was not recognised.
    #[must_use]
    pub fn is_unknown(self) -> bool {
        matches!(
            self,
            Self::Aircraft(AircraftPhase::Unknown)
                | Self::Employee(EmployeeAvailability::Unknown)
                | Self::Part(StockLevel::Unknown)
                | Self::Stage(StageState::Unknown)
                | Self::Test(TestVerdict::Unknown)
        )
    }

    /// Snake-case tag of the category, e.g. `in_progress`.
    #[must_use]
    pub fn tag(self) -> &'static str {
        match self {
            Self::Aircraft(c) => match c {
                AircraftPhase::InProduction => "in_production",
                AircraftPhase::Testing => "testing",
                AircraftPhase::Planning => "planning",
                AircraftPhase::Completed => "completed",
                AircraftPhase::Unknown => "unknown",
            },
            Self::Employee(c) => match c {
                EmployeeAvailability::Active => "active",
                EmployeeAvailability::OnVacation => "on_vacation",
                EmployeeAvailability::OnLeave => "on_leave",
                EmployeeAvailability::Unknown => "unknown",
            },
            Self::Part(c) => match c {
                StockLevel::InStock => "in_stock",
                StockLevel::Low => "low_stock",
                StockLevel::Critical => "critical_stock",
                StockLevel::Unknown => "unknown",
            },
            Self::Stage(c) => match c {
                StageState::Done => "done",
                StageState::InProgress => "in_progress",
                StageState::Planned => "planned",
                StageState::Unknown => "unknown",
            },
            Self::Test(c) => match c {
                TestVerdict::Passed => "passed",
                TestVerdict::Failed => "failed",
                TestVerdict::Pending => "pending",
                TestVerdict::Unknown => "unknown",
            },
        }
    }
}

/// Classify a literal status string of the given domain.
///
/// Never fails; unrecognised strings give the domain's unknown category.
#[must_use]
pub fn classify(domain: Domain, status: &str) -> Classification {
    let classification = match domain {
        Domain::Aircraft => Classification::Aircraft(AircraftPhase::classify(status)),
        Domain::Employee => Classification::Employee(EmployeeAvailability::classify(status)),
        Domain::Part => Classification::Part(StockLevel::classify(status)),
        Domain::Stage => Classification::Stage(StageState::classify(status)),
        Domain::Test => Classification::Test(TestVerdict::classify(status)),
    };
    if classification.is_unknown() {
        tracing::trace!(%domain, status, "Unrecognised status classified as unknown");
    }
    classification
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_classification() {
        assert_eq!(StageState::classify("Concluído"), StageState::Done);
        assert_eq!(StageState::classify("Em Andamento"), StageState::InProgress);
        assert_eq!(StageState::classify("Planejado"), StageState::Planned);
        assert_eq!(StageState::classify("Cancelado"), StageState::Unknown);
    }

    #[test]
    fn test_stage_icons_and_tones() {
        assert_eq!(StageState::Done.icon(), StageIcon::Check);
        assert_eq!(StageState::InProgress.icon(), StageIcon::Clock);
        assert_eq!(StageState::Planned.icon(), StageIcon::Circle);
        assert_eq!(StageState::Unknown.icon(), StageIcon::Circle);
        assert_eq!(StageState::Done.tone(), Tone::Green);
        assert_eq!(StageState::InProgress.tone(), Tone::Blue);
        assert_eq!(StageState::Unknown.tone(), Tone::Gray);
    }

    #[test]
    fn test_test_classification() {
        assert_eq!(TestVerdict::classify("Aprovado"), TestVerdict::Passed);
        assert_eq!(TestVerdict::classify("Reprovado"), TestVerdict::Failed);
        assert_eq!(TestVerdict::classify("Em Análise"), TestVerdict::Pending);
        assert_eq!(TestVerdict::classify("Em Analise"), TestVerdict::Unknown);
        assert_eq!(TestVerdict::Failed.tone(), Tone::Red);
        assert_eq!(TestVerdict::Pending.tone(), Tone::Yellow);
    }

    #[test]
    fn test_aircraft_part_employee_tones() {
        assert_eq!(AircraftPhase::classify("Em Produção").tone(), Tone::Blue);
        assert_eq!(AircraftPhase::classify("Testes").tone(), Tone::Yellow);
        assert_eq!(AircraftPhase::classify("Concluído").tone(), Tone::Green);
        assert_eq!(StockLevel::classify("Estoque Crítico").tone(), Tone::Red);
        assert_eq!(StockLevel::classify("Estoque Baixo").tone(), Tone::Yellow);
        assert_eq!(EmployeeAvailability::classify("Afastado").tone(), Tone::Red);
        assert_eq!(EmployeeAvailability::classify("Férias").tone(), Tone::Yellow);
    }

    #[test]
    fn test_classify_is_total() {
        let inputs = ["", " ", "concluído", "CONCLUÍDO", "???", "Em  Andamento", "\u{0}"];
        let domains = [
            Domain::Aircraft,
            Domain::Employee,
            Domain::Part,
            Domain::Stage,
            Domain::Test,
        ];
        for domain in domains {
            for input in inputs {
                let class = classify(domain, input);
                assert!(class.is_unknown(), "{domain} {input:?} gave {class:?}");
                assert_eq!(class.tone(), Tone::Gray);
                assert_eq!(class.tag(), "unknown");
            }
        }
    }

    #[test]
    fn test_classify_dispatches_by_domain() {
        // The same label means different things in different domains.
        assert_eq!(
            classify(Domain::Stage, "Concluído"),
            Classification::Stage(StageState::Done)
        );
        assert_eq!(
            classify(Domain::Aircraft, "Concluído"),
            Classification::Aircraft(AircraftPhase::Completed)
        );
        assert!(classify(Domain::Test, "Concluído").is_unknown());
    }

    #[test]
    fn test_classification_tags() {
        assert_eq!(classify(Domain::Stage, "Em Andamento").tag(), "in_progress");
        assert_eq!(classify(Domain::Part, "Estoque Baixo").tag(), "low_stock");
        assert_eq!(classify(Domain::Employee, "Férias").tag(), "on_vacation");
    }

    #[test]
    fn test_classification_serializes_with_domain_tag() {
        let json = serde_json::to_string(&classify(Domain::Test, "Aprovado")).unwrap();
        assert_eq!(json, r#"{"domain":"test","category":"passed"}"#);
    }

    #[test]
    fn test_category_tone_matches_classification() {
        for status in StageStatus::ALL {
            assert_eq!(status.tone(), StageState::from(*status).tone());
        }
        for result in TestResult::ALL {
            assert_eq!(result.tone(), TestVerdict::classify(result.label()).tone());
        }
    }

    #[test]
    fn test_glyphs() {
        assert_eq!(StageIcon::Check.glyph(), '✔');
        assert_eq!(StageIcon::Circle.glyph(), '○');
    }
}
