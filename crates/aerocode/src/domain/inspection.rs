use std::borrow::Cow;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{Categorized, Category, Domain, Record};
use crate::classify::{TestVerdict, Tone};

/// Outcome of a test or inspection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TestResult {
    /// Passed.
    #[serde(rename = "Aprovado")]
    Approved,
    /// Failed.
    #[serde(rename = "Reprovado")]
    Rejected,
    /// Still being evaluated.
    #[serde(rename = "Em Análise")]
    UnderReview,
}

impl Category for TestResult {
    const ALL: &'static [Self] = &[Self::Approved, Self::Rejected, Self::UnderReview];

    fn label(self) -> &'static str {
        match self {
            Self::Approved => "Aprovado",
            Self::Rejected => "Reprovado",
            Self::UnderReview => "Em Análise",
        }
    }

    fn tone(self) -> Tone {
        TestVerdict::from(self).tone()
    }
}

/// A test or quality inspection performed on an aircraft.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Inspection {
    /// Test id, e.g. `T001`.
    pub id: String,
    /// Test name.
    pub name: String,
    /// Id of the tested aircraft.
    pub aircraft: String,
    /// Test type (Motor, Sistemas, Estrutura, Eletrônica).
    #[serde(rename = "type")]
    pub kind: String,
    /// Date performed.
    pub date: NaiveDate,
    /// Outcome.
    pub result: TestResult,
    /// Inspector in charge.
    pub inspector: String,
    /// Free-form observations.
    pub notes: String,
}

impl Record for Inspection {
    const DOMAIN: Domain = Domain::Test;
    const SEARCH_FIELDS: &'static [&'static str] = &["name", "aircraft", "id"];

    fn id(&self) -> &str {
        &self.id
    }

    fn field(&self, name: &str) -> Option<Cow<'_, str>> {
        match name {
            "id" => Some(Cow::Borrowed(&self.id)),
            "name" => Some(Cow::Borrowed(&self.name)),
            "aircraft" => Some(Cow::Borrowed(&self.aircraft)),
            "type" => Some(Cow::Borrowed(&self.kind)),
            "date" => Some(Cow::Owned(self.date.to_string())),
            "result" => Some(Cow::Borrowed(self.result.label())),
            "inspector" => Some(Cow::Borrowed(&self.inspector)),
            "notes" => Some(Cow::Borrowed(&self.notes)),
            _ => None,
        }
    }
}

impl Categorized for Inspection {
    type Category = TestResult;
    const CATEGORY_FIELD: &'static str = "result";

    fn category(&self) -> TestResult {
        self.result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_field_is_named_result() {
        let json = r#"{"id":"T003","name":"Teste de Pressurização","aircraft":"A380-001",
            "type":"Estrutura","date":"2024-10-20","result":"Reprovado",
            "inspector":"Roberto Alves","notes":"Perda de pressão na seção 43."}"#;
        let test: Inspection = serde_json::from_str(json).unwrap();
        assert_eq!(test.result, TestResult::Rejected);
        assert_eq!(test.field("result").as_deref(), Some("Reprovado"));
        assert_eq!(test.field("status"), None);
        assert_eq!(test.field("date").as_deref(), Some("2024-10-20"));
    }
}
