//! Free-text search over record sets.
//!
//! A record matches a query when at least one of the designated fields,
//! lowercased, contains the lowercased query. Lowercasing is locale-naive and
//! accents are not folded, so `"producao"` does not find `"Produção"`.
//! Filtering is stable: results keep the order of the input.

use tracing::debug;

use crate::domain::Record;

/// A prepared search query.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchQuery {
    needle: String,
}

impl SearchQuery {
    /// Prepare a query from user input.
    #[must_use]
    pub fn new(query: &str) -> Self {
        Self {
            needle: query.to_lowercase(),
        }
    }

    /// Whether the query is empty and therefore matches everything.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.needle.is_empty()
    }

    /// The lowercased query text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.needle
    }

    /// Whether any of `fields` on `record` contains the query.
    ///
    /// Fields the record does not have never match.
    #[must_use]
    pub fn matches<R: Record>(&self, record: &R, fields: &[&str]) -> bool {
        if self.is_empty() {
            return true;
        }
        fields.iter().any(|name| {
            record
                .field(name)
                .is_some_and(|value| value.to_lowercase().contains(&self.needle))
        })
    }
}

/// Keep the records where any of `fields` contains `query`, ignoring case.
///
/// An empty query keeps every record. The input is never modified and the
/// output is a subsequence of it in the original order.
#[must_use]
pub fn filter<'a, R: Record>(records: &'a [R], query: &str, fields: &[&str]) -> Vec<&'a R> {
    let search = SearchQuery::new(query);
    let domain = R::DOMAIN;
    let kept: Vec<&R> = records
        .iter()
        .filter(|record| search.matches(*record, fields))
        .collect();
    debug!(
        domain = %domain,
        query = search.as_str(),
        fields = fields.len(),
        kept = kept.len(),
        total = records.len(),
        "Filtered records"
    );
    kept
}

/// [`filter`] over the domain's default search fields.
#[must_use]
pub fn search<'a, R: Record>(records: &'a [R], query: &str) -> Vec<&'a R> {
    filter(records, query, R::SEARCH_FIELDS)
}

#[cfg(test)]
mod tests {
    use std::borrow::Cow;

    use super::*;
    use crate::domain::Domain;

    #[derive(Debug, PartialEq)]
    struct Plane {
        id: &'static str,
        model: &'static str,
    }

    impl Record for Plane {
        const DOMAIN: Domain = Domain::Aircraft;
        const SEARCH_FIELDS: &'static [&'static str] = &["id", "model"];

        fn id(&self) -> &str {
            self.id
        }

        fn field(&self, name: &str) -> Option<Cow<'_, str>> {
            match name {
                "id" => Some(Cow::Borrowed(self.id)),
                "model" => Some(Cow::Borrowed(self.model)),
                _ => None,
            }
        }
    }

    fn fleet() -> Vec<Plane> {
        vec![
            Plane {
                id: "A380-001",
                model: "Airbus A380",
            },
            Plane {
                id: "B737-045",
                model: "Boeing 737 MAX",
            },
            Plane {
                id: "E195-023",
                model: "Embraer E195-E2",
            },
            Plane {
                id: "A320-089",
                model: "Airbus A320neo",
            },
        ]
    }

    fn ids(records: &[&Plane]) -> Vec<&'static str> {
        records.iter().map(|p| p.id).collect()
    }

    #[test]
    fn test_case_insensitive_match_on_id() {
        let fleet = fleet();
        let kept = filter(&fleet, "a380", &["id", "model"]);
        assert_eq!(ids(&kept), vec!["A380-001"]);
    }

    #[test]
    fn test_match_on_any_field() {
        let fleet = fleet();
        let kept = filter(&fleet, "airbus", &["id", "model"]);
        assert_eq!(ids(&kept), vec!["A380-001", "A320-089"]);

        // Only searching ids, "airbus" matches nothing.
        assert!(filter(&fleet, "airbus", &["id"]).is_empty());
    }

    #[test]
    fn test_empty_query_is_identity() {
        let fleet = fleet();
        let kept = filter(&fleet, "", &["id"]);
        assert_eq!(kept.len(), fleet.len());
        for (kept, original) in kept.iter().zip(&fleet) {
            assert!(std::ptr::eq(*kept, original));
        }
    }

    #[test]
    fn test_empty_query_with_no_fields_keeps_all() {
        let fleet = fleet();
        assert_eq!(filter(&fleet, "", &[]).len(), 4);
    }

    #[test]
    fn test_no_fields_matches_nothing() {
        let fleet = fleet();
        assert!(filter(&fleet, "a", &[]).is_empty());
    }

    #[test]
    fn test_unknown_field_never_matches() {
        let fleet = fleet();
        assert!(filter(&fleet, "a", &["supplier"]).is_empty());
        assert_eq!(filter(&fleet, "a3", &["supplier", "id"]).len(), 2);
    }

    #[test]
    fn test_order_is_preserved() {
        let fleet = fleet();
        let kept = filter(&fleet, "0", &["id"]);
        assert_eq!(
            ids(&kept),
            vec!["A380-001", "B737-045", "E195-023", "A320-089"]
        );
        let kept = filter(&fleet, "e", &["model"]);
        assert_eq!(ids(&kept), vec!["B737-045", "E195-023", "A320-089"]);
    }

    #[test]
    fn test_empty_records() {
        let empty: Vec<Plane> = Vec::new();
        assert!(filter(&empty, "a380", &["id"]).is_empty());
        assert!(filter(&empty, "", &["id"]).is_empty());
    }

    #[test]
    fn test_accents_are_not_folded() {
        let records = vec![Plane {
            id: "X1",
            model: "Produção",
        }];
        assert!(filter(&records, "producao", &["model"]).is_empty());
        assert_eq!(filter(&records, "produção", &["model"]).len(), 1);
        assert_eq!(filter(&records, "PRODUÇÃO", &["model"]).len(), 1);
    }

    #[test]
    fn test_filter_is_idempotent() {
        let fleet = fleet();
        let first = filter(&fleet, "b", &["id", "model"]);
        let second = filter(&fleet, "b", &["id", "model"]);
        assert_eq!(first, second);
    }

    #[test]
    fn test_search_uses_default_fields() {
        let fleet = fleet();
        assert_eq!(ids(&search(&fleet, "MAX")), vec!["B737-045"]);
    }

    #[test]
    fn test_search_query_accessors() {
        let query = SearchQuery::new("Airbus");
        assert_eq!(query.as_str(), "airbus");
        assert!(!query.is_empty());
        assert!(SearchQuery::default().is_empty());
    }

    #[test]
    fn test_filter_sample_aircraft() {
        let catalog = crate::store::Catalog::sample().unwrap();
        let kept = filter(catalog.aircraft.records(), "a380", &["id", "model"]);
        let ids: Vec<&str> = kept.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["A380-001"]);
    }
}
