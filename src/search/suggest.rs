//! Search-as-you-type suggestion indexer
//!
//! Given a free-text query and an in-memory record list, scans each record's
//! allowlisted string fields, ranks prefix matches above substring matches,
//! deduplicates by (field, value), sorts by priority then value, and caps
//! the result. Identifiers, secrets, and image URLs never enter the index.

use crate::config::SearchConfig;

/// Which record field a suggestion was drawn from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SuggestionField {
    Name,
    Email,
    Organization,
    Designation,
    Role,
}

impl SuggestionField {
    pub fn label(&self) -> &'static str {
        match self {
            SuggestionField::Name => "name",
            SuggestionField::Email => "email",
            SuggestionField::Organization => "organization",
            SuggestionField::Designation => "designation",
            SuggestionField::Role => "role",
        }
    }
}

/// Priority of a prefix match; substring matches rank below
const PRIORITY_PREFIX: u8 = 1;
/// Priority of a plain substring match
const PRIORITY_SUBSTRING: u8 = 2;

/// One ranked candidate produced by the indexer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    pub field: SuggestionField,
    pub value: String,
    pub record_id: String,
    pub priority: u8,
}

/// A record exposing its searchable string fields
pub trait Searchable {
    fn record_id(&self) -> &str;

    /// The allowlisted (field, value) pairs of this record
    fn searchable_fields(&self) -> Vec<(SuggestionField, &str)>;
}

impl Searchable for crate::models::User {
    fn record_id(&self) -> &str {
        &self.id
    }

    fn searchable_fields(&self) -> Vec<(SuggestionField, &str)> {
        let mut fields = vec![
            (SuggestionField::Name, self.name.as_str()),
            (SuggestionField::Email, self.email.as_str()),
        ];
        if let Some(organization) = &self.organization {
            fields.push((SuggestionField::Organization, organization.as_str()));
        }
        if let Some(designation) = &self.designation {
            fields.push((SuggestionField::Designation, designation.as_str()));
        }
        fields
    }
}

impl Searchable for crate::models::TeamMember {
    fn record_id(&self) -> &str {
        &self.id
    }

    fn searchable_fields(&self) -> Vec<(SuggestionField, &str)> {
        vec![
            (SuggestionField::Name, self.name.as_str()),
            (SuggestionField::Role, self.role.as_str()),
        ]
    }
}

/// Build the ranked suggestion list for a query over in-memory records.
///
/// Queries shorter than the configured minimum produce no suggestions.
pub fn build_suggestions<R: Searchable>(
    query: &str,
    records: &[R],
    config: &SearchConfig,
) -> Vec<Suggestion> {
    let trimmed = query.trim();
    if trimmed.chars().count() < config.min_query_length {
        return Vec::new();
    }
    let needle = trimmed.to_lowercase();

    let mut candidates: Vec<Suggestion> = Vec::new();
    for record in records {
        for (field, value) in record.searchable_fields() {
            let haystack = value.to_lowercase();
            if let Some(position) = haystack.find(&needle) {
                let priority = if position == 0 { PRIORITY_PREFIX } else { PRIORITY_SUBSTRING };
                candidates.push(Suggestion {
                    field,
                    value: value.to_string(),
                    record_id: record.record_id().to_string(),
                    priority,
                });
            }
        }
    }

    candidates.sort_by(|a, b| {
        a.priority
            .cmp(&b.priority)
            .then_with(|| a.value.cmp(&b.value))
    });

    // Dedupe on (field, value); first occurrence wins, which after the sort
    // is the highest-priority one
    let mut seen: std::collections::HashSet<(SuggestionField, String)> = std::collections::HashSet::new();
    candidates.retain(|s| seen.insert((s.field, s.value.clone())));

    candidates.truncate(config.max_suggestions);
    candidates
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AdminLevel, User};

    fn user(id: &str, name: &str, email: &str, organization: Option<&str>) -> User {
        User {
            id: id.to_string(),
            name: name.to_string(),
            email: email.to_string(),
            organization: organization.map(|s| s.to_string()),
            designation: None,
            phone: None,
            admin: AdminLevel::Member,
            created_at: None,
            updated_at: None,
        }
    }

    fn config() -> crate::config::SearchConfig {
        crate::config::SearchConfig {
            min_query_length: 2,
            max_suggestions: 8,
        }
    }

    #[test]
    fn test_prefix_matches_rank_before_substring_matches() {
        let records = vec![
            user("1", "Amit", "amit@x.io", None),
            user("2", "Amita", "amita@x.io", None),
            user("3", "Sam", "sam@x.io", None),
        ];
        let suggestions = build_suggestions("ami", &records, &config());

        let names: Vec<&str> = suggestions
            .iter()
            .filter(|s| s.field == SuggestionField::Name)
            .map(|s| s.value.as_str())
            .collect();
        assert_eq!(names, vec!["Amit", "Amita"]);
        assert!(!suggestions.iter().any(|s| s.value == "Sam"));
    }

    #[test]
    fn test_short_query_yields_nothing() {
        let records = vec![user("1", "Amit", "amit@x.io", None)];
        assert!(build_suggestions("a", &records, &config()).is_empty());
        assert!(build_suggestions("  ", &records, &config()).is_empty());
    }

    #[test]
    fn test_case_insensitive_matching() {
        let records = vec![user("1", "Widget Labs Founder", "f@widget.io", Some("WIDGET LABS"))];
        let suggestions = build_suggestions("widget", &records, &config());
        assert!(suggestions.iter().any(|s| s.field == SuggestionField::Organization));
    }

    #[test]
    fn test_duplicate_field_value_pairs_are_removed() {
        let records = vec![
            user("1", "Asha", "asha@one.io", Some("Widget Labs")),
            user("2", "Asha", "asha@two.io", Some("Widget Labs")),
        ];
        let suggestions = build_suggestions("asha", &records, &config());
        let name_count = suggestions
            .iter()
            .filter(|s| s.field == SuggestionField::Name && s.value == "Asha")
            .count();
        assert_eq!(name_count, 1);
    }

    #[test]
    fn test_result_capped_at_max() {
        let records: Vec<User> = (0..20)
            .map(|i| user(&format!("{}", i), &format!("Anil{:02}", i), &format!("anil{:02}@x.io", i), None))
            .collect();
        let suggestions = build_suggestions("anil", &records, &config());
        assert_eq!(suggestions.len(), 8);
    }

    #[test]
    fn test_identifiers_never_surface() {
        let records = vec![user("match-me", "Rhea", "rhea@x.io", None)];
        let suggestions = build_suggestions("match", &records, &config());
        assert!(suggestions.is_empty());
    }
}
