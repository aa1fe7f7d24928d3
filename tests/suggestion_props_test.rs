//! Property tests for the suggestion indexer
//!
//! For arbitrary record sets and queries: results only contain matching
//! values, prefix matches precede substring matches, ties break
//! lexicographically, (field, value) pairs are unique, and the cap holds.

mod helpers;

use proptest::prelude::*;

use HubDesk::config::SearchConfig;
use HubDesk::search::{build_suggestions, SuggestionField};

use helpers::data::named_user;

fn config() -> SearchConfig {
    SearchConfig {
        min_query_length: 2,
        max_suggestions: 8,
    }
}

proptest! {
    #[test]
    fn suggestions_obey_the_contract(
        names in proptest::collection::vec("[A-Za-z]{1,10}", 0..30),
        query in "[A-Za-z]{2,5}",
    ) {
        let records: Vec<_> = names
            .iter()
            .enumerate()
            .map(|(i, name)| named_user(&format!("u{}", i), name))
            .collect();

        let suggestions = build_suggestions(&query, &records, &config());
        let needle = query.to_lowercase();

        // cap
        prop_assert!(suggestions.len() <= 8);

        // every suggestion is a real case-insensitive substring match
        for s in &suggestions {
            prop_assert!(s.value.to_lowercase().contains(&needle));
            if s.priority == 1 {
                prop_assert!(s.value.to_lowercase().starts_with(&needle));
            }
        }

        // prefix matches strictly precede substring matches, ties lexicographic
        for pair in suggestions.windows(2) {
            prop_assert!(pair[0].priority <= pair[1].priority);
            if pair[0].priority == pair[1].priority {
                prop_assert!(pair[0].value <= pair[1].value);
            }
        }

        // no duplicate (field, value) pairs
        let mut seen: std::collections::HashSet<(SuggestionField, &str)> =
            std::collections::HashSet::new();
        for s in &suggestions {
            prop_assert!(seen.insert((s.field, s.value.as_str())));
        }
    }

    #[test]
    fn short_queries_never_suggest(
        names in proptest::collection::vec("[A-Za-z]{1,10}", 0..10),
        query in "[A-Za-z]{0,1}",
    ) {
        let records: Vec<_> = names
            .iter()
            .enumerate()
            .map(|(i, name)| named_user(&format!("u{}", i), name))
            .collect();

        prop_assert!(build_suggestions(&query, &records, &config()).is_empty());
    }
}
