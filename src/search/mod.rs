//! Client-side search module
//!
//! The suggestion indexer behind the admin search boxes.

pub mod suggest;

pub use suggest::{Suggestion, SuggestionField, Searchable, build_suggestions};
