//! Model and free-text filtering over library entries.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use crate::core::storage::PromptEntry;

/// Which models to keep when filtering the library.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ModelFilter {
    #[default]
    All,
    /// Exact, case-insensitive match on the entry's model.
    Model(String),
}

impl ModelFilter {
    pub fn matches(&self, entry: &PromptEntry) -> bool {
        match self {
            ModelFilter::All => true,
            ModelFilter::Model(model) => entry.model_or_empty().to_lowercase() == model.to_lowercase(),
        }
    }
}

impl FromStr for ModelFilter {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("all") {
            Ok(ModelFilter::All)
        } else {
            Ok(ModelFilter::Model(s.to_string()))
        }
    }
}

impl fmt::Display for ModelFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelFilter::All => f.write_str("all"),
            ModelFilter::Model(model) => f.write_str(model),
        }
    }
}

/// True when `term` (already lowercased) occurs in the name, description, a tag or the prompt.
fn matches_term(entry: &PromptEntry, term: &str) -> bool {
    entry.name.to_lowercase().contains(term)
        || entry.description.to_lowercase().contains(term)
        || entry.tags.iter().any(|t| t.to_lowercase().contains(term))
        || entry.prompt.to_lowercase().contains(term)
}

/// Keeps the entries that pass both the model filter and the search term, in their input order.
///
/// A blank search term matches everything.
pub fn filter(entries: &[PromptEntry], model: &ModelFilter, search_term: &str) -> Vec<PromptEntry> {
    let term = search_term.trim().to_lowercase();
    entries
        .iter()
        .filter(|e| model.matches(e))
        .filter(|e| term.is_empty() || matches_term(e, &term))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn entry(id: u64, name: &str, model: Option<&str>, tags: &[&str]) -> PromptEntry {
        PromptEntry {
            id,
            name: name.to_string(),
            description: format!("about {name}"),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            prompt: format!("Prompt body {id}"),
            model: model.map(str::to_string),
            created_at: Utc.timestamp_millis_opt(id as i64).unwrap(),
        }
    }

    fn sample() -> Vec<PromptEntry> {
        vec![
            entry(4, "Launch email", Some("ChatGPT"), &["Marketing"]),
            entry(3, "Bug triage", Some("claude"), &["engineering"]),
            entry(2, "Untargeted", None, &[]),
            entry(1, "Ad copy", Some("chatgpt"), &["ads", "Marketing"]),
        ]
    }

    fn ids(entries: &[PromptEntry]) -> Vec<u64> {
        entries.iter().map(|e| e.id).collect()
    }

    #[test]
    fn all_and_empty_term_is_identity() {
        let entries = sample();
        assert_eq!(filter(&entries, &ModelFilter::All, ""), entries);
    }

    #[test]
    fn model_filter_is_case_insensitive_exact_match() {
        let entries = sample();
        let filter_value: ModelFilter = "chatgpt".parse().unwrap();
        assert_eq!(ids(&filter(&entries, &filter_value, "")), vec![4, 1]);

        let partial: ModelFilter = "chat".parse().unwrap();
        assert!(filter(&entries, &partial, "").is_empty());
    }

    #[test]
    fn absent_model_never_matches_a_specific_filter() {
        let entries = sample();
        let empty = ModelFilter::Model(String::new());
        assert_eq!(ids(&filter(&entries, &empty, "")), vec![2]);
        assert!(!ModelFilter::Model("claude".into()).matches(&entries[2]));
        assert!(ModelFilter::All.matches(&entries[2]));
    }

    #[test]
    fn term_matches_tags_case_insensitively() {
        let entries = sample();
        assert_eq!(ids(&filter(&entries, &ModelFilter::All, "market")), vec![4, 1]);
    }

    #[test]
    fn term_matches_each_text_field() {
        let entries = sample();
        assert_eq!(ids(&filter(&entries, &ModelFilter::All, "TRIAGE")), vec![3]);
        assert_eq!(ids(&filter(&entries, &ModelFilter::All, "about untargeted")), vec![2]);
        assert_eq!(ids(&filter(&entries, &ModelFilter::All, "body 1")), vec![1]);
    }

    #[test]
    fn filters_compose_with_and() {
        let entries = sample();
        let chatgpt = ModelFilter::Model("CHATGPT".into());
        assert_eq!(ids(&filter(&entries, &chatgpt, " ads ")), vec![1]);
        assert!(filter(&entries, &chatgpt, "triage").is_empty());
    }

    #[test]
    fn sentinel_parses_in_any_case() {
        assert_eq!("ALL".parse::<ModelFilter>().unwrap(), ModelFilter::All);
        assert_eq!(ModelFilter::All.to_string(), "all");
        assert_eq!(
            " gemini ".parse::<ModelFilter>().unwrap(),
            ModelFilter::Model("gemini".into())
        );
    }
}
