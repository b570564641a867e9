//! Search term matching over a row's searchable fields.

use super::field::Row;
use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;
use serde::{Deserialize, Serialize};

/// How a search term is matched against field text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchMode {
    /// Case-insensitive substring match.
    #[default]
    Substring,
    /// Skim-style fuzzy match over the lowercase field text.
    Fuzzy,
}

/// A prepared search term, built once per recompute.
///
/// Holds the lowercased term and, in fuzzy mode, the matcher instance so it is
/// not rebuilt for every row.
pub struct SearchMatcher {
    term: String,
    fuzzy: Option<SkimMatcherV2>,
}

impl SearchMatcher {
    /// Prepares `term` for matching.
    ///
    /// Returns `None` for an empty term, meaning every row passes.
    #[must_use]
    pub fn new(term: &str, mode: MatchMode) -> Option<Self> {
        if term.is_empty() {
            return None;
        }

        let fuzzy = match mode {
            MatchMode::Substring => None,
            MatchMode::Fuzzy => Some(SkimMatcherV2::default()),
        };

        Some(Self {
            term: term.to_lowercase(),
            fuzzy,
        })
    }

    /// Returns true if any of `fields` on `row` matches the term.
    ///
    /// Missing values never match. An empty field list matches nothing, so
    /// callers should skip filtering entirely when no fields are searchable.
    pub fn matches<R: Row>(&self, row: &R, fields: &[R::Field]) -> bool {
        fields.iter().any(|&field| {
            row.field(field).search_text().is_some_and(|text| match &self.fuzzy {
                Some(matcher) => matcher.fuzzy_match(&text, &self.term).is_some(),
                None => text.contains(&self.term),
            })
        })
    }
}

impl std::fmt::Debug for SearchMatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchMatcher")
            .field("term", &self.term)
            .field("fuzzy", &self.fuzzy.is_some())
            .finish()
    }
}
