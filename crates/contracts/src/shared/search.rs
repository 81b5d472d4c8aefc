//! Free text search for list endpoints.
//!
//! The rule engine service accepts an RSQL expression in the `search` query
//! parameter. The console searches the primary field of an entity together
//! with `description` using the `=like=` operator; the comma joins both
//! comparisons.

use std::fmt;
use thiserror::Error;

/// Message shown under the search box when a character is rejected
pub const SEARCH_CHARSET_MESSAGE: &str = "Only characters A-Z, a-z, 0-9, and * are allowed.";

/// Field always searched next to the primary key
pub const DESCRIPTION_FIELD: &str = "description";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    #[error("Only characters A-Z, a-z, 0-9, and * are allowed.")]
    InvalidCharacter(char),
}

fn is_allowed(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '*' | ',' | '-')
}

/// Validated search input. May be empty, meaning "no filter".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchTerm(String);

impl SearchTerm {
    pub fn parse(input: &str) -> Result<Self, SearchError> {
        match input.chars().find(|c| !is_allowed(*c)) {
            Some(c) => Err(SearchError::InvalidCharacter(c)),
            None => Ok(Self(input.to_string())),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// `{key}=like={term},description=like={term}`, or `None` for an empty term
    pub fn filter_expression(&self, search_key: &str) -> Option<String> {
        if self.is_empty() {
            return None;
        }
        Some(format!(
            "{key}=like={v},{desc}=like={v}",
            key = search_key,
            desc = DESCRIPTION_FIELD,
            v = self.0
        ))
    }
}

impl fmt::Display for SearchTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allowed_charset() {
        for input in ["", "abc", "ABC-123", "*foo*", "a,b", "Z9-*,"] {
            assert!(SearchTerm::parse(input).is_ok(), "{input} should be accepted");
        }
    }

    #[test]
    fn test_rejected_characters() {
        for (input, bad) in [("a b", ' '), ("foo=", '='), ("x;y", ';'), ("é", 'é'), ("a_b", '_')] {
            assert_eq!(
                SearchTerm::parse(input),
                Err(SearchError::InvalidCharacter(bad)),
                "{input}"
            );
        }
    }

    #[test]
    fn test_error_message_matches_ui_text() {
        let err = SearchTerm::parse("a b").unwrap_err();
        assert_eq!(err.to_string(), SEARCH_CHARSET_MESSAGE);
    }

    #[test]
    fn test_filter_expression_combines_key_and_description() {
        let term = SearchTerm::parse("pay*").unwrap();
        assert_eq!(
            term.filter_expression("name").as_deref(),
            Some("name=like=pay*,description=like=pay*")
        );
        assert_eq!(SearchTerm::default().filter_expression("name"), None);
    }
}
