use serde::Serialize;
use std::fmt;

/// A trimmed, non-empty city name (optionally with state), e.g. "Boston, MA".
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct SearchQuery(String);

impl SearchQuery {
    /// Trim the raw input. Returns `None` for empty or whitespace-only text.
    pub fn parse(text: &str) -> Option<Self> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SearchQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// True iff the trimmed input is non-empty. Drives the submit control on every keystroke.
pub fn validate_input(text: &str) -> bool {
    !text.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_input() {
        assert!(validate_input("Boston"));
        assert!(validate_input("  Boston, MA  "));
        assert!(!validate_input(""));
        assert!(!validate_input("   "));
        assert!(!validate_input("\t\n"));
    }

    #[test]
    fn test_parse_trims() {
        let query = SearchQuery::parse("  Arlington, MA \n").unwrap();
        assert_eq!(query.as_str(), "Arlington, MA");
        assert_eq!(query.to_string(), "Arlington, MA");
    }

    #[test]
    fn test_parse_rejects_blank() {
        assert_eq!(SearchQuery::parse(""), None);
        assert_eq!(SearchQuery::parse(" \t "), None);
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let query = SearchQuery::parse("Salem").unwrap();
        assert_eq!(serde_json::to_string(&query).unwrap(), "\"Salem\"");
    }
}
