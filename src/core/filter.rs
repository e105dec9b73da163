//! Variable-name filtering for annotation listings.

use regex::{Regex, RegexBuilder};

/// Returns true when a query should be treated as a regex even if the caller
/// did not ask for one explicitly: it is anchored (`^...`) or uses a
/// character class (`[...]`).
pub fn looks_like_regex(query: &str) -> bool {
    query.starts_with('^') || query.contains('[')
}

#[derive(Debug, Clone)]
enum Matcher {
    All,
    Literal { needle: String, case_sensitive: bool },
    Regex(Regex),
    /// The query was meant as a regex but did not compile.
    Nothing,
}

/// Filter on annotation variable names.
#[derive(Debug, Clone)]
pub struct NameFilter {
    matcher: Matcher,
}

impl Default for NameFilter {
    fn default() -> Self {
        Self {
            matcher: Matcher::All,
        }
    }
}

impl NameFilter {
    /// Build a filter. An empty query matches every name; an invalid regex
    /// matches none.
    pub fn new(query: &str, case_sensitive: bool, use_regex: bool) -> Self {
        let matcher = if query.is_empty() {
            Matcher::All
        } else if use_regex {
            RegexBuilder::new(query)
                .case_insensitive(!case_sensitive)
                .build()
                .map(Matcher::Regex)
                .unwrap_or(Matcher::Nothing)
        } else {
            Matcher::Literal {
                needle: if case_sensitive {
                    query.to_string()
                } else {
                    query.to_lowercase()
                },
                case_sensitive,
            }
        };

        Self { matcher }
    }

    /// True if the filter is known never to match anything.
    pub fn is_invalid(&self) -> bool {
        matches!(self.matcher, Matcher::Nothing)
    }

    pub fn matches(&self, name: &str) -> bool {
        match &self.matcher {
            Matcher::All => true,
            Matcher::Literal {
                needle,
                case_sensitive: true,
            } => name.contains(needle.as_str()),
            Matcher::Literal {
                needle,
                case_sensitive: false,
            } => name.to_lowercase().contains(needle.as_str()),
            Matcher::Regex(regex) => regex.is_match(name),
            Matcher::Nothing => false,
        }
    }
}
