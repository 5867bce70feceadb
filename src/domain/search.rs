//! Search request types and the searchable-field allow-list.

use std::str::FromStr;

use crate::config::{SEARCH_FIELD_SEPARATOR, SEARCH_RESULT_LIMIT};

/// Escape character used in search LIKE patterns
pub const LIKE_ESCAPE: char = '!';

/// Columns a caller may search on. Anything else is dropped before a query
/// is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchField {
    Email,
    Name,
    Surname,
    Role,
}

impl FromStr for SearchField {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "email" => Ok(SearchField::Email),
            "name" => Ok(SearchField::Name),
            "surname" => Ok(SearchField::Surname),
            "role" => Ok(SearchField::Role),
            _ => Err(()),
        }
    }
}

impl SearchField {
    /// Parse a comma-separated field list, keeping allowed names in order
    /// without duplicates.
    pub fn parse_list(raw: &str) -> Vec<SearchField> {
        let mut fields = Vec::new();
        for name in raw.split(SEARCH_FIELD_SEPARATOR).map(str::trim) {
            match name.parse::<SearchField>() {
                Ok(field) if !fields.contains(&field) => fields.push(field),
                Ok(_) => {}
                Err(()) => tracing::debug!(field = name, "dropping non-searchable field"),
            }
        }
        fields
    }
}

/// A validated search: non-empty term, at least one allowed field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminSearch {
    pub term: String,
    pub fields: Vec<SearchField>,
    pub limit: u64,
}

impl AdminSearch {
    /// Build a search from raw query parameters.
    ///
    /// Returns `None` when either parameter is missing or empty, or when no
    /// listed field is searchable.
    pub fn from_params(query: Option<&str>, fields: Option<&str>) -> Option<Self> {
        let term = query.filter(|q| !q.is_empty())?;
        let fields = SearchField::parse_list(fields.filter(|f| !f.is_empty())?);
        if fields.is_empty() {
            return None;
        }

        Some(Self {
            term: term.to_string(),
            fields,
            limit: SEARCH_RESULT_LIMIT,
        })
    }

    /// LIKE pattern matching the term as a literal substring. Wildcards are
    /// escaped with [`LIKE_ESCAPE`]; case folding is left to the database so
    /// the pattern and the column go through the same `LOWER`.
    pub fn like_pattern(&self) -> String {
        let mut pattern = String::with_capacity(self.term.len() + 2);
        pattern.push('%');
        for c in self.term.chars() {
            if matches!(c, '%' | '_' | LIKE_ESCAPE) {
                pattern.push(LIKE_ESCAPE);
            }
            pattern.push(c);
        }
        pattern.push('%');
        pattern
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_list_filters_unknown_fields() {
        let fields = SearchField::parse_list("name, password,surname,removed,name");
        assert_eq!(fields, vec![SearchField::Name, SearchField::Surname]);
    }

    #[test]
    fn test_missing_params_yield_none() {
        assert!(AdminSearch::from_params(None, Some("name")).is_none());
        assert!(AdminSearch::from_params(Some("smith"), None).is_none());
        assert!(AdminSearch::from_params(Some(""), Some("name")).is_none());
        assert!(AdminSearch::from_params(Some("smith"), Some("")).is_none());
    }

    #[test]
    fn test_only_disallowed_fields_yield_none() {
        assert!(AdminSearch::from_params(Some("x"), Some("password,_id")).is_none());
    }

    #[test]
    fn test_valid_search() {
        let search = AdminSearch::from_params(Some("Smith"), Some("name,surname")).unwrap();
        assert_eq!(search.term, "Smith");
        assert_eq!(search.limit, SEARCH_RESULT_LIMIT);
        assert_eq!(search.like_pattern(), "%Smith%");
    }

    #[test]
    fn test_like_pattern_escapes_wildcards() {
        let search = AdminSearch::from_params(Some("50%_a!b\\c"), Some("name")).unwrap();
        assert_eq!(search.like_pattern(), "%50!%!_a!!b\\c%");
    }
}
