// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! The two views and how record URLs map onto them.

use std::fmt;

use crate::record::Record;

/// Trailing path segment of a record URL: `https://swapi.dev/api/people/4/` → `4`.
pub fn record_id(url: &str) -> Option<&str> {
    let path = url.split(['?', '#']).next().unwrap_or(url);
    path.trim_end_matches('/')
        .rsplit('/')
        .next()
        .filter(|seg| !seg.is_empty() && !seg.contains(':'))
}

/// Logical view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// Paginated table at `/`.
    List,
    /// One record at `/character/{id}`.
    Detail(String),
}

impl Route {
    /// Parse a route path. Unknown paths yield `None`.
    pub fn parse(path: &str) -> Option<Self> {
        let trimmed = path.trim_matches('/');
        if trimmed.is_empty() {
            return Some(Self::List);
        }
        match trimmed.split_once('/') {
            Some(("character", id)) if !id.is_empty() && !id.contains('/') => {
                Some(Self::Detail(id.to_owned()))
            }
            _ => None,
        }
    }

    /// Detail route for a listed record.
    pub fn for_record(record: &Record) -> Option<Self> {
        record_id(&record.url).map(|id| Self::Detail(id.to_owned()))
    }

    /// Path form of this route.
    pub fn path(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::List => f.write_str("/"),
            Self::Detail(id) => write!(f, "/character/{id}"),
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    #[test]
    fn id_is_trailing_segment() {
        assert_eq!(record_id("https://api.example/people/7/"), Some("7"));
        assert_eq!(record_id("https://swapi.dev/api/people/42"), Some("42"));
        assert_eq!(record_id("https://swapi.dev/api/people/42/?format=json"), Some("42"));
    }

    #[test]
    fn degenerate_urls_have_no_id() {
        assert_eq!(record_id(""), None);
        assert_eq!(record_id("/"), None);
        assert_eq!(record_id("https://"), None);
    }

    #[test]
    fn parse_and_print_agree() {
        assert_eq!(Route::parse("/"), Some(Route::List));
        assert_eq!(Route::parse(""), Some(Route::List));
        let detail = Route::parse("/character/4").unwrap();
        assert_eq!(detail, Route::Detail("4".into()));
        assert_eq!(detail.path(), "/character/4");
        assert_eq!(Route::parse("/character/"), None);
        assert_eq!(Route::parse("/planets/1"), None);
    }

    #[test]
    fn record_links_to_its_detail_route() {
        let record = Record {
            url: "https://swapi.dev/api/people/13/".into(),
            ..Record::default()
        };
        assert_eq!(Route::for_record(&record), Some(Route::Detail("13".into())));
    }
}
