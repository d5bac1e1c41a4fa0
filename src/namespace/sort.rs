//! Sort keys and ordering for listing snapshots.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use thiserror::Error;

/// Key a listing is sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// Lexicographic order of names.
    #[default]
    Name,
    /// Creation timestamp.
    Created,
}

impl SortKey {
    /// Get the key as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Name => "name",
            SortKey::Created => "created",
        }
    }
}

/// Direction a listing is sorted in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Ascending.
    #[default]
    Asc,
    /// Descending.
    Desc,
}

impl SortOrder {
    /// Get the order as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

/// Error returned when parsing a sort key or order fails.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown sort value: {0}")]
pub struct ParseSortError(String);

impl FromStr for SortKey {
    type Err = ParseSortError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(SortKey::Name),
            "created" => Ok(SortKey::Created),
            _ => Err(ParseSortError(s.to_string())),
        }
    }
}

impl FromStr for SortOrder {
    type Err = ParseSortError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(SortOrder::Asc),
            "desc" => Ok(SortOrder::Desc),
            _ => Err(ParseSortError(s.to_string())),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Entities that can appear in a sorted listing.
pub trait Sortable {
    /// Name used by [`SortKey::Name`].
    fn sort_name(&self) -> &str;
    /// Timestamp used by [`SortKey::Created`].
    fn sort_created(&self) -> DateTime<Utc>;
}

fn compare<T: Sortable>(a: &T, b: &T, key: SortKey) -> Ordering {
    match key {
        SortKey::Name => a.sort_name().cmp(b.sort_name()),
        // Names are unique within a parent, so this makes equal timestamps deterministic.
        SortKey::Created => a
            .sort_created()
            .cmp(&b.sort_created())
            .then_with(|| a.sort_name().cmp(b.sort_name())),
    }
}

/// Sort a materialized snapshot in place.
pub fn sort_snapshot<T: Sortable>(items: &mut [&T], key: SortKey, order: SortOrder) {
    items.sort_by(|a, b| {
        let ordering = compare(*a, *b, key);
        match order {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    });
}
