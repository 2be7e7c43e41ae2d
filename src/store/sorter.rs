//! In-place record sorting
//!
//! Sorts are stable. Descending order reverses the comparator rather than
//! the result, so records with equal keys keep their relative order in
//! both directions.

use std::cmp::Ordering;
use std::fmt;

use crate::record::{compare_names, Record};

/// Field to sort by
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Id,
    Name,
    Age,
    Salary,
}

impl SortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Id => "id",
            SortKey::Name => "name",
            SortKey::Age => "age",
            SortKey::Salary => "salary",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn from_ascending(ascending: bool) -> Self {
        if ascending {
            SortDirection::Asc
        } else {
            SortDirection::Desc
        }
    }
}

/// Key plus direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortSpec {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn asc(key: SortKey) -> Self {
        Self {
            key,
            direction: SortDirection::Asc,
        }
    }

    pub fn desc(key: SortKey) -> Self {
        Self {
            key,
            direction: SortDirection::Desc,
        }
    }
}

/// What a sort call did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOutcome {
    /// Nothing to sort
    Empty,
    Sorted { count: usize },
}

/// Sorts records in place
pub struct RecordSorter;

impl RecordSorter {
    pub fn sort(records: &mut [Record], spec: SortSpec) -> SortOutcome {
        if records.is_empty() {
            return SortOutcome::Empty;
        }

        records.sort_by(|a, b| {
            let ordering = Self::compare(a, b, spec.key);
            match spec.direction {
                SortDirection::Asc => ordering,
                SortDirection::Desc => ordering.reverse(),
            }
        });

        SortOutcome::Sorted {
            count: records.len(),
        }
    }

    fn compare(a: &Record, b: &Record, key: SortKey) -> Ordering {
        match key {
            SortKey::Id => a.id.cmp(&b.id),
            SortKey::Name => compare_names(&a.name, &b.name),
            SortKey::Age => a.age.cmp(&b.age),
            // Stored salaries are always finite
            SortKey::Salary => a.salary.partial_cmp(&b.salary).unwrap_or(Ordering::Equal),
        }
    }
}
