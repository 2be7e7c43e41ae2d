//! Exact-match record filtering
//!
//! Linear scan, no coercion, no tolerance on floating-point salaries.
//! Matches keep storage order.

use crate::record::Record;

/// A single-field equality query.
#[derive(Debug, Clone, PartialEq)]
pub enum RecordQuery {
    Name(String),
    Age(u32),
    Salary(f64),
}

impl RecordQuery {
    pub fn name(name: impl Into<String>) -> Self {
        RecordQuery::Name(name.into())
    }
}

/// Evaluates queries against records
pub struct RecordFilter;

impl RecordFilter {
    /// Checks if a record matches the query
    pub fn matches(record: &Record, query: &RecordQuery) -> bool {
        match query {
            RecordQuery::Name(name) => record.name == *name,
            RecordQuery::Age(age) => record.age == *age,
            RecordQuery::Salary(salary) => record.salary == *salary,
        }
    }

    /// Returns clones of every matching record, in input order
    pub fn apply(records: &[Record], query: &RecordQuery) -> Vec<Record> {
        records
            .iter()
            .filter(|r| Self::matches(r, query))
            .cloned()
            .collect()
    }
}
