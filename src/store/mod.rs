//! Record store subsystem for rosterdb
//!
//! Owns the ordered record collection and everything that operates on it:
//!
//! 1. Id allocation (smallest free id, optional ceiling)
//! 2. Add / edit / delete with validation before mutation
//! 3. Exact-match search by name, age or salary
//! 4. Stable in-place sorting by id, name, age or salary
//! 5. Save to and load from the flat-text record file
//!
//! # Invariants
//!
//! - Ids are unique and positive
//! - Storage order is insertion order until a sort changes it
//! - A failed operation leaves the store unchanged
//! - Load replaces the collection only after the file was read in full

mod errors;
mod filters;
mod ids;
mod persistence;
mod sorter;
mod store;

pub use errors::{StoreError, StoreResult};
pub use filters::{RecordFilter, RecordQuery};
pub use ids::IdPolicy;
pub use persistence::{
    parse_records, write_records, LoadReport, ParseStop, ParsedRecords, SkipReason, SkippedEntry,
};
pub use sorter::{RecordSorter, SortDirection, SortKey, SortOutcome, SortSpec};
pub use store::{EditValidation, RecordStore, StoreOptions};
