//! The record store
//!
//! An ordered, exclusively owned collection of records. Storage order is
//! insertion order until a sort rearranges it. Every mutating operation
//! either applies completely or leaves the store untouched.

use std::fs::{self, File};
use std::io::BufWriter;
use std::path::Path;

use crate::record::{Field, Record, RecordValidator, ValidationError};

use super::errors::{StoreError, StoreResult};
use super::filters::{RecordFilter, RecordQuery};
use super::ids::IdPolicy;
use super::persistence::{self, LoadReport};
use super::sorter::{RecordSorter, SortDirection, SortKey, SortOutcome, SortSpec};

/// Which checks `edit` runs before overwriting a record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditValidation {
    /// Same rules as `add`
    #[default]
    Full,
    /// Positive age and non-negative salary only; name is taken as is
    Lenient,
}

/// Store behavior switches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StoreOptions {
    pub id_policy: IdPolicy,
    pub edit_validation: EditValidation,
}

/// In-memory collection of person records.
#[derive(Debug)]
pub struct RecordStore {
    records: Vec<Record>,
    next_id: u32,
    options: StoreOptions,
}

impl Default for RecordStore {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordStore {
    pub fn new() -> Self {
        Self::with_options(StoreOptions::default())
    }

    pub fn with_options(options: StoreOptions) -> Self {
        Self {
            records: Vec::new(),
            next_id: 1,
            options,
        }
    }

    pub fn options(&self) -> StoreOptions {
        self.options
    }

    /// Records in current storage order
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// One past the highest id handed out or loaded so far
    pub fn next_id(&self) -> u32 {
        self.next_id
    }

    pub fn exists(&self, id: u32) -> bool {
        self.records.iter().any(|r| r.id == id)
    }

    pub fn get(&self, id: u32) -> Option<&Record> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Copy of all records ordered by ascending id; storage order is kept.
    pub fn sorted_by_id(&self) -> Vec<Record> {
        let mut copy = self.records.clone();
        copy.sort_by_key(|r| r.id);
        copy
    }

    /// Adds a record and returns its newly assigned id.
    ///
    /// # Errors
    ///
    /// `StoreError::Validation` naming the first field that failed.
    pub fn add(&mut self, name: &str, age: u32, salary: f64) -> StoreResult<u32> {
        RecordValidator::validate_new(name, age, salary)?;

        let id = self
            .options
            .id_policy
            .allocate(self.records.iter().map(|r| r.id))
            .ok_or_else(|| ValidationError::new(Field::Id, "no free id left"))?;

        self.records.push(Record::new(id, name, age, salary));
        self.next_id = self.next_id.max(id.saturating_add(1));

        log::debug!(target: "RECORD_ADDED", "id={} name={}", id, name);
        Ok(id)
    }

    /// Replaces name, age and salary of an existing record in place.
    ///
    /// Validation runs before the lookup, so an invalid edit of a missing
    /// id reports the validation failure.
    pub fn edit(&mut self, id: u32, name: &str, age: u32, salary: f64) -> StoreResult<()> {
        match self.options.edit_validation {
            EditValidation::Full => RecordValidator::validate_new(name, age, salary)?,
            EditValidation::Lenient => RecordValidator::validate_lenient(age, salary)?,
        }

        let record = self
            .records
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| StoreError::not_found(id))?;

        record.name = name.to_string();
        record.age = age;
        record.salary = salary;

        log::debug!(target: "RECORD_UPDATED", "id={}", id);
        Ok(())
    }

    /// Removes a record, keeping the order of the others, and returns it.
    pub fn delete(&mut self, id: u32) -> StoreResult<Record> {
        let pos = self
            .records
            .iter()
            .position(|r| r.id == id)
            .ok_or_else(|| StoreError::not_found(id))?;

        let removed = self.records.remove(pos);
        log::debug!(target: "RECORD_DELETED", "id={}", id);
        Ok(removed)
    }

    pub fn search(&self, query: &RecordQuery) -> Vec<Record> {
        RecordFilter::apply(&self.records, query)
    }

    pub fn search_by_name(&self, name: &str) -> Vec<Record> {
        self.search(&RecordQuery::name(name))
    }

    pub fn search_by_age(&self, age: u32) -> Vec<Record> {
        self.search(&RecordQuery::Age(age))
    }

    pub fn search_by_salary(&self, salary: f64) -> Vec<Record> {
        self.search(&RecordQuery::Salary(salary))
    }

    /// Reorders storage in place. Stable; no-op on an empty store.
    pub fn sort(&mut self, spec: SortSpec) -> SortOutcome {
        let outcome = RecordSorter::sort(&mut self.records, spec);
        log::debug!(
            target: "RECORDS_SORTED",
            "key={} direction={:?} outcome={:?}",
            spec.key,
            spec.direction,
            outcome
        );
        outcome
    }

    pub fn sort_by_name(&mut self, ascending: bool) -> SortOutcome {
        self.sort_by_key(SortKey::Name, ascending)
    }

    pub fn sort_by_age(&mut self, ascending: bool) -> SortOutcome {
        self.sort_by_key(SortKey::Age, ascending)
    }

    pub fn sort_by_salary(&mut self, ascending: bool) -> SortOutcome {
        self.sort_by_key(SortKey::Salary, ascending)
    }

    pub fn sort_by_id(&mut self, ascending: bool) -> SortOutcome {
        self.sort_by_key(SortKey::Id, ascending)
    }

    fn sort_by_key(&mut self, key: SortKey, ascending: bool) -> SortOutcome {
        self.sort(SortSpec {
            key,
            direction: SortDirection::from_ascending(ascending),
        })
    }

    /// Writes every record to `path`, replacing its contents.
    ///
    /// Returns the number of records written.
    pub fn save(&self, path: &Path) -> StoreResult<usize> {
        for record in self.records.iter().filter(|r| persistence::breaks_format(&r.name)) {
            log::warn!(
                target: "SAVE_NAME_NOT_PORTABLE",
                "record {} has whitespace in its name and will not reload intact",
                record.id
            );
        }

        let file = File::create(path).map_err(|e| StoreError::io(path, e))?;
        let mut writer = BufWriter::new(file);
        let written = persistence::write_records(&mut writer, &self.records)
            .map_err(|e| StoreError::io(path, e))?;

        log::info!(
            target: "RECORDS_SAVED",
            "{} records written to {}",
            written,
            path.display()
        );
        Ok(written)
    }

    /// Replaces the whole collection with the records in `path`.
    ///
    /// The store is only touched after the file was read in full. Invalid
    /// entries are skipped and listed in the report; next-id becomes one
    /// past the highest loaded id, or 1 when nothing was loaded.
    pub fn load(&mut self, path: &Path) -> StoreResult<LoadReport> {
        let bytes = fs::read(path).map_err(|e| StoreError::io(path, e))?;
        let parsed = persistence::parse_records(&bytes);

        self.records = parsed.records;
        self.next_id = self
            .records
            .iter()
            .map(|r| r.id)
            .max()
            .map_or(1, |max| max.saturating_add(1));

        let report = parsed.report;
        log::info!(
            target: "RECORDS_LOADED",
            "{} of {} entries loaded from {}",
            report.accepted,
            report.entries_read,
            path.display()
        );
        Ok(report)
    }
}
