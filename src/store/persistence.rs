//! Flat-text record file format
//!
//! One record per line: `id name age salary`, single spaces between
//! fields, salary with exactly two fractional digits. The reader does not
//! care about lines; it consumes tokens separated by ASCII whitespace in
//! groups of four. Names are not escaped, so a name with embedded
//! whitespace does not survive a save/load cycle.
//!
//! Files are written as UTF-8. The reader works on raw bytes so that one
//! name in another encoding costs only its own entry.

use std::collections::HashSet;
use std::fmt;
use std::io::{self, Write};

use serde::Serialize;

use crate::record::{Record, MAX_AGE, MAX_SALARY, MIN_AGE, MIN_SALARY};

/// Writes records in storage order and returns how many were written.
pub fn write_records<W: Write>(writer: &mut W, records: &[Record]) -> io::Result<usize> {
    for record in records {
        writeln!(
            writer,
            "{} {} {} {:.2}",
            record.id, record.name, record.age, record.salary
        )?;
    }
    writer.flush()?;
    Ok(records.len())
}

/// Whether a name would split into several tokens on reload
pub fn breaks_format(name: &str) -> bool {
    name.bytes().any(|b| b.is_ascii_whitespace())
}

/// Why an entry was skipped
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SkipReason {
    InvalidId { id: i64 },
    /// Name bytes are not UTF-8; `name` is the lossy decoding
    InvalidName { name: String },
    InvalidAge { age: i64 },
    InvalidSalary { salary: f64 },
    DuplicateId { id: u32 },
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::InvalidId { id } => write!(f, "invalid id ({})", id),
            SkipReason::InvalidName { name } => write!(f, "name is not UTF-8 ({:?})", name),
            SkipReason::InvalidAge { age } => write!(f, "invalid age ({})", age),
            SkipReason::InvalidSalary { salary } => write!(f, "invalid salary ({})", salary),
            SkipReason::DuplicateId { id } => write!(f, "duplicate id ({})", id),
        }
    }
}

/// One skipped entry. Entries are numbered from 1 in file order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkippedEntry {
    pub entry: usize,
    pub reason: SkipReason,
}

/// Where and why parsing stopped before the end of the file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParseStop {
    /// Number of the entry that could not be parsed
    pub entry: usize,
    pub reason: String,
}

/// Outcome of a load.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct LoadReport {
    /// Complete entries parsed, accepted or not
    pub entries_read: usize,
    pub accepted: usize,
    pub skipped: Vec<SkippedEntry>,
    pub stopped: Option<ParseStop>,
}

impl LoadReport {
    pub fn skipped_count(&self) -> usize {
        self.entries_read - self.accepted
    }
}

/// Parsed file contents, not yet applied to a store
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedRecords {
    pub records: Vec<Record>,
    pub report: LoadReport,
}

/// Parses record file contents.
///
/// Invalid entries are skipped and logged. A token that is not a number
/// where one is expected, or a trailing incomplete entry, ends parsing;
/// everything accepted up to that point is kept.
pub fn parse_records(bytes: &[u8]) -> ParsedRecords {
    let mut tokens = bytes
        .split(|b| b.is_ascii_whitespace())
        .filter(|token| !token.is_empty());
    let mut records: Vec<Record> = Vec::new();
    let mut seen: HashSet<u32> = HashSet::new();
    let mut report = LoadReport::default();

    loop {
        let entry = report.entries_read + 1;
        let (id, name, age, salary) = match next_entry(&mut tokens) {
            Ok(Some(fields)) => fields,
            Ok(None) => break,
            Err(reason) => {
                log::warn!(
                    target: "LOAD_PARSE_STOPPED",
                    "entry {}: {}, ignoring the rest of the file",
                    entry,
                    reason
                );
                report.stopped = Some(ParseStop { entry, reason });
                break;
            }
        };
        report.entries_read = entry;

        match check_entry(id, name, age, salary, &seen) {
            Ok((id, name, age)) => {
                seen.insert(id);
                records.push(Record::new(id, name, age, salary));
                report.accepted += 1;
            }
            Err(reason) => {
                log::warn!(
                    target: "LOAD_ENTRY_SKIPPED",
                    "entry {}: {}, record skipped",
                    entry,
                    reason
                );
                report.skipped.push(SkippedEntry { entry, reason });
            }
        }
    }

    ParsedRecords { records, report }
}

type RawEntry<'a> = (i64, &'a [u8], i64, f64);

fn next_entry<'a, I>(tokens: &mut I) -> Result<Option<RawEntry<'a>>, String>
where
    I: Iterator<Item = &'a [u8]>,
{
    let id = match tokens.next() {
        Some(token) => token,
        None => return Ok(None),
    };
    let (name, age, salary) = match (tokens.next(), tokens.next(), tokens.next()) {
        (Some(name), Some(age), Some(salary)) => (name, age, salary),
        _ => return Err("incomplete entry at end of file".to_string()),
    };

    let id = parse_number::<i64>(id).ok_or_else(|| malformed("id", id))?;
    let age = parse_number::<i64>(age).ok_or_else(|| malformed("age", age))?;
    let salary = parse_number::<f64>(salary).ok_or_else(|| malformed("salary", salary))?;

    Ok(Some((id, name, age, salary)))
}

fn parse_number<T: std::str::FromStr>(token: &[u8]) -> Option<T> {
    std::str::from_utf8(token).ok()?.parse().ok()
}

fn malformed(field: &str, token: &[u8]) -> String {
    format!("malformed {} {:?}", field, String::from_utf8_lossy(token))
}

fn check_entry(
    id: i64,
    name: &[u8],
    age: i64,
    salary: f64,
    seen: &HashSet<u32>,
) -> Result<(u32, String, u32), SkipReason> {
    let id = match u32::try_from(id) {
        Ok(id) if id > 0 => id,
        _ => return Err(SkipReason::InvalidId { id }),
    };
    let name = match std::str::from_utf8(name) {
        Ok(name) => name.to_string(),
        Err(_) => {
            return Err(SkipReason::InvalidName {
                name: String::from_utf8_lossy(name).into_owned(),
            })
        }
    };
    let age = match u32::try_from(age) {
        Ok(a) if (MIN_AGE..=MAX_AGE).contains(&a) => a,
        _ => return Err(SkipReason::InvalidAge { age }),
    };
    if !(MIN_SALARY..=MAX_SALARY).contains(&salary) {
        return Err(SkipReason::InvalidSalary { salary });
    }
    if seen.contains(&id) {
        return Err(SkipReason::DuplicateId { id });
    }
    Ok((id, name, age))
}
