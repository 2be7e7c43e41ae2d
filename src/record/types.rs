//! Record type and field limits

use std::fmt;

/// Maximum name length, counted in characters
pub const MAX_NAME_CHARS: usize = 50;

/// Youngest accepted age
pub const MIN_AGE: u32 = 1;

/// Oldest accepted age
pub const MAX_AGE: u32 = 150;

/// Lowest accepted salary
pub const MIN_SALARY: f64 = 0.0;

/// Highest accepted salary
pub const MAX_SALARY: f64 = 1_000_000_000.0;

/// A single person entry.
///
/// Records are owned by the store. The id is assigned on insert and
/// never changes afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub id: u32,
    pub name: String,
    pub age: u32,
    pub salary: f64,
}

impl Record {
    pub fn new(id: u32, name: impl Into<String>, age: u32, salary: f64) -> Self {
        Self {
            id,
            name: name.into(),
            age,
            salary,
        }
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ID: {:<3} Name: {:<15} Age: {:<5} Salary: {:.2}",
            self.id, self.name, self.age, self.salary
        )
    }
}

/// Record fields that carry validation rules
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Id,
    Name,
    Age,
    Salary,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Id => "id",
            Field::Name => "name",
            Field::Age => "age",
            Field::Salary => "salary",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
