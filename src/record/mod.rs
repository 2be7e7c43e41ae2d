//! Record model for rosterdb
//!
//! A record is one person entry: id, name, age, salary. This module owns
//! the field limits, the validation rules and the name collation used by
//! the store. It does not depend on any console or locale state.

mod collation;
mod errors;
mod types;
mod validator;

pub use collation::{compare_names, fold_char};
pub use errors::{ValidationError, ValidationResult};
pub use types::{Field, Record, MAX_AGE, MAX_NAME_CHARS, MAX_SALARY, MIN_AGE, MIN_SALARY};
pub use validator::{is_name_char, RecordValidator};
