//! Record field validation
//!
//! Rules:
//! - name: 1..=50 characters, no digits, only Latin letters, Cyrillic
//!   letters А..я, space, hyphen, apostrophe
//! - age: 1..=150
//! - salary: 0..=1e9 (NaN never passes)
//!
//! Checks run in a fixed order and stop at the first failure.

use super::errors::{ValidationError, ValidationResult};
use super::types::{Field, MAX_AGE, MAX_NAME_CHARS, MAX_SALARY, MIN_AGE, MIN_SALARY};

/// Cyrillic capital А
const CYRILLIC_FIRST: char = '\u{0410}';
/// Cyrillic small я
const CYRILLIC_LAST: char = '\u{044F}';

/// Stateless validator for record fields.
pub struct RecordValidator;

impl RecordValidator {
    /// Validates every field of a new record in order: name, age, salary.
    pub fn validate_new(name: &str, age: u32, salary: f64) -> ValidationResult<()> {
        Self::validate_name(name)?;
        Self::validate_age(age)?;
        Self::validate_salary(salary)?;
        Ok(())
    }

    /// Check used by lenient edits:
    /// age must be positive and salary non-negative, name is not inspected.
    pub fn validate_lenient(age: u32, salary: f64) -> ValidationResult<()> {
        if age == 0 {
            return Err(ValidationError::out_of_range(
                Field::Age,
                "a positive age",
                age.to_string(),
            ));
        }
        if salary.is_nan() || salary < MIN_SALARY {
            return Err(ValidationError::out_of_range(
                Field::Salary,
                "a non-negative salary",
                salary.to_string(),
            ));
        }
        Ok(())
    }

    pub fn validate_name(name: &str) -> ValidationResult<()> {
        if name.is_empty() {
            return Err(ValidationError::empty_name());
        }

        let chars = name.chars().count();
        if chars > MAX_NAME_CHARS {
            return Err(ValidationError::name_too_long(MAX_NAME_CHARS, chars));
        }

        if name.chars().any(|c| c.is_ascii_digit()) {
            return Err(ValidationError::name_has_digits());
        }

        if let Some(bad) = name.chars().find(|c| !is_name_char(*c)) {
            return Err(ValidationError::name_bad_char(bad));
        }

        Ok(())
    }

    pub fn validate_age(age: u32) -> ValidationResult<()> {
        if !(MIN_AGE..=MAX_AGE).contains(&age) {
            return Err(ValidationError::out_of_range(
                Field::Age,
                format!("{}..={}", MIN_AGE, MAX_AGE),
                age.to_string(),
            ));
        }
        Ok(())
    }

    pub fn validate_salary(salary: f64) -> ValidationResult<()> {
        if !(MIN_SALARY..=MAX_SALARY).contains(&salary) {
            return Err(ValidationError::out_of_range(
                Field::Salary,
                format!("{:.0}..={:.0}", MIN_SALARY, MAX_SALARY),
                salary.to_string(),
            ));
        }
        Ok(())
    }
}

/// Characters allowed in a name.
pub fn is_name_char(c: char) -> bool {
    matches!(c, ' ' | '-' | '\'')
        || c.is_ascii_alphabetic()
        || (CYRILLIC_FIRST..=CYRILLIC_LAST).contains(&c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_record() {
        assert!(RecordValidator::validate_new("Anna", 30, 75000.0).is_ok());
        assert!(RecordValidator::validate_new("Анна-Мария", 1, 0.0).is_ok());
        assert!(RecordValidator::validate_new("O'Neil", 150, MAX_SALARY).is_ok());
    }

    #[test]
    fn test_empty_name() {
        let err = RecordValidator::validate_new("", 30, 1.0).unwrap_err();
        assert_eq!(err.field, Field::Name);
    }

    #[test]
    fn test_name_length_counts_chars_not_bytes() {
        // 50 Cyrillic letters are 100 bytes but still valid
        let name: String = std::iter::repeat('Ж').take(50).collect();
        assert!(RecordValidator::validate_name(&name).is_ok());

        let name: String = std::iter::repeat('a').take(51).collect();
        let err = RecordValidator::validate_name(&name).unwrap_err();
        assert!(err.reason.contains("51"));
    }

    #[test]
    fn test_name_with_digits() {
        let err = RecordValidator::validate_name("R2D2").unwrap_err();
        assert_eq!(err, ValidationError::name_has_digits());
    }

    #[test]
    fn test_name_with_disallowed_char() {
        let err = RecordValidator::validate_name("Anna!").unwrap_err();
        assert!(err.reason.contains("'!'"));

        // Ё sits outside the accepted Cyrillic block
        assert!(RecordValidator::validate_name("Ёжик").is_err());
    }

    #[test]
    fn test_first_failure_wins() {
        let err = RecordValidator::validate_new("", 0, -1.0).unwrap_err();
        assert_eq!(err.field, Field::Name);

        let err = RecordValidator::validate_new("Anna", 0, -1.0).unwrap_err();
        assert_eq!(err.field, Field::Age);

        let err = RecordValidator::validate_new("Anna", 30, -1.0).unwrap_err();
        assert_eq!(err.field, Field::Salary);
    }

    #[test]
    fn test_age_bounds() {
        assert!(RecordValidator::validate_age(0).is_err());
        assert!(RecordValidator::validate_age(1).is_ok());
        assert!(RecordValidator::validate_age(150).is_ok());
        assert!(RecordValidator::validate_age(151).is_err());
    }

    #[test]
    fn test_salary_bounds() {
        assert!(RecordValidator::validate_salary(-0.01).is_err());
        assert!(RecordValidator::validate_salary(0.0).is_ok());
        assert!(RecordValidator::validate_salary(1e9).is_ok());
        assert!(RecordValidator::validate_salary(1e9 + 1.0).is_err());
        assert!(RecordValidator::validate_salary(f64::NAN).is_err());
    }

    #[test]
    fn test_lenient_ignores_name_and_caps() {
        assert!(RecordValidator::validate_lenient(500, 5e12).is_ok());
        assert!(RecordValidator::validate_lenient(0, 1.0).is_err());
        assert!(RecordValidator::validate_lenient(1, -1.0).is_err());
    }
}
