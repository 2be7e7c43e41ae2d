//! Name collation
//!
//! Only Cyrillic capitals А..Я (U+0410..U+042F) are folded, each to its
//! small letter at a fixed offset of 0x20. Every other character, Latin
//! included, compares by raw code point, so "B" sorts before "a".

use std::cmp::Ordering;

const UPPER_FIRST: u32 = 0x0410;
const UPPER_LAST: u32 = 0x042F;
const FOLD_OFFSET: u32 = 0x20;

/// Folds a single character.
pub fn fold_char(c: char) -> char {
    let cp = c as u32;
    if (UPPER_FIRST..=UPPER_LAST).contains(&cp) {
        // Target range U+0430..U+044F holds only valid scalar values
        char::from_u32(cp + FOLD_OFFSET).unwrap_or(c)
    } else {
        c
    }
}

/// Compares two names over their folded character sequences.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    a.chars().map(fold_char).cmp(b.chars().map(fold_char))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fold_cyrillic_capitals() {
        assert_eq!(fold_char('А'), 'а');
        assert_eq!(fold_char('Я'), 'я');
        let folded: String = "ИВАН".chars().map(fold_char).collect();
        assert_eq!(folded, "иван");
    }

    #[test]
    fn test_other_chars_untouched() {
        assert_eq!(fold_char('A'), 'A');
        assert_eq!(fold_char('Ё'), 'Ё');
        assert_eq!(fold_char('-'), '-');
    }

    #[test]
    fn test_compare_case_insensitive_for_cyrillic() {
        assert_eq!(compare_names("анна", "АННА"), Ordering::Equal);
        assert_eq!(compare_names("Анна", "иван"), Ordering::Less);
        assert_eq!(compare_names("Сергей", "анна"), Ordering::Greater);
    }

    #[test]
    fn test_compare_latin_by_code_point() {
        assert_eq!(compare_names("Bob", "alice"), Ordering::Less);
        assert_eq!(compare_names("zed", "Анна"), Ordering::Less);
    }

    #[test]
    fn test_prefix_sorts_first() {
        assert_eq!(compare_names("Ан", "Анна"), Ordering::Less);
    }
}
