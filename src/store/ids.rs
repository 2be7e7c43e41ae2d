//! Id allocation
//!
//! Ids are positive and unique within a store. Deleted ids are reused:
//! a new record always receives the smallest free id the policy allows.

use std::collections::HashSet;

/// How new ids are chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IdPolicy {
    /// Smallest unused positive id, no upper bound on the scan
    #[default]
    Smallest,
    /// Smallest unused id below the ceiling; once 1..ceiling is full,
    /// max existing id + 1
    Ceiling(u32),
}

impl IdPolicy {
    /// Builds a policy from an optional ceiling.
    pub fn from_ceiling(ceiling: Option<u32>) -> Self {
        match ceiling {
            Some(n) => IdPolicy::Ceiling(n),
            None => IdPolicy::Smallest,
        }
    }

    /// Picks the id for a new record given the ids already in use.
    ///
    /// Returns `None` only when the id space is exhausted.
    pub fn allocate<I>(&self, used: I) -> Option<u32>
    where
        I: IntoIterator<Item = u32>,
    {
        let used: HashSet<u32> = used.into_iter().collect();

        match *self {
            IdPolicy::Smallest => (1..=u32::MAX).find(|id| !used.contains(id)),
            IdPolicy::Ceiling(ceiling) => (1..ceiling)
                .find(|id| !used.contains(id))
                .or_else(|| used.iter().copied().max().unwrap_or(0).checked_add(1)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_store_gets_one() {
        assert_eq!(IdPolicy::Smallest.allocate(std::iter::empty::<u32>()), Some(1));
        assert_eq!(IdPolicy::Ceiling(1000).allocate(std::iter::empty::<u32>()), Some(1));
    }

    #[test]
    fn test_fills_gaps_first() {
        assert_eq!(IdPolicy::Smallest.allocate([1, 2, 4]), Some(3));
        assert_eq!(IdPolicy::Smallest.allocate([2, 3]), Some(1));
    }

    #[test]
    fn test_no_ceiling_keeps_scanning() {
        let used: Vec<u32> = (1..=1200).collect();
        assert_eq!(IdPolicy::Smallest.allocate(used), Some(1201));
    }

    #[test]
    fn test_ceiling_falls_back_to_max_plus_one() {
        // 1..4 full, an outlier id sits far above
        let used = vec![1, 2, 3, 500];
        assert_eq!(IdPolicy::Ceiling(4).allocate(used), Some(501));
    }

    #[test]
    fn test_ceiling_ignores_ids_above_it_while_scanning() {
        let used = vec![1, 2000];
        assert_eq!(IdPolicy::Ceiling(1000).allocate(used), Some(2));
    }

    #[test]
    fn test_from_ceiling() {
        assert_eq!(IdPolicy::from_ceiling(None), IdPolicy::Smallest);
        assert_eq!(IdPolicy::from_ceiling(Some(1000)), IdPolicy::Ceiling(1000));
    }
}
