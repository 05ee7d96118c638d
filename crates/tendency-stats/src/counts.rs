//! Distinct values with their occurrence counts.

/// Distinct values in ascending order, each with a non-zero count.
///
/// This is the compact form of a multiset of observations: the order
/// statistics and modal values of `N` observations only need the distinct
/// values and how often each occurs, so grouped data never has to be expanded
/// into `N` separate numbers.
///
/// # Examples
///
/// ```
/// use tendency_stats::distribution::Distribution;
///
/// let dist = Distribution::build(&["20-30", "0-10", "10-20"], &[2, 1, 0]).unwrap();
/// let counts = dist.value_counts().unwrap();
/// assert_eq!(counts.entries(), [(5.0, 1), (25.0, 2)]);
/// assert_eq!(counts.total(), 3);
/// assert_eq!(counts.value_at(2), 25.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ValueCounts {
    entries: Vec<(f64, u64)>,
    total: u64,
}

impl ValueCounts {
    /// Builds the table from `(value, count)` pairs in any order.
    ///
    /// Equal values are merged and zero counts dropped. Returns `None` when
    /// no value has a non-zero count. The caller guarantees that the counts
    /// sum to at most `u64::MAX`.
    pub(crate) fn from_pairs<I>(pairs: I) -> Option<Self>
    where
        I: IntoIterator<Item = (f64, u64)>,
    {
        let mut pairs = pairs
            .into_iter()
            .filter(|&(_, count)| count > 0)
            .collect::<Vec<_>>();
        pairs.sort_by(|a, b| a.0.total_cmp(&b.0));

        let mut entries: Vec<(f64, u64)> = Vec::with_capacity(pairs.len());
        for (value, count) in pairs {
            match entries.last_mut() {
                Some((last, last_count)) if *last == value => *last_count += count,
                _ => entries.push((value, count)),
            }
        }
        if entries.is_empty() {
            return None;
        }
        let total = entries.iter().map(|&(_, count)| count).sum();
        Some(Self { entries, total })
    }

    /// Run-length counts of a non-empty slice sorted in ascending order.
    pub(crate) fn from_sorted(sorted_values: &[f64]) -> Self {
        debug_assert!(!sorted_values.is_empty(), "values must not be empty");
        debug_assert!(
            sorted_values.is_sorted_by(|a, b| a <= b),
            "values must be sorted in ascending order"
        );
        let mut entries: Vec<(f64, u64)> = vec![];
        for &v in sorted_values {
            match entries.last_mut() {
                Some((last, count)) if *last == v => *count += 1,
                _ => entries.push((v, 1)),
            }
        }
        Self {
            entries,
            total: sorted_values.len() as u64,
        }
    }

    /// `(value, count)` pairs, ascending by value.
    #[must_use]
    pub fn entries(&self) -> &[(f64, u64)] {
        &self.entries
    }

    /// The number of observations, `Σ count`.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.total
    }

    #[must_use]
    pub fn min(&self) -> f64 {
        self.entries[0].0
    }

    #[must_use]
    pub fn max(&self) -> f64 {
        self.entries[self.entries.len() - 1].0
    }

    /// The observation at 1-based `position` in ascending order.
    ///
    /// Positions past the end resolve to the largest value.
    #[must_use]
    pub fn value_at(&self, position: u64) -> f64 {
        let mut cumulative = 0;
        for &(value, count) in &self.entries {
            cumulative += count;
            if cumulative >= position {
                return value;
            }
        }
        self.max()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_sorted_run_lengths() {
        let counts = ValueCounts::from_sorted(&[1.0, 2.0, 2.0, 5.0, 5.0, 5.0]);
        assert_eq!(counts.entries(), [(1.0, 1), (2.0, 2), (5.0, 3)]);
        assert_eq!(counts.total(), 6);
        assert_eq!((counts.min(), counts.max()), (1.0, 5.0));
    }

    #[test]
    fn test_from_pairs_merges_and_drops_zero_counts() {
        let counts = ValueCounts::from_pairs([(3.0, 2), (1.0, 0), (3.0, 1), (-1.0, 4)]).unwrap();
        assert_eq!(counts.entries(), [(-1.0, 4), (3.0, 3)]);
        assert!(ValueCounts::from_pairs([(1.0, 0)]).is_none());
    }

    #[test]
    fn test_value_at_large_counts() {
        let counts = ValueCounts::from_pairs([(5.0, 3_000_000_000), (15.0, 2)]).unwrap();
        assert_eq!(counts.value_at(1), 5.0);
        assert_eq!(counts.value_at(3_000_000_000), 5.0);
        assert_eq!(counts.value_at(3_000_000_001), 15.0);
        assert_eq!(counts.value_at(u64::MAX), 15.0);
    }
}
