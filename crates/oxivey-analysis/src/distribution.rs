//! Participant age distribution over ten-year bins
//!
//! Ages are counted into the fixed decade bins `[0, 9]`, `[10, 19]`, ...,
//! `[90, 99]`. Participants without a usable age, or with an age outside
//! every bin, are left out of the histogram.

use std::array;

use oxivey_stats::histogram::Histogram;

use crate::record::Record;

/// Number of ten-year age bins.
pub const AGE_BIN_COUNT: usize = 10;

/// Participant counts per ten-year age bin.
///
/// # Examples
///
/// ```
/// use oxivey_analysis::{distribution::AgeDistribution, record::Record};
///
/// let records = vec![
///     Record { age: Some(7.0), ..Record::default() },
///     Record { age: Some(39.0), ..Record::default() },
///     Record { age: Some(30.0), ..Record::default() },
///     Record { age: None, ..Record::default() },
/// ];
/// let distribution = AgeDistribution::from_records(&records);
/// assert_eq!(distribution.counts[0], 1);
/// assert_eq!(distribution.counts[3], 2);
/// assert_eq!(distribution.total_counted(), 3);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct AgeDistribution {
    /// Participants counted per bin, in ascending bin order.
    pub counts: [u64; AGE_BIN_COUNT],
    /// The decade boundaries `0.0, 10.0, ..., 100.0` delimiting the bins.
    pub edges: [f64; AGE_BIN_COUNT + 1],
}

impl AgeDistribution {
    /// Counts the records' ages into the decade bins.
    #[must_use]
    #[expect(clippy::cast_precision_loss)]
    pub fn from_records(records: &[Record]) -> Self {
        let ranges = (0..AGE_BIN_COUNT).map(|bin| {
            let lower = (bin * 10) as f64;
            lower..=lower + 9.0
        });
        let ages = records.iter().filter_map(|record| record.age);
        let histogram = Histogram::from_ranges(ranges, ages);

        let mut counts = [0; AGE_BIN_COUNT];
        for (count, bin) in counts.iter_mut().zip(&histogram.bins) {
            *count = bin.count;
        }
        let edges = array::from_fn(|index| (index * 10) as f64);
        Self { counts, edges }
    }

    /// Returns the number of participants counted into any bin.
    #[must_use]
    pub fn total_counted(&self) -> u64 {
        self.counts.iter().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record_with_age(age: Option<f64>) -> Record {
        Record {
            age,
            ..Record::default()
        }
    }

    #[test]
    fn test_bin_boundaries_are_inclusive() {
        let records = [0.0, 9.0, 10.0, 99.0]
            .map(Some)
            .map(record_with_age)
            .to_vec();
        let distribution = AgeDistribution::from_records(&records);
        assert_eq!(distribution.counts[0], 2);
        assert_eq!(distribution.counts[1], 1);
        assert_eq!(distribution.counts[9], 1);
    }

    #[test]
    fn test_unusable_ages_are_left_out() {
        let records = vec![
            record_with_age(Some(-1.0)),
            record_with_age(Some(100.0)),
            record_with_age(Some(9.5)),
            record_with_age(None),
            record_with_age(Some(42.0)),
        ];
        let distribution = AgeDistribution::from_records(&records);
        assert_eq!(distribution.total_counted(), 1);
        assert_eq!(distribution.counts[4], 1);
    }

    #[test]
    fn test_edges_span_zero_to_one_hundred() {
        let distribution = AgeDistribution::from_records(&[]);
        assert_eq!(distribution.edges.len(), AGE_BIN_COUNT + 1);
        assert_eq!(distribution.edges[0], 0.0);
        assert_eq!(distribution.edges[5], 50.0);
        assert_eq!(distribution.edges[10], 100.0);
    }

    #[test]
    fn test_empty_table_counts_nothing() {
        let distribution = AgeDistribution::from_records(&[]);
        assert_eq!(distribution.counts, [0; AGE_BIN_COUNT]);
        assert_eq!(distribution.total_counted(), 0);
    }
}
