use std::ops::RangeInclusive;

/// A histogram over a fixed set of bin ranges.
///
/// Unlike adaptive histograms that derive their bins from the data, this
/// histogram counts values into bins the caller defines up front. Bin ranges
/// are inclusive on both ends and need not tile the number line: values that
/// fall outside every bin are silently dropped.
#[derive(Debug, Clone)]
pub struct Histogram {
    /// The bins comprising the histogram, in the order they were supplied.
    pub bins: Vec<HistogramBin>,
}

/// A single bin in a histogram.
#[derive(Debug, Clone)]
pub struct HistogramBin {
    /// The range of values covered by this bin (inclusive on both ends).
    pub range: RangeInclusive<f64>,
    /// The number of values that fall within this bin's range.
    pub count: u64,
}

impl Histogram {
    /// Creates a histogram by counting values into the given bin ranges.
    ///
    /// Each value is counted into the first bin whose range contains it, so
    /// overlapping ranges resolve in supply order. Values outside every bin
    /// (including NaN) are not counted anywhere.
    ///
    /// # Arguments
    ///
    /// * `ranges` - The bin ranges, inclusive on both ends.
    /// * `values` - The data points to count.
    ///
    /// # Examples
    ///
    /// ```
    /// # use oxivey_stats::histogram::Histogram;
    /// let histogram = Histogram::from_ranges(
    ///     vec![0.0..=9.0, 10.0..=19.0],
    ///     [3.0, 9.0, 10.0, 12.5, 25.0],
    /// );
    /// assert_eq!(histogram.bins[0].count, 2);
    /// assert_eq!(histogram.bins[1].count, 2);
    /// assert_eq!(histogram.total(), 4); // 25.0 fell outside every bin
    /// ```
    #[must_use]
    pub fn from_ranges<R, V>(ranges: R, values: V) -> Self
    where
        R: IntoIterator<Item = RangeInclusive<f64>>,
        V: IntoIterator<Item = f64>,
    {
        let mut bins = ranges
            .into_iter()
            .map(|range| HistogramBin { range, count: 0 })
            .collect::<Vec<_>>();
        for value in values {
            if let Some(bin) = bins.iter_mut().find(|bin| bin.range.contains(&value)) {
                bin.count += 1;
            }
        }
        Self { bins }
    }

    /// Returns the total number of counted values across all bins.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.bins.iter().map(|bin| bin.count).sum()
    }
}
