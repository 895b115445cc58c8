//! Aggregation over enrollment cells where `None` marks a missing count.
//! Missing cells are skipped, never treated as zero, except by [`sum_present`]
//! where skipping and zero coincide.

/// Sum of the present values; an all-missing input sums to 0.
pub fn sum_present<I>(values: I) -> u64
where
    I: IntoIterator<Item = Option<u32>>,
{
    values.into_iter().flatten().map(u64::from).sum()
}

/// Arithmetic mean over present values only.
pub fn mean_present<I>(values: I) -> Option<f64>
where
    I: IntoIterator<Item = Option<u32>>,
{
    let (sum, count) = values
        .into_iter()
        .flatten()
        .fold((0u64, 0usize), |(sum, count), v| (sum + u64::from(v), count + 1));
    if count == 0 {
        None
    } else {
        Some(sum as f64 / count as f64)
    }
}

pub fn min_present<I>(values: I) -> Option<u32>
where
    I: IntoIterator<Item = Option<u32>>,
{
    values.into_iter().flatten().min()
}

pub fn max_present<I>(values: I) -> Option<u32>
where
    I: IntoIterator<Item = Option<u32>>,
{
    values.into_iter().flatten().max()
}

/// Median of the present values; even-length samples average the middle pair.
pub fn median_present<I>(values: I) -> Option<f64>
where
    I: IntoIterator<Item = Option<u32>>,
{
    let mut vals: Vec<u32> = values.into_iter().flatten().collect();
    if vals.is_empty() {
        return None;
    }
    vals.sort_unstable();

    let count = vals.len();
    let median = if count % 2 == 0 {
        (f64::from(vals[count / 2 - 1]) + f64::from(vals[count / 2])) / 2.0
    } else {
        f64::from(vals[count / 2])
    };
    Some(median)
}

/// Median of the values strictly above a threshold.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThresholdMedian {
    pub threshold: u32,
    pub qualifying_count: usize,
    /// `None` exactly when `qualifying_count` is 0.
    pub median: Option<f64>,
}

impl ThresholdMedian {
    pub fn compute<I>(values: I, threshold: u32) -> Self
    where
        I: IntoIterator<Item = Option<u32>>,
    {
        let qualifying: Vec<u32> = values
            .into_iter()
            .flatten()
            .filter(|&v| v > threshold)
            .collect();
        Self {
            threshold,
            qualifying_count: qualifying.len(),
            median: median_present(qualifying.into_iter().map(Some)),
        }
    }

    pub fn has_qualifying(&self) -> bool {
        self.qualifying_count > 0
    }
}

/// A per-year result keyed by calendar year.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct YearValue<T> {
    pub year: u16,
    pub value: T,
}
