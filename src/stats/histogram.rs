// src/stats/histogram.rs
//
// Finishing-time histograms. Bins are half-open `[start, end)` except the
// last, which also takes its upper bound so the slowest time is counted.

use super::distribution::{gender_bucket, GenderBucket};
use crate::config::consts::{DEFAULT_BIN_MINUTES, MAX_HISTOGRAM_BINS};
use crate::model::NormalizedRecord;

/// Inclusive minute range covered by a histogram.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HistogramRange {
    pub min: f64,
    pub max: f64,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Histogram {
    pub labels: Vec<String>,
    pub counts: Vec<usize>,
    pub bin_size: f64,
    pub start: f64,
}

impl Histogram {
    pub fn is_empty(&self) -> bool {
        self.counts.iter().all(|c| *c == 0)
    }

    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }
}

fn valid_bin(bin_size: f64) -> f64 {
    if bin_size.is_finite() && bin_size > 0.0 { bin_size } else { DEFAULT_BIN_MINUTES }
}

fn finite_times(times: &[f64]) -> impl Iterator<Item = f64> + '_ {
    times.iter().copied().filter(|t| t.is_finite())
}

/// Smallest/largest finite time, snapped outward to bin boundaries.
/// The span is capped at `MAX_HISTOGRAM_BINS` bins.
/// `None` when there are no finite times.
pub fn auto_range(times: &[f64], bin_size: f64) -> Option<HistogramRange> {
    let bin = valid_bin(bin_size);
    let (lo, hi) = finite_times(times).fold(None, |acc: Option<(f64, f64)>, t| match acc {
        None => Some((t, t)),
        Some((lo, hi)) => Some((lo.min(t), hi.max(t))),
    })?;
    let min = ((lo / bin).floor() * bin).max(0.0);
    let max = ((hi / bin).ceil() * bin).min(min + bin * MAX_HISTOGRAM_BINS as f64);
    Some(HistogramRange { min, max })
}

/// One range spanning every group, so grouped histograms share an axis.
pub fn shared_range(groups: &[&[f64]], bin_size: f64) -> Option<HistogramRange> {
    let all: Vec<f64> = groups.iter().flat_map(|g| g.iter().copied()).collect();
    auto_range(&all, bin_size)
}

fn fmt_bound(v: f64) -> String {
    format!("{v}")
}

/// Bin `times` by `bin_size` minutes. With `range = None` the range comes
/// from the data; an external range is used as given and times outside
/// `[range.min, range.max]` are ignored. A degenerate range produces one bin.
///
/// A range as wide as `MAX_HISTOGRAM_BINS` is capped: its last bin is
/// labelled `"<start>+ min"` and also takes every slower time.
pub fn build_histogram(times: &[f64], bin_size: f64, range: Option<HistogramRange>) -> Histogram {
    let bin = valid_bin(bin_size);
    let Some(range) = range.or_else(|| auto_range(times, bin)) else {
        return Histogram { bin_size: bin, ..Default::default() };
    };

    let span = (range.max - range.min).max(0.0);
    let wanted = (span / bin).ceil();
    let capped = wanted >= MAX_HISTOGRAM_BINS as f64;
    let bins = if capped { MAX_HISTOGRAM_BINS } else { (wanted as usize).max(1) };

    let mut labels = Vec::with_capacity(bins);
    for i in 0..bins {
        let start = range.min + bin * i as f64;
        if capped && i + 1 == bins {
            labels.push(format!("{}+ min", fmt_bound(start)));
        } else {
            labels.push(format!("{}-{} min", fmt_bound(start), fmt_bound(start + bin)));
        }
    }

    let mut counts = vec![0usize; bins];
    for t in finite_times(times) {
        if t < range.min || (!capped && t > range.max) { continue; }
        let idx = (((t - range.min) / bin).floor() as usize).min(bins - 1);
        counts[idx] += 1;
    }

    Histogram { labels, counts, bin_size: bin, start: range.min }
}

/// Finite times of the records, in record order.
pub fn times_of(records: &[NormalizedRecord]) -> Vec<f64> {
    records.iter().filter_map(|r| r.time_minutes).filter(|t| t.is_finite()).collect()
}

/// One histogram per gender bucket over a common range. Buckets with no
/// timed records are omitted.
pub fn histograms_by_gender(records: &[NormalizedRecord], bin_size: f64) -> Vec<(GenderBucket, Histogram)> {
    let groups: Vec<(GenderBucket, Vec<f64>)> = GenderBucket::ALL
        .into_iter()
        .map(|b| {
            let times = records
                .iter()
                .filter(|r| gender_bucket(&r.gender) == b)
                .filter_map(|r| r.time_minutes)
                .filter(|t| t.is_finite())
                .collect();
            (b, times)
        })
        .filter(|(_, t): &(GenderBucket, Vec<f64>)| !t.is_empty())
        .collect();

    let slices: Vec<&[f64]> = groups.iter().map(|(_, t)| t.as_slice()).collect();
    let range = shared_range(&slices, bin_size);
    groups
        .iter()
        .map(|(b, t)| (*b, build_histogram(t, bin_size, range)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bound_labels_drop_trailing_zero() {
        assert_eq!(fmt_bound(10.0), "10");
        assert_eq!(fmt_bound(2.5), "2.5");
    }

    #[test]
    fn non_positive_bin_falls_back() {
        assert_eq!(valid_bin(0.0), DEFAULT_BIN_MINUTES);
        assert_eq!(valid_bin(-3.0), DEFAULT_BIN_MINUTES);
        assert_eq!(valid_bin(f64::NAN), DEFAULT_BIN_MINUTES);
    }
}
