// src/stats/top.rs

use super::{sort_count_desc, DistinctCounter, Series};
use crate::model::NormalizedRecord;

/// Event instances by distinct participants, descending, first `n`.
/// Labels read "<event label> <year>".
pub fn top_events(records: &[NormalizedRecord], n: usize) -> Vec<Series> {
    let mut counter = DistinctCounter::default();
    for r in records {
        counter.add(&r.event.display(), &r.participant_key);
    }
    let mut out = counter.into_series();
    sort_count_desc(&mut out);
    out.truncate(n);
    out
}

/// Categories by distinct participants, descending, first `n`.
pub fn top_categories(records: &[NormalizedRecord], n: usize) -> Vec<Series> {
    let mut counter = DistinctCounter::default();
    for r in records {
        counter.add(&r.category, &r.participant_key);
    }
    let mut out = counter.into_series();
    sort_count_desc(&mut out);
    out.truncate(n);
    out
}

/// The `n` fastest timed records, ascending. Equal times keep input order.
pub fn fastest(records: &[NormalizedRecord], n: usize) -> Vec<&NormalizedRecord> {
    let mut timed: Vec<&NormalizedRecord> = records.iter().filter(|r| r.has_time()).collect();
    timed.sort_by(|a, b| {
        let (x, y) = (a.time_minutes.unwrap_or(f64::INFINITY), b.time_minutes.unwrap_or(f64::INFINITY));
        x.total_cmp(&y)
    });
    timed.truncate(n);
    timed
}
