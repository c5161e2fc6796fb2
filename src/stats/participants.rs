// src/stats/participants.rs
//
// Distinct-participant counts along the dashboard axes.

use std::collections::{HashMap, HashSet};

use super::states::infer_state;
use super::{sort_count_desc, DistinctCounter, Series};
use crate::model::{cmp_years, EventInfo, NormalizedRecord};

/// Distinct participants of one event instance.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EventCount {
    pub event: EventInfo,
    pub event_key: String,
    pub count: usize,
}

pub fn total_unique(records: &[NormalizedRecord]) -> usize {
    records.iter().map(|r| r.participant_key.as_str()).collect::<HashSet<_>>().len()
}

/// Per distance label, ascending by label.
pub fn unique_by_distance(records: &[NormalizedRecord]) -> Vec<Series> {
    let mut counter = DistinctCounter::default();
    for r in records {
        counter.add(&r.distance, &r.participant_key);
    }
    let mut out = counter.into_series();
    out.sort_by(|a, b| a.label.cmp(&b.label));
    out
}

/// Per year, numeric ascending with unknown years last.
pub fn unique_by_year(records: &[NormalizedRecord]) -> Vec<Series> {
    let mut counter = DistinctCounter::default();
    for r in records {
        counter.add(r.year(), &r.participant_key);
    }
    let mut out = counter.into_series();
    out.sort_by(|a, b| cmp_years(&a.label, &b.label));
    out
}

/// Per event instance, in edition order (unknown editions last).
pub fn unique_by_event(records: &[NormalizedRecord]) -> Vec<EventCount> {
    let mut counter = DistinctCounter::default();
    let mut infos: HashMap<&str, &EventInfo> = HashMap::new();
    for r in records {
        infos.entry(r.event_key.as_str()).or_insert(&r.event);
        counter.add(&r.event_key, &r.participant_key);
    }

    let mut out: Vec<EventCount> = counter
        .into_series()
        .into_iter()
        .filter_map(|s| {
            let info = *infos.get(s.label.as_str())?;
            Some(EventCount { event: info.clone(), event_key: s.label, count: s.count })
        })
        .collect();
    out.sort_by(|a, b| a.event.cmp_edition(&b.event));
    out
}

/// Per inferred state, count descending; ties keep discovery order.
pub fn unique_by_state(records: &[NormalizedRecord]) -> Vec<Series> {
    let mut counter = DistinctCounter::default();
    for r in records {
        counter.add(infer_state(&r.origin), &r.participant_key);
    }
    let mut out = counter.into_series();
    sort_count_desc(&mut out);
    out
}
