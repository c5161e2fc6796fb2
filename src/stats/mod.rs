// src/stats/mod.rs
//! # Statistics over canonical records
//!
//! Every function here is a pure reducer over `&[NormalizedRecord]`: no
//! state, no I/O, same input -> same output.
//!
//! The one rule that matters most: **participant counts are distinct
//! `participant_key`s, never row counts.** A regular runner has one row per
//! edition; counting rows would inflate every chart.
//!
//! Output shapes are plain data (`Series`, `Histogram`, `MedalRow`, ...) so
//! any renderer can consume them.

use std::collections::{HashMap, HashSet};

use crate::core::text::normalize_text;
use crate::model::NormalizedRecord;

pub mod distribution;
pub mod histogram;
pub mod medals;
pub mod participants;
pub mod states;
pub mod top;

pub use distribution::{age_distribution, gender_bucket, gender_distribution, GenderBucket};
pub use histogram::{
    auto_range, build_histogram, histograms_by_gender, shared_range, times_of, Histogram, HistogramRange,
};
pub use medals::{medal_page, medal_table, page_count, MedalRow};
pub use participants::{
    total_unique, unique_by_distance, unique_by_event, unique_by_state, unique_by_year, EventCount,
};
pub use states::infer_state;
pub use top::{fastest, top_categories, top_events};

/// One labelled count, the common currency of charts and tables.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Series {
    pub label: String,
    pub count: usize,
}

impl Series {
    pub fn new(label: impl Into<String>, count: usize) -> Self {
        Self { label: label.into(), count }
    }
}

/// Distinct participant keys per label, remembering discovery order.
#[derive(Default)]
pub(crate) struct DistinctCounter<'a> {
    order: Vec<String>,
    sets: HashMap<String, HashSet<&'a str>>,
}

impl<'a> DistinctCounter<'a> {
    /// Register a label with no participants yet, fixing its position.
    pub(crate) fn seed(&mut self, label: &str) {
        if !self.sets.contains_key(label) {
            self.order.push(s!(label));
            self.sets.insert(s!(label), HashSet::new());
        }
    }

    pub(crate) fn add(&mut self, label: &str, participant: &'a str) {
        if let Some(set) = self.sets.get_mut(label) {
            set.insert(participant);
            return;
        }
        self.order.push(s!(label));
        self.sets.insert(s!(label), HashSet::from([participant]));
    }

    /// Labels with their distinct counts, in discovery order.
    pub(crate) fn into_series(mut self) -> Vec<Series> {
        self.order
            .into_iter()
            .map(|label| {
                let count = self.sets.remove(&label).map(|s| s.len()).unwrap_or(0);
                Series { label, count }
            })
            .collect()
    }
}

/// Sort by count descending; `sort_by` is stable, so ties keep discovery order.
pub(crate) fn sort_count_desc(series: &mut [Series]) {
    series.sort_by(|a, b| b.count.cmp(&a.count));
}

/// Optional record filters used by the distance dashboard and the CLI.
/// `None` means "any"; comparisons are normalized.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RecordFilter {
    pub distance: Option<String>,
    pub gender: Option<GenderBucket>,
    pub age_group: Option<String>,
    pub year: Option<String>,
}

impl RecordFilter {
    pub fn is_empty(&self) -> bool {
        self.distance.is_none() && self.gender.is_none() && self.age_group.is_none() && self.year.is_none()
    }

    pub fn matches(&self, r: &NormalizedRecord) -> bool {
        let eq = |want: &Option<String>, have: &str| {
            want.as_deref().is_none_or(|w| normalize_text(w) == normalize_text(have))
        };
        eq(&self.distance, &r.distance)
            && self.gender.is_none_or(|g| gender_bucket(&r.gender) == g)
            && eq(&self.age_group, &r.age_group)
            && eq(&self.year, r.year())
    }

    pub fn apply<'a>(&self, records: &'a [NormalizedRecord]) -> Vec<&'a NormalizedRecord> {
        records.iter().filter(|r| self.matches(r)).collect()
    }

    /// Owned copy of the matching records, for reducers taking a slice.
    pub fn apply_owned(&self, records: &[NormalizedRecord]) -> Vec<NormalizedRecord> {
        records.iter().filter(|r| self.matches(r)).cloned().collect()
    }
}

/// Headline numbers for the overview page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Summary {
    pub records: usize,
    pub unique_participants: usize,
    pub events: usize,
    pub distances: usize,
    pub competitors: usize,
    pub dropped_rows: usize,
}

pub fn summarize(records: &[NormalizedRecord], competitors: usize, dropped_rows: usize) -> Summary {
    let events: HashSet<&str> = records.iter().map(|r| r.event_key.as_str()).collect();
    let distances: HashSet<&str> = records.iter().map(|r| r.distance.as_str()).collect();
    Summary {
        records: records.len(),
        unique_participants: total_unique(records),
        events: events.len(),
        distances: distances.len(),
        competitors,
        dropped_rows,
    }
}

/// Distinct values of one field, sorted; feeds filter drop-downs.
pub fn distinct_values<F>(records: &[NormalizedRecord], field: F) -> Vec<String>
where
    F: Fn(&NormalizedRecord) -> &str,
{
    let mut seen: Vec<String> = records
        .iter()
        .map(|r| s!(field(r)))
        .collect::<HashSet<_>>()
        .into_iter()
        .collect();
    seen.sort();
    seen
}
