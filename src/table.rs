// src/table.rs
//! Table: string grid shared by the GUI data table, Copy, and Export.
//!
//! Every report, whether competitors, a distribution, or a medal page, is
//! flattened here into headers + rows. Front ends only ever render or
//! serialize a `Table`; they never format domain types themselves.

use crate::competitors::Competitor;
use crate::model::NormalizedRecord;
use crate::stats::{EventCount, Histogram, MedalRow, Series, Summary};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

fn headers(hs: &[&str]) -> Vec<String> {
    hs.iter().map(|h| s!(*h)).collect()
}

impl Table {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { headers, rows }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn ncols(&self) -> usize {
        if !self.headers.is_empty() {
            self.headers.len()
        } else {
            self.rows.first().map(|r| r.len()).unwrap_or(0)
        }
    }

    pub fn nrows(&self) -> usize {
        self.rows.len()
    }
}

impl Table {
    /// One row per competitor.
    pub fn competitors<'a, I>(competitors: I) -> Self
    where
        I: IntoIterator<Item = &'a Competitor>,
    {
        let rows = competitors
            .into_iter()
            .map(|c| {
                vec![
                    s!(c.name()),
                    s!(c.bib()),
                    s!(c.origin()),
                    s!(c.team()),
                    s!(c.gender()),
                    s!(c.age_group()),
                    c.records().len().to_string(),
                ]
            })
            .collect();
        Self::with(headers(&["Name", "Bib", "Origin", "Team", "Gender", "Age group", "Races"]), rows)
    }

    /// A competitor's history, newest first.
    pub fn history(competitor: &Competitor) -> Self {
        let rows = competitor
            .records()
            .iter()
            .map(|r| {
                vec![
                    s!(r.year()),
                    r.event.label.clone(),
                    r.distance.clone(),
                    r.category.clone(),
                    r.time_label.clone(),
                    r.position_category.clone(),
                    r.position_gender.clone(),
                    r.position_general.clone(),
                ]
            })
            .collect();
        Self::with(
            headers(&["Year", "Event", "Distance", "Category", "Time", "Pos. category", "Pos. gender", "Pos. overall"]),
            rows,
        )
    }

    /// Label + distinct participant count.
    pub fn series(label_header: &str, series: &[Series]) -> Self {
        let rows = series.iter().map(|s| vec![s.label.clone(), s.count.to_string()]).collect();
        Self::with(vec![s!(label_header), s!("Participants")], rows)
    }

    pub fn events(events: &[EventCount]) -> Self {
        let rows = events
            .iter()
            .map(|e| {
                vec![
                    e.event.edition.map(|n| n.to_string()).unwrap_or_default(),
                    e.event.label.clone(),
                    e.event.year.clone(),
                    e.count.to_string(),
                ]
            })
            .collect();
        Self::with(headers(&["Edition", "Event", "Year", "Participants"]), rows)
    }

    pub fn histogram(hist: &Histogram) -> Self {
        let rows = hist
            .labels
            .iter()
            .zip(&hist.counts)
            .map(|(l, c)| vec![l.clone(), c.to_string()])
            .collect();
        Self::with(headers(&["Range", "Finishers"]), rows)
    }

    /// Histograms sharing one axis, one count column per group.
    pub fn histograms(groups: &[(String, Histogram)]) -> Self {
        let mut hs = vec![s!("Range")];
        hs.extend(groups.iter().map(|(name, _)| name.clone()));
        let labels = groups.iter().map(|(_, h)| &h.labels).max_by_key(|l| l.len());
        let rows = labels
            .map(|labels| {
                labels
                    .iter()
                    .enumerate()
                    .map(|(i, l)| {
                        let mut row = vec![l.clone()];
                        row.extend(groups.iter().map(|(_, h)| h.counts.get(i).copied().unwrap_or(0).to_string()));
                        row
                    })
                    .collect()
            })
            .unwrap_or_default();
        Self::with(hs, rows)
    }

    /// Ranked medal rows; `first_rank` is the rank of `rows[0]` (1-based).
    pub fn medals(rows: &[MedalRow], first_rank: usize) -> Self {
        let body = rows
            .iter()
            .enumerate()
            .map(|(i, m)| {
                let mut row = vec![(first_rank + i).to_string(), m.name.clone()];
                row.extend(m.tally.iter().map(|n| n.to_string()));
                row.push(m.total.to_string());
                row
            })
            .collect();
        Self::with(headers(&["#", "Name", "1st", "2nd", "3rd", "4th", "5th", "6th", "Races"]), body)
    }

    pub fn fastest(records: &[&NormalizedRecord]) -> Self {
        let rows = records
            .iter()
            .map(|r| {
                vec![
                    r.name.clone(),
                    r.distance.clone(),
                    r.time_label.clone(),
                    r.gender.clone(),
                    s!(r.year()),
                ]
            })
            .collect();
        Self::with(headers(&["Name", "Distance", "Time", "Gender", "Year"]), rows)
    }

    pub fn summary(summary: &Summary) -> Self {
        let kv = |k: &str, v: usize| vec![s!(k), v.to_string()];
        Self::with(
            headers(&["Metric", "Value"]),
            vec![
                kv("Records", summary.records),
                kv("Unique participants", summary.unique_participants),
                kv("Competitors", summary.competitors),
                kv("Events", summary.events),
                kv("Distances", summary.distances),
                kv("Dropped rows", summary.dropped_rows),
            ],
        )
    }
}
