// src/stats/medals.rs
//
// Medal table: how often each competitor finished in places 1..=6.

use std::cmp::Ordering;

use crate::competitors::Competitor;
use crate::config::consts::MEDAL_PLACES;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MedalRow {
    pub key: String,
    pub name: String,
    /// Finishes per place, index 0 = 1st.
    pub tally: [u32; MEDAL_PLACES],
    /// Total participations, podium or not.
    pub total: u32,
}

impl MedalRow {
    pub fn podiums(&self) -> u32 {
        self.tally.iter().sum()
    }

    /// Tally lexicographically descending, then total descending, then
    /// name and key ascending. Total order over distinct keys.
    pub fn cmp_rank(&self, other: &Self) -> Ordering {
        other
            .tally
            .cmp(&self.tally)
            .then_with(|| other.total.cmp(&self.total))
            .then_with(|| self.name.cmp(&other.name))
            .then_with(|| self.key.cmp(&other.key))
    }
}

/// Ranked rows for every competitor with at least one placement in 1..=6.
pub fn medal_table(competitors: &[Competitor]) -> Vec<MedalRow> {
    let mut rows: Vec<MedalRow> = competitors
        .iter()
        .filter_map(|c| {
            let mut tally = [0u32; MEDAL_PLACES];
            for p in c.records().iter().filter_map(|r| r.placement) {
                if (1..=MEDAL_PLACES as u32).contains(&p) {
                    tally[(p - 1) as usize] += 1;
                }
            }
            if tally.iter().all(|n| *n == 0) { return None; }
            Some(MedalRow {
                key: s!(c.key()),
                name: s!(c.name()),
                tally,
                total: c.records().len() as u32,
            })
        })
        .collect();
    rows.sort_by(MedalRow::cmp_rank);
    rows
}

/// One page of a ranked table; `page` is zero-based. Out-of-range pages are empty.
pub fn medal_page(rows: &[MedalRow], page: usize, page_size: usize) -> &[MedalRow] {
    let size = page_size.max(1);
    let start = page.saturating_mul(size).min(rows.len());
    let end = (start + size).min(rows.len());
    &rows[start..end]
}

pub fn page_count(rows: usize, page_size: usize) -> usize {
    rows.div_ceil(page_size.max(1))
}
