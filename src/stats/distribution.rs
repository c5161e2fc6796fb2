// src/stats/distribution.rs
//
// Gender and age-group breakdowns, each counting distinct participants.

use std::cmp::Ordering;

use super::{DistinctCounter, Series};
use crate::core::text::normalize_text;
use crate::model::NormalizedRecord;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GenderBucket {
    Female,
    Male,
    Other,
}

impl GenderBucket {
    pub const ALL: [GenderBucket; 3] = [Self::Female, Self::Male, Self::Other];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Female => "Femenil",
            Self::Male => "Varonil",
            Self::Other => "Otro / N/D",
        }
    }

    /// Accepts bucket labels as well as raw gender text.
    pub fn parse(s: &str) -> Option<Self> {
        let n = normalize_text(s);
        if n.is_empty() { return None; }
        Self::ALL
            .into_iter()
            .find(|b| normalize_text(b.label()) == n)
            .or_else(|| Some(gender_bucket(s)))
    }
}

/// Bucket a free-text gender value.
pub fn gender_bucket(raw: &str) -> GenderBucket {
    let g = normalize_text(raw);
    if g == "f" || g.starts_with("fe") || g.starts_with("mujer") {
        GenderBucket::Female
    } else if g == "m"
        || g.starts_with("ma")
        || g.starts_with("var")
        || g.contains("varonil")
        || g.contains("hombre")
    {
        GenderBucket::Male
    } else {
        GenderBucket::Other
    }
}

/// Female, male, other; empty buckets omitted.
pub fn gender_distribution(records: &[NormalizedRecord]) -> Vec<Series> {
    let mut counter = DistinctCounter::default();
    for b in GenderBucket::ALL {
        // fixed bucket order
        counter.seed(b.label());
    }
    for r in records {
        counter.add(gender_bucket(&r.gender).label(), &r.participant_key);
    }
    counter.into_series().into_iter().filter(|s| s.count > 0).collect()
}

/// Leading number of an age label ("18 - 29" -> 18).
fn leading_number(label: &str) -> Option<u32> {
    let digits: String = label
        .trim_start()
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().ok()
}

fn cmp_age_labels(a: &str, b: &str) -> Ordering {
    match (leading_number(a), leading_number(b)) {
        (Some(x), Some(y)) => x.cmp(&y).then_with(|| a.cmp(b)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.cmp(b),
    }
}

/// Age groups ordered by leading number, non-numeric labels last.
pub fn age_distribution(records: &[NormalizedRecord]) -> Vec<Series> {
    let mut counter = DistinctCounter::default();
    for r in records {
        counter.add(&r.age_group, &r.participant_key);
    }
    let mut out = counter.into_series();
    out.sort_by(|a, b| cmp_age_labels(&a.label, &b.label));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gender_heuristic() {
        for f in ["F", "Femenil", "FEMENINO", "Mujer", "mujeres"] {
            assert_eq!(gender_bucket(f), GenderBucket::Female, "{f}");
        }
        for m in ["M", "Masculino", "Varonil", "VAR", "Hombre", "Rama varonil"] {
            assert_eq!(gender_bucket(m), GenderBucket::Male, "{m}");
        }
        for o in ["No especificado", "", "X"] {
            assert_eq!(gender_bucket(o), GenderBucket::Other, "{o}");
        }
    }

    #[test]
    fn age_labels_sort_numerically() {
        let mut v = vec!["Sin registro", "40 - 49", "8 - 12", "18 - 29", "60 +"];
        v.sort_by(|a, b| cmp_age_labels(a, b));
        assert_eq!(v, ["8 - 12", "18 - 29", "40 - 49", "60 +", "Sin registro"]);
    }
}
