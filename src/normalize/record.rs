// src/normalize/record.rs
//
// One raw corpus row -> one NormalizedRecord, or nothing.
// Rows whose distance cannot be canonicalized are administrative / non-race
// entries and are dropped from everything downstream.

use std::sync::OnceLock;

use regex::Regex;
use serde_json::Value;

use crate::core::text::normalize_text;
use crate::model::{parse_year, sentinel, NormalizedRecord};
use crate::schema::{results as rules, value_leading_int, RawRecord};

use super::event::parse_event;
use super::time::{format_minutes, from_parts, parse_clock};

/// Race distances we know how to label, in whole kilometres.
pub const KNOWN_DISTANCES: &[(u32, &str)] = &[(1, "1K"), (5, "5K")];

/// Result of normalizing a whole corpus.
#[derive(Clone, Debug, Default)]
pub struct NormalizeOutcome {
    pub records: Vec<NormalizedRecord>,
    /// Rows without a usable distance
    pub dropped: usize,
    /// Array items that were not JSON objects
    pub skipped: usize,
}

fn distance_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(\d+(?:[.,]\d+)?)\s*(?:(KM|K|METROS|METERS|MTS|M)\b)?")
            .expect("valid distance regex")
    })
}

/// Canonical distance label, or `None` when the text names no known distance.
///
/// The first number is read in kilometres unless a metre unit follows it
/// ("5000 m"). Only whole kilometres that match a known distance count, so
/// "1.5 km" and "10K" are rejected.
pub fn canonical_distance(text: &str) -> Option<String> {
    let cleaned = text.trim().to_uppercase();
    let caps = distance_re().captures(&cleaned)?;
    let value: f64 = caps.get(1)?.as_str().replace(',', ".").parse().ok()?;
    let metres = matches!(caps.get(2).map(|m| m.as_str()), Some("METROS" | "METERS" | "MTS" | "M"));
    let km = if metres { value / 1000.0 } else { value };
    if !km.is_finite() || km.fract() != 0.0 {
        return None;
    }
    KNOWN_DISTANCES
        .iter()
        .find(|(n, _)| *n as f64 == km)
        .map(|(_, label)| s!(*label))
}

/// Identity key: explicit id, else bib, else normalized name.
pub fn participant_key(id: Option<&str>, bib: Option<&str>, name: &str) -> String {
    [id, bib]
        .into_iter()
        .flatten()
        .map(normalize_text)
        .find(|k| !k.is_empty())
        .unwrap_or_else(|| normalize_text(name))
}

fn age_range_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(\d+)\s*-\s*(\d+)").expect("valid age range regex"))
}

fn age_under_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(\d+)\s*y\s*menores").expect("valid age under regex"))
}

fn age_over_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(\d+)\s*y\s*(?:mayores|mas)").expect("valid age over regex"))
}

/// Age bracket embedded in a category label:
/// "VARONIL (25 - 29)" -> "25 - 29", "8 Y MENORES" -> "0 - 8", "75 Y MAYORES" -> "75 +".
pub fn age_group_from_category(category: &str) -> Option<String> {
    let text = normalize_text(category);
    if let Some(c) = age_range_re().captures(&text) {
        return Some(format!("{} - {}", &c[1], &c[2]));
    }
    if let Some(c) = age_under_re().captures(&text) {
        return Some(format!("0 - {}", &c[1]));
    }
    if let Some(c) = age_over_re().captures(&text) {
        return Some(format!("{} +", &c[1]));
    }
    None
}

/// Finish time in minutes: clock string first, then split numeric fields.
pub fn parse_time(raw: &RawRecord) -> Option<f64> {
    if let Some(minutes) = rules::TIME.first(raw).as_deref().and_then(parse_clock) {
        return Some(minutes);
    }
    from_parts(
        rules::TIME_HOURS.number(raw),
        rules::TIME_MINUTES.number(raw),
        rules::TIME_SECONDS.number(raw),
    )
}

/// First placement-like field that holds a number.
pub fn parse_placement(raw: &RawRecord) -> Option<u32> {
    rules::PLACEMENT
        .keys
        .iter()
        .find_map(|k| raw.get(*k).and_then(value_leading_int).filter(|p| *p > 0))
}

/// Normalize one raw row. `None` means "not a race entry" (no distance).
pub fn normalize_record(raw: &RawRecord) -> Option<NormalizedRecord> {
    let distance = canonical_distance(&rules::DISTANCE.first(raw)?)?;

    let participant_id = rules::PARTICIPANT_ID.first(raw);
    let bib_raw = rules::BIB.first(raw);
    let name = rules::NAME.resolve(raw);
    let participant_key = participant_key(
        participant_id.as_deref(),
        bib_raw.as_deref(),
        &name,
    );

    let category = rules::CATEGORY.resolve(raw);
    let age_group = rules::AGE_GROUP
        .first(raw)
        .or_else(|| age_group_from_category(&category))
        .unwrap_or_else(|| s!(sentinel::AGE_GROUP));

    let gender = rules::GENDER
        .first(raw)
        .map(|g| g.to_uppercase())
        .unwrap_or_else(|| s!(sentinel::GENDER));

    let mut event = parse_event(&rules::EVENT.first(raw).unwrap_or_default());
    if !event.has_year() {
        if let Some(year) = rules::YEAR.first(raw).filter(|y| parse_year(y).is_some()) {
            event.year = year;
        }
    }
    let event_key = event.event_key();

    let time_minutes = parse_time(raw);
    let time_label = rules::TIME_LABEL
        .first(raw)
        .or_else(|| time_minutes.map(format_minutes))
        .unwrap_or_else(|| s!(sentinel::TIME));

    Some(NormalizedRecord {
        participant_key,
        participant_id,
        bib: bib_raw.unwrap_or_else(|| s!(sentinel::BIB)),
        name,
        origin: rules::ORIGIN.resolve(raw),
        team: rules::TEAM.resolve(raw),
        gender,
        age_group,
        category,
        distance,
        event,
        event_key,
        time_minutes,
        time_label,
        placement: parse_placement(raw),
        position_category: rules::POSITION_CATEGORY.resolve(raw),
        position_gender: rules::POSITION_GENDER.resolve(raw),
        position_general: rules::POSITION_GENERAL.resolve(raw),
    })
}

/// Normalize a whole results array, counting what was left out.
pub fn normalize_all(rows: &[Value]) -> NormalizeOutcome {
    let mut out = NormalizeOutcome { records: Vec::with_capacity(rows.len()), ..Default::default() };

    for row in rows {
        let Some(obj) = row.as_object() else {
            out.skipped += 1;
            continue;
        };
        match normalize_record(obj) {
            Some(rec) => out.records.push(rec),
            None => {
                if out.dropped == 0 {
                    logd!("Normalize: first dropped row, distance key={:?}", rules::DISTANCE.matched_key(obj));
                }
                out.dropped += 1;
            }
        }
    }

    if out.dropped > 0 || out.skipped > 0 {
        logd!(
            "Normalize: kept={} dropped(no distance)={} skipped(non-object)={}",
            out.records.len(), out.dropped, out.skipped
        );
    }
    out
}
