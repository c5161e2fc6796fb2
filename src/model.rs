// src/model.rs
//
// Canonical shapes produced by the normalizer. Raw corpus rows never leave
// `normalize::record`; everything downstream reads these types only.

use std::cmp::Ordering;

/// Placeholders for unavailable fields. Never empty, so display and search
/// logic stay uniform.
pub mod sentinel {
    pub const NAME: &str = "Nombre no disponible";
    pub const ORIGIN: &str = "Procedencia no registrada";
    pub const TEAM: &str = "Sin equipo";
    pub const BIB: &str = "N/D";
    pub const GENDER: &str = "No especificado";
    pub const AGE_GROUP: &str = "Sin registro";
    pub const CATEGORY: &str = "Categoría N/D";
    pub const EVENT: &str = "Evento no especificado";
    pub const YEAR: &str = "Año N/D";
    pub const TIME: &str = "—";
    pub const POSITION: &str = "—";
    pub const STATE: &str = "Otro / N/D";

    /// Catalog-only competitors
    pub const CATALOG_NAME: &str = "Participante no identificado";
    pub const CATALOG_TEAM: &str = "Participante registrado";
}

/// Structured identity of one event instance.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EventInfo {
    pub event_id: Option<String>,
    /// Sequential edition number; `None` when missing or ambiguous.
    pub edition: Option<u32>,
    /// Four-digit year or `sentinel::YEAR`.
    pub year: String,
    pub label: String,
}

impl EventInfo {
    pub fn year_number(&self) -> Option<u32> {
        parse_year(&self.year)
    }

    pub fn has_year(&self) -> bool {
        self.year_number().is_some()
    }

    /// "Gran Reto 2019"; the bare label when the year is unknown.
    pub fn display(&self) -> String {
        if self.has_year() && !self.label.contains(&self.year) {
            format!("{} {}", self.label, self.year)
        } else {
            self.label.clone()
        }
    }

    /// Edition ascending with unknown editions last, then year, then label.
    pub fn cmp_edition(&self, other: &Self) -> Ordering {
        match (self.edition, other.edition) {
            (Some(a), Some(b)) => a.cmp(&b),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
        .then_with(|| cmp_years(&self.year, &other.year))
        .then_with(|| self.label.cmp(&other.label))
    }
}

/// Parse a year label; sentinels and junk give `None`.
pub fn parse_year(s: &str) -> Option<u32> {
    let t = s.trim();
    if t.len() == 4 && t.bytes().all(|b| b.is_ascii_digit()) { t.parse().ok() } else { None }
}

/// Numeric years ascending, unknown years last (text order among themselves).
pub fn cmp_years(a: &str, b: &str) -> Ordering {
    match (parse_year(a), parse_year(b)) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.cmp(b),
    }
}

/// Numeric years descending, unknown years still last.
pub fn cmp_years_desc(a: &str, b: &str) -> Ordering {
    match (parse_year(a), parse_year(b)) {
        (Some(x), Some(y)) => y.cmp(&x),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// One race participation in canonical form.
#[derive(Clone, Debug, PartialEq)]
pub struct NormalizedRecord {
    pub participant_key: String,
    pub participant_id: Option<String>,
    pub bib: String,
    pub name: String,
    pub origin: String,
    pub team: String,
    pub gender: String,
    pub age_group: String,
    pub category: String,
    pub distance: String,
    pub event: EventInfo,
    pub event_key: String,
    pub time_minutes: Option<f64>,
    pub time_label: String,
    pub placement: Option<u32>,
    pub position_category: String,
    pub position_gender: String,
    pub position_general: String,
}

impl NormalizedRecord {
    pub fn year(&self) -> &str {
        &self.event.year
    }

    /// Short text used in competitor search indexes.
    pub fn summary(&self) -> String {
        format!("{} {} {} {}", self.event.year, self.distance, self.category, self.time_label)
    }

    pub fn has_time(&self) -> bool {
        self.time_minutes.is_some_and(f64::is_finite)
    }
}
