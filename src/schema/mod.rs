// src/schema/mod.rs
//! # Field schema: where each canonical field lives in the raw corpus
//!
//! Upstream exports changed key names between vintages (English keys, Spanish
//! keys with and without accents, split time fields). Instead of scattering
//! `a.or(b).or(c)` chains through the normalizer, every canonical field is
//! described by one [`FieldRule`]: an **ordered** list of raw keys, evaluated
//! first-non-empty, plus the sentinel used when none of them is usable.
//!
//! ## What lives here
//! - The rule tables (`results::*`) and the catalog entry shape (`catalog`).
//! - Tolerant value readers: strings are trimmed, numbers stringified, arrays
//!   joined, `null`/empty treated as missing.
//!
//! ## What does **not** live here
//! - Interpretation of values (time parsing, distance labels, event parsing);
//!   that is `normalize::*`.
//!
//! Rules are plain data, so each field's fallback policy is unit-testable on
//! its own (see `tests/record_normalizer.rs`).

use serde_json::{Map, Value};

pub mod catalog;
pub mod results;

/// One untyped corpus row.
pub type RawRecord = Map<String, Value>;

#[derive(Clone, Copy, Debug)]
pub struct FieldRule {
    /// Canonical field name (logs/tests only)
    pub field: &'static str,
    /// Raw keys in priority order
    pub keys: &'static [&'static str],
    pub sentinel: &'static str,
}

impl FieldRule {
    /// First non-empty value, in key priority order.
    pub fn first(&self, raw: &RawRecord) -> Option<String> {
        self.keys.iter().find_map(|k| raw.get(*k).and_then(value_text))
    }

    /// First non-empty value, or the field's sentinel.
    pub fn resolve(&self, raw: &RawRecord) -> String {
        self.first(raw).unwrap_or_else(|| s!(self.sentinel))
    }

    /// First key holding a finite number (JSON number or numeric string).
    pub fn number(&self, raw: &RawRecord) -> Option<f64> {
        self.keys.iter().find_map(|k| raw.get(*k).and_then(value_number))
    }

    /// Which key won, if any. Handy when logging odd rows.
    pub fn matched_key(&self, raw: &RawRecord) -> Option<&'static str> {
        self.keys.iter().copied().find(|k| raw.get(*k).and_then(value_text).is_some())
    }
}

/// Display text of a JSON value; `None` for null, empty or structured values.
pub fn value_text(v: &Value) -> Option<String> {
    let text = match v {
        Value::Null | Value::Object(_) => return None,
        Value::String(s) => s.trim().to_string(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Array(items) => items
            .iter()
            .filter_map(value_text)
            .collect::<Vec<_>>()
            .join(", "),
    };
    if text.is_empty() { None } else { Some(text) }
}

/// Finite number from a JSON number or a numeric string.
pub fn value_number(v: &Value) -> Option<f64> {
    let n = match v {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    n.is_finite().then_some(n)
}

/// Leading integer of a position-like value ("3", "3°", " 12 ", 4.0).
pub fn value_leading_int(v: &Value) -> Option<u32> {
    match v {
        Value::Number(n) => {
            let f = n.as_f64()?;
            (f.is_finite() && f >= 0.0 && f.fract() == 0.0 && f <= u32::MAX as f64).then_some(f as u32)
        }
        Value::String(s) => {
            let digits: String = s.trim().chars().take_while(|c| c.is_ascii_digit()).collect();
            digits.parse().ok()
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn arrays_join_and_empty_is_missing() {
        assert_eq!(value_text(&json!(["25 - 29", " ", "30 - 34"])).as_deref(), Some("25 - 29, 30 - 34"));
        assert_eq!(value_text(&json!([])), None);
        assert_eq!(value_text(&json!("  ")), None);
        assert_eq!(value_text(&json!(null)), None);
    }

    #[test]
    fn leading_int_tolerates_suffixes() {
        assert_eq!(value_leading_int(&json!("3°")), Some(3));
        assert_eq!(value_leading_int(&json!(4.0)), Some(4));
        assert_eq!(value_leading_int(&json!(4.5)), None);
        assert_eq!(value_leading_int(&json!("—")), None);
    }
}
