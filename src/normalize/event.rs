// src/normalize/event.rs
//
// Event identity from free text. Two shapes show up in the corpus:
//   structured:  "12_3_gran_reto_atlixco_2019"  (<id>_<edition>_<name>_<year>)
//   free text:   "07_Gran Reto Atlixco-2021", "Carrera 2018", ""

use std::sync::OnceLock;

use regex::Regex;

use crate::core::text::{normalize_text, normalize_ws, title_case};
use crate::model::{sentinel, EventInfo};

fn structured_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^\s*(\d+)_([^_]*)_(.+)_((?:19|20)\d{2})\s*$")
            .expect("valid structured event regex")
    })
}

fn id_prefix_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^\s*(\d+)_(.*)$").expect("valid event id prefix regex")
    })
}

fn year_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?:^|\D)((?:19|20)\d{2})(?:\D|$)").expect("valid year regex")
    })
}

/// First standalone 19xx/20xx token, or the "year unknown" sentinel.
pub fn extract_year(text: &str) -> String {
    year_re()
        .captures(text)
        .and_then(|c| c.get(1))
        .map(|m| s!(m.as_str()))
        .unwrap_or_else(|| s!(sentinel::YEAR))
}

fn leading_number(token: &str) -> Option<u32> {
    let digits: String = token.trim().chars().take_while(|c| c.is_ascii_digit()).collect();
    digits.parse::<u32>().ok().filter(|n| *n > 0)
}

fn separators_to_spaces(s: &str) -> String {
    normalize_ws(&s.replace(['_', '-'], " "))
}

/// Parse an event string into its structured identity.
pub fn parse_event(text: &str) -> EventInfo {
    if let Some(info) = parse_structured(text) {
        return info;
    }
    parse_fallback(text)
}

fn parse_structured(text: &str) -> Option<EventInfo> {
    let caps = structured_re().captures(text)?;
    let event_id = s!(&caps[1]);
    let edition = leading_number(&caps[2]);
    // A wordy second token is part of the name, not an edition.
    let raw_name = match edition {
        Some(_) => s!(&caps[3]),
        None if caps[2].chars().any(|c| c.is_ascii_digit()) => s!(&caps[3]),
        None => join!(&caps[2], " ", &caps[3]),
    };
    let name = title_case(&separators_to_spaces(&raw_name));
    if name.is_empty() {
        return None;
    }
    let year = s!(&caps[4]);

    let label = match edition {
        Some(ed) => format!("{ed} {name} {year}"),
        None => format!("{name} {year}"),
    };

    Some(EventInfo { event_id: Some(event_id), edition, year, label })
}

fn parse_fallback(text: &str) -> EventInfo {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return EventInfo {
            event_id: None,
            edition: None,
            year: s!(sentinel::YEAR),
            label: s!(sentinel::EVENT),
        };
    }

    // A leading "<digits>_" is an upstream id, unless the digits are the year itself.
    let (event_id, rest) = match id_prefix_re().captures(trimmed) {
        Some(c) if !is_year_token(&c[1]) && !c[2].trim().is_empty() => {
            (Some(s!(&c[1])), s!(&c[2]))
        }
        _ => (None, s!(trimmed)),
    };

    let label = separators_to_spaces(&rest);
    let label = if label.is_empty() { s!(sentinel::EVENT) } else { label };

    EventInfo {
        event_id,
        edition: None,
        year: extract_year(trimmed),
        label,
    }
}

fn is_year_token(s: &str) -> bool {
    s.len() == 4 && (s.starts_with("19") || s.starts_with("20"))
}

impl EventInfo {
    /// Dedup key: `<id>|<year>` when an upstream id exists, otherwise
    /// `<normalized label>|<year>`.
    pub fn event_key(&self) -> String {
        match &self.event_id {
            Some(id) => join!(&normalize_text(id), "|", &self.year),
            None => join!(&normalize_text(&self.label), "|", &self.year),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn year_needs_token_boundaries() {
        assert_eq!(extract_year("evento_2019"), "2019");
        assert_eq!(extract_year("ref 120195"), sentinel::YEAR);
        assert_eq!(extract_year("1999 y 2004"), "1999");
    }

    #[test]
    fn leading_number_rejects_zero_and_words() {
        assert_eq!(leading_number("3ra"), Some(3));
        assert_eq!(leading_number("0"), None);
        assert_eq!(leading_number("tercera"), None);
    }
}
