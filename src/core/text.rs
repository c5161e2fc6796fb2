// src/core/text.rs
//
// Text canonicalization shared by search, identity keys and keyword matching.
// Everything that compares user/corpus text goes through `normalize_text`.

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Decompose (NFD), strip combining marks, lowercase, trim.
/// Idempotent: `normalize_text(&normalize_text(x)) == normalize_text(x)`.
pub fn normalize_text(input: &str) -> String {
    input
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase()
        .trim()
        .to_string()
}

/// Join the non-empty fields with single spaces and normalize the result.
pub fn build_search_index<I, S>(fields: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut joined = s!();
    for f in fields {
        let f = f.as_ref().trim();
        if f.is_empty() { continue; }
        if !joined.is_empty() { joined.push(' '); }
        joined.push_str(f);
    }
    normalize_text(&joined)
}

/// Collapse runs of whitespace into one space and trim.
pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// Whole-word match of an already normalized `term` inside normalized `haystack`.
/// Punctuation counts as a word boundary, so "cholula, pue." matches "pue".
pub fn contains_term(haystack: &str, term: &str) -> bool {
    if term.is_empty() { return false; }
    let padded_hay = padded_words(haystack);
    let padded_term = padded_words(term);
    padded_hay.contains(&padded_term)
}

fn padded_words(s: &str) -> String {
    let spaced: String = s
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { ' ' })
        .collect();
    join!(" ", &normalize_ws(&spaced), " ")
}

/// Title-case each whitespace-separated word ("gran reto" -> "Gran Reto").
pub fn title_case(s: &str) -> String {
    normalize_ws(s)
        .split(' ')
        .map(|w| {
            let mut cs = w.chars();
            match cs.next() {
                Some(first) => first.to_uppercase().chain(cs.flat_map(|c| c.to_lowercase())).collect(),
                None => s!(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

/// File-system safe stem: alphanumerics kept, whitespace -> '_', others dropped.
pub fn sanitize_filename(name: &str, fallback: &str) -> String {
    let name = normalize_text(name);
    let mut out = String::with_capacity(name.len());
    let mut last_us = false;
    for ch in name.chars() {
        if ch.is_ascii_alphanumeric() { out.push(ch); last_us = false; }
        else if ch.is_whitespace() { if !last_us { out.push('_'); last_us = true; } }
        else if ch=='-' || ch=='_' { if !(last_us && ch=='_') { out.push(ch); } last_us = ch=='_'; }
    }
    let out = out.trim_matches('_').to_string();
    if out.is_empty() { s!(fallback) } else { out }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn padded_words_splits_on_punctuation() {
        assert_eq!(padded_words("cholula,pue."), " cholula pue ");
    }

    #[test]
    fn title_case_handles_accents() {
        assert_eq!(title_case("  ÁNGEL  de la sierra"), "Ángel De La Sierra");
    }

    #[test]
    fn sanitize_keeps_ascii_stem() {
        assert_eq!(sanitize_filename("Top Categorías", "x"), "top_categorias");
        assert_eq!(sanitize_filename("***", "report"), "report");
    }
}
