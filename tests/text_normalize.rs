// tests/text_normalize.rs
use race_stats::core::text::{
    build_search_index, contains_term, normalize_text, normalize_ws, sanitize_filename, title_case,
};

#[test]
fn accents_case_and_padding_collapse_to_one_form() {
    let a = normalize_text("ÁLVAREZ");
    assert_eq!(a, "alvarez");
    assert_eq!(a, normalize_text("alvarez"));
    assert_eq!(a, normalize_text("Álvarez "));
}

#[test]
fn normalization_is_idempotent() {
    for s in ["Peña Nieto", "  MÉXICO ", "Ñandú", "", "São Paulo"] {
        let once = normalize_text(s);
        assert_eq!(normalize_text(&once), once, "{s:?}");
    }
}

#[test]
fn search_index_skips_empty_fields() {
    assert_eq!(build_search_index(["José", "", "  ", "Puebla"]), "jose puebla");
}

#[test]
fn terms_match_whole_words_only() {
    assert!(contains_term("san andres cholula, pue.", "cholula"));
    assert!(contains_term("san andres cholula, pue.", "pue"));
    assert!(!contains_term("cholulas", "cholula"));
    assert!(!contains_term("anything", ""));
}

#[test]
fn whitespace_and_title_case() {
    assert_eq!(normalize_ws("  gran \t  reto \n"), "gran reto");
    assert_eq!(title_case("gran  RETO"), "Gran Reto");
}

#[test]
fn file_stems_are_safe() {
    assert_eq!(sanitize_filename("Top Events 2019!", "report"), "top_events_2019");
    assert_eq!(sanitize_filename("!!!", "report"), "report");
}
