// tests/event_parser.rs
use race_stats::model::sentinel;
use race_stats::normalize::event::{extract_year, parse_event};

#[test]
fn structured_label_with_edition() {
    let e = parse_event("12_3_gran_reto_atlixco_2019");
    assert_eq!(e.event_id.as_deref(), Some("12"));
    assert_eq!(e.edition, Some(3));
    assert_eq!(e.year, "2019");
    assert_eq!(e.label, "3 Gran Reto Atlixco 2019");
}

#[test]
fn structured_label_with_wordy_second_token() {
    let e = parse_event("5_gran_reto_atlixco_2020");
    assert_eq!(e.event_id.as_deref(), Some("5"));
    assert_eq!(e.edition, None);
    assert_eq!(e.year, "2020");
    assert_eq!(e.label, "Gran Reto Atlixco 2020");
}

#[test]
fn fallback_keeps_upstream_id_prefix() {
    let e = parse_event("07_Gran Reto Atlixco-2021");
    assert_eq!(e.event_id.as_deref(), Some("07"));
    assert_eq!(e.edition, None);
    assert_eq!(e.year, "2021");
    assert_eq!(e.label, "Gran Reto Atlixco 2021");
    assert_eq!(e.event_key(), "07|2021");
}

#[test]
fn leading_year_is_not_an_id() {
    let e = parse_event("2018_carrera");
    assert_eq!(e.event_id, None);
    assert_eq!(e.year, "2018");
    assert_eq!(e.label, "2018 carrera");
}

#[test]
fn empty_event_uses_sentinels() {
    let e = parse_event("   ");
    assert_eq!(e.label, sentinel::EVENT);
    assert_eq!(e.year, sentinel::YEAR);
    assert!(!e.has_year());
    assert_eq!(e.display(), sentinel::EVENT);
}

#[test]
fn key_ignores_spelling_without_id() {
    let a = parse_event("Carrera  Nocturna 2018");
    let b = parse_event("carrera nocturna 2018");
    assert_eq!(a.event_key(), b.event_key());
}

#[test]
fn editions_sort_with_unknown_last() {
    let mut events = vec![
        parse_event("Carrera 2017"),
        parse_event("1_2_gran_reto_2019"),
        parse_event("1_1_gran_reto_2018"),
    ];
    events.sort_by(|a, b| a.cmp_edition(b));
    let editions: Vec<Option<u32>> = events.iter().map(|e| e.edition).collect();
    assert_eq!(editions, [Some(1), Some(2), None]);
}

#[test]
fn year_extraction() {
    assert_eq!(extract_year("Gran Reto 2019"), "2019");
    assert_eq!(extract_year("no year here"), sentinel::YEAR);
}
