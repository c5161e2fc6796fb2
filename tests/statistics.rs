// tests/statistics.rs
use serde_json::{json, Value};

use race_stats::model::{sentinel, NormalizedRecord};
use race_stats::normalize::normalize_all;
use race_stats::stats::{
    self, age_distribution, fastest, gender_distribution, top_categories, top_events, total_unique,
    unique_by_distance, unique_by_event, unique_by_state, unique_by_year, GenderBucket, RecordFilter, Series,
};

fn records(rows: Vec<Value>) -> Vec<NormalizedRecord> {
    normalize_all(&rows).records
}

/// Ana runs three editions, Beto two, Carla one.
fn corpus() -> Vec<NormalizedRecord> {
    records(vec![
        json!({"participant_id": "a", "sexo": "F", "edad": "18 - 29", "categoria": "Libre", "procedencia": "Puebla", "distancia": "5K", "evento": "1_1_gran_reto_2019", "tiempo": "00:30:00"}),
        json!({"participant_id": "a", "sexo": "F", "edad": "18 - 29", "categoria": "Libre", "procedencia": "Puebla", "distancia": "5K", "evento": "1_2_gran_reto_2020", "tiempo": "00:28:00"}),
        json!({"participant_id": "a", "sexo": "F", "edad": "18 - 29", "categoria": "Libre", "procedencia": "Puebla", "distancia": "5K", "evento": "1_3_gran_reto_2021", "tiempo": "00:27:00"}),
        json!({"participant_id": "b", "sexo": "Varonil", "edad": "8 - 12", "categoria": "Infantil", "procedencia": "Cholula", "distancia": "1K", "evento": "1_1_gran_reto_2019", "tiempo": "00:06:00"}),
        json!({"participant_id": "b", "sexo": "Varonil", "edad": "8 - 12", "categoria": "Infantil", "procedencia": "Cholula", "distancia": "1K", "evento": "1_2_gran_reto_2020"}),
        json!({"participant_id": "c", "sexo": "", "categoria": "Libre", "procedencia": "Monterrey", "distancia": "5K", "evento": "Carrera"}),
    ])
}

fn s(label: &str, count: usize) -> Series {
    Series::new(label, count)
}

#[test]
fn unique_counts_never_exceed_rows() {
    let recs = corpus();
    assert_eq!(total_unique(&recs), 3);
    assert!(total_unique(&recs) <= recs.len());

    let distinct = records(vec![
        json!({"participant_id": "x", "distancia": "1K"}),
        json!({"participant_id": "y", "distancia": "1K"}),
    ]);
    assert_eq!(total_unique(&distinct), distinct.len());
}

#[test]
fn by_distance_sorted_by_label() {
    assert_eq!(unique_by_distance(&corpus()), [s("1K", 1), s("5K", 2)]);
}

#[test]
fn by_year_numeric_with_unknown_last() {
    assert_eq!(
        unique_by_year(&corpus()),
        [s("2019", 2), s("2020", 2), s("2021", 1), s(sentinel::YEAR, 1)]
    );
}

#[test]
fn by_event_in_edition_order() {
    let events = unique_by_event(&corpus());
    let view: Vec<(Option<u32>, usize)> = events.iter().map(|e| (e.event.edition, e.count)).collect();
    assert_eq!(view, [(Some(1), 2), (Some(2), 2), (Some(3), 1), (None, 1)]);
}

#[test]
fn by_event_scales_to_many_editions() {
    let rows: Vec<Value> = (0..4000)
        .map(|i| {
            let edition = 1 + i % 400;
            json!({"participant_id": i / 400, "distancia": "5K", "evento": format!("{edition}_{edition}_gran_reto_{}", 1990 + edition % 30)})
        })
        .collect();
    let events = unique_by_event(&records(rows));
    assert_eq!(events.len(), 400);
    assert_eq!(events[0].event.edition, Some(1));
    assert_eq!(events[399].event.edition, Some(400));
    assert!(events.iter().all(|e| e.count == 10));
}

#[test]
fn by_state_counts_desc_with_aliases() {
    let states = unique_by_state(&corpus());
    // "Cholula" folds into Puebla
    assert_eq!(states[0], s("Puebla", 2));
    assert!(states.contains(&s("Nuevo León", 1)));
}

#[test]
fn gender_and_age_buckets_count_people() {
    let recs = corpus();
    assert_eq!(
        gender_distribution(&recs),
        [s("Femenil", 1), s("Varonil", 1), s("Otro / N/D", 1)]
    );
    assert_eq!(
        age_distribution(&recs),
        [s("8 - 12", 1), s("18 - 29", 1), s(sentinel::AGE_GROUP, 1)]
    );
}

#[test]
fn top_lists() {
    let recs = corpus();
    let events = top_events(&recs, 2);
    assert_eq!(events.len(), 2);
    assert_eq!(events[0].count, 2);

    assert_eq!(top_categories(&recs, 3), [s("Libre", 2), s("Infantil", 1)]);
}

#[test]
fn fastest_skips_untimed_and_sorts_ascending() {
    let recs = corpus();
    let top = fastest(&recs, 3);
    let times: Vec<&str> = top.iter().map(|r| r.time_label.as_str()).collect();
    assert_eq!(times, ["00:06:00", "00:27:00", "00:28:00"]);
    assert!(fastest(&recs, 0).is_empty());
}

#[test]
fn record_filter_and_summary() {
    let recs = corpus();
    let f = RecordFilter {
        distance: Some("5k".into()),
        gender: Some(GenderBucket::Female),
        ..Default::default()
    };
    assert_eq!(f.apply(&recs).len(), 3);
    assert!(RecordFilter::default().is_empty());
    assert_eq!(RecordFilter::default().apply(&recs).len(), recs.len());

    let summary = stats::summarize(&recs, 3, 1);
    assert_eq!(summary.records, 6);
    assert_eq!(summary.unique_participants, 3);
    assert_eq!(summary.distances, 2);
    assert_eq!(summary.dropped_rows, 1);
}
