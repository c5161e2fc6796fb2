// tests/load_snapshot.rs
use std::fs;
use std::path::PathBuf;

use serde_json::{json, Value};

use race_stats::config::options::DataOptions;
use race_stats::error::LoadError;
use race_stats::model::parse_year;
use race_stats::progress::Progress;
use race_stats::store::{load_snapshot, read_json_array};

fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("race_stats_load_{}", name));
    let _ = fs::remove_dir_all(&p);
    fs::create_dir_all(&p).unwrap();
    p
}

fn write_json(path: &PathBuf, v: &Value) {
    fs::write(path, serde_json::to_string(v).unwrap()).unwrap();
}

/// 500 rows over 3 editions and 200 participant ids.
fn corpus() -> Value {
    let rows: Vec<Value> = (0..500)
        .map(|i| {
            let id = i % 200;
            let edition = i / 200 + 1;
            json!({
                "participant_id": format!("P{id:03}"),
                "nombre_completo": format!("Corredor {id}"),
                "distancia": if id % 2 == 0 { "5K" } else { "1K" },
                "evento": format!("1_{edition}_gran_reto_{}", 2018 + edition),
                "tiempo": format!("00:{:02}:00", 10 + i % 40),
                "sexo": if id % 3 == 0 { "F" } else { "M" },
            })
        })
        .collect();
    Value::Array(rows)
}

#[derive(Default)]
struct Recorder {
    done: Vec<String>,
    failed: Vec<String>,
    finished: bool,
}

impl Progress for Recorder {
    fn item_done(&mut self, source: &str) { self.done.push(source.to_string()); }
    fn item_failed(&mut self, source: &str) { self.failed.push(source.to_string()); }
    fn finish(&mut self) { self.finished = true; }
}

#[test]
fn end_to_end_groups_every_participant() {
    let dir = tmp_dir("e2e");
    let opts = DataOptions::from_dir(&dir);
    write_json(&opts.results_path, &corpus());
    write_json(opts.catalog_path.as_ref().unwrap(), &json!([
        {"participant_id": "P000", "procedencias": ["Puebla"]},
        {"participant_id": "X999", "nombre_completo": "Solo Catálogo"}
    ]));

    let mut rec = Recorder::default();
    let snap = load_snapshot(&opts, Some(&mut rec)).unwrap();

    assert_eq!(snap.records.len(), 500);
    assert_eq!(snap.dropped, 0);
    assert_eq!(snap.competitors.len(), 201);
    assert_eq!(snap.competitors.iter().filter(|c| !c.records().is_empty()).count(), 200);
    assert!(!snap.catalog_failed);
    assert!(rec.finished);
    assert!(rec.failed.is_empty());
    assert_eq!(rec.done.len(), 2);

    for c in snap.competitors.iter().filter(|c| !c.records().is_empty()) {
        let years: Vec<u32> = c.records().iter().filter_map(|r| parse_year(r.year())).collect();
        assert!(years.windows(2).all(|w| w[0] >= w[1]), "{} not sorted: {:?}", c.key(), years);
    }

    let p0 = snap.competitors.iter().find(|c| c.key() == "p000").unwrap();
    assert_eq!(p0.records().len(), 3);
    assert_eq!(p0.origin(), "Puebla");
}

#[test]
fn broken_catalog_degrades_to_empty() {
    let dir = tmp_dir("bad_catalog");
    let opts = DataOptions::from_dir(&dir);
    write_json(&opts.results_path, &json!([{"nombre": "Ana", "distancia": "1K"}]));
    fs::write(opts.catalog_path.as_ref().unwrap(), "{ not json").unwrap();

    let mut rec = Recorder::default();
    let snap = load_snapshot(&opts, Some(&mut rec)).unwrap();
    assert_eq!(snap.competitors.len(), 1);
    assert!(snap.catalog_failed);
    assert_eq!(rec.failed, ["catalog"]);
}

#[test]
fn missing_catalog_file_also_degrades() {
    let dir = tmp_dir("no_catalog");
    let opts = DataOptions::from_dir(&dir);
    write_json(&opts.results_path, &json!([{"nombre": "Ana", "distancia": "1K"}]));

    let snap = load_snapshot(&opts, None).unwrap();
    assert_eq!(snap.records.len(), 1);
    assert!(snap.catalog_failed);
}

#[test]
fn results_failures_are_errors() {
    let dir = tmp_dir("bad_results");
    let opts = DataOptions { results_path: dir.join("missing.json"), catalog_path: None };
    assert!(matches!(load_snapshot(&opts, None), Err(LoadError::Io { .. })));

    let obj = dir.join("object.json");
    fs::write(&obj, r#"{"rows": []}"#).unwrap();
    let err = read_json_array(&obj).unwrap_err();
    assert!(matches!(err, LoadError::NotAnArray { .. }));
    assert_eq!(err.path(), &obj);

    let junk = dir.join("junk.json");
    fs::write(&junk, "[1, 2,").unwrap();
    assert!(matches!(read_json_array(&junk), Err(LoadError::Json { .. })));
}
