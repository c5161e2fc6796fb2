// tests/medals.rs
use serde_json::{json, Value};

use race_stats::competitors::aggregate;
use race_stats::normalize::normalize_all;
use race_stats::stats::medals::{medal_page, medal_table, page_count};

fn run(name: &str, place: Option<u32>) -> Value {
    match place {
        Some(p) => json!({"nombre": name, "distancia": "5K", "lugar_categoria": p}),
        None => json!({"nombre": name, "distancia": "5K"}),
    }
}

#[test]
fn one_gold_beats_any_number_of_silvers() {
    let rows = vec![
        run("Beto", Some(2)),
        run("Beto", Some(2)),
        run("Beto", Some(2)),
        run("Ana", Some(1)),
    ];
    let comps = aggregate(&normalize_all(&rows).records);
    let table = medal_table(&comps);
    assert_eq!(table[0].name, "Ana");
    assert_eq!(table[0].tally, [1, 0, 0, 0, 0, 0]);
    assert_eq!(table[1].tally, [0, 3, 0, 0, 0, 0]);
}

#[test]
fn ties_break_on_total_then_name() {
    let rows = vec![
        run("Dora", Some(3)),
        run("Carla", Some(3)),
        run("Carla", None),
        run("Fede", Some(5)),
        run("Eva", Some(5)),
    ];
    let comps = aggregate(&normalize_all(&rows).records);
    let names: Vec<String> = medal_table(&comps).into_iter().map(|m| m.name).collect();
    assert_eq!(names, ["Carla", "Dora", "Eva", "Fede"]);
}

#[test]
fn off_podium_and_unplaced_competitors_are_left_out() {
    let rows = vec![run("Gil", Some(7)), run("Hugo", None), run("Ines", Some(6))];
    let comps = aggregate(&normalize_all(&rows).records);
    let table = medal_table(&comps);
    assert_eq!(table.len(), 1);
    assert_eq!(table[0].name, "Ines");
    assert_eq!(table[0].podiums(), 1);
    assert_eq!(table[0].total, 1);
}

#[test]
fn paging() {
    let rows: Vec<Value> = ["A", "B", "C"].iter().map(|n| run(n, Some(1))).collect();
    let table = medal_table(&aggregate(&normalize_all(&rows).records));
    assert_eq!(medal_page(&table, 0, 2).len(), 2);
    assert_eq!(medal_page(&table, 1, 2).len(), 1);
    assert!(medal_page(&table, 5, 2).is_empty());
    assert_eq!(page_count(table.len(), 2), 2);
}
