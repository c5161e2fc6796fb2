// benches/pipeline.rs
use criterion::{criterion_group, criterion_main, Criterion, black_box};
use serde_json::{json, Value};

use race_stats::{competitors, normalize, stats};

/// Synthetic corpus shaped like the real export: mixed id/bib keys,
/// free-text and structured events, clock strings and split time fields.
fn corpus(n: usize) -> Vec<Value> {
    (0..n)
        .map(|i| {
            let id = i % 1500;
            let year = 2015 + (i % 9);
            if i % 4 == 0 {
                json!({
                    "dorsal": id,
                    "nombre": format!("corredor número {id}"),
                    "distancia": "5 km",
                    "evento": format!("Gran Reto Atlixco-{year}"),
                    "horas": 0, "minutos": 20 + i % 30, "segundos": i % 60,
                    "sexo": "f",
                    "categoria": "Femenil 30-39",
                    "lugar_categoria": 1 + i % 8,
                })
            } else {
                json!({
                    "participant_id": format!("P{id:04}"),
                    "nombre_completo": format!("Corredor Número {id}"),
                    "distancia": if i % 3 == 0 { "1K" } else { "5K" },
                    "evento": format!("{}_{}_gran_reto_atlixco_{year}", i % 7, 1 + i % 9),
                    "tiempo": format!("00:{:02}:{:02}", 18 + i % 40, i % 60),
                    "sexo": "M",
                    "procedencia": "Atlixco, Puebla",
                    "lugar_rama": 1 + i % 20,
                })
            }
        })
        .collect()
}

fn bench_pipeline(c: &mut Criterion) {
    let rows = corpus(20_000);
    let records = normalize::normalize_all(&rows).records;

    c.bench_function("normalize_all", |b| {
        b.iter(|| {
            let out = normalize::normalize_all(black_box(&rows));
            black_box(out.records.len())
        })
    });

    c.bench_function("aggregate", |b| {
        b.iter(|| {
            let grouped = competitors::aggregate(black_box(&records));
            black_box(grouped.len())
        })
    });

    c.bench_function("stats_overview", |b| {
        b.iter(|| {
            let states = stats::unique_by_state(black_box(&records));
            let events = stats::unique_by_event(black_box(&records));
            let hists = stats::histograms_by_gender(black_box(&records), 5.0);
            black_box((states.len(), events.len(), hists.len()))
        })
    });
}

criterion_group!(benches, bench_pipeline);
criterion_main!(benches);
