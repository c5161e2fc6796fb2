// tests/export.rs
use std::fs;
use std::path::PathBuf;

use race_stats::config::options::{AppOptions, ExportFormat};
use race_stats::csv::{to_export_string, write_row};
use race_stats::file::{self, write_table};
use race_stats::stats::Series;
use race_stats::table::Table;

fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("race_stats_export_{}", name));
    let _ = fs::remove_dir_all(&p);
    fs::create_dir_all(&p).unwrap();
    p
}

fn sample() -> Table {
    Table::series("State", &[Series::new("Puebla", 12), Series::new("Otro / N/D", 3)])
}

#[test]
fn quotes_only_when_needed() {
    let mut buf = Vec::new();
    write_row(&mut buf, &["a".into(), "b,c".into(), "say \"hi\"".into()], ',').unwrap();
    assert_eq!(String::from_utf8(buf).unwrap(), "a,\"b,c\",\"say \"\"hi\"\"\"\n");

    let mut buf = Vec::new();
    write_row(&mut buf, &["b,c".into(), "d".into()], '\t').unwrap();
    assert_eq!(String::from_utf8(buf).unwrap(), "b,c\td\n");
}

#[test]
fn header_toggle() {
    let t = sample();
    let with = to_export_string(&t.headers, &t.rows, true, ',');
    let without = to_export_string(&t.headers, &t.rows, false, ',');
    assert_eq!(with, "State,Participants\nPuebla,12\nOtro / N/D,3\n");
    assert_eq!(without, "Puebla,12\nOtro / N/D,3\n");
}

#[test]
fn respects_user_extension_when_format_changes() {
    let mut opts = AppOptions::default();
    let dir = tmp_dir("ext");
    let path = dir.join("states.txt");
    opts.export.set_path(path.to_str().unwrap());

    opts.export.format = ExportFormat::Tsv;
    let out = opts.export.out_path();
    assert!(out.to_string_lossy().ends_with("states.txt"));

    let written = file::write_export(&opts.export, &sample()).unwrap();
    let text = fs::read_to_string(written).unwrap();
    assert_eq!(text.lines().next(), Some("State\tParticipants"));
}

#[test]
fn report_paths_use_format_extension() {
    let mut opts = AppOptions::default();
    let dir = tmp_dir("report");
    opts.export.set_dir(&dir);
    assert_eq!(opts.export.out_path_for("Top Events"), dir.join("top_events.csv"));
    opts.export.format = ExportFormat::Tsv;
    assert_eq!(opts.export.out_path_for("medals"), dir.join("medals.tsv"));
}

#[test]
fn write_table_creates_missing_directories() {
    let dir = tmp_dir("nested");
    let target = dir.join("a").join("b").join("states.csv");
    let opts = AppOptions::default();
    let written = write_table(&opts.export, &sample(), &target).unwrap();
    assert_eq!(written, target);
    assert!(fs::read_to_string(&target).unwrap().starts_with("State,Participants\n"));
}

#[test]
fn chart_png_is_written() {
    use race_stats::chart::{render, ChartData, ChartKind};
    let dir = tmp_dir("png");
    let data = ChartData::from_series("States", &[Series::new("Puebla", 12)]);
    let img = render(&data, ChartKind::Bar, 200, 100);
    let path = file::write_png(&img, &dir.join("charts").join("states.png")).unwrap();
    let bytes = fs::read(path).unwrap();
    assert_eq!(&bytes[..4], b"\x89PNG");
}
