// tests/histogram.rs
use serde_json::json;

use race_stats::normalize::normalize_all;
use race_stats::stats::histogram::{auto_range, build_histogram, histograms_by_gender, shared_range, HistogramRange};
use race_stats::config::consts::MAX_HISTOGRAM_BINS;
use race_stats::stats::GenderBucket;

#[test]
fn auto_range_bins_and_labels() {
    let h = build_histogram(&[1.0, 4.0, 6.0, 11.0], 5.0, None);
    assert_eq!(h.labels, ["0-5 min", "5-10 min", "10-15 min"]);
    assert_eq!(h.counts, [2, 1, 1]);
    assert_eq!(h.total(), 4);
}

#[test]
fn last_bin_includes_its_upper_bound() {
    let h = build_histogram(&[0.0, 5.0, 10.0], 5.0, None);
    assert_eq!(h.labels, ["0-5 min", "5-10 min"]);
    assert_eq!(h.counts, [1, 2]);
}

#[test]
fn degenerate_range_gets_one_bin() {
    let h = build_histogram(&[10.0, 10.0], 5.0, None);
    assert_eq!(h.labels, ["10-15 min"]);
    assert_eq!(h.counts, [2]);
}

#[test]
fn empty_and_non_finite_input() {
    let h = build_histogram(&[f64::NAN, f64::INFINITY], 5.0, None);
    assert!(h.labels.is_empty());
    assert!(h.is_empty());
    assert_eq!(auto_range(&[], 5.0), None);
}

#[test]
fn external_range_aligns_histograms() {
    let range = HistogramRange { min: 0.0, max: 20.0 };
    let h = build_histogram(&[3.0, 25.0], 5.0, Some(range));
    assert_eq!(h.labels.len(), 4);
    // 25 lies outside the range and is ignored
    assert_eq!(h.counts, [1, 0, 0, 0]);

    // the cut-off is the range's max, not the end of its last bin
    let h = build_histogram(&[3.0, 12.0, 13.0], 5.0, Some(HistogramRange { min: 0.0, max: 12.0 }));
    assert_eq!(h.labels, ["0-5 min", "5-10 min", "10-15 min"]);
    assert_eq!(h.counts, [1, 0, 1]);

    let a = [12.0, 14.0];
    let b = [31.0];
    let shared = shared_range(&[&a, &b], 5.0).unwrap();
    assert_eq!(shared, HistogramRange { min: 10.0, max: 35.0 });
    let ha = build_histogram(&a, 5.0, Some(shared));
    let hb = build_histogram(&b, 5.0, Some(shared));
    assert_eq!(ha.labels, hb.labels);
}

#[test]
fn fractional_bins_format_cleanly() {
    let h = build_histogram(&[0.2, 2.6], 2.5, None);
    assert_eq!(h.labels, ["0-2.5 min", "2.5-5 min"]);
}

#[test]
fn grouped_by_gender_share_one_axis() {
    let rows = vec![
        json!({"sexo": "F", "distancia": "5K", "tiempo": "00:22:00"}),
        json!({"sexo": "M", "distancia": "5K", "tiempo": "00:41:00"}),
        json!({"sexo": "M", "distancia": "5K"}),
    ];
    let recs = normalize_all(&rows).records;
    let groups = histograms_by_gender(&recs, 5.0);
    let buckets: Vec<GenderBucket> = groups.iter().map(|(b, _)| *b).collect();
    assert_eq!(buckets, [GenderBucket::Female, GenderBucket::Male]);
    assert_eq!(groups[0].1.labels, groups[1].1.labels);
    assert_eq!(groups[0].1.labels.first().map(String::as_str), Some("20-25 min"));
    assert_eq!(groups[1].1.total(), 1);
}

#[test]
fn corrupt_time_cannot_blow_up_the_axis() {
    let rows = vec![
        json!({"distancia": "5K", "tiempo": "00:20:00"}),
        json!({"distancia": "5K", "tiempo": "9999:00:00"}),
    ];
    let times: Vec<f64> = normalize_all(&rows).records.iter().filter_map(|r| r.time_minutes).collect();
    assert_eq!(times.len(), 2);

    let h = build_histogram(&times, 5.0, None);
    assert_eq!(h.labels.len(), MAX_HISTOGRAM_BINS);
    assert_eq!(h.labels.first().map(String::as_str), Some("20-25 min"));
    assert_eq!(h.labels.last().map(String::as_str), Some("1215+ min"));
    assert_eq!(h.counts[0], 1);
    assert_eq!(h.counts[MAX_HISTOGRAM_BINS - 1], 1);
    assert_eq!(h.total(), 2);
}
