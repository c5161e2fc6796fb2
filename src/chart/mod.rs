// src/chart/mod.rs
//
// Chart sink. Statistics become `ChartData`; a renderer turns that into a
// canvas (`raster`), and the canvas owner keeps at most one live chart per
// canvas id (`registry`).

pub mod raster;
pub mod registry;

pub use raster::{render, ChartKind, PALETTE};
pub use registry::{ChartHandle, ChartRegistry};

use crate::stats::{EventCount, Histogram, Series};

/// One named series of values, aligned with `ChartData::labels`.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartSeries {
    pub name: String,
    pub values: Vec<f64>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ChartData {
    pub title: String,
    pub labels: Vec<String>,
    pub series: Vec<ChartSeries>,
}

impl ChartData {
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty() || self.series.iter().all(|s| s.values.iter().all(|v| *v == 0.0))
    }

    /// Largest value across all series, 0 when empty.
    pub fn max_value(&self) -> f64 {
        self.series
            .iter()
            .flat_map(|s| s.values.iter().copied())
            .filter(|v| v.is_finite())
            .fold(0.0, f64::max)
    }

    pub fn from_series(title: &str, series: &[Series]) -> Self {
        Self {
            title: s!(title),
            labels: series.iter().map(|s| s.label.clone()).collect(),
            series: vec![ChartSeries {
                name: s!(title),
                values: series.iter().map(|s| s.count as f64).collect(),
            }],
        }
    }

    pub fn from_events(title: &str, events: &[EventCount]) -> Self {
        Self {
            title: s!(title),
            labels: events.iter().map(|e| e.event.display()).collect(),
            series: vec![ChartSeries {
                name: s!(title),
                values: events.iter().map(|e| e.count as f64).collect(),
            }],
        }
    }

    pub fn from_histogram(title: &str, hist: &Histogram) -> Self {
        Self {
            title: s!(title),
            labels: hist.labels.clone(),
            series: vec![ChartSeries {
                name: s!(title),
                values: hist.counts.iter().map(|c| *c as f64).collect(),
            }],
        }
    }

    /// Several histograms over one shared range, one series each.
    /// Labels come from the longest histogram.
    pub fn from_histograms(title: &str, groups: &[(String, Histogram)]) -> Self {
        let labels = groups
            .iter()
            .map(|(_, h)| &h.labels)
            .max_by_key(|l| l.len())
            .cloned()
            .unwrap_or_default();
        Self {
            title: s!(title),
            labels,
            series: groups
                .iter()
                .map(|(name, h)| ChartSeries {
                    name: name.clone(),
                    values: h.counts.iter().map(|c| *c as f64).collect(),
                })
                .collect(),
        }
    }
}
