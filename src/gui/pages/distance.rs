// src/gui/pages/distance.rs
//
// Per-distance dashboard: finish-time histogram (by gender on one axis),
// gender and age-group breakdowns. Filters narrow the histogram only.

use eframe::egui;

use crate::{
    chart::{ChartData, ChartKind},
    config::{options::PageKind, state::AppState},
    model::NormalizedRecord,
    stats::{self, GenderBucket, RecordFilter},
    store::Snapshot,
    table::Table,
};

use super::{option_combo, ChartSpec, Page, PageView};

pub struct DistancePage;
pub static PAGE: DistancePage = DistancePage;

fn distance_filter(state: &AppState) -> RecordFilter {
    RecordFilter { distance: Some(state.gui.distance.clone()), ..Default::default() }
}

fn time_filter(state: &AppState) -> RecordFilter {
    RecordFilter {
        gender: state.gui.gender_filter,
        age_group: state.gui.age_filter.clone(),
        ..distance_filter(state)
    }
}

impl Page for DistancePage {
    fn kind(&self) -> PageKind { PageKind::Distance }
    fn title(&self) -> &'static str { "Distance" }
    fn report_name(&self) -> &'static str { "histogram" }

    fn draw_controls(&self, ui: &mut egui::Ui, state: &mut AppState, snap: &Snapshot) -> bool {
        let mut changed = false;
        let distances = stats::distinct_values(&snap.records, |r| r.distance.as_str());
        let in_distance: Vec<NormalizedRecord> = distance_filter(state).apply_owned(&snap.records);
        let ages: Vec<(String, String)> = stats::age_distribution(&in_distance)
            .into_iter()
            .map(|s| (s.label.clone(), s.label))
            .collect();
        let genders: Vec<(GenderBucket, String)> =
            GenderBucket::ALL.iter().map(|b| (*b, s!(b.label()))).collect();

        let gui = &mut state.gui;
        ui.horizontal(|ui| {
            ui.label("Distance:");
            for d in &distances {
                if ui.selectable_label(gui.distance == *d, d.as_str()).clicked() && gui.distance != *d {
                    gui.distance = d.clone();
                    gui.age_filter = None;
                    changed = true;
                }
            }
            ui.separator();
            changed |= option_combo(ui, "gender_filter", "Gender:", &mut gui.gender_filter, &genders);
            changed |= option_combo(ui, "age_filter", "Age group:", &mut gui.age_filter, &ages);
        });
        if changed {
            logf!("UI: Distance filters → {} {:?} {:?}", gui.distance, gui.gender_filter, gui.age_filter);
        }
        changed
    }

    fn view(&self, state: &AppState, snap: &Snapshot) -> PageView {
        let bin = state.options.stats.bin_minutes;
        let in_distance = distance_filter(state).apply_owned(&snap.records);
        let timed = time_filter(state).apply_owned(&snap.records);

        let groups: Vec<(String, stats::Histogram)> = stats::histograms_by_gender(&timed, bin)
            .into_iter()
            .map(|(b, h)| (s!(b.label()), h))
            .collect();
        let title = format!("Finish times {} (min)", state.gui.distance);

        let charts = vec![
            ChartSpec {
                canvas: "distance.times",
                data: ChartData::from_histograms(&title, &groups),
                kind: ChartKind::Bar,
            },
            ChartSpec {
                canvas: "distance.gender",
                data: ChartData::from_series("Gender", &stats::gender_distribution(&in_distance)),
                kind: ChartKind::Bar,
            },
            ChartSpec {
                canvas: "distance.age",
                data: ChartData::from_series("Age groups", &stats::age_distribution(&in_distance)),
                kind: ChartKind::Bar,
            },
        ];

        PageView { table: Table::histograms(&groups), row_keys: Vec::new(), charts }
    }
}
