// src/gui/pages/overview.rs
use eframe::egui;

use crate::{
    chart::{ChartData, ChartKind},
    config::{options::PageKind, state::AppState},
    stats,
    store::Snapshot,
    table::Table,
};

use super::{ChartSpec, Page, PageView};

pub struct OverviewPage;
pub static PAGE: OverviewPage = OverviewPage;

fn top_list(ui: &mut egui::Ui, title: &str, lines: Vec<String>) {
    ui.vertical(|ui| {
        ui.strong(title);
        if lines.is_empty() {
            ui.weak("Sin datos");
        }
        for (i, line) in lines.iter().enumerate() {
            ui.label(format!("{}. {}", i + 1, line));
        }
    });
}

impl Page for OverviewPage {
    fn kind(&self) -> PageKind { PageKind::Overview }
    fn title(&self) -> &'static str { "Overview" }
    fn report_name(&self) -> &'static str { "summary" }

    fn draw_controls(&self, ui: &mut egui::Ui, state: &mut AppState, snap: &Snapshot) -> bool {
        let n = state.options.stats.top_n;
        let records = &snap.records;

        ui.horizontal_top(|ui| {
            top_list(
                ui,
                "Top events",
                stats::top_events(records, n)
                    .into_iter()
                    .map(|s| format!("{} ({})", s.label, s.count))
                    .collect(),
            );
            ui.separator();
            top_list(
                ui,
                "Top categories",
                stats::top_categories(records, n)
                    .into_iter()
                    .map(|s| format!("{} ({})", s.label, s.count))
                    .collect(),
            );
            ui.separator();
            top_list(
                ui,
                "Fastest",
                stats::fastest(records, n)
                    .into_iter()
                    .map(|r| format!("{} · {} · {}", r.name, r.distance, r.time_label))
                    .collect(),
            );
        });
        false
    }

    fn view(&self, _state: &AppState, snap: &Snapshot) -> PageView {
        let records = &snap.records;
        let summary = stats::summarize(records, snap.competitors.len(), snap.dropped);

        let charts = vec![
            ChartSpec {
                canvas: "overview.distance",
                data: ChartData::from_series("Participants by distance", &stats::unique_by_distance(records)),
                kind: ChartKind::Bar,
            },
            ChartSpec {
                canvas: "overview.year",
                data: ChartData::from_series("Participants by year", &stats::unique_by_year(records)),
                kind: ChartKind::Line,
            },
            ChartSpec {
                canvas: "overview.event",
                data: ChartData::from_events("Participants by edition", &stats::unique_by_event(records)),
                kind: ChartKind::Bar,
            },
            ChartSpec {
                canvas: "overview.state",
                data: ChartData::from_series("Participants by state", &stats::unique_by_state(records)),
                kind: ChartKind::Bar,
            },
        ];

        PageView { table: Table::summary(&summary), row_keys: Vec::new(), charts }
    }
}
