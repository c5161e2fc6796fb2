// src/gui/pages/mod.rs
use eframe::egui;

use crate::{
    chart::{ChartData, ChartKind},
    config::{options::PageKind, state::AppState},
    store::Snapshot,
    table::Table,
};

pub mod distance;
pub mod medals;
pub mod overview;
pub mod search;

/// One chart a page wants drawn, keyed by canvas id.
#[derive(Clone, Debug)]
pub struct ChartSpec {
    pub canvas: &'static str,
    pub data: ChartData,
    pub kind: ChartKind,
}

/// What a page shows: a table plus optional charts.
#[derive(Clone, Debug, Default)]
pub struct PageView {
    pub table: Table,
    /// Competitor key per table row; empty when rows aren't competitors.
    pub row_keys: Vec<String>,
    pub charts: Vec<ChartSpec>,
}

impl PageView {
    pub fn table(table: Table) -> Self {
        Self { table, ..Default::default() }
    }
}

pub trait Page: Send + Sync + 'static {
    fn kind(&self) -> PageKind;
    fn title(&self) -> &'static str;

    /// Stem used for Export when the user hasn't typed a file name.
    fn report_name(&self) -> &'static str;

    /// Draw page-specific controls above the table.
    /// Returns true when the view must be rebuilt.
    fn draw_controls(&self, _ui: &mut egui::Ui, _state: &mut AppState, _snap: &Snapshot) -> bool {
        false
    }

    /// Build the page's table and charts from the current snapshot.
    fn view(&self, state: &AppState, snap: &Snapshot) -> PageView;
}

/// Combo box over `Option<T>` with an "Any" entry.
pub(crate) fn option_combo<T: Clone + PartialEq>(
    ui: &mut egui::Ui,
    id: &str,
    label: &str,
    value: &mut Option<T>,
    choices: &[(T, String)],
) -> bool {
    let before = value.clone();
    let shown = value
        .as_ref()
        .and_then(|v| choices.iter().find(|(c, _)| c == v))
        .map(|(_, text)| text.clone())
        .unwrap_or_else(|| s!("Any"));
    ui.label(label);
    egui::ComboBox::from_id_salt(id).selected_text(shown).show_ui(ui, |ui| {
        ui.selectable_value(value, None, "Any");
        for (c, text) in choices {
            ui.selectable_value(value, Some(c.clone()), text.as_str());
        }
    });
    *value != before
}
