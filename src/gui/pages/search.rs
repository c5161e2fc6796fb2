// src/gui/pages/search.rs
use eframe::egui;

use crate::{
    competitors,
    config::{options::PageKind, state::AppState},
    store::Snapshot,
    table::Table,
};

use super::{Page, PageView};

pub struct SearchPage;
pub static PAGE: SearchPage = SearchPage;

impl Page for SearchPage {
    fn kind(&self) -> PageKind { PageKind::Search }
    fn title(&self) -> &'static str { "Search" }
    fn report_name(&self) -> &'static str { "search" }

    fn draw_controls(&self, ui: &mut egui::Ui, state: &mut AppState, snap: &Snapshot) -> bool {
        let mut changed = false;
        let gui = &mut state.gui;

        ui.horizontal(|ui| {
            ui.label("Search:");
            let resp = ui.add(
                egui::TextEdit::singleline(&mut gui.search_text)
                    .hint_text("name, bib, origin, team…")
                    .desired_width(320.0),
            );
            if resp.changed() {
                gui.selected_competitor = None;
                changed = true;
            }
            if gui.selected_competitor.is_some() && ui.button("Back to results").clicked() {
                gui.selected_competitor = None;
                changed = true;
            }
        });

        if let Some(c) = gui
            .selected_competitor
            .as_deref()
            .and_then(|k| competitors::find_by_key(&snap.competitors, k))
        {
            ui.heading(c.name());
            ui.label(format!(
                "{} · {} · {} · {} · bib {}",
                c.origin(), c.team(), c.gender(), c.age_group(), c.bib()
            ));
            if c.records().is_empty() {
                ui.label("Registered, no results on file.");
            }
        } else if !gui.search_text.trim().is_empty() {
            let n = competitors::search(&snap.competitors, &gui.search_text).len();
            ui.label(format!("{n} competitor(s) · click a row for the race history"));
        }
        changed
    }

    fn view(&self, state: &AppState, snap: &Snapshot) -> PageView {
        let gui = &state.gui;

        if let Some(c) = gui
            .selected_competitor
            .as_deref()
            .and_then(|k| competitors::find_by_key(&snap.competitors, k))
        {
            return PageView::table(Table::history(c));
        }

        // blank search shows nothing rather than the whole roster
        let found = competitors::search(&snap.competitors, &gui.search_text);
        PageView {
            row_keys: found.iter().map(|c| s!(c.key())).collect(),
            table: Table::competitors(found),
            charts: Vec::new(),
        }
    }
}
