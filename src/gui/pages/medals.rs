// src/gui/pages/medals.rs
use eframe::egui;

use crate::{
    config::{options::PageKind, state::AppState},
    stats::{self, medals::{medal_page, page_count}},
    store::Snapshot,
    table::Table,
};

use super::{Page, PageView};

pub struct MedalsPage;
pub static PAGE: MedalsPage = MedalsPage;

impl Page for MedalsPage {
    fn kind(&self) -> PageKind { PageKind::Medals }
    fn title(&self) -> &'static str { "Medals" }
    fn report_name(&self) -> &'static str { "medals" }

    fn draw_controls(&self, ui: &mut egui::Ui, state: &mut AppState, snap: &Snapshot) -> bool {
        let size = state.options.stats.medal_page_size;
        let ranked = stats::medal_table(&snap.competitors).len();
        let pages = page_count(ranked, size).max(1);
        let gui = &mut state.gui;
        gui.medal_page = gui.medal_page.min(pages - 1);
        let before = gui.medal_page;

        ui.horizontal(|ui| {
            if ui.add_enabled(gui.medal_page > 0, egui::Button::new("◀ Prev")).clicked() {
                gui.medal_page -= 1;
            }
            ui.label(format!("Page {} of {} · {} ranked", gui.medal_page + 1, pages, ranked));
            if ui.add_enabled(gui.medal_page + 1 < pages, egui::Button::new("Next ▶")).clicked() {
                gui.medal_page += 1;
            }
        });
        gui.medal_page != before
    }

    fn view(&self, state: &AppState, snap: &Snapshot) -> PageView {
        let size = state.options.stats.medal_page_size;
        let rows = stats::medal_table(&snap.competitors);
        let page = medal_page(&rows, state.gui.medal_page, size);
        PageView {
            row_keys: page.iter().map(|m| m.key.clone()).collect(),
            table: Table::medals(page, state.gui.medal_page * size + 1),
            charts: Vec::new(),
        }
    }
}
