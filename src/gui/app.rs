// src/gui/app.rs
use std::{
    error::Error,
    sync::{Arc, Mutex},
};

use eframe::egui;

use crate::{
    chart::ChartRegistry,
    config::{options::PageKind, state::AppState},
    store::{self, Snapshot},
    table::Table,
};

use super::{
    components::charts::ChartTexture,
    pages::{ChartSpec, Page},
    progress::GuiProgress,
    router,
};

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "Race Stats",
        options,
        Box::new(|_cc| Ok(Box::new(App::new(AppState::default())))),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    // loaded corpus; empty until the first successful load
    pub snapshot: Snapshot,
    pub load_error: Option<String>,

    // output text field UX (we map this <-> ExportOptions)
    pub out_path_text: String,
    pub out_path_dirty: bool,

    // in-memory display for CURRENT page
    pub table: Table,
    /// Competitor key per table row, for pages whose rows are competitors
    pub row_keys: Vec<String>,
    pub chart_specs: Vec<ChartSpec>,
    pub charts_dirty: bool,
    pub charts: ChartRegistry<ChartTexture>,

    pub status: Arc<Mutex<String>>,
}

impl App {
    pub fn new(state: AppState) -> Self {
        let out_path_text = state.options.export.out_path().to_string_lossy().into();

        let mut app = Self {
            state,
            snapshot: Snapshot::default(),
            load_error: None,
            out_path_text,
            out_path_dirty: false,
            table: Table::empty(),
            row_keys: Vec::new(),
            chart_specs: Vec::new(),
            charts_dirty: false,
            charts: ChartRegistry::new(),
            status: Arc::new(Mutex::new(s!("Idle"))),
        };
        app.reload();
        logf!("Init: default page={:?}", app.current_page_kind());
        app
    }

    /* ---------- tiny helpers ---------- */

    #[inline]
    pub fn current_index(&self) -> usize { self.state.gui.current_page_index }

    #[inline]
    pub fn set_current_index(&mut self, idx: usize) { self.state.gui.current_page_index = idx; }

    #[inline]
    pub fn current_page_kind(&self) -> PageKind { self.current_page().kind() }

    #[inline]
    pub fn current_page(&self) -> &'static dyn Page { router::all_pages()[self.current_index()] }

    #[inline]
    pub fn status<T: Into<String>>(&self, msg: T) {
        *self.status.lock().unwrap() = msg.into();
    }

    /// (Re)load both sources and rebuild the current view.
    pub fn reload(&mut self) {
        let mut prog = GuiProgress::new(self.status.clone());
        match store::load_snapshot(&self.state.options.data, Some(&mut prog)) {
            Ok(snap) => {
                if snap.catalog_failed {
                    self.status("Loaded results; participant catalog unavailable");
                }
                self.snapshot = snap;
                self.load_error = None;
            }
            Err(e) => {
                loge!("Load: {}", e);
                self.load_error = Some(format!("No se pudieron cargar los resultados: {e}"));
                self.snapshot = Snapshot::default();
            }
        }
        self.rebuild_view();
    }

    /// Recompute table + chart specs for the current page.
    pub fn rebuild_view(&mut self) {
        let view = self.current_page().view(&self.state, &self.snapshot);
        logd!(
            "View: page={:?} rows={} charts={}",
            self.current_page_kind(),
            view.table.nrows(),
            view.charts.len()
        );
        self.table = view.table;
        self.row_keys = view.row_keys;
        self.chart_specs = view.charts;
        self.charts_dirty = true;
    }

    pub fn switch_to(&mut self, kind: PageKind) {
        let prev = self.current_page_kind();
        self.set_current_index(router::index_of(kind));
        logf!("UI: Tab switch {:?} → {:?}", prev, kind);
        self.rebuild_view();
    }

    /// Show one competitor's history on the Search tab.
    pub fn open_competitor(&mut self, key: &str) {
        self.state.gui.selected_competitor = Some(s!(key));
        self.switch_to(PageKind::Search);
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.charts_dirty {
            super::components::charts::refresh(ctx, self);
        }

        eframe::egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            let status = self.status.lock().unwrap().clone();
            ui.label(status);
        });

        eframe::egui::CentralPanel::default().show(ctx, |ui| {
            super::components::tabs::draw(ui, self);

            ui.separator();

            if let Some(msg) = &self.load_error {
                ui.colored_label(ui.visuals().error_fg_color, msg);
                if ui.button("Retry").clicked() {
                    super::actions::reload(self);
                }
                return;
            }

            let page = self.current_page();
            if page.draw_controls(ui, &mut self.state, &self.snapshot) {
                self.rebuild_view();
            }

            ui.separator();

            super::components::export_bar::draw(ui, self);

            ui.separator();

            super::components::charts::draw(ui, self);

            if let Some(row) = super::components::data_table::draw(ui, self) {
                if let Some(key) = self.row_keys.get(row).cloned() {
                    logf!("UI: Open competitor {}", key);
                    self.open_competitor(&key);
                }
            }
        });
    }
}
