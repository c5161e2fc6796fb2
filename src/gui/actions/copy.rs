// src/gui/actions/copy.rs
use eframe::egui;
use crate::{csv, gui::app::App};

pub fn copy(app: &mut App, ui_ctx: &egui::Context) {
    if app.table.is_empty() {
        app.status("Nothing to copy");
        logd!("Copy: Clicked, but there's nothing to copy");
        return;
    }

    let export = &app.state.options.export;
    logf!(
        "Copy: page={:?}, rows={}, headers={}",
        app.current_page_kind(),
        app.table.nrows(),
        app.table.headers.len()
    );
    let txt = csv::to_export_string(&app.table.headers, &app.table.rows, export.include_headers, export.delim());

    ui_ctx.copy_text(txt);
    app.status("Copied to clipboard");
}
