// src/gui/actions/export.rs
use crate::{file, gui::app::App};

pub fn export(app: &mut App) {
    // normalize out_path first (mutates app) before any &app borrows
    if app.out_path_dirty {
        let text = file::normalize_separators(&app.out_path_text);
        app.state.options.export.set_path(&text);
        logf!(
            "Export: Out path set → {}",
            app.state.options.export.out_path().display()
        );
        app.out_path_dirty = false;
    }

    if app.table.is_empty() {
        logd!("Export: Clicked, but there's nothing to export");
        app.status("Nothing to export");
        return;
    }

    let export = &app.state.options.export;
    let path = export.out_path();
    logf!(
        "Export: Begin page={:?}, rows={}, headers={}",
        app.current_page_kind(),
        app.table.nrows(),
        app.table.headers.len()
    );

    let msg = match file::write_table(export, &app.table, &path) {
        Ok(path) => format!("Exported {}", path.display()),
        Err(e) => {
            loge!("Export: Error: {}", e);
            format!("Export error: {e}")
        }
    };
    app.status(msg);
}
