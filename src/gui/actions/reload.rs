// src/gui/actions/reload.rs
use crate::gui::app::App;

pub fn reload(app: &mut App) {
    logf!("Reload: {}", app.state.options.data.results_path.display());
    app.reload();
    let charts = app.chart_specs.len();
    logd!("Reload: done, charts pending={}", charts);
}
