// src/gui/components/tabs.rs
//
// Renders the top tabs and performs the tab switch itself.

use eframe::egui;
use crate::gui::{app::App, router};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing.x = 8.0;

        let pages = router::all_pages();
        let cur = app.current_index();

        for (idx, page) in pages.iter().enumerate() {
            let selected = idx == cur;

            if ui.selectable_label(selected, page.title()).clicked() && !selected {
                app.switch_to(page.kind());

                // Follow the tab with the default file name unless the user typed one.
                if !app.out_path_dirty {
                    let export = &app.state.options.export;
                    app.out_path_text = export.out_path_for(page.report_name()).to_string_lossy().into_owned();
                }
            }
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("Reload data").clicked() {
                crate::gui::actions::reload(app);
            }
        });
    });
}
