// src/gui/components/data_table.rs
//
// Draws the live table from `app.table`. Purely a view; returns the index
// of a clicked row so the caller can react (open a competitor, ...).

use eframe::egui::{self, Align, Layout, RichText, TextWrapMode, CursorIcon};
use egui_extras::{Column, TableBuilder};
use crate::gui::app::App;

/// Columns whose non-empty cells all parse as numbers are centered.
fn numeric_columns(app: &App, cols: usize) -> Vec<bool> {
    (0..cols)
        .map(|ci| {
            let mut any = false;
            let all = app.table.rows.iter().filter_map(|r| r.get(ci)).all(|c| {
                let c = c.trim();
                if c.is_empty() { return true; }
                any = true;
                c.parse::<f64>().is_ok()
            });
            any && all
        })
        .collect()
}

fn initial_width(ci: usize, numeric: bool) -> f32 {
    match (ci, numeric) {
        (_, true) => 70.0,
        (0, false) => 200.0,
        _ => 150.0,
    }
}

pub fn draw(ui: &mut egui::Ui, app: &mut App) -> Option<usize> {
    let cols = app.table.ncols();
    if cols == 0 {
        ui.weak("Nothing to show.");
        return None;
    }
    let numeric_cols = numeric_columns(app, cols);
    let clickable = !app.row_keys.is_empty();
    let kind = app.current_page_kind();

    // Ensure scroll bars allocate space (not floating over content), and tune size
    {
        let s = &mut ui.style_mut().spacing.scroll;
        s.floating = false;
        s.bar_width = 10.0;
        s.bar_inner_margin = 7.0;
        s.bar_outer_margin = 0.0;
        s.handle_min_length = 48.0;
        s.foreground_color = true;
        let visuals = &mut ui.style_mut().visuals;
        visuals.extreme_bg_color = visuals.panel_fill;
    }

    let mut clicked = None;
    let avail_h = ui.available_height();
    egui::ScrollArea::new([true, false])
        .id_salt("inner_table_hscroll")
        .min_scrolled_height(avail_h)
        .max_height(avail_h)
        .show(ui, |ui| {
            let mut table = TableBuilder::new(ui)
                .striped(true)
                .min_scrolled_height(0.0)
                .id_salt(("table_state", kind, cols));
            if clickable {
                table = table.sense(egui::Sense::click());
            }
            for ci in 0..cols {
                let numeric = numeric_cols.get(ci).copied().unwrap_or(false);
                table = table.column(
                    Column::initial(initial_width(ci, numeric)).resizable(true).clip(true).at_least(20.0),
                );
            }

            table
                .header(24.0, |mut header| {
                    for ci in 0..cols {
                        header.col(|ui| {
                            ui.style_mut().wrap_mode = Some(TextWrapMode::Extend);
                            let text = app.table.headers.get(ci).cloned().unwrap_or_else(|| format!("Col {}", ci + 1));
                            let label = egui::Label::new(RichText::new(text).strong()).selectable(false);
                            if numeric_cols[ci] {
                                ui.centered_and_justified(|ui| { ui.add(label); });
                            } else {
                                ui.with_layout(Layout::left_to_right(Align::Center), |ui| { ui.add(label); });
                            }
                        });
                    }
                })
                .body(|body| {
                    body.rows(20.0, app.table.nrows(), |mut row| {
                        let row_idx = row.index();
                        let Some(data) = app.table.rows.get(row_idx) else { return };
                        for ci in 0..cols {
                            row.col(|ui| {
                                ui.style_mut().wrap_mode = Some(TextWrapMode::Extend);
                                let Some(cell) = data.get(ci) else { return };
                                let label = egui::Label::new(cell.as_str()).selectable(false);
                                if numeric_cols[ci] {
                                    ui.centered_and_justified(|ui| { ui.add(label); });
                                } else {
                                    ui.with_layout(Layout::left_to_right(Align::Center), |ui| { ui.add(label); });
                                }
                            });
                        }
                        if clickable {
                            let resp = row.response();
                            if resp.clicked() {
                                clicked = Some(row_idx);
                            }
                            resp.on_hover_cursor(CursorIcon::PointingHand);
                        }
                    });
                });
        });
    clicked
}
