// src/gui/components/charts.rs
//
// Chart canvases for the current page. Each canvas id owns at most one
// texture; rebuilding a page goes through `ChartRegistry::replace`, which
// frees the previous texture first.

use eframe::egui::{self, Align2, Color32, FontId, Pos2, Vec2};

use crate::{
    chart::{self, ChartData, ChartHandle},
    config::consts::{CHART_H, CHART_W},
    gui::app::App,
};

pub struct ChartTexture {
    texture: Option<egui::TextureHandle>,
    pub data: ChartData,
}

impl ChartHandle for ChartTexture {
    fn dispose(&mut self) {
        if let Some(t) = self.texture.take() {
            logd!("Chart: dispose {}", t.name());
        }
    }
}

/// Rasterize and upload every chart spec of the current page.
pub fn refresh(ctx: &egui::Context, app: &mut App) {
    let live: Vec<&str> = app.chart_specs.iter().map(|s| s.canvas).collect();
    app.charts.retain(|canvas| live.contains(&canvas));
    for spec in &app.chart_specs {
        let img = chart::render(&spec.data, spec.kind, CHART_W, CHART_H);
        let size = [img.width() as usize, img.height() as usize];
        let color = egui::ColorImage::from_rgba_unmultiplied(size, img.as_raw());
        let texture = ctx.load_texture(spec.canvas, color, egui::TextureOptions::LINEAR);
        app.charts.replace(spec.canvas, ChartTexture { texture: Some(texture), data: spec.data.clone() });
    }
    app.charts_dirty = false;
}

fn palette_color(i: usize) -> Color32 {
    let [r, g, b] = chart::PALETTE[i % chart::PALETTE.len()];
    Color32::from_rgb(r, g, b)
}

fn draw_one(ui: &mut egui::Ui, handle: &ChartTexture) {
    let Some(texture) = &handle.texture else { return };
    let data = &handle.data;

    ui.vertical(|ui| {
        ui.strong(&data.title);
        if data.is_empty() {
            ui.weak("Sin datos disponibles.");
            return;
        }

        // legend for grouped charts
        if data.series.len() > 1 {
            ui.horizontal(|ui| {
                for (i, s) in data.series.iter().enumerate() {
                    ui.colored_label(palette_color(i), format!("■ {}", s.name));
                }
            });
        }

        let scale = 0.75;
        let size = Vec2::new(CHART_W as f32 * scale, CHART_H as f32 * scale);
        let resp = ui.image((texture.id(), size));

        // x labels under each slot; skip some when crowded
        let rect = resp.rect;
        let n = data.labels.len().max(1);
        let slot = rect.width() / n as f32;
        let step = ((70.0 / slot).ceil() as usize).max(1);
        let painter = ui.painter();
        let font = FontId::proportional(10.0);
        let color = ui.visuals().text_color();
        for (i, label) in data.labels.iter().enumerate().step_by(step) {
            let x = rect.left() + slot * (i as f32 + 0.5);
            painter.text(Pos2::new(x, rect.bottom() + 2.0), Align2::CENTER_TOP, label, font.clone(), color);
        }
        ui.add_space(16.0);
        ui.weak(format!("max {}", data.max_value()));
    });
}

pub fn draw(ui: &mut egui::Ui, app: &App) {
    if app.chart_specs.is_empty() {
        return;
    }
    egui::ScrollArea::horizontal().id_salt("charts_scroll").show(ui, |ui| {
        ui.horizontal_top(|ui| {
            for spec in &app.chart_specs {
                if let Some(handle) = app.charts.get(spec.canvas) {
                    draw_one(ui, handle);
                    ui.separator();
                }
            }
        });
    });
    ui.separator();
}
