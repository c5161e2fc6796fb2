// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use race_stats::{config::state::GuiState, gui};
use eframe::egui::{ IconData, ViewportBuilder };

/// Procedural icon: three rising bars in the chart palette.
fn app_icon() -> IconData {
    const SIZE: u32 = 64;
    let palette = race_stats::chart::PALETTE;
    let rgba = image::RgbaImage::from_fn(SIZE, SIZE, |x, y| {
        let bar = (x / (SIZE / 4)) as usize;
        let in_gap = x % (SIZE / 4) < 4;
        let height = SIZE / 4 * (bar as u32 + 1);
        if bar == 0 || in_gap || y < SIZE - height {
            image::Rgba([0, 0, 0, 0])
        } else {
            let [r, g, b] = palette[(bar - 1) % palette.len()];
            image::Rgba([r, g, b, 255])
        }
    });
    let (w, h) = rgba.dimensions();
    IconData { rgba: rgba.into_raw(), width: w, height: h }
}

fn main() {
    let size = GuiState::default();
    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_inner_size([size.window_w as f32, size.window_h as f32])
            .with_icon(app_icon()),
        ..Default::default()
    };

    if let Err(e) = gui::run(options) {
        eprintln!("GUI failed: {}", e);
        std::process::exit(1);
    }
}
