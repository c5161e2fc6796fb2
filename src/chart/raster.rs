// src/chart/raster.rs
//
// Minimal bar/line rasterizer onto an `image::RgbaImage`. No text: titles
// and axis labels are drawn by whoever displays the canvas (egui in the
// GUI, the file name and CSV in the CLI).

use image::{Rgba, RgbaImage};

use super::ChartData;

/// Series colours, cycled.
pub const PALETTE: [[u8; 3]; 6] = [
    [0x48, 0xbb, 0x78],
    [0x63, 0xb3, 0xed],
    [0xed, 0x89, 0x36],
    [0x9f, 0x7a, 0xea],
    [0xf6, 0xad, 0x55],
    [0x4f, 0xd1, 0xc5],
];

const BACKGROUND: Rgba<u8> = Rgba([255, 255, 255, 255]);
const AXIS: Rgba<u8> = Rgba([0x4a, 0x55, 0x68, 255]);
const GRID: Rgba<u8> = Rgba([0xe2, 0xe8, 0xf0, 255]);
const MARGIN: u32 = 16;
const GRID_LINES: u32 = 4;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChartKind {
    Bar,
    Line,
}

pub fn series_color(i: usize) -> Rgba<u8> {
    let [r, g, b] = PALETTE[i % PALETTE.len()];
    Rgba([r, g, b, 255])
}

/// Plot area in pixel coordinates: left, top, right, bottom (inclusive).
#[derive(Clone, Copy, Debug)]
struct Plot {
    left: u32,
    top: u32,
    right: u32,
    bottom: u32,
}

impl Plot {
    fn new(w: u32, h: u32) -> Option<Self> {
        if w <= MARGIN * 2 + 2 || h <= MARGIN * 2 + 2 {
            return None;
        }
        Some(Self { left: MARGIN, top: MARGIN, right: w - MARGIN - 1, bottom: h - MARGIN - 1 })
    }
    fn width(&self) -> u32 { self.right - self.left }
    fn height(&self) -> u32 { self.bottom - self.top }

    /// y pixel for `value` on a 0..=max axis.
    fn y_of(&self, value: f64, max: f64) -> u32 {
        if max <= 0.0 { return self.bottom; }
        let frac = (value / max).clamp(0.0, 1.0);
        self.bottom - (frac * self.height() as f64).round() as u32
    }
}

fn fill_rect(img: &mut RgbaImage, x0: u32, y0: u32, x1: u32, y1: u32, c: Rgba<u8>) {
    let (w, h) = img.dimensions();
    for y in y0.min(h)..=y1.min(h.saturating_sub(1)) {
        for x in x0.min(w)..=x1.min(w.saturating_sub(1)) {
            img.put_pixel(x, y, c);
        }
    }
}

fn draw_line(img: &mut RgbaImage, (x0, y0): (i64, i64), (x1, y1): (i64, i64), c: Rgba<u8>) {
    let (w, h) = (img.width() as i64, img.height() as i64);
    let (dx, dy) = ((x1 - x0).abs(), -(y1 - y0).abs());
    let (sx, sy) = (if x0 < x1 { 1 } else { -1 }, if y0 < y1 { 1 } else { -1 });
    let (mut x, mut y, mut err) = (x0, y0, dx + dy);
    loop {
        if (0..w).contains(&x) && (0..h).contains(&y) {
            img.put_pixel(x as u32, y as u32, c);
        }
        if x == x1 && y == y1 { break; }
        let e2 = 2 * err;
        if e2 >= dy { err += dy; x += sx; }
        if e2 <= dx { err += dx; y += sy; }
    }
}

fn draw_frame(img: &mut RgbaImage, plot: Plot) {
    for i in 1..=GRID_LINES {
        let y = plot.bottom - plot.height() * i / GRID_LINES;
        fill_rect(img, plot.left, y, plot.right, y, GRID);
    }
    fill_rect(img, plot.left, plot.bottom, plot.right, plot.bottom, AXIS);
    fill_rect(img, plot.left, plot.top, plot.left, plot.bottom, AXIS);
}

fn draw_bars(img: &mut RgbaImage, plot: Plot, data: &ChartData, max: f64) {
    let slots = data.labels.len().max(1) as u32;
    let groups = data.series.len().max(1) as u32;
    let slot_w = (plot.width() / slots).max(1);
    let gap = slot_w / 8;
    let bar_w = ((slot_w - 2 * gap) / groups).max(1);

    for (si, series) in data.series.iter().enumerate() {
        let color = series_color(si);
        for (li, v) in series.values.iter().enumerate().take(slots as usize) {
            if !v.is_finite() || *v <= 0.0 { continue; }
            let x0 = plot.left + 1 + li as u32 * slot_w + gap + si as u32 * bar_w;
            let x1 = (x0 + bar_w).saturating_sub(2).max(x0);
            let y0 = plot.y_of(*v, max);
            fill_rect(img, x0, y0, x1, plot.bottom - 1, color);
        }
    }
}

fn draw_lines(img: &mut RgbaImage, plot: Plot, data: &ChartData, max: f64) {
    let n = data.labels.len();
    let x_of = |i: usize| -> i64 {
        if n <= 1 {
            (plot.left + plot.width() / 2) as i64
        } else {
            (plot.left + plot.width() * i as u32 / (n as u32 - 1)) as i64
        }
    };
    for (si, series) in data.series.iter().enumerate() {
        let color = series_color(si);
        let points: Vec<(i64, i64)> = series
            .values
            .iter()
            .take(n)
            .enumerate()
            .map(|(i, v)| {
                let v = if v.is_finite() { *v } else { 0.0 };
                (x_of(i), plot.y_of(v, max) as i64)
            })
            .collect();
        for pair in points.windows(2) {
            draw_line(img, pair[0], pair[1], color);
        }
        for (x, y) in points {
            let (x, y) = (x.max(1) as u32, y.max(1) as u32);
            fill_rect(img, x - 1, y - 1, x + 1, y + 1, color);
        }
    }
}

/// Rasterize `data` into a `w` x `h` canvas. Canvases too small for a plot
/// area come back blank.
pub fn render(data: &ChartData, kind: ChartKind, w: u32, h: u32) -> RgbaImage {
    let mut img = RgbaImage::from_pixel(w.max(1), h.max(1), BACKGROUND);
    let Some(plot) = Plot::new(w, h) else { return img };

    draw_frame(&mut img, plot);
    if data.is_empty() {
        return img;
    }

    // headroom so the tallest bar doesn't touch the frame
    let max = data.max_value() * 1.1;
    match kind {
        ChartKind::Bar => draw_bars(&mut img, plot, data, max),
        ChartKind::Line => draw_lines(&mut img, plot, data, max),
    }
    img
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::ChartSeries;

    fn data(values: Vec<f64>) -> ChartData {
        ChartData {
            title: s!("t"),
            labels: (0..values.len()).map(|i| i.to_string()).collect(),
            series: vec![ChartSeries { name: s!("s"), values }],
        }
    }

    #[test]
    fn bars_use_first_palette_colour() {
        let img = render(&data(vec![3.0, 1.0]), ChartKind::Bar, 200, 100);
        assert_eq!(img.dimensions(), (200, 100));
        assert!(img.pixels().any(|p| *p == series_color(0)));
    }

    #[test]
    fn tiny_canvas_is_blank() {
        let img = render(&data(vec![1.0]), ChartKind::Line, 10, 10);
        assert!(img.pixels().all(|p| *p == BACKGROUND));
    }
}
