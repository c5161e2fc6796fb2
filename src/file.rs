// src/file.rs

use std::{
    fs,
    path::{Path, PathBuf},
};

use image::RgbaImage;

use crate::config::options::ExportOptions;
use crate::csv::to_export_string;
use crate::table::Table;

/// Write `table` to `path` using the export options' delimiter and header
/// policy. Parent directories are created as needed.
pub fn write_table(
    export: &ExportOptions,
    table: &Table,
    path: &Path,
) -> Result<PathBuf, Box<dyn std::error::Error>> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }

    let contents = to_export_string(&table.headers, &table.rows, export.include_headers, export.delim());
    fs::write(path, contents)?;
    logf!("Export: {} rows -> {}", table.rows.len(), path.display());
    Ok(path.to_path_buf())
}

/// Write to the path configured in `export`.
pub fn write_export(export: &ExportOptions, table: &Table) -> Result<PathBuf, Box<dyn std::error::Error>> {
    write_table(export, table, &export.out_path())
}

/// Save a rendered chart as PNG.
pub fn write_png(img: &RgbaImage, path: &Path) -> Result<PathBuf, Box<dyn std::error::Error>> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }
    img.save_with_format(path, image::ImageFormat::Png)?;
    logf!("Chart: {}x{} -> {}", img.width(), img.height(), path.display());
    Ok(path.to_path_buf())
}

pub fn normalize_separators(p: &str) -> String {
    let sep = std::path::MAIN_SEPARATOR;
    p.chars().map(|c| if c=='/'||c=='\\' { sep } else { c }).collect()
}

pub fn ensure_directory(dir: &Path) -> Result<(), Box<dyn std::error::Error>> {
    if dir.exists() && !dir.is_dir() {
        return Err(format!("Path exists but is not a directory: {}", dir.display()).into());
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}

pub fn looks_like_dir_hint(p: &Path) -> bool {
    let s = p.to_string_lossy();
    s.ends_with('/') || s.ends_with('\\')
}
