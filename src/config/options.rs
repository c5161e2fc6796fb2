// src/config/options.rs
use std::ffi::OsString;
use std::path::{ Path, PathBuf };
use super::consts::*;

/// GUI tabs, in display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PageKind {
    Search,
    Overview,
    Distance,
    Medals,
}

#[derive(Clone, Debug, PartialEq, Default)]
pub struct AppOptions {
    pub data: DataOptions,
    pub stats: StatsOptions,
    pub export: ExportOptions,
}

/// Where the static JSON corpus lives.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DataOptions {
    pub results_path: PathBuf,
    /// Optional second source; a missing/broken catalog degrades to empty.
    pub catalog_path: Option<PathBuf>,
}

impl Default for DataOptions {
    fn default() -> Self {
        let dir = PathBuf::from(DEFAULT_DATA_DIR);
        Self {
            results_path: dir.join(RESULTS_FILE),
            catalog_path: Some(dir.join(CATALOG_FILE)),
        }
    }
}

impl DataOptions {
    /// Point both sources at `<dir>/history_results.json` and `<dir>/participants.json`.
    pub fn from_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            results_path: dir.join(RESULTS_FILE),
            catalog_path: Some(dir.join(CATALOG_FILE)),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct StatsOptions {
    pub bin_minutes: f64,
    pub top_n: usize,
    pub medal_page_size: usize,
}

impl Default for StatsOptions {
    fn default() -> Self {
        Self {
            bin_minutes: DEFAULT_BIN_MINUTES,
            top_n: DEFAULT_TOP_N,
            medal_page_size: MEDAL_PAGE_SIZE,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Tsv,
}

impl ExportFormat {
    pub fn ext(&self) -> &'static str {
        match self { ExportFormat::Csv => "csv", ExportFormat::Tsv => "tsv" }
    }
    pub fn delim(&self) -> char {
        match self { ExportFormat::Csv => ',', ExportFormat::Tsv => '\t' }
    }
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "csv" => Some(ExportFormat::Csv),
            "tsv" => Some(ExportFormat::Tsv),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub format: ExportFormat,
    out_path: OutputPath,
    pub include_headers: bool,
    /// Keep the user's extension instead of the format's.
    user_ext: Option<OsString>,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: ExportFormat::Csv,
            out_path: OutputPath::default(),
            include_headers: true,
            user_ext: None,
        }
    }
}

impl ExportOptions {
    pub fn out_path(&self) -> PathBuf {
        let stem = self.out_path.file_stem.to_string_lossy().into_owned();
        let file_name = match &self.user_ext {
            Some(ext) => join!(&stem, ".", &ext.to_string_lossy()),
            None => join!(&stem, ".", self.format.ext()),
        };
        self.out_path.dir.join(file_name)
    }

    /// Output path for a named report (`<dir>/<report>.<ext>`), used when
    /// several tables are exported in one go.
    pub fn out_path_for(&self, report: &str) -> PathBuf {
        let stem = crate::core::text::sanitize_filename(report, DEFAULT_FILE);
        self.out_path.dir.join(join!(&stem, ".", self.format.ext()))
    }

    /// Parse user text into dir + stem (+ extension when one is typed).
    pub fn set_path(&mut self, text: &str) {
        let p = Path::new(text.trim());
        if let Some(parent) = p.parent() {
            self.out_path.dir = parent.to_path_buf();
        }
        if let Some(stem) = p.file_stem() {
            self.out_path.file_stem = stem.to_os_string();
        }
        self.user_ext = p.extension().map(|e| e.to_os_string());
    }

    pub fn set_dir(&mut self, dir: impl Into<PathBuf>) {
        self.out_path.dir = dir.into();
    }

    pub fn delim(&self) -> char {
        self.format.delim()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutputPath {
    dir: PathBuf,
    file_stem: OsString, // without extension
}

impl Default for OutputPath {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(DEFAULT_OUT_DIR),
            file_stem: OsString::from(DEFAULT_FILE),
        }
    }
}
