// src/config/consts.rs

// Data corpus
pub const DEFAULT_DATA_DIR: &str = "assets/data";
pub const RESULTS_FILE: &str = "history_results.json";
pub const CATALOG_FILE: &str = "participants.json";

// Local store (logs)
pub const LOG_FILE: &str = ".store/race_stats.log";

// Statistics
pub const DEFAULT_BIN_MINUTES: f64 = 5.0;
/// Widest histogram axis; slower times fold into the last bin.
pub const MAX_HISTOGRAM_BINS: usize = 240;
pub const DEFAULT_TOP_N: usize = 3;
pub const MEDAL_PLACES: usize = 6;
pub const MEDAL_PAGE_SIZE: usize = 25;

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
pub const DEFAULT_FILE: &str = "report";

// Chart canvases
pub const CHART_W: u32 = 640;
pub const CHART_H: u32 = 320;
