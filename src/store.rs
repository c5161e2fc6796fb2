// src/store.rs
//
// Loads the results corpus and the participant catalog, then runs the
// normalize -> aggregate pipeline. The two reads are independent and run on
// scoped threads; both are joined before normalization starts.

use std::fs;
use std::path::Path;
use std::thread;

use serde_json::Value;

use crate::competitors::{self, Competitor};
use crate::config::options::DataOptions;
use crate::error::LoadError;
use crate::model::NormalizedRecord;
use crate::normalize::normalize_all;
use crate::progress::Progress;
use crate::schema::catalog::{entries_from_values, CatalogEntry};

/// Everything the front ends display, computed once per load.
#[derive(Clone, Debug, Default)]
pub struct Snapshot {
    pub records: Vec<NormalizedRecord>,
    pub competitors: Vec<Competitor>,
    /// Results rows dropped for lacking a known distance.
    pub dropped: usize,
    /// Results rows that were not JSON objects.
    pub skipped: usize,
    pub catalog_entries: usize,
    /// The catalog was requested but could not be used.
    pub catalog_failed: bool,
}

/// Read a file that must hold a top-level JSON array.
pub fn read_json_array(path: &Path) -> Result<Vec<Value>, LoadError> {
    let text = fs::read_to_string(path)
        .map_err(|source| LoadError::Io { path: path.to_path_buf(), source })?;
    let value: Value = serde_json::from_str(&text)
        .map_err(|source| LoadError::Json { path: path.to_path_buf(), source })?;
    match value {
        Value::Array(rows) => Ok(rows),
        _ => Err(LoadError::NotAnArray { path: path.to_path_buf() }),
    }
}

/// Parse the catalog; any failure is logged and yields an empty catalog.
fn load_catalog(path: Option<&Path>) -> (Vec<CatalogEntry>, bool) {
    let Some(path) = path else { return (Vec::new(), false) };
    match read_json_array(path) {
        Ok(values) => {
            let (entries, skipped) = entries_from_values(values);
            if skipped > 0 {
                logd!("Catalog: skipped {} malformed entries", skipped);
            }
            (entries, false)
        }
        Err(e) => {
            loge!("Catalog: {} (continuing without it)", e);
            (Vec::new(), true)
        }
    }
}

/// Build a snapshot from in-memory rows. Used by `load_snapshot` and tests.
pub fn build_snapshot(rows: &[Value], catalog: &[CatalogEntry]) -> Snapshot {
    let outcome = normalize_all(rows);
    let grouped = competitors::aggregate(&outcome.records);
    let competitors = competitors::merge_catalog(grouped, catalog);
    Snapshot {
        records: outcome.records,
        competitors,
        dropped: outcome.dropped,
        skipped: outcome.skipped,
        catalog_entries: catalog.len(),
        catalog_failed: false,
    }
}

/// Load both sources concurrently and run the pipeline.
///
/// A results failure is an error; a catalog failure only sets
/// `Snapshot::catalog_failed`.
pub fn load_snapshot(opts: &DataOptions, progress: Option<&mut dyn Progress>) -> Result<Snapshot, LoadError> {
    let mut null = crate::progress::NullProgress;
    let progress: &mut dyn Progress = match progress {
        Some(p) => p,
        None => &mut null,
    };

    let sources = if opts.catalog_path.is_some() { 2 } else { 1 };
    progress.begin(sources);
    logf!(
        "Load: results={} catalog={}",
        opts.results_path.display(),
        opts.catalog_path.as_deref().map(|p| p.display().to_string()).unwrap_or_else(|| s!("none"))
    );

    let (results, (catalog, catalog_failed)) = thread::scope(|scope| {
        let catalog = scope.spawn(|| load_catalog(opts.catalog_path.as_deref()));
        let results = read_json_array(&opts.results_path);
        let catalog = catalog.join().unwrap_or_else(|_| (Vec::new(), true));
        (results, catalog)
    });

    if opts.catalog_path.is_some() {
        if catalog_failed { progress.item_failed("catalog") } else { progress.item_done("catalog") }
    }

    let rows = match results {
        Ok(rows) => {
            progress.item_done("results");
            rows
        }
        Err(e) => {
            loge!("Load: {}", e);
            progress.item_failed("results");
            progress.finish();
            return Err(e);
        }
    };

    progress.log("Normalizing results…");
    let mut snap = build_snapshot(&rows, &catalog);
    snap.catalog_failed = catalog_failed;

    logf!(
        "Load: rows={} records={} dropped={} skipped={} competitors={} catalog={}",
        rows.len(),
        snap.records.len(),
        snap.dropped,
        snap.skipped,
        snap.competitors.len(),
        snap.catalog_entries
    );
    progress.finish();
    Ok(snap)
}
