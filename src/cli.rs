// src/cli.rs
use std::{env, error::Error, io::Write, path::PathBuf};

use crate::chart::{self, ChartData, ChartKind};
use crate::competitors;
use crate::config::consts::{CHART_H, CHART_W};
use crate::config::options::{AppOptions, DataOptions, ExportFormat};
use crate::csv::to_export_string;
use crate::file::{looks_like_dir_hint, normalize_separators, write_png, write_table};
use crate::progress::Progress;
use crate::stats::{self, GenderBucket, RecordFilter};
use crate::store::{self, Snapshot};
use crate::table::Table;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Report {
    Summary,
    Competitors,
    Search,
    History,
    Distances,
    Years,
    Events,
    States,
    Genders,
    Ages,
    Categories,
    Medals,
    Fastest,
    Histogram,
}

impl Report {
    pub fn parse(s: &str) -> Option<Self> {
        use Report::*;
        Some(match s.trim().to_ascii_lowercase().as_str() {
            "summary" => Summary,
            "competitors" => Competitors,
            "search" => Search,
            "history" => History,
            "distances" => Distances,
            "years" => Years,
            "events" => Events,
            "states" => States,
            "genders" => Genders,
            "ages" => Ages,
            "categories" => Categories,
            "medals" => Medals,
            "fastest" => Fastest,
            "histogram" => Histogram,
            _ => return None,
        })
    }

    pub fn name(&self) -> &'static str {
        use Report::*;
        match self {
            Summary => "summary",
            Competitors => "competitors",
            Search => "search",
            History => "history",
            Distances => "distances",
            Years => "years",
            Events => "events",
            States => "states",
            Genders => "genders",
            Ages => "ages",
            Categories => "categories",
            Medals => "medals",
            Fastest => "fastest",
            Histogram => "histogram",
        }
    }
}

#[derive(Clone, Debug)]
pub struct CliArgs {
    pub options: AppOptions,
    pub report: Report,
    pub query: Option<String>,
    pub filter: RecordFilter,
    /// 1-based medal page
    pub page: usize,
    pub out: Option<String>,
    pub charts: Option<PathBuf>,
}

impl Default for CliArgs {
    fn default() -> Self {
        Self {
            options: AppOptions::default(),
            report: Report::Summary,
            query: None,
            filter: RecordFilter::default(),
            page: 1,
            out: None,
            charts: None,
        }
    }
}

/// Status lines on stderr so stdout stays clean for the table.
struct CliProgress;

impl Progress for CliProgress {
    fn item_failed(&mut self, source: &str) {
        eprintln!("{}", failure_notice(source));
    }
}

/// Only the catalog is optional; a results failure ends the run with its error.
fn failure_notice(source: &str) -> String {
    match source {
        "catalog" => s!("warning: could not load catalog; continuing without it"),
        other => format!("error: could not load {other}"),
    }
}

pub fn run() -> Result<(), Box<dyn Error>> {
    let args = parse_args(env::args().skip(1))?;
    run_with(&args)
}

pub fn run_with(args: &CliArgs) -> Result<(), Box<dyn Error>> {
    let mut progress = CliProgress;
    let snap = store::load_snapshot(&args.options.data, Some(&mut progress))?;
    logf!("CLI: report={} records={}", args.report.name(), snap.records.len());

    let table = build_report(&snap, args)?;
    let export = &args.options.export;

    match &args.out {
        Some(out) => {
            let out = normalize_separators(out);
            let mut export = export.clone();
            let path = if looks_like_dir_hint(std::path::Path::new(&out)) || std::path::Path::new(&out).is_dir() {
                export.set_dir(&out);
                export.out_path_for(args.report.name())
            } else {
                export.set_path(&out);
                export.out_path()
            };
            let written = write_table(&export, &table, &path)?;
            eprintln!("Wrote {}", written.display());
        }
        None => {
            let text = to_export_string(&table.headers, &table.rows, export.include_headers, export.delim());
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(text.as_bytes())?;
        }
    }

    if let Some(dir) = &args.charts {
        for path in render_charts(&snap, args, dir)? {
            eprintln!("Chart {}", path.display());
        }
    }
    Ok(())
}

pub fn parse_args<I>(args: I) -> Result<CliArgs, Box<dyn Error>>
where
    I: IntoIterator<Item = String>,
{
    let mut out = CliArgs::default();
    let mut args = args.into_iter();
    while let Some(a) = args.next() {
        let mut value = |flag: &str| args.next().ok_or_else(|| format!("Missing value for {flag}"));
        match a.as_str() {
            "--data-dir" => {
                let keep_catalog = out.options.data.catalog_path.is_some();
                out.options.data = DataOptions::from_dir(value(&a)?);
                if !keep_catalog { out.options.data.catalog_path = None; }
            }
            "--results" => out.options.data.results_path = PathBuf::from(value(&a)?),
            "--catalog" => out.options.data.catalog_path = Some(PathBuf::from(value(&a)?)),
            "--no-catalog" => out.options.data.catalog_path = None,
            "--report" => {
                let v = value(&a)?;
                out.report = Report::parse(&v).ok_or_else(|| format!("Unknown report: {v}"))?;
            }
            "-q" | "--query" => out.query = Some(value(&a)?),
            "--page" => {
                let n: usize = value(&a)?.parse()?;
                if n == 0 { return Err("--page starts at 1".into()); }
                out.page = n;
            }
            "--distance" => out.filter.distance = Some(value(&a)?),
            "--gender" => {
                let v = value(&a)?;
                out.filter.gender = Some(GenderBucket::parse(&v).ok_or_else(|| format!("Unknown gender: {v}"))?);
            }
            "--age" => out.filter.age_group = Some(value(&a)?),
            "--year" => out.filter.year = Some(value(&a)?),
            "--bin-size" => {
                let v: f64 = value(&a)?.parse()?;
                if !(v.is_finite() && v > 0.0) { return Err("--bin-size must be a positive number".into()); }
                out.options.stats.bin_minutes = v;
            }
            "--top" => out.options.stats.top_n = value(&a)?.parse()?,
            "-o" | "--out" => out.out = Some(value(&a)?),
            "--format" => {
                let v = value(&a)?;
                out.options.export.format = ExportFormat::parse(&v).ok_or_else(|| format!("Unknown format: {v}"))?;
            }
            "--include-headers" => out.options.export.include_headers = true,
            "--no-headers" => out.options.export.include_headers = false,
            "--charts" => out.charts = Some(PathBuf::from(value(&a)?)),
            "-h" | "--help" => {
                eprintln!(include_str!("cli_help.txt"));
                std::process::exit(0);
            }
            _ => return Err(format!("Unknown arg: {a}").into()),
        }
    }
    Ok(out)
}

/// Compute the table for the requested report.
pub fn build_report(snap: &Snapshot, args: &CliArgs) -> Result<Table, Box<dyn Error>> {
    use Report::*;
    let stats_opts = &args.options.stats;
    let records = args.filter.apply_owned(&snap.records);

    let table = match args.report {
        Summary => Table::summary(&stats::summarize(&records, snap.competitors.len(), snap.dropped)),
        Competitors => Table::competitors(&snap.competitors),
        Search => {
            let q = args.query.as_deref().ok_or("--report search needs --query")?;
            Table::competitors(competitors::search(&snap.competitors, q))
        }
        History => {
            let q = args.query.as_deref().ok_or("--report history needs --query")?;
            let found = competitors::find_by_key(&snap.competitors, q)
                .or_else(|| competitors::search(&snap.competitors, q).into_iter().next())
                .ok_or_else(|| format!("No competitor matches {q:?}"))?;
            Table::history(found)
        }
        Distances => Table::series("Distance", &stats::unique_by_distance(&records)),
        Years => Table::series("Year", &stats::unique_by_year(&records)),
        Events => Table::events(&stats::unique_by_event(&records)),
        States => Table::series("State", &stats::unique_by_state(&records)),
        Genders => Table::series("Gender", &stats::gender_distribution(&records)),
        Ages => Table::series("Age group", &stats::age_distribution(&records)),
        Categories => Table::series("Category", &stats::top_categories(&records, stats_opts.top_n)),
        Medals => {
            let filtered;
            let pool: &[competitors::Competitor] = if args.filter.is_empty() {
                &snap.competitors
            } else {
                filtered = competitors::aggregate(&records);
                &filtered
            };
            let rows = stats::medal_table(pool);
            let page = args.page - 1;
            let size = stats_opts.medal_page_size;
            Table::medals(stats::medal_page(&rows, page, size), page * size + 1)
        }
        Fastest => Table::fastest(&stats::fastest(&records, stats_opts.top_n)),
        Histogram => {
            let groups: Vec<(String, stats::Histogram)> = stats::histograms_by_gender(&records, stats_opts.bin_minutes)
                .into_iter()
                .map(|(b, h)| (s!(b.label()), h))
                .collect();
            if args.filter.gender.is_some() || groups.len() <= 1 {
                Table::histogram(&stats::build_histogram(&stats::times_of(&records), stats_opts.bin_minutes, None))
            } else {
                Table::histograms(&groups)
            }
        }
    };
    Ok(table)
}

/// Render the standard chart set as PNGs into `dir`.
pub fn render_charts(snap: &Snapshot, args: &CliArgs, dir: &std::path::Path) -> Result<Vec<PathBuf>, Box<dyn Error>> {
    let records = args.filter.apply_owned(&snap.records);
    let bin = args.options.stats.bin_minutes;

    let hist_groups: Vec<(String, stats::Histogram)> = stats::histograms_by_gender(&records, bin)
        .into_iter()
        .map(|(b, h)| (s!(b.label()), h))
        .collect();

    let mut charts: Vec<(&str, ChartData, ChartKind)> = vec![
        ("distances", ChartData::from_series("Participants by distance", &stats::unique_by_distance(&records)), ChartKind::Bar),
        ("years", ChartData::from_series("Participants by year", &stats::unique_by_year(&records)), ChartKind::Line),
        ("events", ChartData::from_events("Participants by event", &stats::unique_by_event(&records)), ChartKind::Bar),
        ("genders", ChartData::from_series("Gender", &stats::gender_distribution(&records)), ChartKind::Bar),
        ("ages", ChartData::from_series("Age groups", &stats::age_distribution(&records)), ChartKind::Bar),
        ("states", ChartData::from_series("States", &stats::unique_by_state(&records)), ChartKind::Bar),
    ];
    let times = if args.filter.gender.is_some() || hist_groups.len() <= 1 {
        ChartData::from_histogram("Finish times", &stats::build_histogram(&stats::times_of(&records), bin, None))
    } else {
        ChartData::from_histograms("Finish times", &hist_groups)
    };
    charts.push(("times", times, ChartKind::Bar));

    let mut written = Vec::with_capacity(charts.len());
    for (name, data, kind) in charts {
        if data.is_empty() {
            logd!("Chart: {} has no data, skipped", name);
            continue;
        }
        let img = chart::render(&data, kind, CHART_W, CHART_H);
        written.push(write_png(&img, &dir.join(join!(name, ".png")))?);
    }
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::failure_notice;

    #[test]
    fn only_the_catalog_is_skippable() {
        assert!(failure_notice("catalog").contains("continuing without it"));
        assert_eq!(failure_notice("results"), "error: could not load results");
    }
}
