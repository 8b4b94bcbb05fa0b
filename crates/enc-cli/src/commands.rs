use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result};
use enc_cli::selection::resolve;
use enc_metrics::{FilterOptions, build_report};
use enc_transform::{Dataset, DatasetCache};
use tracing::{info, info_span};

use crate::cli::{OptionsArgs, OutputFormatArg, ReportArgs};
use crate::summary::{print_no_data, print_options, print_report};

pub fn run_report(args: &ReportArgs) -> Result<()> {
    let span = info_span!("report", file = %args.file.display());
    let _guard = span.enter();
    let started = Instant::now();

    let dataset = load(&args.file)?;
    let Some(spec) = resolve(&dataset, &args.selection()).context("resolve filter flags")? else {
        match args.format {
            OutputFormatArg::Table => print_no_data(dataset.raw_row_count()),
            OutputFormatArg::Json => {
                let empty = serde_json::json!({
                    "options": FilterOptions::from_dataset(&dataset),
                    "loaded_rows": dataset.raw_row_count(),
                    "valid_rows": dataset.len(),
                });
                println!("{}", serde_json::to_string_pretty(&empty)?);
            }
        }
        return Ok(());
    };

    let report = build_report(&dataset, &spec, args.top);
    match args.format {
        OutputFormatArg::Table => print_report(&report),
        OutputFormatArg::Json => {
            let json = serde_json::to_string_pretty(&report).context("serialize report")?;
            println!("{json}");
        }
    }
    info!(
        encounters = report.kpis.total_encounters,
        elapsed_ms = started.elapsed().as_millis() as u64,
        "report complete"
    );
    Ok(())
}

pub fn run_options(args: &OptionsArgs) -> Result<()> {
    let span = info_span!("options", file = %args.file.display());
    let _guard = span.enter();

    let dataset = load(&args.file)?;
    let options = FilterOptions::from_dataset(&dataset);
    match args.format {
        OutputFormatArg::Table => print_options(&options),
        OutputFormatArg::Json => {
            let json = serde_json::to_string_pretty(&options).context("serialize options")?;
            println!("{json}");
        }
    }
    Ok(())
}

fn load(path: &Path) -> Result<Arc<Dataset>> {
    let mut cache = DatasetCache::new();
    let dataset = cache
        .get_or_load_path(path)
        .with_context(|| format!("load {}", path.display()))?;
    if let Some(identity) = cache.identity() {
        info!(
            identity = %identity,
            records = dataset.len(),
            rows = dataset.raw_row_count(),
            "dataset ready"
        );
    }
    Ok(dataset)
}
