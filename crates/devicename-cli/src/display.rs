//! Terminal display utilities for the devicename CLI

use console::style;
use devicename_pipeline::PipelineReport;
use devicename_store::CacheStats;
use devicename_types::{DeviceInfo, Resolution, ResolutionSource};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::time::Duration;

/// Create a spinner, or nothing in quiet mode
pub fn create_spinner(quiet: bool, message: &str) -> Option<ProgressBar> {
    if quiet {
        return None;
    }

    let pb = ProgressBar::new_spinner();
    if let Ok(spinner) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
        pb.set_style(spinner);
    }
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    Some(pb)
}

/// Display a resolved record with the layer that produced it
pub fn display_resolution(resolution: &Resolution, error: Option<&str>) {
    let info = &resolution.info;
    println!(
        "{} {}",
        style("📱").blue().bold(),
        style(info.name()).bold().underlined()
    );
    display_info_fields(info);
    println!("  Source: {}", source_style(resolution.source));
    if let Some(error) = error {
        println!("  Error: {}", style(error).red());
    }
}

fn display_info_fields(info: &DeviceInfo) {
    println!(
        "  Manufacturer: {}",
        style(info.manufacturer.as_deref().unwrap_or("-")).cyan()
    );
    println!(
        "  Market name: {}",
        style(info.market_name.as_deref().unwrap_or("-")).cyan()
    );
    println!("  Codename: {}", style(&info.codename).cyan());
    println!("  Model: {}", style(&info.model).cyan());
}

fn source_style(source: ResolutionSource) -> console::StyledObject<ResolutionSource> {
    match source {
        ResolutionSource::Fallback => style(source).yellow(),
        _ => style(source).green(),
    }
}

/// Display cache statistics
pub fn display_cache_stats(path: &Path, stats: &CacheStats, capacity: Option<usize>) {
    println!("{}", style("Cache Statistics:").bold().underlined());
    println!("  File: {}", style(path.display()).cyan());
    println!("  Entries: {}", style(stats.entries).green());
    println!(
        "  Capacity: {}",
        style(capacity.map_or_else(|| "unbounded".to_string(), |c| c.to_string())).cyan()
    );
}

/// Display cached entries, one per line
pub fn display_cache_entries(entries: &[(String, DeviceInfo)]) {
    if entries.is_empty() {
        println!("{} Cache is empty", style("ℹ").yellow());
        return;
    }
    for (key, info) in entries {
        println!("  {} → {}", style(key).dim(), style(info.name()).green());
    }
}

/// Display what a pipeline run produced
pub fn display_pipeline_report(report: &PipelineReport) {
    let manifest = &report.manifest;
    println!();
    println!("{}", style("Generation Summary:").bold().underlined());
    println!("  Source: {}", style(&manifest.source).cyan());
    println!("  Records: {}", style(manifest.records).green());
    println!(
        "  Skipped rows: {}",
        if manifest.skipped_rows > 0 {
            style(manifest.skipped_rows).yellow()
        } else {
            style(manifest.skipped_rows).green()
        }
    );
    println!("  Codename files: {}", style(manifest.codenames).green());
    if manifest.rejected_codenames > 0 {
        println!(
            "  Rejected codenames: {}",
            style(manifest.rejected_codenames).yellow()
        );
    }
    println!(
        "  Manufacturer files: {}",
        style(manifest.manufacturers).green()
    );
    println!("  Popular devices: {}", style(manifest.popular).green());
    println!("  Table rows: {}", style(manifest.table_rows).green());

    for dropped in &report.table.dropped {
        println!(
            "    {} {} kept by {}, dropped from {}",
            style("!").yellow(),
            style(&dropped.identifier).bold(),
            dropped.kept_by,
            dropped.dropped_from
        );
    }

    if let Some(rows) = manifest.database_rows {
        println!("  Database rows: {}", style(rows).green());
    }
    println!("  Output: {}", style(report.output_dir.display()).blue());
    if let Some(asset) = &report.asset_path {
        println!("  Asset: {}", style(asset.display()).blue());
    }
    if let Some(table) = &report.table_path {
        println!("  Table: {}", style(table.display()).blue());
    }
}
