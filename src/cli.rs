//! Command handler functions for the covdiff CLI.
//!
//! Each `cmd_*` function returns its output as a `String`, making them easy
//! to test without capturing stdout.

use std::path::Path;

use anyhow::{Context, Result};

use crate::filter::{apply_filter, parse_filter_config, FilterConfig};
use crate::parser::parse_report;
use crate::{diff, report, uncovered};

/// Load the filter config if a path was given.
fn load_filter(path: Option<&Path>) -> Result<Option<FilterConfig>> {
    match path {
        Some(p) => {
            let config = parse_filter_config(p).context("Failed to load filter config")?;
            Ok(Some(config))
        }
        None => Ok(None),
    }
}

/// Compare two reports and render the coverage increases.
pub fn cmd_diff(base: &Path, new: &Path, filter: Option<&Path>) -> Result<String> {
    let base_report = parse_report(base).context("Failed to load base report")?;
    let new_report = parse_report(new).context("Failed to load new report")?;
    let config = load_filter(filter)?;

    let base_report = apply_filter(base_report, config.as_ref());
    let new_report = apply_filter(new_report, config.as_ref());

    let result = diff::compute_coverage_increase(&base_report, &new_report);
    Ok(report::format_increase_report(&result))
}

/// Render the uncovered lines of a single report.
pub fn cmd_uncovered(report_path: &Path, filter: Option<&Path>) -> Result<String> {
    let parsed = parse_report(report_path).context("Failed to load report")?;
    let config = load_filter(filter)?;

    let parsed = apply_filter(parsed, config.as_ref());

    let result = uncovered::find_uncovered_lines(&parsed);
    Ok(report::format_uncovered_report(&result))
}
