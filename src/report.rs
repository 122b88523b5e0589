//! Human-readable text rendering of analysis results.

use std::fmt::Write;

use crate::model::{IncreaseReport, UncoveredReport};

/// Join line numbers for display: `[1, 2, 14]`.
fn format_line_numbers(lines: &[u32]) -> String {
    let joined = lines
        .iter()
        .map(|n| n.to_string())
        .collect::<Vec<_>>()
        .join(", ");
    format!("[{joined}]")
}

/// Render a coverage increase report as text.
pub fn format_increase_report(report: &IncreaseReport) -> String {
    if report.increases.is_empty() {
        return "No coverage increases found.\n".to_string();
    }

    let mut out = String::new();
    writeln!(out, "Coverage Increase Report").unwrap();
    writeln!(out, "=========================").unwrap();
    writeln!(out).unwrap();
    writeln!(
        out,
        "Found {} function(s) with increased coverage:",
        report.increases.len()
    )
    .unwrap();
    writeln!(out).unwrap();

    for (i, inc) in report.increases.iter().enumerate() {
        writeln!(out, "{}. File: {}", i + 1, inc.file).unwrap();
        writeln!(out, "   Function: {}", inc.demangled_name).unwrap();
        writeln!(
            out,
            "   Old Coverage: {}/{} lines ({:.1}%)",
            inc.old_covered_lines,
            inc.total_lines,
            inc.old_percent()
        )
        .unwrap();
        writeln!(
            out,
            "   New Coverage: {}/{} lines ({:.1}%)",
            inc.new_covered_lines,
            inc.total_lines,
            inc.new_percent()
        )
        .unwrap();
        writeln!(out, "   Lines Increased: {}", inc.increased_lines.len()).unwrap();
        writeln!(
            out,
            "   Newly Covered Line Numbers: {}",
            format_line_numbers(&inc.increased_lines)
        )
        .unwrap();
        writeln!(out).unwrap();
    }

    out
}

/// Render an uncovered lines report as text.
pub fn format_uncovered_report(report: &UncoveredReport) -> String {
    if report.files.is_empty() {
        return "No uncovered lines found. All lines have coverage!\n".to_string();
    }

    let total_functions: usize = report.files.iter().map(|f| f.functions.len()).sum();
    let total_uncovered: usize = report
        .files
        .iter()
        .flat_map(|f| &f.functions)
        .map(|f| f.uncovered_lines.len())
        .sum();

    let mut out = String::new();
    writeln!(out, "Uncovered Lines Report").unwrap();
    writeln!(out, "======================").unwrap();
    writeln!(out).unwrap();
    writeln!(
        out,
        "Found {} function(s) with uncovered lines ({} total uncovered lines):",
        total_functions, total_uncovered
    )
    .unwrap();
    writeln!(out).unwrap();

    let mut index = 1;
    for file in &report.files {
        for f in &file.functions {
            writeln!(out, "{}. File: {}", index, file.path).unwrap();
            writeln!(out, "   Function: {}", f.demangled_name).unwrap();
            writeln!(
                out,
                "   Coverage: {}/{} lines ({:.1}%)",
                f.covered_lines,
                f.total_lines,
                f.covered_percent()
            )
            .unwrap();
            writeln!(
                out,
                "   Uncovered Lines ({}): {}",
                f.uncovered_lines.len(),
                format_line_numbers(&f.uncovered_lines)
            )
            .unwrap();
            writeln!(out).unwrap();
            index += 1;
        }
    }

    out
}
