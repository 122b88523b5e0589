//! Compare two gcovr reports and find functions whose line coverage
//! increased. The comparison is increase-only: functions present only in
//! the base report, or whose coverage dropped, produce no record.
//!
//! Output order is deterministic: files follow the new report's order,
//! functions within a file are sorted by mangled name, and newly covered
//! line numbers are ascending.

use std::collections::{BTreeMap, HashMap};

use crate::model::{File, FunctionIncrease, IncreaseReport, Report};

/// Per-function line coverage: function name → line number → count.
/// Duplicate (line, function) entries resolve last-write-wins.
type LineCoverageMap<'a> = BTreeMap<&'a str, BTreeMap<u32, u64>>;

/// Compute coverage increases from `base` to `new`.
pub fn compute_coverage_increase(base: &Report, new: &Report) -> IncreaseReport {
    let base_files: HashMap<&str, &File> =
        base.files.iter().map(|f| (f.path.as_str(), f)).collect();

    let mut result = IncreaseReport::default();

    for new_file in &new.files {
        let base_file = base_files.get(new_file.path.as_str()).copied();
        compare_file(base_file, new_file, &mut result.increases);
    }

    result
}

/// Compare one file of the new report against its base counterpart. A
/// missing base file is treated as empty, so every covered line counts as
/// newly covered.
fn compare_file(base_file: Option<&File>, new_file: &File, out: &mut Vec<FunctionIncrease>) {
    let base_coverage = base_file.map(build_line_coverage_map).unwrap_or_default();
    let new_coverage = build_line_coverage_map(new_file);

    let demangled = demangled_names(new_file);
    let totals = function_line_totals(new_file);

    for (function_name, new_lines) in &new_coverage {
        let base_lines = base_coverage.get(function_name);

        let mut increased_lines = Vec::new();
        let mut old_covered = 0;
        let mut new_covered = 0;

        for (&line_number, &new_count) in new_lines {
            let base_count = base_lines
                .and_then(|lines| lines.get(&line_number))
                .copied()
                .unwrap_or(0);

            if base_count > 0 {
                old_covered += 1;
            }
            if new_count > 0 {
                new_covered += 1;
            }
            if base_count == 0 && new_count > 0 {
                increased_lines.push(line_number);
            }
        }

        if increased_lines.is_empty() {
            continue;
        }

        out.push(FunctionIncrease {
            file: new_file.path.clone(),
            function_name: (*function_name).to_string(),
            demangled_name: demangled
                .get(function_name)
                .filter(|name| !name.is_empty())
                .map_or_else(|| (*function_name).to_string(), |name| (*name).to_string()),
            total_lines: totals.get(function_name).copied().unwrap_or(0),
            increased_lines,
            old_covered_lines: old_covered,
            new_covered_lines: new_covered,
        });
    }
}

fn build_line_coverage_map(file: &File) -> LineCoverageMap<'_> {
    let mut map: LineCoverageMap<'_> = BTreeMap::new();
    for line in &file.lines {
        map.entry(line.function_name.as_str())
            .or_default()
            .insert(line.line_number, line.count);
    }
    map
}

/// Mangled name → demangled name for a file's function entries.
fn demangled_names(file: &File) -> HashMap<&str, &str> {
    file.functions
        .iter()
        .map(|f| (f.name.as_str(), f.demangled_name.as_str()))
        .collect()
}

/// Raw line counts per function name, duplicates included.
fn function_line_totals(file: &File) -> HashMap<&str, usize> {
    let mut totals: HashMap<&str, usize> = HashMap::new();
    for line in &file.lines {
        *totals.entry(line.function_name.as_str()).or_default() += 1;
    }
    totals
}
