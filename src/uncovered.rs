//! Extract currently-uncovered lines from a report, grouped by file and
//! function. Files are emitted sorted by path and functions by mangled
//! name so output is reproducible.

use std::collections::BTreeMap;

use crate::model::{File, FileUncovered, FunctionUncovered, Report, UncoveredReport};

/// Find every line with a zero execution count, grouped by file and
/// function. Files without uncovered lines are omitted; a fully covered
/// (or empty) report yields an empty result.
pub fn find_uncovered_lines(report: &Report) -> UncoveredReport {
    let mut files: Vec<FileUncovered> = report.files.iter().filter_map(uncovered_in_file).collect();
    files.sort_by(|a, b| a.path.cmp(&b.path));
    UncoveredReport { files }
}

fn uncovered_in_file(file: &File) -> Option<FileUncovered> {
    // function name → uncovered line numbers, sorted by key
    let mut by_function: BTreeMap<&str, Vec<u32>> = BTreeMap::new();
    for line in &file.lines {
        if line.count == 0 {
            by_function
                .entry(line.function_name.as_str())
                .or_default()
                .push(line.line_number);
        }
    }

    if by_function.is_empty() {
        return None;
    }

    let functions = by_function
        .into_iter()
        .map(|(function_name, mut uncovered_lines)| {
            uncovered_lines.sort_unstable();

            let mut total_lines = 0;
            let mut covered_lines = 0;
            for line in &file.lines {
                if line.function_name == function_name {
                    total_lines += 1;
                    if line.count > 0 {
                        covered_lines += 1;
                    }
                }
            }

            FunctionUncovered {
                function_name: function_name.to_string(),
                demangled_name: demangled_or_mangled(file, function_name),
                uncovered_lines,
                total_lines,
                covered_lines,
            }
        })
        .collect();

    Some(FileUncovered {
        path: file.path.clone(),
        functions,
    })
}

/// Resolve a mangled name against the file's function entries, falling
/// back to the mangled name itself.
fn demangled_or_mangled(file: &File, mangled: &str) -> String {
    file.functions
        .iter()
        .find(|f| f.name == mangled)
        .map(|f| f.demangled_name.as_str())
        .filter(|name| !name.is_empty())
        .unwrap_or(mangled)
        .to_string()
}
