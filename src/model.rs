//! In-memory representation of a gcovr JSON coverage report, plus the
//! result structures produced by the diff and uncovered engines. The
//! report types deserialize directly from gcovr's JSON shape; the result
//! types are built fresh per analysis call and owned by the caller.

use serde::{Deserialize, Serialize};

/// Compute a coverage percentage, returning 0.0 when the total is zero.
#[must_use]
pub fn percent(covered: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        covered as f64 * 100.0 / total as f64
    }
}

/// Top-level gcovr JSON report.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Report {
    /// Opaque format tag, passed through unchanged by filtering.
    #[serde(rename = "gcovr/format_version", default)]
    pub format_version: String,
    #[serde(default)]
    pub files: Vec<File>,
}

/// Coverage data for a single source file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct File {
    /// Path as reported by gcovr — may be relative, absolute, or a bare
    /// filename.
    #[serde(rename = "file")]
    pub path: String,
    #[serde(default)]
    pub lines: Vec<Line>,
    #[serde(default)]
    pub functions: Vec<Function>,
}

/// A single instrumentable line. `function_name` is the mangled symbol
/// and need not correspond to an entry in the owning file's `functions`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Line {
    pub line_number: u32,
    #[serde(default)]
    pub function_name: String,
    pub count: u64,
}

/// A function definition. `name` is the mangled symbol and serves as the
/// join key against [`Line::function_name`]; everything except
/// `demangled_name` is pass-through metadata.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Function {
    pub name: String,
    #[serde(default)]
    pub demangled_name: String,
    #[serde(default)]
    pub lineno: u32,
    #[serde(default)]
    pub execution_count: u64,
    #[serde(default)]
    pub blocks_percent: f64,
    #[serde(default)]
    pub pos: Vec<String>,
}

/// Coverage increase for a single function, from base to new report.
#[derive(Debug, Clone)]
pub struct FunctionIncrease {
    pub file: String,
    /// Mangled name.
    pub function_name: String,
    pub demangled_name: String,
    /// All instrumentable lines of this function in the new report.
    pub total_lines: usize,
    /// Line numbers covered in new but not in base, ascending.
    pub increased_lines: Vec<u32>,
    /// Lines covered in the base report.
    pub old_covered_lines: usize,
    /// Lines covered in the new report.
    pub new_covered_lines: usize,
}

impl FunctionIncrease {
    #[must_use]
    pub fn old_percent(&self) -> f64 {
        percent(self.old_covered_lines, self.total_lines)
    }

    #[must_use]
    pub fn new_percent(&self) -> f64 {
        percent(self.new_covered_lines, self.total_lines)
    }
}

/// All coverage increases between two reports.
#[derive(Debug, Clone, Default)]
pub struct IncreaseReport {
    pub increases: Vec<FunctionIncrease>,
}

/// Uncovered lines within a single function.
#[derive(Debug, Clone)]
pub struct FunctionUncovered {
    /// Mangled name.
    pub function_name: String,
    pub demangled_name: String,
    /// Line numbers with a zero execution count, ascending.
    pub uncovered_lines: Vec<u32>,
    pub total_lines: usize,
    pub covered_lines: usize,
}

impl FunctionUncovered {
    #[must_use]
    pub fn covered_percent(&self) -> f64 {
        percent(self.covered_lines, self.total_lines)
    }
}

/// All uncovered functions within a single file.
#[derive(Debug, Clone)]
pub struct FileUncovered {
    pub path: String,
    pub functions: Vec<FunctionUncovered>,
}

/// Uncovered lines across a whole report, grouped by file.
#[derive(Debug, Clone, Default)]
pub struct UncoveredReport {
    pub files: Vec<FileUncovered>,
}
