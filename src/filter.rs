//! Restrict a report to a caller-specified set of (file, function)
//! targets, loaded from a YAML config.
//!
//! File matching is permissive: a target written as a bare filename
//! matches a report file carrying a full path. Function identifiers may
//! be given as mangled names, full demangled names, or demangled base
//! names stripped of the parameter list (`calculate(int, double)` →
//! `calculate`). Base-name matching cannot distinguish overloads and may
//! over-include; callers rely on that.

use std::collections::{HashMap, HashSet};
use std::path::Path;

use serde::Deserialize;

use crate::error::{CovdiffError, Result};
use crate::model::{File, Report};

/// Filter config, deserialized from YAML.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FilterConfig {
    /// Caller metadata carried by the config format; inert here.
    #[serde(default)]
    pub compiler: Option<CompilerConfig>,
    #[serde(default)]
    pub targets: Vec<Target>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CompilerConfig {
    #[serde(default)]
    pub path: String,
    #[serde(default)]
    pub gcovr_exec_path: String,
}

/// A single file to track, with the functions of interest within it.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Target {
    pub file: String,
    #[serde(default)]
    pub functions: Vec<String>,
}

/// Read and decode a YAML filter config file.
pub fn parse_filter_config(path: &Path) -> Result<FilterConfig> {
    let content = std::fs::read(path).map_err(|source| CovdiffError::Io {
        source,
        path: path.to_path_buf(),
    })?;
    serde_yaml::from_slice(&content).map_err(|source| CovdiffError::Yaml {
        source,
        path: path.to_path_buf(),
    })
}

/// Canonicalize a path string for comparison: unify separators to `/` and
/// collapse `.`/`..` segments. Purely textual, never touches the
/// filesystem.
pub fn normalize_path(path: &str) -> String {
    let unified = path.replace('\\', "/");
    let absolute = unified.starts_with('/');

    let mut segments: Vec<&str> = Vec::new();
    for segment in unified.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                if matches!(segments.last(), Some(&"..")) || (segments.is_empty() && !absolute) {
                    segments.push("..");
                } else {
                    segments.pop();
                }
            }
            other => segments.push(other),
        }
    }

    let joined = segments.join("/");
    if absolute {
        format!("/{joined}")
    } else if joined.is_empty() {
        ".".to_string()
    } else {
        joined
    }
}

/// Final path segment of an already-normalized path.
fn base_name(normalized: &str) -> &str {
    normalized.rsplit('/').next().unwrap_or(normalized)
}

/// Demangled name truncated at its first parameter-list delimiter:
/// `calculate(int, double)` → `calculate`.
fn base_identifier(demangled: &str) -> &str {
    match demangled.find('(') {
        Some(idx) => &demangled[..idx],
        None => demangled,
    }
}

/// Matching index built from a filter config: normalized full paths and
/// bare basenames each map to the allowed function identifiers.
struct FilterIndex {
    by_path: HashMap<String, HashSet<String>>,
    by_base: HashMap<String, HashSet<String>>,
}

impl FilterIndex {
    fn build(config: &FilterConfig) -> Self {
        let mut by_path: HashMap<String, HashSet<String>> = HashMap::new();
        let mut by_base: HashMap<String, HashSet<String>> = HashMap::new();

        for target in &config.targets {
            let normalized = normalize_path(&target.file);
            let base = base_name(&normalized).to_string();

            by_path
                .entry(normalized)
                .or_default()
                .extend(target.functions.iter().cloned());
            by_base
                .entry(base)
                .or_default()
                .extend(target.functions.iter().cloned());
        }

        Self { by_path, by_base }
    }

    /// Allowed identifiers for a report file, matching on full normalized
    /// path first, then on bare filename.
    fn allowed_for(&self, file_path: &str) -> Option<&HashSet<String>> {
        let normalized = normalize_path(file_path);
        self.by_path
            .get(&normalized)
            .or_else(|| self.by_base.get(base_name(&normalized)))
    }
}

/// Does a function pass the three-way identifier test?
fn function_matches(allowed: &HashSet<String>, mangled: &str, demangled: &str) -> bool {
    allowed.contains(mangled)
        || allowed.contains(demangled)
        || allowed.contains(base_identifier(demangled))
}

/// Reduce a report to the files and functions named by the filter config.
///
/// With no config, or a config with zero targets, the report passes
/// through unchanged. Otherwise non-matching files are dropped, and
/// within a matching file only lines and functions whose identifiers pass
/// the allowed set are retained. A file that retains no functions is
/// dropped even if some of its lines matched.
pub fn apply_filter(report: Report, config: Option<&FilterConfig>) -> Report {
    let config = match config {
        Some(c) if !c.targets.is_empty() => c,
        _ => return report,
    };

    let index = FilterIndex::build(config);

    let mut filtered = Report {
        format_version: report.format_version,
        files: Vec::new(),
    };

    for file in report.files {
        let allowed = match index.allowed_for(&file.path) {
            Some(allowed) => allowed,
            None => continue,
        };
        if let Some(kept) = filter_file(file, allowed) {
            filtered.files.push(kept);
        }
    }

    filtered
}

/// Filter one file against its allowed identifier set. Returns `None`
/// when no function survives.
fn filter_file(file: File, allowed: &HashSet<String>) -> Option<File> {
    let functions: Vec<_> = file
        .functions
        .into_iter()
        .filter(|f| function_matches(allowed, &f.name, &f.demangled_name))
        .collect();

    if functions.is_empty() {
        return None;
    }

    // Lines carry only the mangled name; a line is provably allowed only
    // through a retained function entry.
    let retained: HashSet<&str> = functions.iter().map(|f| f.name.as_str()).collect();
    let lines = file
        .lines
        .into_iter()
        .filter(|l| retained.contains(l.function_name.as_str()))
        .collect();

    Some(File {
        path: file.path,
        lines,
        functions,
    })
}
