//! Loading of gcovr JSON reports. Parsing is the only fallible boundary
//! in the crate; the analysis engines never fail on parsed input.

use std::path::Path;

use crate::error::{CovdiffError, Result};
use crate::model::Report;

/// Read and decode a gcovr JSON report file.
pub fn parse_report(path: &Path) -> Result<Report> {
    let content = std::fs::read(path).map_err(|source| CovdiffError::Io {
        source,
        path: path.to_path_buf(),
    })?;
    parse_report_bytes(&content).map_err(|source| CovdiffError::Json {
        source,
        path: path.to_path_buf(),
    })
}

/// Decode a gcovr JSON report from raw bytes.
pub fn parse_report_bytes(input: &[u8]) -> std::result::Result<Report, serde_json::Error> {
    serde_json::from_slice(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_report_bytes() {
        let input = br#"{
            "gcovr/format_version": "0.6",
            "files": [
                {
                    "file": "demo.cc",
                    "lines": [
                        { "line_number": 3, "function_name": "_Z1fv", "count": 2 },
                        { "line_number": 4, "function_name": "_Z1fv", "count": 0 }
                    ],
                    "functions": [
                        {
                            "name": "_Z1fv",
                            "demangled_name": "f()",
                            "lineno": 3,
                            "execution_count": 2,
                            "blocks_percent": 50.0,
                            "pos": ["3:1"]
                        }
                    ]
                }
            ]
        }"#;

        let report = parse_report_bytes(input).unwrap();
        assert_eq!(report.format_version, "0.6");
        assert_eq!(report.files.len(), 1);

        let file = &report.files[0];
        assert_eq!(file.path, "demo.cc");
        assert_eq!(file.lines.len(), 2);
        assert_eq!(file.lines[0].line_number, 3);
        assert_eq!(file.lines[0].function_name, "_Z1fv");
        assert_eq!(file.lines[0].count, 2);
        assert_eq!(file.functions.len(), 1);
        assert_eq!(file.functions[0].demangled_name, "f()");
    }

    #[test]
    fn test_parse_report_missing_optional_fields() {
        // gcovr omits fields depending on version; only the essentials are
        // required.
        let input = br#"{ "files": [ { "file": "a.cpp" } ] }"#;
        let report = parse_report_bytes(input).unwrap();
        assert_eq!(report.format_version, "");
        assert_eq!(report.files[0].lines.len(), 0);
        assert_eq!(report.files[0].functions.len(), 0);
    }

    #[test]
    fn test_parse_report_malformed() {
        assert!(parse_report_bytes(b"{ not json").is_err());
        assert!(parse_report_bytes(b"[1, 2, 3]").is_err());
    }

    #[test]
    fn test_parse_report_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.json");
        std::fs::write(&path, r#"{ "files": [] }"#).unwrap();

        let report = parse_report(&path).unwrap();
        assert_eq!(report.files.len(), 0);
    }

    #[test]
    fn test_parse_report_unreadable() {
        let err = parse_report(Path::new("does-not-exist.json")).unwrap_err();
        assert!(err.to_string().contains("does-not-exist.json"));
    }
}
