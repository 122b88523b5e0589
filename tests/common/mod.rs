use covdiff::model::{File, Function, Line, Report};

/// Build a line entry.
pub fn line(number: u32, function: &str, count: u64) -> Line {
    Line {
        line_number: number,
        function_name: function.to_string(),
        count,
    }
}

/// Build a function entry with only the fields the engines look at.
pub fn func(name: &str, demangled: &str) -> Function {
    Function {
        name: name.to_string(),
        demangled_name: demangled.to_string(),
        ..Default::default()
    }
}

/// Build a single-file report.
pub fn report(path: &str, lines: Vec<Line>, functions: Vec<Function>) -> Report {
    Report {
        format_version: "0.6".to_string(),
        files: vec![File {
            path: path.to_string(),
            lines,
            functions,
        }],
    }
}

/// Parse the fixture reports checked in under tests/fixtures/.
pub fn base_fixture() -> Report {
    covdiff::parser::parse_report_bytes(include_bytes!("../fixtures/base.json")).unwrap()
}

pub fn new_fixture() -> Report {
    covdiff::parser::parse_report_bytes(include_bytes!("../fixtures/new.json")).unwrap()
}
