use std::collections::HashSet;
use std::fmt::Write;

use crate::report::Report;
use crate::traits::{OutputError, ReportFormatter};

pub struct CsvFormatter;

impl ReportFormatter for CsvFormatter {
    fn format(&self, report: &Report) -> Result<String, OutputError> {
        let mut out = String::new();

        writeln!(out, "IP,Port,Service,Version,CPE,Vulnerable")
            .map_err(|e| OutputError::FormatError(e.to_string()))?;

        let vulnerable: HashSet<(&str, &str)> = report
            .vulnerabilities
            .iter()
            .map(|f| (f.ip.as_str(), f.port.as_str()))
            .collect();

        // One row per service entry, in inventory order
        for (addr, port, record) in report.version_details.iter_records() {
            let flag = if vulnerable.contains(&(addr, port)) {
                "YES"
            } else {
                "NO"
            };
            writeln!(
                out,
                "{},{},{},{},{},{}",
                csv_escape(addr),
                csv_escape(port),
                csv_escape(&record.name),
                csv_escape(&record.version),
                csv_escape(&record.cpe),
                flag,
            )
            .map_err(|e| OutputError::FormatError(e.to_string()))?;
        }
        Ok(out)
    }
}

fn csv_escape(s: &str) -> String {
    let needs_quoting = s.contains(',') || s.contains('"') || s.contains('\n') || s.contains('\r');
    let has_formula_prefix = matches!(
        s.as_bytes().first(),
        Some(b'=' | b'+' | b'-' | b'@' | b'\t' | b'\r')
    );

    if has_formula_prefix {
        // Prepend single-quote to neutralize formula interpretation in spreadsheets
        format!("\"'{}\"", s.replace('"', "\"\""))
    } else if needs_quoting {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}
