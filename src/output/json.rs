//! JSON output formatter.
//!
//! Formats lint diagnostics as machine-readable JSON for tooling integration.

use super::{FileReport, LintFormatter};
use crate::rule::Severity;
use serde::Serialize;
use std::io::Write;

/// Formats lint output as JSON.
pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonOutput {
    diagnostics: Vec<JsonDiagnostic>,
    summary: JsonSummary,
}

#[derive(Serialize)]
struct JsonDiagnostic {
    rule_id: String,
    severity: String,
    message: String,
    file: String,
    line: usize,
    column: usize,
    byte_start: usize,
    byte_end: usize,
    correctable: bool,
}

#[derive(Serialize)]
struct JsonSummary {
    total: usize,
    errors: usize,
    warnings: usize,
    hints: usize,
    correctable: usize,
}

impl JsonFormatter {
    /// Create a new JSON formatter.
    pub fn new() -> Self {
        Self
    }

    fn severity_to_string(severity: Severity) -> &'static str {
        match severity {
            Severity::Hint => "hint",
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl LintFormatter for JsonFormatter {
    fn format<W: Write>(&self, reports: &[FileReport], writer: &mut W) -> std::io::Result<()> {
        let mut json_diagnostics = Vec::new();
        for report in reports {
            for diag in report.diagnostics {
                let (line, column) = report.line_col(diag.range.start);
                json_diagnostics.push(JsonDiagnostic {
                    rule_id: diag.rule_id.0.clone(),
                    severity: Self::severity_to_string(diag.severity).to_string(),
                    message: diag.message.clone(),
                    file: report.path.display().to_string(),
                    line,
                    column,
                    byte_start: diag.range.start,
                    byte_end: diag.range.end,
                    correctable: diag.has_correction(),
                });
            }
        }

        let summary = JsonSummary {
            total: json_diagnostics.len(),
            errors: json_diagnostics
                .iter()
                .filter(|d| d.severity == "error")
                .count(),
            warnings: json_diagnostics
                .iter()
                .filter(|d| d.severity == "warning")
                .count(),
            hints: json_diagnostics
                .iter()
                .filter(|d| d.severity == "hint")
                .count(),
            correctable: json_diagnostics.iter().filter(|d| d.correctable).count(),
        };

        let output = JsonOutput {
            diagnostics: json_diagnostics,
            summary,
        };

        serde_json::to_writer_pretty(writer, &output).map_err(std::io::Error::other)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostic::LintDiagnostic;
    use crate::fix::{Correction, Edit};
    use crate::rule::RuleId;
    use crate::span::SourceRange;
    use std::path::PathBuf;

    fn render(reports: &[FileReport]) -> serde_json::Value {
        let formatter = JsonFormatter::new();
        let mut output = Vec::new();
        formatter.format(reports, &mut output).unwrap();
        serde_json::from_slice(&output).unwrap()
    }

    #[test]
    fn produces_valid_json_with_location() {
        let path = PathBuf::from("spec/features/a_spec.rb");
        let source = "describe 'x' do\n  sleep 20\nend\n";
        let diagnostics = vec![LintDiagnostic::new(
            RuleId::new("no-sleep-in-feature-specs"),
            Severity::Warning,
            "msg",
            SourceRange::new(18, 26),
        )];
        let reports = [FileReport::new(&path, source, &diagnostics)];

        let parsed = render(&reports);
        assert!(parsed["diagnostics"].is_array());
        assert_eq!(parsed["diagnostics"][0]["file"], "spec/features/a_spec.rb");
        assert_eq!(parsed["diagnostics"][0]["line"], 2);
        assert_eq!(parsed["diagnostics"][0]["column"], 3);
        assert_eq!(parsed["diagnostics"][0]["byte_start"], 18);
        assert_eq!(parsed["summary"]["total"], 1);
    }

    #[test]
    fn summary_counts_by_severity_and_correctability() {
        let path = PathBuf::from("a.rb");
        let diagnostics = vec![
            LintDiagnostic::new(RuleId::new("r1"), Severity::Error, "e1", SourceRange::new(0, 1)),
            LintDiagnostic::new(RuleId::new("r2"), Severity::Error, "e2", SourceRange::new(1, 2)),
            LintDiagnostic::new(RuleId::new("r3"), Severity::Warning, "w1", SourceRange::new(2, 3))
                .with_correction(Correction::new(vec![Edit::remove(SourceRange::new(2, 3))])),
            LintDiagnostic::new(RuleId::new("r4"), Severity::Hint, "h1", SourceRange::new(3, 4)),
        ];
        let reports = [FileReport::new(&path, "abcd", &diagnostics)];

        let parsed = render(&reports);
        assert_eq!(parsed["summary"]["total"], 4);
        assert_eq!(parsed["summary"]["errors"], 2);
        assert_eq!(parsed["summary"]["warnings"], 1);
        assert_eq!(parsed["summary"]["hints"], 1);
        assert_eq!(parsed["summary"]["correctable"], 1);
    }

    #[test]
    fn empty_reports_serialize_cleanly() {
        let path = PathBuf::from("clean.rb");
        let reports = [FileReport::new(&path, "", &[])];

        let parsed = render(&reports);
        assert_eq!(parsed["summary"]["total"], 0);
        assert_eq!(parsed["diagnostics"].as_array().unwrap().len(), 0);
    }
}
