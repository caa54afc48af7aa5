//! Human-readable output formatter.
//!
//! Formats lint diagnostics for terminal display with optional color support.

use super::{FileReport, LintFormatter};
use crate::rule::Severity;
use std::io::Write;

/// Formats lint output for human consumption.
pub struct HumanFormatter {
    /// Whether to use colors (ANSI escape codes).
    pub use_color: bool,
}

impl HumanFormatter {
    /// Create a new human formatter.
    pub fn new(use_color: bool) -> Self {
        Self { use_color }
    }

    fn severity_prefix(&self, severity: Severity) -> &'static str {
        match severity {
            Severity::Hint => "hint",
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }
}

impl LintFormatter for HumanFormatter {
    fn format<W: Write>(&self, reports: &[FileReport], writer: &mut W) -> std::io::Result<()> {
        for report in reports {
            for diag in report.diagnostics {
                // Header line: error[rule-id]: message
                writeln!(
                    writer,
                    "{}[{}]: {}",
                    self.severity_prefix(diag.severity),
                    diag.rule_id.0,
                    diag.message
                )?;

                // Location line
                let (line, col) = report.line_col(diag.range.start);
                writeln!(writer, "  --> {}:{}:{}", report.path.display(), line, col)?;

                if diag.has_correction() {
                    writeln!(writer, "   = note: a safe correction is available")?;
                }

                writeln!(writer)?;
            }
        }

        // Summary
        let all = reports.iter().flat_map(|r| r.diagnostics.iter());
        let (mut error_count, mut warning_count) = (0, 0);
        for diag in all {
            match diag.severity {
                Severity::Error => error_count += 1,
                Severity::Warning => warning_count += 1,
                Severity::Hint => {}
            }
        }

        if error_count > 0 || warning_count > 0 {
            writeln!(
                writer,
                "Found {} error(s) and {} warning(s)",
                error_count, warning_count
            )?;
        }

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

    fn render(reports: &[FileReport]) -> String {
        let formatter = HumanFormatter::new(false);
        let mut output = Vec::new();
        formatter.format(reports, &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn formats_diagnostic_with_location() {
        let path = PathBuf::from("spec/features/work_package_spec.rb");
        let source = "it 'waits' do\n  sleep 20\nend\n";
        let diagnostics = vec![LintDiagnostic::new(
            RuleId::new("no-sleep-in-feature-specs"),
            Severity::Warning,
            "Avoid using `sleep` greater than 1 second in feature specs.",
            SourceRange::new(16, 24),
        )];
        let reports = [FileReport::new(&path, source, &diagnostics)];

        let output = render(&reports);
        assert!(output.contains("warning[no-sleep-in-feature-specs]"));
        assert!(output.contains("spec/features/work_package_spec.rb:2:3"));
    }

    #[test]
    fn notes_available_corrections() {
        let path = PathBuf::from("app/services/base_service.rb");
        let source = "ServiceResult.new";
        let diagnostics = vec![LintDiagnostic::new(
            RuleId::new("use-service-result-factory-methods"),
            Severity::Warning,
            "Use ServiceResult.failure instead of ServiceResult.new.",
            SourceRange::new(14, 17),
        )
        .with_correction(Correction::new(vec![Edit::replace(
            SourceRange::new(14, 17),
            "failure",
        )]))];
        let reports = [FileReport::new(&path, source, &diagnostics)];

        let output = render(&reports);
        assert!(output.contains("= note: a safe correction is available"));
    }

    #[test]
    fn formats_summary_line_across_files() {
        let path_a = PathBuf::from("a.rb");
        let path_b = PathBuf::from("b.rb");
        let errors = vec![LintDiagnostic::new(
            RuleId::new("r1"),
            Severity::Error,
            "err",
            SourceRange::new(0, 1),
        )];
        let warnings = vec![
            LintDiagnostic::new(RuleId::new("r2"), Severity::Warning, "w1", SourceRange::new(0, 1)),
            LintDiagnostic::new(RuleId::new("r3"), Severity::Warning, "w2", SourceRange::new(1, 2)),
        ];
        let reports = [
            FileReport::new(&path_a, "x", &errors),
            FileReport::new(&path_b, "xy", &warnings),
        ];

        let output = render(&reports);
        assert!(output.contains("Found 1 error(s) and 2 warning(s)"));
    }

    #[test]
    fn no_summary_when_no_issues() {
        let path = PathBuf::from("clean.rb");
        let reports = [FileReport::new(&path, "", &[])];

        assert!(!render(&reports).contains("Found"));
    }
}
