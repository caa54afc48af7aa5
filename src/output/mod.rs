//! Lint output formatters.
//!
//! This module provides formatters for outputting lint diagnostics
//! in different formats (human-readable, JSON, SARIF).

pub mod human;
pub mod json;
pub mod sarif;

use crate::diagnostic::LintDiagnostic;
use std::io::Write;
use std::path::Path;

/// Output format for lint results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Human,
    Json,
    Sarif,
}

impl OutputFormat {
    /// Render reports with this format's formatter, using its defaults
    /// (no color for human output, crate name and version for SARIF).
    pub fn write<W: Write>(&self, reports: &[FileReport], writer: &mut W) -> std::io::Result<()> {
        match self {
            OutputFormat::Human => HumanFormatter::new(false).format(reports, writer),
            OutputFormat::Json => JsonFormatter::new().format(reports, writer),
            OutputFormat::Sarif => {
                SarifFormatter::new(env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
                    .format(reports, writer)
            }
        }
    }
}

/// Diagnostics for one analyzed file, with the source they point into.
///
/// Diagnostics carry byte ranges; the source text is needed to resolve them
/// to the line and column numbers formatters print.
pub struct FileReport<'a> {
    pub path: &'a Path,
    pub source: &'a str,
    pub diagnostics: &'a [LintDiagnostic],
}

impl<'a> FileReport<'a> {
    pub fn new(path: &'a Path, source: &'a str, diagnostics: &'a [LintDiagnostic]) -> Self {
        Self {
            path,
            source,
            diagnostics,
        }
    }

    /// 1-based line and column of a byte offset.
    pub fn line_col(&self, offset: usize) -> (usize, usize) {
        crate::span::line_col(self.source, offset)
    }
}

/// Trait for formatting lint output.
pub trait LintFormatter {
    /// Format per-file reports to the given writer.
    fn format<W: Write>(&self, reports: &[FileReport], writer: &mut W) -> std::io::Result<()>;
}

pub use human::HumanFormatter;
pub use json::JsonFormatter;
pub use sarif::SarifFormatter;
