//! Automatic correction application.
//!
//! Rules stage corrections as sets of text [`Edit`]s against the original
//! source buffer; nothing rewrites the buffer until all rules have run. The
//! [`FixEngine`] then commits the staged corrections in one pass per file.
//!
//! A [`Correction`] is all-or-nothing: if any of its edits is out of bounds,
//! overlaps a sibling edit, or overlaps an edit from an already-accepted
//! correction, the whole correction is dropped (logged, never partially
//! applied) and analysis output is otherwise unaffected.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use tracing::warn;

use crate::diagnostic::LintDiagnostic;
use crate::error::{CoplintError, Result};
use crate::span::SourceRange;

/// A single text replacement against the original buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edit {
    /// The range to replace.
    pub range: SourceRange,
    /// Replacement text; empty means deletion.
    pub replacement: String,
}

impl Edit {
    /// Replace the range with the given text.
    pub fn replace(range: SourceRange, replacement: impl Into<String>) -> Self {
        Self {
            range,
            replacement: replacement.into(),
        }
    }

    /// Delete the range.
    pub fn remove(range: SourceRange) -> Self {
        Self {
            range,
            replacement: String::new(),
        }
    }
}

/// An ordered set of disjoint edits produced by one offense.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Correction {
    edits: Vec<Edit>,
}

impl Correction {
    /// Create a correction from its edits.
    pub fn new(edits: Vec<Edit>) -> Self {
        Self { edits }
    }

    /// The staged edits.
    pub fn edits(&self) -> &[Edit] {
        &self.edits
    }
}

/// Result of committing staged corrections to a buffer.
#[derive(Debug, Default)]
pub struct FixOutcome {
    /// The corrected source text.
    pub output: String,
    /// Number of corrections applied.
    pub applied: usize,
    /// Number of corrections dropped as conflicting or out of bounds.
    pub dropped: usize,
}

/// Engine for committing staged corrections.
pub struct FixEngine;

impl FixEngine {
    /// Create a new fix engine.
    pub fn new() -> Self {
        Self
    }

    /// Pull the staged corrections out of a diagnostic list, in order.
    pub fn collect(diagnostics: &[LintDiagnostic]) -> Vec<Correction> {
        diagnostics
            .iter()
            .filter_map(|d| d.correction.clone())
            .collect()
    }

    /// Commit corrections against an in-memory buffer.
    ///
    /// Corrections are validated in order; a correction that would collide
    /// with an earlier-accepted one is dropped whole. Accepted edits are
    /// applied back-to-front so earlier offsets stay valid.
    pub fn apply(&self, source: &str, corrections: &[Correction]) -> FixOutcome {
        let mut outcome = FixOutcome::default();
        let mut accepted: Vec<&Edit> = Vec::new();

        for correction in corrections {
            if self.admissible(source, correction, &accepted) {
                accepted.extend(correction.edits());
                outcome.applied += 1;
            } else {
                outcome.dropped += 1;
            }
        }

        accepted.sort_by(|a, b| b.range.start.cmp(&a.range.start));

        let mut output = source.to_string();
        for edit in &accepted {
            output.replace_range(edit.range.start..edit.range.end, &edit.replacement);
        }
        outcome.output = output;
        outcome
    }

    /// Commit corrections to a file on disk.
    ///
    /// Reads the original buffer, applies the corrections, and writes the
    /// result back only when something was applied.
    pub fn apply_to_file(&self, path: &Path, corrections: &[Correction]) -> Result<FixOutcome> {
        let source = std::fs::read_to_string(path).map_err(|source| CoplintError::ReadFailed {
            path: path.to_path_buf(),
            source,
        })?;

        let outcome = self.apply(&source, corrections);

        if outcome.applied > 0 {
            std::fs::write(path, &outcome.output).map_err(|source| CoplintError::WriteFailed {
                path: path.to_path_buf(),
                source,
            })?;
        }

        Ok(outcome)
    }

    /// Commit corrections across several files at once.
    ///
    /// Corrections are grouped by file; a file that fails to read or write is
    /// reported and does not block the others.
    pub fn apply_to_files(
        &self,
        corrections: &[(PathBuf, Correction)],
    ) -> HashMap<PathBuf, Result<FixOutcome>> {
        let mut by_file: HashMap<PathBuf, Vec<Correction>> = HashMap::new();
        for (path, correction) in corrections {
            by_file
                .entry(path.clone())
                .or_default()
                .push(correction.clone());
        }

        by_file
            .into_iter()
            .map(|(path, corrections)| {
                let outcome = self.apply_to_file(&path, &corrections);
                (path, outcome)
            })
            .collect()
    }

    fn admissible(&self, source: &str, correction: &Correction, accepted: &[&Edit]) -> bool {
        for (i, edit) in correction.edits().iter().enumerate() {
            // `get` rejects both out-of-bounds offsets and offsets that fall
            // off a character boundary.
            if source.get(edit.range.start..edit.range.end).is_none() {
                warn!(
                    start = edit.range.start,
                    end = edit.range.end,
                    buffer_len = source.len(),
                    "dropping correction with out-of-bounds edit"
                );
                return false;
            }

            for sibling in &correction.edits()[..i] {
                if edit.range.overlaps(sibling.range) {
                    warn!(
                        start = edit.range.start,
                        end = edit.range.end,
                        "dropping correction with internally overlapping edits"
                    );
                    return false;
                }
            }

            for prior in accepted {
                if edit.range.overlaps(prior.range) {
                    warn!(
                        start = edit.range.start,
                        end = edit.range.end,
                        "dropping correction overlapping an earlier one"
                    );
                    return false;
                }
            }
        }
        true
    }
}

impl Default for FixEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rule::{RuleId, Severity};

    fn r(start: usize, end: usize) -> SourceRange {
        SourceRange::new(start, end)
    }

    #[test]
    fn applies_a_replace_and_remove_pair() {
        let source = "ServiceResult.new(success: true)";
        let correction = Correction::new(vec![
            Edit::replace(r(14, 17), "success"),
            Edit::remove(r(17, 32)),
        ]);

        let outcome = FixEngine::new().apply(source, &[correction]);

        assert_eq!(outcome.output, "ServiceResult.success");
        assert_eq!(outcome.applied, 1);
        assert_eq!(outcome.dropped, 0);
    }

    #[test]
    fn applies_multiple_corrections_back_to_front() {
        let source = "aaa bbb ccc";
        let corrections = vec![
            Correction::new(vec![Edit::replace(r(0, 3), "AAA")]),
            Correction::new(vec![Edit::replace(r(8, 11), "CCC")]),
        ];

        let outcome = FixEngine::new().apply(source, &corrections);

        assert_eq!(outcome.output, "AAA bbb CCC");
        assert_eq!(outcome.applied, 2);
    }

    #[test]
    fn drops_the_later_overlapping_correction() {
        let source = "sleep 20";
        let corrections = vec![
            Correction::new(vec![Edit::replace(r(0, 8), "sleep 1")]),
            Correction::new(vec![Edit::replace(r(6, 8), "0.5")]),
        ];

        let outcome = FixEngine::new().apply(source, &corrections);

        assert_eq!(outcome.output, "sleep 1");
        assert_eq!(outcome.applied, 1);
        assert_eq!(outcome.dropped, 1);
    }

    #[test]
    fn drops_out_of_bounds_corrections_without_corrupting() {
        let source = "short";
        let corrections = vec![
            Correction::new(vec![Edit::replace(r(0, 99), "x")]),
            Correction::new(vec![Edit::replace(r(0, 5), "exact")]),
        ];

        let outcome = FixEngine::new().apply(source, &corrections);

        assert_eq!(outcome.output, "exact");
        assert_eq!(outcome.applied, 1);
        assert_eq!(outcome.dropped, 1);
    }

    #[test]
    fn drops_internally_overlapping_corrections_whole() {
        let source = "aaa bbb";
        let correction = Correction::new(vec![
            Edit::replace(r(0, 5), "x"),
            Edit::replace(r(4, 7), "y"),
        ]);

        let outcome = FixEngine::new().apply(source, &[correction]);

        // All-or-nothing: neither edit lands.
        assert_eq!(outcome.output, "aaa bbb");
        assert_eq!(outcome.applied, 0);
        assert_eq!(outcome.dropped, 1);
    }

    #[test]
    fn collects_staged_corrections_from_diagnostics() {
        let with_fix = LintDiagnostic::new(
            RuleId::new("fixable"),
            Severity::Warning,
            "msg",
            r(0, 3),
        )
        .with_correction(Correction::new(vec![Edit::replace(r(0, 3), "x")]));
        let without_fix =
            LintDiagnostic::new(RuleId::new("plain"), Severity::Warning, "msg", r(4, 7));

        let corrections = FixEngine::collect(&[with_fix, without_fix]);

        assert_eq!(corrections.len(), 1);
    }

    #[test]
    fn apply_to_file_round_trips() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("service.rb");
        std::fs::write(&path, "ServiceResult.new\n").unwrap();

        let correction = Correction::new(vec![Edit::replace(r(14, 17), "failure")]);
        let outcome = FixEngine::new().apply_to_file(&path, &[correction]).unwrap();

        assert_eq!(outcome.applied, 1);
        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "ServiceResult.failure\n");
    }

    #[test]
    fn apply_to_file_reports_missing_file() {
        let correction = Correction::new(vec![Edit::replace(r(0, 1), "x")]);
        let result =
            FixEngine::new().apply_to_file(Path::new("/nonexistent/service.rb"), &[correction]);

        assert!(matches!(result, Err(CoplintError::ReadFailed { .. })));
    }

    #[test]
    fn apply_to_files_groups_corrections_and_isolates_failures() {
        let dir = tempfile::TempDir::new().unwrap();
        let implicit = dir.path().join("a_service.rb");
        let explicit = dir.path().join("b_service.rb");
        std::fs::write(&implicit, "ServiceResult.new\n").unwrap();
        std::fs::write(&explicit, "ServiceResult.new(success: true)\n").unwrap();
        let missing = dir.path().join("gone.rb");

        let corrections = vec![
            (
                implicit.clone(),
                Correction::new(vec![Edit::replace(r(14, 17), "failure")]),
            ),
            (
                explicit.clone(),
                Correction::new(vec![
                    Edit::replace(r(14, 17), "success"),
                    Edit::remove(r(17, 32)),
                ]),
            ),
            (
                missing.clone(),
                Correction::new(vec![Edit::replace(r(0, 1), "x")]),
            ),
        ];

        let outcomes = FixEngine::new().apply_to_files(&corrections);

        assert_eq!(outcomes.len(), 3);
        assert_eq!(outcomes[&implicit].as_ref().unwrap().applied, 1);
        assert_eq!(outcomes[&explicit].as_ref().unwrap().applied, 1);
        assert!(matches!(
            outcomes[&missing],
            Err(CoplintError::ReadFailed { .. })
        ));
        assert_eq!(
            std::fs::read_to_string(&implicit).unwrap(),
            "ServiceResult.failure\n"
        );
        assert_eq!(
            std::fs::read_to_string(&explicit).unwrap(),
            "ServiceResult.success\n"
        );
    }

    #[test]
    fn untouched_file_is_not_rewritten() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("service.rb");
        std::fs::write(&path, "ok\n").unwrap();

        let outcome = FixEngine::new().apply_to_file(&path, &[]).unwrap();

        assert_eq!(outcome.applied, 0);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "ok\n");
    }
}
