//! Lint diagnostic messages.
//!
//! This module provides the [`LintDiagnostic`] type for representing
//! violations found during analysis. A diagnostic pins down the offending
//! source range and, when the rule can rewrite safely, carries a staged
//! [`Correction`](crate::fix::Correction) for the fix engine to commit.

use crate::fix::Correction;
use crate::rule::{RuleId, Severity};
use crate::span::SourceRange;

/// A diagnostic produced by a lint rule.
#[derive(Debug, Clone)]
pub struct LintDiagnostic {
    /// The rule that produced this diagnostic.
    pub rule_id: RuleId,
    /// Severity of this diagnostic.
    pub severity: Severity,
    /// Human-readable message.
    pub message: String,
    /// The offending source range.
    pub range: SourceRange,
    /// Staged correction, for rules that support autocorrection.
    pub correction: Option<Correction>,
}

impl LintDiagnostic {
    /// Create a new diagnostic.
    pub fn new(
        rule_id: RuleId,
        severity: Severity,
        message: impl Into<String>,
        range: SourceRange,
    ) -> Self {
        Self {
            rule_id,
            severity,
            message: message.into(),
            range,
            correction: None,
        }
    }

    /// Attach a staged correction.
    pub fn with_correction(mut self, correction: Correction) -> Self {
        self.correction = Some(correction);
        self
    }

    /// Whether this diagnostic carries a correction.
    pub fn has_correction(&self) -> bool {
        self.correction.is_some()
    }
}
