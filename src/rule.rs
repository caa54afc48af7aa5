//! Lint rule definitions.
//!
//! This module provides the core traits and types for defining lint rules:
//!
//! - [`LintRule`] - The trait that all lint rules must implement
//! - [`RuleId`] - Unique identifier for a lint rule
//! - [`Severity`] - Severity level for diagnostics (Hint, Warning, Error)

use crate::ast::Node;
use crate::context::RuleContext;
use crate::diagnostic::LintDiagnostic;

/// Unique identifier for a lint rule.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RuleId(pub String);

impl RuleId {
    /// Create a new rule ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl std::fmt::Display for RuleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Severity level for lint diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// Informational hint, does not affect validity.
    Hint,
    /// Warning that should be addressed.
    Warning,
    /// Error that prevents execution.
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Hint => write!(f, "hint"),
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// A lint rule evaluated against syntax nodes.
///
/// Rules are the primary mechanism for enforcing project conventions. Each
/// rule checks one structural shape and produces diagnostics when it finds
/// violations, with staged corrections where the rewrite is guaranteed to
/// preserve behavior.
pub trait LintRule: Send + Sync {
    /// Unique identifier for this rule.
    fn id(&self) -> RuleId;

    /// Human-readable name of the rule.
    fn name(&self) -> &str;

    /// Description of what this rule checks.
    fn description(&self) -> &str;

    /// Default severity for this rule.
    fn default_severity(&self) -> Severity;

    /// Cheap per-file pre-filter, evaluated once before the tree walk.
    ///
    /// Rules returning `false` are skipped for the whole file.
    fn applies(&self, ctx: &RuleContext) -> bool {
        let _ = ctx;
        true
    }

    /// Inspect one node and return any diagnostics.
    fn check_node(&self, node: &Node, ctx: &RuleContext) -> Vec<LintDiagnostic>;

    /// Whether this rule stages corrections on its diagnostics.
    fn supports_autocorrect(&self) -> bool {
        false
    }
}
