//! Coplint - Project-specific lint rules for Rails codebases.
//!
//! Coplint analyzes Ruby syntax trees for project conventions: ViewComponent
//! classes must ship a Lookbook preview, Capybara expectations must bind their
//! `do .. end` blocks to the matcher, feature specs must not `sleep` for more
//! than a second, and `ServiceResult` is built through its factory methods.
//! Offenses that can be rewritten safely carry corrections the fix engine
//! applies in place.
//!
//! # Modules
//!
//! - [`ast`] - Syntax nodes and location metadata
//! - [`context`] - Per-file analysis context and filesystem access
//! - [`diagnostic`] - Lint diagnostics and staged corrections
//! - [`error`] - Error types and result aliases
//! - [`fix`] - Applying corrections to source text and files
//! - [`linter`] - Tree traversal driving the registered rules
//! - [`output`] - Human, JSON, and SARIF formatters
//! - [`pattern`] - Structural pattern matching over nodes
//! - [`range`] - Offense and edit range calculation
//! - [`registry`] - Rule registration and enablement
//! - [`rule`] - The rule trait, identifiers, and severities
//! - [`rules`] - The built-in rules
//! - [`span`] - Byte ranges over source text
//!
//! # Example
//!
//! ```
//! use coplint::ast::{Node, NodeKind};
//! use coplint::context::{OsFilesystem, RuleContext};
//! use coplint::linter::Linter;
//! use coplint::span::SourceRange;
//! use std::path::Path;
//!
//! let source = "sleep 20";
//! let root = Node::new(NodeKind::Send, SourceRange::new(0, 8))
//!     .with_name("sleep")
//!     .with_selector_loc(SourceRange::new(0, 5))
//!     .with_children(vec![Node::new(NodeKind::Int, SourceRange::new(6, 8))]);
//!
//! let fs = OsFilesystem;
//! let ctx = RuleContext::new(Path::new("spec/features/login_spec.rb"), source, &fs);
//! let diagnostics = Linter::with_builtins().lint(&root, &ctx);
//! assert_eq!(diagnostics.len(), 1);
//! ```

pub mod ast;
pub mod context;
pub mod diagnostic;
pub mod error;
pub mod fix;
pub mod linter;
pub mod output;
pub mod pattern;
pub mod range;
pub mod registry;
pub mod rule;
pub mod rules;
pub mod span;

pub use ast::{Node, NodeKind, NodeLoc};
pub use context::{Filesystem, OsFilesystem, RuleContext};
pub use diagnostic::LintDiagnostic;
pub use error::{CoplintError, Result};
pub use fix::{Correction, Edit, FixEngine, FixOutcome};
pub use linter::Linter;
pub use output::{FileReport, LintFormatter, OutputFormat};
pub use pattern::{Captures, Pattern};
pub use registry::RuleRegistry;
pub use rule::{LintRule, RuleId, Severity};
pub use span::SourceRange;
