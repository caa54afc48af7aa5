//! Tree-walking lint driver.
//!
//! The [`Linter`] owns a [`RuleRegistry`] and runs one file at a time: it
//! evaluates each enabled rule's `applies` pre-filter once, then feeds every
//! node of the tree to every applicable rule in pre-order. All mutable state
//! lives in the per-call locals, so one linter can serve independent files
//! from separate threads by shared reference.

use tracing::debug;

use crate::ast::Node;
use crate::context::RuleContext;
use crate::diagnostic::LintDiagnostic;
use crate::fix::{FixEngine, FixOutcome};
use crate::registry::RuleRegistry;
use crate::rule::LintRule;

/// Runs registered rules over syntax trees.
pub struct Linter {
    registry: RuleRegistry,
}

impl Linter {
    /// Create a linter over the given registry.
    pub fn new(registry: RuleRegistry) -> Self {
        Self { registry }
    }

    /// Create a linter with all built-in rules.
    pub fn with_builtins() -> Self {
        Self::new(RuleRegistry::with_builtins())
    }

    /// The underlying registry.
    pub fn registry(&self) -> &RuleRegistry {
        &self.registry
    }

    /// Mutable access to the registry, e.g. to disable rules.
    pub fn registry_mut(&mut self) -> &mut RuleRegistry {
        &mut self.registry
    }

    /// Lint one file's tree, returning diagnostics in visit order.
    pub fn lint(&self, root: &Node, ctx: &RuleContext) -> Vec<LintDiagnostic> {
        let mut active: Vec<&dyn LintRule> = Vec::new();
        for rule in self.registry.enabled_rules() {
            if rule.applies(ctx) {
                active.push(rule);
            } else {
                debug!(rule = %rule.id(), path = %ctx.path().display(), "rule does not apply");
            }
        }

        let mut diagnostics = Vec::new();
        walk(root, &mut |node| {
            for rule in &active {
                diagnostics.extend(rule.check_node(node, ctx));
            }
        });
        diagnostics
    }

    /// Lint one file and commit any staged corrections against its buffer.
    ///
    /// The corrections are applied to the original source in a single pass;
    /// the returned outcome carries the corrected text.
    pub fn lint_and_correct(
        &self,
        root: &Node,
        ctx: &RuleContext,
    ) -> (Vec<LintDiagnostic>, FixOutcome) {
        let diagnostics = self.lint(root, ctx);
        let corrections = FixEngine::collect(&diagnostics);
        let outcome = FixEngine::new().apply(ctx.source(), &corrections);
        (diagnostics, outcome)
    }
}

/// Pre-order walk: the node itself, its receiver subtree, then its children.
fn walk<'a>(node: &'a Node, visit: &mut impl FnMut(&'a Node)) {
    visit(node);
    if let Some(receiver) = node.receiver() {
        walk(receiver, visit);
    }
    for child in node.children() {
        walk(child, visit);
    }
}
