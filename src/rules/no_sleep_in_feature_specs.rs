//! Long `sleep` calls in feature specs.
//!
//! Relying on `sleep` for synchronization reduces overall performance of the
//! test suite; Capybara `have_*` matchers or rspec-wait's `wait_for` poll
//! instead of pausing. Only sleeps statically bounded to at most one second
//! are tolerated: a missing or non-literal argument cannot be bounded, so it
//! is always flagged.

use crate::ast::{Node, NodeKind};
use crate::context::RuleContext;
use crate::diagnostic::LintDiagnostic;
use crate::pattern::Pattern;
use crate::rule::{LintRule, RuleId, Severity};

const MSG: &str = "Avoid using `sleep` greater than 1 second in feature specs. \
                   It will reduce overall performance of the test suite. \
                   Consider using Capybara `have_*` matchers or rspec-wait \
                   `wait_for` method instead.";

/// Forbids `sleep` longer than one second in feature specs.
pub struct NoSleepInFeatureSpecsRule;

fn sleep_call_pattern() -> Pattern {
    Pattern::all(vec![
        Pattern::kind(NodeKind::Send),
        Pattern::no_receiver(),
        Pattern::name("sleep"),
    ])
}

/// Whether the first argument is a numeric literal between 0 and 1 inclusive.
///
/// The value is recovered from the literal's source text. Underscore
/// separators (`1_000`) are stripped first; radix-prefixed forms (`0x1`,
/// `0b1`) do not parse as decimal and count as unbounded.
fn statically_bounded(args: &[Node], ctx: &RuleContext) -> bool {
    let Some(first) = args.first() else {
        return false;
    };
    if !first.is_numeric_literal() {
        return false;
    }
    ctx.snippet(first.range())
        .map(|text| text.replace('_', ""))
        .and_then(|text| text.parse::<f64>().ok())
        .is_some_and(|seconds| (0.0..=1.0).contains(&seconds))
}

impl LintRule for NoSleepInFeatureSpecsRule {
    fn id(&self) -> RuleId {
        RuleId::new("no-sleep-in-feature-specs")
    }

    fn name(&self) -> &str {
        "No Sleep In Feature Specs"
    }

    fn description(&self) -> &str {
        "Forbids `sleep` calls longer than one second in feature specs"
    }

    fn default_severity(&self) -> Severity {
        Severity::Warning
    }

    fn applies(&self, ctx: &RuleContext) -> bool {
        let path = ctx.path().to_string_lossy();
        path.contains("_spec.rb") && path.contains("features/")
    }

    fn check_node(&self, node: &Node, ctx: &RuleContext) -> Vec<LintDiagnostic> {
        if sleep_call_pattern().matches(node).is_none() {
            return vec![];
        }
        if statically_bounded(node.children(), ctx) {
            return vec![];
        }

        vec![LintDiagnostic::new(
            self.id(),
            self.default_severity(),
            MSG,
            node.range(),
        )]
    }
}
