//! `ServiceResult.new` versus its factory methods.
//!
//! `ServiceResult.new(success: true, ...)` spells out a flag the
//! `ServiceResult.success(...)` factory already implies, and `ServiceResult.new`
//! with no `success:` argument silently builds a failure. Both forms are
//! flagged and rewritten to the matching factory call.
//!
//! A `success:` value that is not a literal `true` or `false`, or one that may
//! arrive through `**kwargs` or argument forwarding, cannot be resolved
//! statically and is left alone.

use crate::ast::{Node, NodeKind};
use crate::context::RuleContext;
use crate::diagnostic::LintDiagnostic;
use crate::fix::{Correction, Edit};
use crate::pattern::Pattern;
use crate::range::pair_removal_range;
use crate::rule::{LintRule, RuleId, Severity};

const MSG_IMPLICIT: &str = "Use ServiceResult.failure instead of ServiceResult.new.";

/// Rewrites `ServiceResult.new` calls to the factory methods.
pub struct UseServiceResultFactoryMethodsRule;

/// A receiverless `ServiceResult` constant receiving `new`.
fn constructor_pattern() -> Pattern {
    Pattern::all(vec![
        Pattern::kind(NodeKind::Send),
        Pattern::name("new"),
        Pattern::receiver(Pattern::all(vec![
            Pattern::kind(NodeKind::Const),
            Pattern::name("ServiceResult"),
            Pattern::child_count(0),
        ])),
    ])
}

/// A `success: true` or `success: false` pair, capturing pair and value.
fn explicit_pair_pattern() -> Pattern {
    Pattern::has_child(Pattern::capture(
        "pair",
        Pattern::all(vec![
            Pattern::kind(NodeKind::Pair),
            Pattern::child_count(2),
            Pattern::nth_child(
                0,
                Pattern::all(vec![
                    Pattern::kind(NodeKind::Sym),
                    Pattern::name("success"),
                ]),
            ),
            Pattern::nth_child(
                1,
                Pattern::capture(
                    "value",
                    Pattern::any_of(vec![
                        Pattern::kind(NodeKind::True),
                        Pattern::kind(NodeKind::False),
                    ]),
                ),
            ),
        ]),
    ))
}

/// Any pair keyed `success`, literal value or not, shorthand included.
fn any_success_pair_pattern() -> Pattern {
    Pattern::has_child(Pattern::all(vec![
        Pattern::kind(NodeKind::Pair),
        Pattern::nth_child(
            0,
            Pattern::all(vec![
                Pattern::kind(NodeKind::Sym),
                Pattern::name("success"),
            ]),
        ),
    ]))
}

/// Whether additional keyword arguments can arrive at runtime.
fn may_receive_forwarded_kwargs(call: &Node, hash: Option<&Node>) -> bool {
    call.children()
        .iter()
        .any(|child| child.is(NodeKind::ForwardedArgs))
        || hash.is_some_and(|h| h.children().iter().any(|c| c.is(NodeKind::Kwsplat)))
}

impl UseServiceResultFactoryMethodsRule {
    fn explicit_offense(
        &self,
        call: &Node,
        hash: &Node,
        pair: &Node,
        value: &Node,
    ) -> LintDiagnostic {
        let (factory, literal) = if value.is(NodeKind::True) {
            ("success", "true")
        } else {
            ("failure", "false")
        };
        let message = format!(
            "Use ServiceResult.{factory}(...) instead of ServiceResult.new(success: {literal}, ...)."
        );

        let mut diagnostic =
            LintDiagnostic::new(self.id(), self.default_severity(), message, pair.range());

        let pair_index = hash
            .children()
            .iter()
            .position(|child| std::ptr::eq(child, pair));
        let correction = call.loc().selector.zip(pair_index).and_then(|(selector, index)| {
            let removal = pair_removal_range(call, hash, index)?;
            Some(Correction::new(vec![
                Edit::replace(selector, factory),
                Edit::remove(removal),
            ]))
        });
        if let Some(correction) = correction {
            diagnostic = diagnostic.with_correction(correction);
        }
        diagnostic
    }

    fn implicit_offense(&self, call: &Node) -> LintDiagnostic {
        let range = call.loc().selector.unwrap_or_else(|| call.range());
        let mut diagnostic =
            LintDiagnostic::new(self.id(), self.default_severity(), MSG_IMPLICIT, range);
        if let Some(selector) = call.loc().selector {
            diagnostic =
                diagnostic.with_correction(Correction::new(vec![Edit::replace(selector, "failure")]));
        }
        diagnostic
    }
}

impl LintRule for UseServiceResultFactoryMethodsRule {
    fn id(&self) -> RuleId {
        RuleId::new("use-service-result-factory-methods")
    }

    fn name(&self) -> &str {
        "Use ServiceResult Factory Methods"
    }

    fn description(&self) -> &str {
        "Prefers ServiceResult.success/failure over ServiceResult.new"
    }

    fn default_severity(&self) -> Severity {
        Severity::Warning
    }

    fn supports_autocorrect(&self) -> bool {
        true
    }

    fn check_node(&self, node: &Node, _ctx: &RuleContext) -> Vec<LintDiagnostic> {
        if constructor_pattern().matches(node).is_none() {
            return vec![];
        }

        let hash = node.children().iter().find(|child| child.is(NodeKind::Hash));

        if let Some(hash) = hash {
            if let Some(captures) = explicit_pair_pattern().matches(hash) {
                // Bound by the pattern's captures on every successful match.
                let (Some(pair), Some(value)) = (captures.get("pair"), captures.get("value"))
                else {
                    return vec![];
                };
                return vec![self.explicit_offense(node, hash, pair, value)];
            }
            if any_success_pair_pattern().matches(hash).is_some() {
                // Present but not a literal; the intent is already explicit.
                return vec![];
            }
        }

        if may_receive_forwarded_kwargs(node, hash) {
            return vec![];
        }

        vec![self.implicit_offense(node)]
    }
}
