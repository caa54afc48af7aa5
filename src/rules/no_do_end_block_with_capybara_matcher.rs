//! Misassociated `do .. end` blocks on Capybara matcher expectations.
//!
//! A `do .. end` block written after `expect(X).to have_selector(...)` binds
//! to `to`, not to the matcher, because `do .. end` has lower precedence than
//! the method call. Capybara matchers never see the block, so the assertion
//! silently tests less than intended (teamcapybara/capybara#2616). Brace
//! blocks bind to the matcher call and produce a different tree shape, so
//! they are never flagged.

use std::sync::LazyLock;

use crate::ast::{Node, NodeKind};
use crate::context::RuleContext;
use crate::diagnostic::LintDiagnostic;
use crate::pattern::Pattern;
use crate::range::selector_through_end;
use crate::rule::{LintRule, RuleId, Severity};

const MATCHER_STEMS: [&str; 15] = [
    "selector",
    "css",
    "xpath",
    "text",
    "title",
    "current_path",
    "link",
    "button",
    "field",
    "checked_field",
    "unchecked_field",
    "select",
    "table",
    "sibling",
    "ancestor",
];

/// Positive and negated variants of every Capybara matcher stem.
static CAPYBARA_MATCHERS: LazyLock<Vec<String>> = LazyLock::new(|| {
    MATCHER_STEMS
        .iter()
        .flat_map(|stem| [format!("have_{}", stem), format!("have_no_{}", stem)])
        .collect()
});

/// Flags `do .. end` blocks that bind to `to` instead of a Capybara matcher.
pub struct NoDoEndBlockWithCapybaraMatcherRule;

/// `expect(...).to matcher(...)` with the matcher call captured.
fn expect_to_pattern() -> Pattern {
    Pattern::all(vec![
        Pattern::kind(NodeKind::Send),
        Pattern::name("to"),
        Pattern::receiver(Pattern::all(vec![
            Pattern::kind(NodeKind::Send),
            Pattern::name("expect"),
            Pattern::no_receiver(),
        ])),
        Pattern::nth_child(
            0,
            Pattern::capture(
                "matcher",
                Pattern::all(vec![
                    Pattern::kind(NodeKind::Send),
                    Pattern::no_receiver(),
                ]),
            ),
        ),
    ])
}

impl LintRule for NoDoEndBlockWithCapybaraMatcherRule {
    fn id(&self) -> RuleId {
        RuleId::new("no-do-end-block-with-capybara-matcher")
    }

    fn name(&self) -> &str {
        "No Do-End Block With Capybara Matcher"
    }

    fn description(&self) -> &str {
        "Flags do..end blocks that bind to `to` instead of the Capybara matcher"
    }

    fn default_severity(&self) -> Severity {
        Severity::Warning
    }

    fn check_node(&self, node: &Node, _ctx: &RuleContext) -> Vec<LintDiagnostic> {
        if !node.is(NodeKind::Block) {
            return vec![];
        }
        let Some(call) = node.children().first() else {
            return vec![];
        };
        let Some(captures) = expect_to_pattern().matches(call) else {
            return vec![];
        };

        let Some(matcher) = captures.get("matcher") else {
            return vec![];
        };
        let Some(matcher_name) = matcher.name() else {
            return vec![];
        };
        if !CAPYBARA_MATCHERS.iter().any(|m| m == matcher_name) {
            return vec![];
        }
        let Some(range) = selector_through_end(matcher, node) else {
            return vec![];
        };

        let message = format!(
            "The `do .. end` block is associated with `to` and not with Capybara matcher `{}`.",
            matcher_name
        );
        vec![LintDiagnostic::new(
            self.id(),
            self.default_severity(),
            message,
            range,
        )]
    }
}
