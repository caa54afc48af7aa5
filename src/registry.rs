//! Rule registry for managing lint rules.
//!
//! The [`RuleRegistry`] stores all available lint rules, keeps their
//! registration order stable (diagnostics come out in a deterministic order),
//! and lets the host enable or disable each rule independently.

use crate::rule::{LintRule, RuleId};
use crate::rules::{
    AddPreviewForViewComponentRule, NoDoEndBlockWithCapybaraMatcherRule,
    NoSleepInFeatureSpecsRule, UseServiceResultFactoryMethodsRule,
};

struct RegisteredRule {
    rule: Box<dyn LintRule>,
    enabled: bool,
}

/// Registry of all available lint rules.
pub struct RuleRegistry {
    rules: Vec<RegisteredRule>,
}

impl RuleRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Create a registry with all built-in rules enabled.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(AddPreviewForViewComponentRule));
        registry.register(Box::new(NoDoEndBlockWithCapybaraMatcherRule));
        registry.register(Box::new(NoSleepInFeatureSpecsRule));
        registry.register(Box::new(UseServiceResultFactoryMethodsRule));
        registry
    }

    /// Register a lint rule, enabled.
    pub fn register(&mut self, rule: Box<dyn LintRule>) {
        self.rules.push(RegisteredRule {
            rule,
            enabled: true,
        });
    }

    /// Get a rule by ID.
    pub fn get(&self, id: &RuleId) -> Option<&dyn LintRule> {
        self.rules
            .iter()
            .find(|entry| entry.rule.id() == *id)
            .map(|entry| entry.rule.as_ref())
    }

    /// Enable or disable a rule. Returns `false` when the ID is unknown.
    pub fn set_enabled(&mut self, id: &RuleId, enabled: bool) -> bool {
        match self.rules.iter_mut().find(|entry| entry.rule.id() == *id) {
            Some(entry) => {
                entry.enabled = enabled;
                true
            }
            None => false,
        }
    }

    /// Whether a rule is present and enabled.
    pub fn is_enabled(&self, id: &RuleId) -> bool {
        self.rules
            .iter()
            .any(|entry| entry.enabled && entry.rule.id() == *id)
    }

    /// Iterate over all rules in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &dyn LintRule> {
        self.rules.iter().map(|entry| entry.rule.as_ref())
    }

    /// Iterate over the enabled rules in registration order.
    pub fn enabled_rules(&self) -> impl Iterator<Item = &dyn LintRule> {
        self.rules
            .iter()
            .filter(|entry| entry.enabled)
            .map(|entry| entry.rule.as_ref())
    }

    /// Get the number of registered rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl Default for RuleRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::Node;
    use crate::context::RuleContext;
    use crate::diagnostic::LintDiagnostic;
    use crate::rule::Severity;

    struct MockRule {
        id: RuleId,
    }

    impl LintRule for MockRule {
        fn id(&self) -> RuleId {
            self.id.clone()
        }
        fn name(&self) -> &str {
            "Mock Rule"
        }
        fn description(&self) -> &str {
            "A mock rule for testing"
        }
        fn default_severity(&self) -> Severity {
            Severity::Warning
        }
        fn check_node(&self, _node: &Node, _ctx: &RuleContext) -> Vec<LintDiagnostic> {
            vec![]
        }
    }

    #[test]
    fn registry_new_is_empty() {
        let registry = RuleRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
    }

    #[test]
    fn registry_register_and_get() {
        let mut registry = RuleRegistry::new();
        registry.register(Box::new(MockRule {
            id: RuleId::new("mock"),
        }));

        assert!(!registry.is_empty());
        assert!(registry.get(&RuleId::new("mock")).is_some());
        assert!(registry.get(&RuleId::new("unknown")).is_none());
    }

    #[test]
    fn registry_preserves_registration_order() {
        let mut registry = RuleRegistry::new();
        registry.register(Box::new(MockRule {
            id: RuleId::new("rule1"),
        }));
        registry.register(Box::new(MockRule {
            id: RuleId::new("rule2"),
        }));

        let ids: Vec<_> = registry.iter().map(|r| r.id().0).collect();
        assert_eq!(ids, vec!["rule1", "rule2"]);
    }

    #[test]
    fn disabling_a_rule_removes_it_from_enabled_iteration() {
        let mut registry = RuleRegistry::new();
        registry.register(Box::new(MockRule {
            id: RuleId::new("rule1"),
        }));
        registry.register(Box::new(MockRule {
            id: RuleId::new("rule2"),
        }));

        assert!(registry.set_enabled(&RuleId::new("rule1"), false));
        assert!(!registry.is_enabled(&RuleId::new("rule1")));
        assert!(registry.is_enabled(&RuleId::new("rule2")));

        let enabled: Vec<_> = registry.enabled_rules().map(|r| r.id().0).collect();
        assert_eq!(enabled, vec!["rule2"]);

        // Still registered and retrievable.
        assert!(registry.get(&RuleId::new("rule1")).is_some());
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn set_enabled_on_unknown_rule_reports_failure() {
        let mut registry = RuleRegistry::new();
        assert!(!registry.set_enabled(&RuleId::new("ghost"), false));
    }

    #[test]
    fn registry_with_builtins_has_all_four_rules() {
        let registry = RuleRegistry::with_builtins();
        assert_eq!(registry.len(), 4);
        assert!(registry
            .get(&RuleId::new("add-preview-for-view-component"))
            .is_some());
        assert!(registry
            .get(&RuleId::new("no-do-end-block-with-capybara-matcher"))
            .is_some());
        assert!(registry
            .get(&RuleId::new("no-sleep-in-feature-specs"))
            .is_some());
        assert!(registry
            .get(&RuleId::new("use-service-result-factory-methods"))
            .is_some());
    }
}
