//! Lookbook preview presence check for ViewComponents.
//!
//! Components live under `app/components` and previews are searched under
//! `lookbook/previews`; a component without a preview file gets flagged at
//! its class name.

use std::path::Path;

use crate::ast::{Node, NodeKind};
use crate::context::RuleContext;
use crate::diagnostic::LintDiagnostic;
use crate::rule::{LintRule, RuleId, Severity};

const COMPONENT_PATH: &str = "/app/components/";
const PREVIEW_PATH: &str = "/lookbook/previews/";

/// Requires a Lookbook preview for each ViewComponent class.
pub struct AddPreviewForViewComponentRule;

impl AddPreviewForViewComponentRule {
    fn preview_path(component_path: &str) -> String {
        let swapped = component_path.replacen(COMPONENT_PATH, PREVIEW_PATH, 1);
        match swapped.strip_suffix(".rb") {
            Some(stem) => format!("{}_preview.rb", stem),
            None => swapped,
        }
    }
}

impl LintRule for AddPreviewForViewComponentRule {
    fn id(&self) -> RuleId {
        RuleId::new("add-preview-for-view-component")
    }

    fn name(&self) -> &str {
        "Add Preview For ViewComponent"
    }

    fn description(&self) -> &str {
        "Requires a Lookbook preview file for every ViewComponent"
    }

    fn default_severity(&self) -> Severity {
        Severity::Warning
    }

    fn applies(&self, ctx: &RuleContext) -> bool {
        let path = ctx.path().to_string_lossy();
        path.contains(COMPONENT_PATH) && path.ends_with(".rb")
    }

    fn check_node(&self, node: &Node, ctx: &RuleContext) -> Vec<LintDiagnostic> {
        if !node.is(NodeKind::Class) {
            return vec![];
        }

        let path = ctx.path().to_string_lossy();
        let preview = Self::preview_path(&path);

        // An inaccessible path counts as missing.
        if ctx.fs().exists(Path::new(&preview)) {
            return vec![];
        }

        let range = node.loc().name.unwrap_or_else(|| node.range());
        let message = format!(
            "Missing Lookbook preview for {}. Expected preview to exist at {}.",
            path, preview
        );
        vec![LintDiagnostic::new(
            self.id(),
            self.default_severity(),
            message,
            range,
        )]
    }
}
