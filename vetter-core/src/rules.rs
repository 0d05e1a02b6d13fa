// vetter-core/src/rules.rs
use tracing::debug;
use vetter_common::config::SelectionConfig;
use vetter_common::error::Result;
use vetter_common::model::{ModuleComponentIdentifier, ModuleIdentifier};

use crate::rule::{QualifierRule, RuleVerdict, SelectionRule, VersionExclusionRule};
use crate::selection::ComponentSelection;

enum RuleScope {
    All,
    Module(ModuleIdentifier),
}

struct ScopedRule {
    scope: RuleScope,
    rule: Box<dyn SelectionRule>,
}

impl ScopedRule {
    fn applies_to(&self, candidate: &ModuleComponentIdentifier) -> bool {
        match &self.scope {
            RuleScope::All => true,
            RuleScope::Module(id) => id.group == candidate.group && id.name == candidate.module,
        }
    }
}

/// Ordered set of selection rules, applied to each candidate in registration
/// order.
#[derive(Default)]
pub struct ComponentSelectionRules {
    rules: Vec<ScopedRule>,
}

impl ComponentSelectionRules {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the rule set described by a config file: qualifier markers
    /// first, then version rejections in file order.
    pub fn from_config(config: &SelectionConfig) -> Result<Self> {
        let mut rules = Self::new();
        if !config.rejected_qualifiers.is_empty() {
            rules.all_rule(QualifierRule::new(&config.rejected_qualifiers));
        }
        for rejection in &config.rejections {
            let module = rejection.module_identifier()?;
            let rule = VersionExclusionRule::new(
                module.clone(),
                rejection.versions.clone(),
                rejection.reason.clone(),
            );
            rules.push(RuleScope::Module(module), Box::new(rule));
        }
        debug!("Built {} selection rule(s) from config", rules.len());
        Ok(rules)
    }

    fn push(&mut self, scope: RuleScope, rule: Box<dyn SelectionRule>) -> &mut Self {
        self.rules.push(ScopedRule { scope, rule });
        self
    }

    /// Registers a rule that sees every candidate.
    pub fn all<F>(&mut self, rule: F) -> &mut Self
    where
        F: Fn(&ComponentSelection<'_>) -> RuleVerdict + 'static,
    {
        self.push(RuleScope::All, Box::new(rule))
    }

    pub fn all_rule(&mut self, rule: impl SelectionRule + 'static) -> &mut Self {
        self.push(RuleScope::All, Box::new(rule))
    }

    /// Registers a rule that only sees candidates of `module` (`group:name`).
    pub fn with_module<F>(&mut self, module: &str, rule: F) -> Result<&mut Self>
    where
        F: Fn(&ComponentSelection<'_>) -> RuleVerdict + 'static,
    {
        let id: ModuleIdentifier = module.parse()?;
        Ok(self.push(RuleScope::Module(id), Box::new(rule)))
    }

    pub fn with_module_rule(
        &mut self,
        module: &str,
        rule: impl SelectionRule + 'static,
    ) -> Result<&mut Self> {
        let id: ModuleIdentifier = module.parse()?;
        Ok(self.push(RuleScope::Module(id), Box::new(rule)))
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Runs every applicable rule against `selection` and folds the verdicts
    /// into it. Each `Reject` is written through, so the reason of the last
    /// rejecting rule is the one left on the selection. Returns how many rules
    /// rejected.
    pub fn apply(&self, selection: &mut ComponentSelection<'_>) -> usize {
        let mut rejections = 0;
        for scoped in &self.rules {
            if !scoped.applies_to(selection.candidate()) {
                continue;
            }
            match scoped.rule.evaluate(selection) {
                RuleVerdict::NoOpinion => {}
                RuleVerdict::Reject(reason) => {
                    selection.reject(reason);
                    rejections += 1;
                }
            }
        }
        rejections
    }
}

impl std::fmt::Debug for ComponentSelectionRules {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ComponentSelectionRules")
            .field("rules", &self.rules.len())
            .finish()
    }
}
