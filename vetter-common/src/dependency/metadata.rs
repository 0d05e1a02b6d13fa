use serde::{Deserialize, Serialize};

use crate::model::ModuleVersionSelector;

fn default_transitive() -> bool {
    true
}

/// The request context for one declared dependency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencyMetadata {
    requested: ModuleVersionSelector,
    #[serde(default)]
    changing: bool,
    #[serde(default = "default_transitive")]
    transitive: bool,
    #[serde(default)]
    force: bool,
    #[serde(default)]
    configurations: Vec<String>,
}

impl DependencyMetadata {
    pub fn new(requested: ModuleVersionSelector) -> Self {
        Self {
            requested,
            changing: false,
            transitive: true,
            force: false,
            configurations: Vec::new(),
        }
    }

    pub fn with_changing(mut self, changing: bool) -> Self {
        self.changing = changing;
        self
    }

    pub fn with_transitive(mut self, transitive: bool) -> Self {
        self.transitive = transitive;
        self
    }

    pub fn with_force(mut self, force: bool) -> Self {
        self.force = force;
        self
    }

    pub fn with_configurations<I, S>(mut self, configurations: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.configurations = configurations.into_iter().map(Into::into).collect();
        self
    }

    pub fn requested(&self) -> &ModuleVersionSelector {
        &self.requested
    }

    pub fn is_changing(&self) -> bool {
        self.changing
    }

    pub fn is_transitive(&self) -> bool {
        self.transitive
    }

    pub fn is_force(&self) -> bool {
        self.force
    }

    pub fn configurations(&self) -> &[String] {
        &self.configurations
    }
}
