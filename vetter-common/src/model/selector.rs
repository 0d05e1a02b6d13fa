use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::constraint::VersionConstraint;
use super::identifier::{split_coordinates, ModuleComponentIdentifier, ModuleIdentifier};
use crate::error::VetterError;

/// A dependency as declared, before its version text is interpreted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ModuleVersionSelector {
    pub group: String,
    pub name: String,
    pub version: VersionConstraint,
}

impl ModuleVersionSelector {
    pub fn new(
        group: impl Into<String>,
        name: impl Into<String>,
        version: VersionConstraint,
    ) -> Self {
        Self {
            group: group.into(),
            name: name.into(),
            version,
        }
    }
}

impl FromStr for ModuleVersionSelector {
    type Err = VetterError;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let [group, name, version] = split_coordinates("module version selector", s)?;
        Ok(Self::new(group, name, version.parse()?))
    }
}

impl fmt::Display for ModuleVersionSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.group, self.name, self.version)
    }
}

/// The requested side of a component selection.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ModuleComponentSelector {
    group: String,
    module: String,
    version: VersionConstraint,
}

impl ModuleComponentSelector {
    pub fn new_selector(requested: &ModuleVersionSelector) -> Self {
        Self {
            group: requested.group.clone(),
            module: requested.name.clone(),
            version: requested.version.clone(),
        }
    }

    pub fn group(&self) -> &str {
        &self.group
    }

    pub fn module(&self) -> &str {
        &self.module
    }

    pub fn version(&self) -> &VersionConstraint {
        &self.version
    }

    pub fn module_identifier(&self) -> ModuleIdentifier {
        ModuleIdentifier::new(self.group.clone(), self.module.clone())
    }

    /// True when `candidate` is a version of the requested module.
    pub fn matches_module(&self, candidate: &ModuleComponentIdentifier) -> bool {
        self.group == candidate.group && self.module == candidate.module
    }
}

impl FromStr for ModuleComponentSelector {
    type Err = VetterError;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let requested: ModuleVersionSelector = s.parse()?;
        Ok(Self::new_selector(&requested))
    }
}

impl fmt::Display for ModuleComponentSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.group, self.module, self.version)
    }
}
