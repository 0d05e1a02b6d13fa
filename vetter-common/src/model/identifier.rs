use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::version::Version;
use crate::error::{Result, VetterError};

/// Splits `text` on ':' into exactly `N` non-empty parts.
pub(crate) fn split_coordinates<'a, const N: usize>(
    what: &'static str,
    text: &'a str,
) -> Result<[&'a str; N]> {
    let parts: Vec<&str> = text.trim().splitn(N, ':').map(str::trim).collect();
    if parts.len() != N || parts.iter().any(|p| p.is_empty()) {
        return Err(VetterError::ParseError(
            what,
            format!("expected {N} ':'-separated parts in '{text}'"),
        ));
    }
    let mut out = [""; N];
    out.copy_from_slice(&parts);
    Ok(out)
}

/// A module without a version, `group:name`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ModuleIdentifier {
    pub group: String,
    pub name: String,
}

impl ModuleIdentifier {
    pub fn new(group: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            group: group.into(),
            name: name.into(),
        }
    }
}

impl FromStr for ModuleIdentifier {
    type Err = VetterError;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let [group, name] = split_coordinates("module identifier", s)?;
        Ok(Self::new(group, name))
    }
}

impl fmt::Display for ModuleIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.group, self.name)
    }
}

/// Identity of one concrete module version, `group:module:version`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ModuleComponentIdentifier {
    pub group: String,
    pub module: String,
    pub version: String,
}

impl ModuleComponentIdentifier {
    pub fn new(
        group: impl Into<String>,
        module: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            group: group.into(),
            module: module.into(),
            version: version.into(),
        }
    }

    pub fn module_identifier(&self) -> ModuleIdentifier {
        ModuleIdentifier::new(self.group.clone(), self.module.clone())
    }

    pub fn parsed_version(&self) -> Result<Version> {
        Version::parse(&self.version)
    }
}

impl FromStr for ModuleComponentIdentifier {
    type Err = VetterError;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let [group, module, version] = split_coordinates("component identifier", s)?;
        Ok(Self::new(group, module, version))
    }
}

impl fmt::Display for ModuleComponentIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.group, self.module, self.version)
    }
}
