use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Result, VetterError};
use crate::model::{ModuleIdentifier, VersionConstraint};

const RULES_ENV_VAR: &str = "VETTER_RULES";
const RULES_FILE_NAME: &str = "rules.toml";

/// Rejects versions of one module that fall inside `versions`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionRejection {
    pub module: String,
    pub versions: VersionConstraint,
    #[serde(default)]
    pub reason: Option<String>,
}

impl VersionRejection {
    pub fn module_identifier(&self) -> Result<ModuleIdentifier> {
        self.module.parse()
    }
}

/// Declarative selection rules.
///
/// ```toml
/// rejected_qualifiers = ["rc", "SNAPSHOT"]
///
/// [[reject]]
/// module = "com.example:lib"
/// versions = "[1.0,1.2)"
/// reason = "CVE-2024-0001"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionConfig {
    #[serde(default)]
    pub rejected_qualifiers: Vec<String>,
    #[serde(default, rename = "reject")]
    pub rejections: Vec<VersionRejection>,
}

impl SelectionConfig {
    /// Loads rules from `$VETTER_RULES`, falling back to the user config dir.
    /// A missing file yields an empty rule set.
    pub fn load() -> Result<Self> {
        debug!("Loading selection rule configuration");

        let path = match env::var(RULES_ENV_VAR).ok().filter(|s| !s.is_empty()) {
            Some(p) => PathBuf::from(p),
            None => match Self::default_path() {
                Some(p) => p,
                None => {
                    debug!("No config directory available, using empty rule set");
                    return Ok(Self::default());
                }
            },
        };

        if !path.exists() {
            debug!("Rule file {} not found, using empty rule set", path.display());
            return Ok(Self::default());
        }
        Self::from_path(&path)
    }

    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("vetter").join(RULES_FILE_NAME))
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        debug!("Reading selection rules from {}", path.display());
        let text = fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        debug!(
            "Loaded {} version rejection(s) and {} rejected qualifier(s)",
            config.rejections.len(),
            config.rejected_qualifiers.len()
        );
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        for rejection in &self.rejections {
            rejection.module_identifier().map_err(|e| {
                VetterError::Config(format!("invalid module '{}': {e}", rejection.module))
            })?;
        }
        if self.rejected_qualifiers.iter().any(|q| q.trim().is_empty()) {
            return Err(VetterError::Config(
                "rejected_qualifiers must not contain empty entries".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    const SAMPLE: &str = r#"
rejected_qualifiers = ["rc", "SNAPSHOT"]

[[reject]]
module = "com.example:lib"
versions = "[1.0,1.2)"
reason = "broken release line"

[[reject]]
module = "org.other:util"
versions = "2.+"
"#;

    #[test]
    fn parses_rules() {
        let config = SelectionConfig::from_toml_str(SAMPLE).unwrap();
        assert_eq!(config.rejected_qualifiers, ["rc", "SNAPSHOT"]);
        assert_eq!(config.rejections.len(), 2);
        assert_eq!(
            config.rejections[0].versions,
            VersionConstraint::parse("[1.0,1.2)").unwrap()
        );
        assert_eq!(config.rejections[0].reason.as_deref(), Some("broken release line"));
        assert_eq!(config.rejections[1].reason, None);
    }

    #[test]
    fn loose_versions_in_ranges_load() {
        let config = SelectionConfig::from_toml_str(
            r#"
[[reject]]
module = "org.calendar:dates"
versions = "[2014.01,2015.0.0.RC1)"
"#,
        )
        .unwrap();
        assert_eq!(config.rejections[0].versions.to_string(), "[2014.01,2015.0.0.RC1)");
    }

    #[test]
    fn reads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();
        let config = SelectionConfig::from_path(file.path()).unwrap();
        assert_eq!(config.rejections[1].module, "org.other:util");
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = SelectionConfig::from_path(&dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, VetterError::Io(_)));
    }

    #[test]
    fn invalid_module_is_config_error() {
        let err = SelectionConfig::from_toml_str(
            r#"
[[reject]]
module = "no-group"
versions = "1.0"
"#,
        )
        .unwrap_err();
        assert!(matches!(err, VetterError::Config(_)));
    }

    #[test]
    fn bad_constraint_is_toml_error() {
        let err = SelectionConfig::from_toml_str(
            r#"
[[reject]]
module = "g:m"
versions = "[1.0,"
"#,
        )
        .unwrap_err();
        assert!(matches!(err, VetterError::Toml(_)));
    }
}
