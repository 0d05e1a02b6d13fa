use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{Result, VetterError};

/// Wrapper around semver::Version for module versions.
///
/// Module versions are looser than semver: they may be shorter than three
/// components (`1.5`), carry leading zeros (`2014.01.15`) and free-form
/// qualifiers (`1.5-rc1`, `5.0.0.RC1`, `5.0-rc_1`). Up to three leading
/// numeric components become major/minor/patch, everything after them is
/// the qualifier and lands in the pre-release tag. The original text is kept
/// for display and prefix matching.
#[derive(Debug, Clone)]
pub struct Version {
    raw: String,
    parsed: semver::Version,
}

impl Version {
    pub fn parse(s: &str) -> Result<Self> {
        let raw = s.trim();
        if raw.is_empty() {
            return Err(VetterError::VersionError("empty version string".to_string()));
        }

        let (main, dash_tail) = match raw.split_once('-') {
            Some((m, t)) => (m, Some(t)),
            None => (raw, None),
        };

        let mut numbers: Vec<u64> = Vec::with_capacity(3);
        let mut tail: Vec<&str> = Vec::new();
        for part in main.split('.') {
            if part.is_empty() {
                return Err(VetterError::VersionError(format!(
                    "Failed to parse version '{raw}': empty component"
                )));
            }
            if tail.is_empty() && numbers.len() < 3 && part.bytes().all(|b| b.is_ascii_digit()) {
                let n = part.parse::<u64>().map_err(|e| {
                    VetterError::VersionError(format!("Failed to parse version '{raw}': {e}"))
                })?;
                numbers.push(n);
            } else {
                tail.push(part);
            }
        }
        if numbers.is_empty() {
            return Err(VetterError::VersionError(format!(
                "Failed to parse version '{raw}': no leading numeric component"
            )));
        }
        tail.extend(dash_tail);

        let mut parsed = semver::Version::new(
            numbers[0],
            numbers.get(1).copied().unwrap_or(0),
            numbers.get(2).copied().unwrap_or(0),
        );
        let qualifier = sanitize_qualifier(&tail.join("."));
        if !qualifier.is_empty() {
            parsed.pre = semver::Prerelease::new(&qualifier)?;
        }

        Ok(Version {
            raw: raw.to_string(),
            parsed,
        })
    }

    /// The version exactly as it was written.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn semver(&self) -> &semver::Version {
        &self.parsed
    }

    /// Qualifier such as `rc1` or `SNAPSHOT`, if any.
    pub fn qualifier(&self) -> Option<&str> {
        if self.parsed.pre.is_empty() {
            None
        } else {
            Some(self.parsed.pre.as_str())
        }
    }
}

/// Rewrites free-form qualifier text into valid semver pre-release
/// identifiers: separators other than '-' become '.', empty identifiers are
/// dropped and numeric identifiers lose their leading zeros.
fn sanitize_qualifier(text: &str) -> String {
    text.split(|c: char| !(c.is_ascii_alphanumeric() || c == '-'))
        .filter(|id| !id.is_empty())
        .map(|id| {
            if id.bytes().all(|b| b.is_ascii_digit()) {
                let trimmed = id.trim_start_matches('0');
                let digits = if trimmed.is_empty() { "0" } else { trimmed };
                digits.to_string()
            } else {
                id.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(".")
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.parsed == other.parsed
    }
}

impl Eq for Version {}

impl Hash for Version {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.parsed.hash(state);
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        self.parsed.cmp(&other.parsed)
    }
}

impl FromStr for Version {
    type Err = VetterError;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Version::parse(s)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl Serialize for Version {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.raw)
    }
}

impl<'de> Deserialize<'de> for Version {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Version::parse(&s).map_err(serde::de::Error::custom)
    }
}
