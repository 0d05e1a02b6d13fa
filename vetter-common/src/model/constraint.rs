use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::version::Version;
use crate::error::{Result, VetterError};

/// One end of a version range.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RangeBound {
    pub version: Version,
    pub inclusive: bool,
}

/// The version part of a requested selector.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum VersionConstraint {
    /// `1.5`
    Exact(Version),
    /// `1.+`, matched against the version text.
    Prefix(String),
    /// `latest.release`, `latest.integration`. Status filtering happens elsewhere.
    Latest(String),
    /// `[1.0,2.0)`, `(,1.5]`, `[2.0,)`
    Range {
        lower: Option<RangeBound>,
        upper: Option<RangeBound>,
    },
}

impl VersionConstraint {
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.is_empty() {
            return Err(VetterError::ParseError(
                "version constraint",
                "empty constraint".to_string(),
            ));
        }

        if let Some(status) = s.strip_prefix("latest.") {
            return Ok(Self::Latest(status.to_string()));
        }
        if let Some(prefix) = s.strip_suffix('+') {
            return Ok(Self::Prefix(prefix.to_string()));
        }
        if s.starts_with('[') || s.starts_with('(') {
            return Self::parse_range(s);
        }

        Version::parse(s)
            .map(Self::Exact)
            .map_err(|e| VetterError::ParseError("version constraint", e.to_string()))
    }

    fn parse_range(s: &str) -> Result<Self> {
        let malformed =
            || VetterError::ParseError("version constraint", format!("malformed range '{s}'"));

        let lower_inclusive = s.starts_with('[');
        let upper_inclusive = match s.chars().last() {
            Some(']') => true,
            Some(')') => false,
            _ => return Err(malformed()),
        };
        let inner = &s[1..s.len() - 1];

        let Some((low, high)) = inner.split_once(',') else {
            // `[1.0]` pins a single version
            if lower_inclusive && upper_inclusive && !inner.trim().is_empty() {
                return Self::bound(inner).map(Self::Exact);
            }
            return Err(malformed());
        };
        if high.contains(',') {
            return Err(malformed());
        }

        let lower = match low.trim() {
            "" => None,
            v => Some(RangeBound {
                version: Self::bound(v)?,
                inclusive: lower_inclusive,
            }),
        };
        let upper = match high.trim() {
            "" => None,
            v => Some(RangeBound {
                version: Self::bound(v)?,
                inclusive: upper_inclusive,
            }),
        };

        if let (Some(l), Some(u)) = (&lower, &upper) {
            if l.version > u.version {
                return Err(VetterError::ParseError(
                    "version constraint",
                    format!("range '{s}' has lower bound above upper bound"),
                ));
            }
        }

        Ok(Self::Range { lower, upper })
    }

    fn bound(v: &str) -> Result<Version> {
        Version::parse(v).map_err(|e| VetterError::ParseError("version constraint", e.to_string()))
    }

    /// Whether `version` satisfies this constraint.
    pub fn accepts(&self, version: &Version) -> bool {
        match self {
            Self::Exact(v) => v == version,
            Self::Prefix(prefix) => version.as_str().starts_with(prefix.as_str()),
            Self::Latest(_) => true,
            Self::Range { lower, upper } => {
                let above = lower.as_ref().is_none_or(|b| {
                    if b.inclusive {
                        version >= &b.version
                    } else {
                        version > &b.version
                    }
                });
                let below = upper.as_ref().is_none_or(|b| {
                    if b.inclusive {
                        version <= &b.version
                    } else {
                        version < &b.version
                    }
                });
                above && below
            }
        }
    }

    pub fn is_dynamic(&self) -> bool {
        !matches!(self, Self::Exact(_))
    }
}

impl FromStr for VersionConstraint {
    type Err = VetterError;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        VersionConstraint::parse(s)
    }
}

impl fmt::Display for VersionConstraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exact(v) => write!(f, "{v}"),
            Self::Prefix(p) => write!(f, "{p}+"),
            Self::Latest(status) => write!(f, "latest.{status}"),
            Self::Range { lower, upper } => {
                match lower {
                    Some(b) if b.inclusive => write!(f, "[{}", b.version)?,
                    Some(b) => write!(f, "({}", b.version)?,
                    None => f.write_str("(")?,
                }
                f.write_str(",")?;
                match upper {
                    Some(b) if b.inclusive => write!(f, "{}]", b.version),
                    Some(b) => write!(f, "{})", b.version),
                    None => f.write_str(")"),
                }
            }
        }
    }
}

impl Serialize for VersionConstraint {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for VersionConstraint {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        VersionConstraint::parse(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(s: &str) -> Version {
        Version::parse(s).unwrap()
    }

    #[test]
    fn half_open_range() {
        let c = VersionConstraint::parse("[1.0,2.0)").unwrap();
        assert!(c.accepts(&v("1.0")));
        assert!(c.accepts(&v("1.5")));
        assert!(!c.accepts(&v("2.0")));
        assert!(!c.accepts(&v("0.9")));
        assert_eq!(c.to_string(), "[1.0,2.0)");
    }

    #[test]
    fn open_ended_ranges() {
        let up_to = VersionConstraint::parse("(,1.5]").unwrap();
        assert!(up_to.accepts(&v("0.1")));
        assert!(up_to.accepts(&v("1.5")));
        assert!(!up_to.accepts(&v("1.5.1")));

        let from = VersionConstraint::parse("(2.0,)").unwrap();
        assert!(!from.accepts(&v("2.0")));
        assert!(from.accepts(&v("10")));
    }

    #[test]
    fn zero_padded_bounds() {
        let c = VersionConstraint::parse("[2014.01,)").unwrap();
        assert!(c.accepts(&v("2014.01.15")));
        assert!(!c.accepts(&v("2013.12.31")));
        assert_eq!(c.to_string(), "[2014.01,)");
    }

    #[test]
    fn pinned_range_is_exact() {
        assert_eq!(
            VersionConstraint::parse("[1.2]").unwrap(),
            VersionConstraint::Exact(v("1.2"))
        );
    }

    #[test]
    fn prefix_and_latest() {
        let prefix = VersionConstraint::parse("1.+").unwrap();
        assert!(prefix.accepts(&v("1.7")));
        assert!(!prefix.accepts(&v("2.1")));
        assert!(prefix.is_dynamic());

        let latest = VersionConstraint::parse("latest.release").unwrap();
        assert_eq!(latest, VersionConstraint::Latest("release".to_string()));
        assert!(latest.accepts(&v("0.0.1")));
    }

    #[test]
    fn malformed_ranges_fail() {
        for bad in ["[1.0,2.0", "[2.0,1.0]", "[1,2,3]", "()", "[]"] {
            assert!(
                matches!(
                    VersionConstraint::parse(bad),
                    Err(VetterError::ParseError("version constraint", _))
                ),
                "expected parse error for {bad}"
            );
        }
    }
}
