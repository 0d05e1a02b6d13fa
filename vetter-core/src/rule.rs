// vetter-core/src/rule.rs
use tracing::debug;
use vetter_common::model::{ModuleIdentifier, VersionConstraint};

use crate::selection::ComponentSelection;

/// What a single rule decided about a candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleVerdict {
    NoOpinion,
    Reject(String),
}

/// A selection rule only ever sees a read-only view of the selection. The
/// rule chain turns `Reject` verdicts into calls to `reject`.
pub trait SelectionRule {
    fn evaluate(&self, selection: &ComponentSelection<'_>) -> RuleVerdict;
}

impl<F> SelectionRule for F
where
    F: Fn(&ComponentSelection<'_>) -> RuleVerdict,
{
    fn evaluate(&self, selection: &ComponentSelection<'_>) -> RuleVerdict {
        self(selection)
    }
}

/// Rejects versions of a module that fall inside a constraint.
#[derive(Debug, Clone)]
pub struct VersionExclusionRule {
    module: ModuleIdentifier,
    versions: VersionConstraint,
    reason: Option<String>,
}

impl VersionExclusionRule {
    pub fn new(
        module: ModuleIdentifier,
        versions: VersionConstraint,
        reason: Option<String>,
    ) -> Self {
        Self {
            module,
            versions,
            reason,
        }
    }
}

impl SelectionRule for VersionExclusionRule {
    fn evaluate(&self, selection: &ComponentSelection<'_>) -> RuleVerdict {
        let candidate = selection.candidate();
        if candidate.group != self.module.group || candidate.module != self.module.name {
            return RuleVerdict::NoOpinion;
        }
        let version = match candidate.parsed_version() {
            Ok(v) => v,
            Err(e) => {
                debug!("Cannot check {} against {}: {}", candidate, self.versions, e);
                return RuleVerdict::NoOpinion;
            }
        };
        if !self.versions.accepts(&version) {
            return RuleVerdict::NoOpinion;
        }
        RuleVerdict::Reject(self.reason.clone().unwrap_or_else(|| {
            format!(
                "version {} of {} is excluded by '{}'",
                version, self.module, self.versions
            )
        }))
    }
}

/// Rejects candidates whose version qualifier carries one of the given
/// markers. The qualifier is split on '.' and '-'; a segment matches a marker
/// when it equals it or is the marker followed only by digits (`rc` matches
/// `RC1` and `rc.2`, not `sources`). Comparison is case-insensitive.
#[derive(Debug, Clone)]
pub struct QualifierRule {
    qualifiers: Vec<String>,
}

impl QualifierRule {
    pub fn new<I, S>(qualifiers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            qualifiers: qualifiers
                .into_iter()
                .map(|q| q.as_ref().to_lowercase())
                .collect(),
        }
    }
}

impl SelectionRule for QualifierRule {
    fn evaluate(&self, selection: &ComponentSelection<'_>) -> RuleVerdict {
        let Ok(version) = selection.candidate().parsed_version() else {
            return RuleVerdict::NoOpinion;
        };
        let Some(qualifier) = version.qualifier() else {
            return RuleVerdict::NoOpinion;
        };
        let lowered = qualifier.to_lowercase();
        let marked = |marker: &&String| {
            lowered.split(['.', '-']).any(|segment| {
                segment
                    .strip_prefix(marker.as_str())
                    .is_some_and(|rest| rest.bytes().all(|b| b.is_ascii_digit()))
            })
        };
        match self.qualifiers.iter().find(marked) {
            Some(marker) => RuleVerdict::Reject(format!(
                "qualifier '{qualifier}' of {} matches rejected marker '{marker}'",
                selection.candidate()
            )),
            None => RuleVerdict::NoOpinion,
        }
    }
}
