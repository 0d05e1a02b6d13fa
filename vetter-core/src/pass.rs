// vetter-core/src/pass.rs
use tracing::{debug, info};
use vetter_common::dependency::DependencyMetadata;
use vetter_common::model::{ModuleComponentIdentifier, ModuleComponentSelector};

use crate::rules::ComponentSelectionRules;
use crate::selection::ComponentSelection;

/// Final verdict for one candidate after all rules ran.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateVerdict {
    pub candidate: ModuleComponentIdentifier,
    pub rejection_reason: Option<String>,
}

impl CandidateVerdict {
    pub fn is_rejected(&self) -> bool {
        self.rejection_reason.is_some()
    }
}

impl From<ComponentSelection<'_>> for CandidateVerdict {
    fn from(selection: ComponentSelection<'_>) -> Self {
        let rejection_reason = if selection.is_rejected() {
            selection.rejection_reason().map(str::to_string)
        } else {
            None
        };
        Self {
            candidate: selection.candidate().clone(),
            rejection_reason,
        }
    }
}

#[derive(Debug, Clone)]
pub struct PassReport {
    pub requested: ModuleComponentSelector,
    pub verdicts: Vec<CandidateVerdict>,
}

impl PassReport {
    pub fn accepted(&self) -> impl Iterator<Item = &ModuleComponentIdentifier> {
        self.verdicts
            .iter()
            .filter(|v| !v.is_rejected())
            .map(|v| &v.candidate)
    }

    pub fn rejected(&self) -> impl Iterator<Item = &CandidateVerdict> {
        self.verdicts.iter().filter(|v| v.is_rejected())
    }

    pub fn all_rejected(&self) -> bool {
        self.verdicts.iter().all(CandidateVerdict::is_rejected)
    }
}

/// Runs a rule set over every candidate offered for one dependency. Picking
/// among the accepted candidates is left to the caller.
#[derive(Debug)]
pub struct SelectionPass<'r> {
    rules: &'r ComponentSelectionRules,
}

impl<'r> SelectionPass<'r> {
    pub fn new(rules: &'r ComponentSelectionRules) -> Self {
        Self { rules }
    }

    pub fn evaluate<I>(&self, metadata: &DependencyMetadata, candidates: I) -> PassReport
    where
        I: IntoIterator<Item = ModuleComponentIdentifier>,
    {
        let requested = ModuleComponentSelector::new_selector(metadata.requested());
        debug!("Evaluating candidates for {}", requested);

        let verdicts: Vec<CandidateVerdict> = candidates
            .into_iter()
            .map(|candidate| {
                let mut selection = ComponentSelection::new(metadata, candidate);
                self.rules.apply(&mut selection);
                if let Some(reason) = selection.rejection_reason() {
                    info!("Rejected {} for {}: {}", selection.candidate(), requested, reason);
                }
                CandidateVerdict::from(selection)
            })
            .collect();

        debug!(
            "{} of {} candidate(s) for {} accepted",
            verdicts.iter().filter(|v| !v.is_rejected()).count(),
            verdicts.len(),
            requested
        );
        PassReport {
            requested,
            verdicts,
        }
    }
}
