// vetter-core/src/selection.rs
use tracing::debug;
use vetter_common::dependency::DependencyMetadata;
use vetter_common::model::{ModuleComponentIdentifier, ModuleComponentSelector};

/// Evaluation state for one (requested selector, candidate version) pair.
///
/// Created by the resolution driver for every candidate it considers, handed
/// to the selection rules, and read once afterwards. A candidate that was
/// never rejected is accepted; there is no explicit accept state.
#[derive(Debug)]
pub struct ComponentSelection<'a> {
    metadata: &'a DependencyMetadata,
    requested: ModuleComponentSelector,
    candidate: ModuleComponentIdentifier,
    rejected: bool,
    rejection_reason: Option<String>,
}

impl<'a> ComponentSelection<'a> {
    pub fn new(metadata: &'a DependencyMetadata, candidate: ModuleComponentIdentifier) -> Self {
        Self {
            metadata,
            requested: ModuleComponentSelector::new_selector(metadata.requested()),
            candidate,
            rejected: false,
            rejection_reason: None,
        }
    }

    pub fn requested(&self) -> &ModuleComponentSelector {
        &self.requested
    }

    pub fn candidate(&self) -> &ModuleComponentIdentifier {
        &self.candidate
    }

    /// Marks the candidate rejected. Repeated calls replace the reason.
    pub fn reject(&mut self, reason: impl Into<String>) {
        let reason = reason.into();
        if let Some(previous) = &self.rejection_reason {
            debug!(
                "Rejection reason for {} replaced: '{}' -> '{}'",
                self.candidate, previous, reason
            );
        } else {
            debug!("Rejected candidate {} for {}: {}", self.candidate, self.requested, reason);
        }
        self.rejected = true;
        self.rejection_reason = Some(reason);
    }

    pub fn is_rejected(&self) -> bool {
        self.rejected
    }

    /// `None` until the first call to [`reject`](Self::reject).
    pub fn rejection_reason(&self) -> Option<&str> {
        self.rejection_reason.as_deref()
    }

    pub fn dependency_metadata(&self) -> &'a DependencyMetadata {
        self.metadata
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metadata() -> DependencyMetadata {
        DependencyMetadata::new("com.example:lib:[1.0,2.0)".parse().unwrap())
    }

    fn candidate() -> ModuleComponentIdentifier {
        "com.example:lib:1.5".parse().unwrap()
    }

    #[test]
    fn exposes_construction_inputs() {
        let metadata = metadata();
        let selection = ComponentSelection::new(&metadata, candidate());
        assert_eq!(selection.requested().to_string(), "com.example:lib:[1.0,2.0)");
        assert_eq!(selection.candidate(), &candidate());
        assert!(std::ptr::eq(selection.dependency_metadata(), &metadata));
    }

    #[test]
    fn starts_pending() {
        let metadata = metadata();
        let selection = ComponentSelection::new(&metadata, candidate());
        assert!(!selection.is_rejected());
        assert_eq!(selection.rejection_reason(), None);
    }

    #[test]
    fn reject_records_reason() {
        let metadata = metadata();
        let mut selection = ComponentSelection::new(&metadata, candidate());
        selection.reject("excluded by exclusion rule");
        assert!(selection.is_rejected());
        assert_eq!(selection.rejection_reason(), Some("excluded by exclusion rule"));
    }

    #[test]
    fn last_rejection_wins() {
        let metadata = metadata();
        let mut selection = ComponentSelection::new(&metadata, candidate());
        selection.reject("reason A");
        selection.reject("reason B");
        assert!(selection.is_rejected());
        assert_eq!(selection.rejection_reason(), Some("reason B"));
    }

    #[test]
    fn identity_survives_rejection() {
        let metadata = metadata();
        let mut selection = ComponentSelection::new(&metadata, candidate());
        let requested = selection.requested().clone();
        selection.reject("nope");
        assert_eq!(selection.requested(), &requested);
        assert_eq!(selection.candidate(), &candidate());
    }
}
