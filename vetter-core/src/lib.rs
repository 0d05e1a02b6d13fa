// vetter-core/src/lib.rs
pub mod pass;
pub mod rule;
pub mod rules;
pub mod selection;

// Re-export key types
pub use pass::{CandidateVerdict, PassReport, SelectionPass};
pub use rule::{QualifierRule, RuleVerdict, SelectionRule, VersionExclusionRule};
pub use rules::ComponentSelectionRules;
pub use selection::ComponentSelection;
