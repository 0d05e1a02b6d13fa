pub mod constraint;
pub mod identifier;
pub mod selector;
pub mod version;

pub use constraint::{RangeBound, VersionConstraint};
pub use identifier::{ModuleComponentIdentifier, ModuleIdentifier};
pub use selector::{ModuleComponentSelector, ModuleVersionSelector};
pub use version::Version;
