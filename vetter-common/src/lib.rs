// vetter-common/src/lib.rs
pub mod config;
pub mod dependency;
pub mod error;
pub mod model;

// Re-export key types
pub use config::SelectionConfig;
pub use dependency::DependencyMetadata;
pub use error::{Result, VetterError};
pub use model::{
    ModuleComponentIdentifier, ModuleComponentSelector, ModuleIdentifier, ModuleVersionSelector,
    Version, VersionConstraint,
};
