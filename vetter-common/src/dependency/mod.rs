pub mod metadata;

pub use metadata::DependencyMetadata;
