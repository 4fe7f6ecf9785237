//! Domain logic - pure version rules independent of git operations

pub mod catalog;
pub mod prerelease;
pub mod version;

pub use catalog::VersionCatalog;
pub use prerelease::Prerelease;
pub use version::{BumpMode, BumpTarget, Version};
