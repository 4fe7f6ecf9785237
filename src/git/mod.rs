//! Git operations abstraction layer
//!
//! The version logic only needs a handful of tag operations from the
//! repository. They are expressed by the [TagRepository] trait so the
//! workflow can run against either implementation:
//!
//! - [repository::Git2Repository]: a real repository through the `git2` crate
//! - [mock::MockRepository]: an in-memory stand-in that records every write
//!
//! ```rust
//! # use git_yield::git::TagRepository;
//! # fn example<R: TagRepository>(repo: &R) -> git_yield::Result<()> {
//! repo.fetch_tags("origin")?;
//! let tags = repo.list_tags()?;
//! # let _ = tags;
//! # Ok(())
//! # }
//! ```

pub mod mock;
pub mod repository;

pub use mock::MockRepository;
pub use repository::Git2Repository;

use crate::error::Result;

/// Tag operations the yield workflow needs from version control
///
/// Implementations map underlying errors (like `git2::Error`) onto the
/// matching [crate::error::YieldError] variants.
pub trait TagRepository {
    /// List every tag name in the repository, in no particular order
    fn list_tags(&self) -> Result<Vec<String>>;

    /// Create a lightweight tag pointing at the current HEAD commit
    ///
    /// # Errors
    /// Fails if the tag already exists or HEAD cannot be resolved.
    fn create_tag(&self, name: &str) -> Result<()>;

    /// Delete a local tag
    fn delete_tag(&self, name: &str) -> Result<()>;

    /// Push a single tag to a remote (e.g. "origin")
    fn push_tag(&self, remote: &str, name: &str) -> Result<()>;

    /// Fetch all tags from a remote so the catalog sees upstream releases
    fn fetch_tags(&self, remote: &str) -> Result<()>;

    /// True if the working tree has nothing to commit (untracked files count
    /// as changes, ignored files do not)
    fn is_clean(&self) -> Result<bool>;
}
