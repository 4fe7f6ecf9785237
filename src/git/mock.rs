use crate::error::{Result, YieldError};
use crate::git::TagRepository;
use std::cell::RefCell;
use std::collections::BTreeSet;

/// Mock repository for testing without actual git operations
///
/// Tags live in memory; every write is also recorded so tests can assert on
/// what the workflow did.
#[derive(Default)]
pub struct MockRepository {
    tags: RefCell<BTreeSet<String>>,
    remote_tags: RefCell<BTreeSet<String>>,
    remotes: Vec<String>,
    dirty: bool,
    fail_fetch: bool,
    created: RefCell<Vec<String>>,
    deleted: RefCell<Vec<String>>,
    pushed: RefCell<Vec<(String, String)>>,
}

impl MockRepository {
    /// Create a new empty mock repository with an "origin" remote
    pub fn new() -> Self {
        MockRepository {
            remotes: vec!["origin".to_string()],
            ..Default::default()
        }
    }

    /// Create a mock repository that already holds the given local tags
    pub fn with_tags<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let repo = MockRepository::new();
        repo.tags
            .borrow_mut()
            .extend(tags.into_iter().map(Into::into));
        repo
    }

    /// Add a tag that only exists on the remote until fetched
    pub fn add_remote_tag(&mut self, name: impl Into<String>) {
        self.remote_tags.get_mut().insert(name.into());
    }

    /// Mark the working tree as having uncommitted changes
    pub fn set_dirty(&mut self, dirty: bool) {
        self.dirty = dirty;
    }

    /// Make every fetch fail, as an unreachable remote would
    pub fn set_fetch_failure(&mut self, fail: bool) {
        self.fail_fetch = fail;
    }

    /// Tags created through the trait, in order
    pub fn created_tags(&self) -> Vec<String> {
        self.created.borrow().clone()
    }

    /// Tags deleted through the trait, in order
    pub fn deleted_tags(&self) -> Vec<String> {
        self.deleted.borrow().clone()
    }

    /// (remote, tag) pairs pushed through the trait, in order
    pub fn pushed_tags(&self) -> Vec<(String, String)> {
        self.pushed.borrow().clone()
    }

    fn ensure_remote(&self, remote: &str) -> Result<()> {
        if self.remotes.iter().any(|r| r == remote) {
            Ok(())
        } else {
            Err(YieldError::remote(format!("No remote named '{}' found", remote)))
        }
    }
}

impl TagRepository for MockRepository {
    fn list_tags(&self) -> Result<Vec<String>> {
        Ok(self.tags.borrow().iter().cloned().collect())
    }

    fn create_tag(&self, name: &str) -> Result<()> {
        if !self.tags.borrow_mut().insert(name.to_string()) {
            return Err(YieldError::tag(format!("Tag '{}' already exists", name)));
        }
        self.created.borrow_mut().push(name.to_string());
        Ok(())
    }

    fn delete_tag(&self, name: &str) -> Result<()> {
        if !self.tags.borrow_mut().remove(name) {
            return Err(YieldError::tag(format!("Tag '{}' not found", name)));
        }
        self.deleted.borrow_mut().push(name.to_string());
        Ok(())
    }

    fn push_tag(&self, remote: &str, name: &str) -> Result<()> {
        self.ensure_remote(remote)?;
        if !self.tags.borrow().contains(name) {
            return Err(YieldError::remote(format!("Tag '{}' does not exist locally", name)));
        }
        self.remote_tags.borrow_mut().insert(name.to_string());
        self.pushed
            .borrow_mut()
            .push((remote.to_string(), name.to_string()));
        Ok(())
    }

    fn fetch_tags(&self, remote: &str) -> Result<()> {
        self.ensure_remote(remote)?;
        if self.fail_fetch {
            return Err(YieldError::remote(format!(
                "Failed to fetch tags from '{}': connection refused",
                remote
            )));
        }
        let remote_tags = self.remote_tags.borrow().clone();
        self.tags.borrow_mut().extend(remote_tags);
        Ok(())
    }

    fn is_clean(&self) -> Result<bool> {
        Ok(!self.dirty)
    }
}
