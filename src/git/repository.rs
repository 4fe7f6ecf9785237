use crate::error::{Result, YieldError};
use crate::git::TagRepository;
use git2::{Cred, CredentialType, RemoteCallbacks, Repository, StatusOptions};
use log::debug;
use std::path::{Path, PathBuf};

/// Wrapper around git2::Repository with our trait interface
pub struct Git2Repository {
    repo: Repository,
}

impl Git2Repository {
    /// Open or discover a git repository
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Repository::discover(path).map_err(|e| {
            YieldError::environment(format!("Not inside a git repository: {}", e.message()))
        })?;

        Ok(Git2Repository { repo })
    }

    /// Create from existing git2::Repository
    pub fn from_git2(repo: Repository) -> Self {
        Git2Repository { repo }
    }
}

/// Credentials callbacks for remote operations.
///
/// Tries the SSH keys in ~/.ssh/ first, then the SSH agent, then the
/// default credential helper.
fn remote_callbacks<'a>() -> RemoteCallbacks<'a> {
    let mut callbacks = RemoteCallbacks::new();
    callbacks.credentials(|_url, username_from_url, allowed_types| {
        let username = username_from_url.unwrap_or("git");

        if allowed_types.contains(CredentialType::SSH_KEY) {
            if let Some(home) = dirs::home_dir() {
                let key_paths: Vec<PathBuf> = ["id_ed25519", "id_rsa", "id_ecdsa"]
                    .iter()
                    .map(|key| home.join(".ssh").join(key))
                    .collect();

                for key_path in key_paths.iter().filter(|path| path.exists()) {
                    if let Ok(cred) = Cred::ssh_key(username, None, key_path, None) {
                        return Ok(cred);
                    }
                }
            }

            if let Ok(cred) = Cred::ssh_key_from_agent(username) {
                return Ok(cred);
            }
        }

        Cred::default()
    });
    callbacks
}

impl TagRepository for Git2Repository {
    fn list_tags(&self) -> Result<Vec<String>> {
        let tags = self.repo.tag_names(None)?;

        Ok(tags.iter().flatten().map(|s| s.to_string()).collect())
    }

    fn create_tag(&self, name: &str) -> Result<()> {
        let head = self
            .repo
            .head()
            .and_then(|head| head.peel_to_commit())
            .map_err(|e| YieldError::tag(format!("Cannot resolve HEAD: {}", e.message())))?;

        self.repo
            .tag_lightweight(name, head.as_object(), false)
            .map_err(|e| YieldError::tag(format!("Cannot create tag '{}': {}", name, e.message())))?;

        debug!("Created tag {} at {}", name, head.id());
        Ok(())
    }

    fn delete_tag(&self, name: &str) -> Result<()> {
        self.repo
            .tag_delete(name)
            .map_err(|e| YieldError::tag(format!("Cannot delete tag '{}': {}", name, e.message())))
    }

    fn push_tag(&self, remote: &str, name: &str) -> Result<()> {
        let mut remote_handle = self
            .repo
            .find_remote(remote)
            .map_err(|_| YieldError::remote(format!("No remote named '{}' found", remote)))?;

        let mut callbacks = remote_callbacks();
        callbacks.push_update_reference(|refname, status| match status {
            Some(status) => Err(git2::Error::from_str(&format!(
                "Remote rejected {}: {}",
                refname, status
            ))),
            None => Ok(()),
        });

        let mut push_options = git2::PushOptions::new();
        push_options.remote_callbacks(callbacks);

        let refspec = format!("refs/tags/{}:refs/tags/{}", name, name);
        remote_handle
            .push(&[refspec.as_str()], Some(&mut push_options))
            .map_err(|e| match e.class() {
                git2::ErrorClass::Net => {
                    YieldError::remote(format!("Network error during push: {}", e.message()))
                }
                _ => YieldError::remote(format!(
                    "Failed to push tag '{}' to '{}': {}",
                    name,
                    remote,
                    e.message()
                )),
            })
    }

    fn fetch_tags(&self, remote: &str) -> Result<()> {
        let mut remote_handle = self
            .repo
            .find_remote(remote)
            .map_err(|_| YieldError::remote(format!("No remote named '{}' found", remote)))?;

        let mut fetch_options = git2::FetchOptions::new();
        fetch_options.remote_callbacks(remote_callbacks());

        remote_handle
            .fetch(
                &["+refs/tags/*:refs/tags/*"],
                Some(&mut fetch_options),
                None,
            )
            .map_err(|e| {
                YieldError::remote(format!(
                    "Failed to fetch tags from '{}': {}",
                    remote,
                    e.message()
                ))
            })
    }

    fn is_clean(&self) -> Result<bool> {
        let mut options = StatusOptions::new();
        options
            .include_untracked(true)
            .recurse_untracked_dirs(true)
            .include_ignored(false);

        let statuses = self.repo.statuses(Some(&mut options))?;
        Ok(statuses.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    /// Initialise a repository with a single commit
    fn init_repo() -> (TempDir, Git2Repository) {
        let dir = TempDir::new().unwrap();
        let repo = Repository::init(dir.path()).unwrap();

        fs::write(dir.path().join("README.md"), "hello\n").unwrap();
        {
            let mut index = repo.index().unwrap();
            index.add_path(Path::new("README.md")).unwrap();
            index.write().unwrap();
            let tree_id = index.write_tree().unwrap();
            let tree = repo.find_tree(tree_id).unwrap();
            let signature = git2::Signature::now("Test", "test@example.com").unwrap();
            repo.commit(Some("HEAD"), &signature, &signature, "initial", &tree, &[])
                .unwrap();
        }

        (dir, Git2Repository::from_git2(repo))
    }

    #[test]
    fn test_open_outside_repository_fails() {
        let dir = TempDir::new().unwrap();
        // Discovery walks up; a fresh temp dir normally has no enclosing repo.
        if Repository::discover(dir.path()).is_err() {
            let result = Git2Repository::open(dir.path());
            assert!(matches!(result, Err(YieldError::Environment(_))));
        }
    }

    #[test]
    fn test_create_list_delete_tag() {
        let (_dir, repo) = init_repo();
        assert!(repo.list_tags().unwrap().is_empty());

        repo.create_tag("v0.1.0").unwrap();
        repo.create_tag("v0.2.0-beta.1").unwrap();
        let mut tags = repo.list_tags().unwrap();
        tags.sort();
        assert_eq!(tags, vec!["v0.1.0", "v0.2.0-beta.1"]);

        repo.delete_tag("v0.2.0-beta.1").unwrap();
        assert_eq!(repo.list_tags().unwrap(), vec!["v0.1.0"]);
    }

    #[test]
    fn test_create_existing_tag_fails() {
        let (_dir, repo) = init_repo();
        repo.create_tag("v0.1.0").unwrap();
        assert!(matches!(repo.create_tag("v0.1.0"), Err(YieldError::Tag(_))));
    }

    #[test]
    fn test_delete_missing_tag_fails() {
        let (_dir, repo) = init_repo();
        assert!(repo.delete_tag("v9.9.9").is_err());
    }

    #[test]
    fn test_is_clean_detects_untracked_and_modified_files() {
        let (dir, repo) = init_repo();
        assert!(repo.is_clean().unwrap());

        fs::write(dir.path().join("notes.txt"), "scratch\n").unwrap();
        assert!(!repo.is_clean().unwrap());

        fs::remove_file(dir.path().join("notes.txt")).unwrap();
        fs::write(dir.path().join("README.md"), "changed\n").unwrap();
        assert!(!repo.is_clean().unwrap());
    }

    #[test]
    fn test_push_to_unknown_remote_fails() {
        let (_dir, repo) = init_repo();
        repo.create_tag("v0.1.0").unwrap();
        assert!(matches!(
            repo.push_tag("upstream", "v0.1.0"),
            Err(YieldError::Remote(_))
        ));
        assert!(matches!(repo.fetch_tags("upstream"), Err(YieldError::Remote(_))));
    }

    #[test]
    fn test_push_and_fetch_through_local_remote() {
        let remote_dir = TempDir::new().unwrap();
        let bare = Repository::init_bare(remote_dir.path()).unwrap();
        let remote_url = remote_dir.path().to_str().unwrap().to_string();

        let (_dir, repo) = init_repo();
        repo.repo.remote("origin", &remote_url).unwrap();
        repo.create_tag("v0.1.0").unwrap();
        repo.push_tag("origin", "v0.1.0").unwrap();
        assert!(bare.find_reference("refs/tags/v0.1.0").is_ok());

        let (_other_dir, other) = init_repo();
        other.repo.remote("origin", &remote_url).unwrap();
        other.fetch_tags("origin").unwrap();
        assert_eq!(other.list_tags().unwrap(), vec!["v0.1.0"]);
    }
}
