// tests/integration_test.rs
use git2::Repository;
use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

fn git_yield(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_git-yield"))
        .args(args)
        .current_dir(dir)
        .env("NO_COLOR", "1")
        .output()
        .expect("Failed to execute git-yield")
}

// Helper function to setup a temporary git repo with one commit and tags
fn setup_test_repo(tags: &[&str]) -> TempDir {
    let temp_dir = TempDir::new().expect("Could not create temp dir");
    let repo = Repository::init(temp_dir.path()).expect("Could not init git repo");

    fs::write(temp_dir.path().join("README.md"), b"Initial content\n")
        .expect("Could not write initial file");

    let mut index = repo.index().expect("Could not get index");
    index
        .add_path(Path::new("README.md"))
        .expect("Could not add file to index");
    index.write().expect("Could not write index");

    let tree_id = index.write_tree().expect("Could not write tree");
    let tree = repo.find_tree(tree_id).expect("Could not find tree");
    let signature = git2::Signature::now("Test User", "test@example.com").unwrap();

    let commit_id = repo
        .commit(Some("HEAD"), &signature, &signature, "Initial commit", &tree, &[])
        .expect("Could not create commit");
    let commit = repo.find_object(commit_id, None).unwrap();

    for tag in tags {
        repo.tag_lightweight(tag, &commit, false)
            .expect("Could not create tag");
    }

    temp_dir
}

#[test]
fn test_git_yield_help() {
    let dir = TempDir::new().unwrap();
    let output = git_yield(dir.path(), &["--help"]);

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("git-yield"));
    assert!(stdout.contains("--label"));
    assert!(stdout.contains("--major"));
}

#[test]
fn test_git_yield_requires_target_or_label() {
    let dir = setup_test_repo(&[]);
    let output = git_yield(dir.path(), &[]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("You must specify either a target or a label."));
}

#[test]
fn test_git_yield_rejects_two_targets() {
    let dir = setup_test_repo(&[]);
    let output = git_yield(dir.path(), &["--major", "--patch"]);

    assert!(!output.status.success());
}

#[test]
fn test_git_yield_outside_repository() {
    let dir = TempDir::new().unwrap();
    if Repository::discover(dir.path()).is_ok() {
        return;
    }

    let output = git_yield(dir.path(), &["--patch"]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("git repository"));
}

#[test]
fn test_git_yield_dry_run_reports_next_tag() {
    let dir = setup_test_repo(&["v0.2.0", "v0.3.0-dev.1", "v0.3.0", "not-a-version"]);
    let output = git_yield(dir.path(), &["--minor", "--label", "beta", "--dry-run"]);

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Latest stable: v0.3.0"));
    assert!(stdout.contains("Latest relative revision (beta): N/A"));
    assert!(stdout.contains("v0.4.0-beta.1"));

    let repo = Repository::open(dir.path()).unwrap();
    assert!(repo.find_reference("refs/tags/v0.4.0-beta.1").is_err());
}

#[test]
fn test_git_yield_force_creates_and_pushes() {
    let remote_dir = TempDir::new().unwrap();
    let bare = Repository::init_bare(remote_dir.path()).unwrap();

    let dir = setup_test_repo(&["v1.0.0", "v1.0.1-rc.1"]);
    Repository::open(dir.path())
        .unwrap()
        .remote("origin", remote_dir.path().to_str().unwrap())
        .unwrap();

    let output = git_yield(dir.path(), &["--label", "rc", "--force"]);
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let repo = Repository::open(dir.path()).unwrap();
    assert!(repo.find_reference("refs/tags/v1.0.1-rc.2").is_ok());
    assert!(bare.find_reference("refs/tags/v1.0.1-rc.2").is_ok());
}
