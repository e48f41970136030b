//! Throwaway repositories for tests.
//!
//! Each helper panics on failure so tests can stay linear.

use super::Git;
use std::fs;
use tempfile::TempDir;

/// Create an empty temporary directory and a `Git` handle rooted in it.
///
/// The directory is removed when the returned `TempDir` is dropped.
pub fn mktmp() -> (TempDir, Git) {
    let dir = TempDir::new().expect("create temp dir");
    let git = Git::new().expect("git on PATH").with_working_dir(dir.path());
    (dir, git)
}

/// `git init` with a local identity and signing disabled.
pub fn git_init(git: &Git) {
    run(git, &["init", "--quiet"]);
    run(git, &["config", "user.name", "git-stamp-test"]);
    run(git, &["config", "user.email", "git-stamp-test@example.com"]);
    run(git, &["config", "commit.gpgsign", "false"]);
    run(git, &["config", "tag.gpgsign", "false"]);
    run(git, &["symbolic-ref", "HEAD", "refs/heads/main"]);
}

/// Create an empty commit.
pub fn git_commit(git: &Git, msg: &str) {
    run(git, &["commit", "--quiet", "--allow-empty", "-m", msg]);
}

/// Create a lightweight tag at HEAD.
pub fn git_tag(git: &Git, tag: &str) {
    run(git, &["tag", tag]);
}

/// Create an annotated tag at HEAD with a fixed creation date.
pub fn git_tag_annotated_at(git: &Git, tag: &str, date: &str) {
    let dated = git.clone().with_env("GIT_COMMITTER_DATE", date);
    run(&dated, &["tag", "-a", tag, "-m", &format!("{} release", tag)]);
}

pub fn git_checkout_branch(git: &Git, name: &str) {
    run(git, &["checkout", "--quiet", "-B", name]);
}

/// Write `name` inside the work tree and stage it.
pub fn git_add(git: &Git, name: &str, contents: &str) {
    write_file(git, name, contents);
    run(git, &["add", name]);
}

pub fn git_set_remote(git: &Git, name: &str, url: &str) {
    run(git, &["remote", "add", name, url]);
}

/// Write a file inside the work tree without staging it.
pub fn write_file(git: &Git, name: &str, contents: &str) {
    let root = git.working_dir().expect("test repo has a working dir");
    fs::write(root.join(name), contents).unwrap_or_else(|e| panic!("write {}: {}", name, e));
}

fn run(git: &Git, args: &[&str]) {
    if let Err(e) = git.run(args) {
        panic!("git {} failed: {}", args.join(" "), e);
    }
}
