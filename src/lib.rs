//! Repository metadata for build stamping.
//!
//! [`git::Git`] runs the `git` executable and reads the commit hash, short
//! hash and release tags of a repository. [`stamp::Stamp`] bundles those
//! values (plus dirty state, remote and build time) for embedding into
//! build artifacts.
//!
//! ```no_run
//! use git_stamp::git::Git;
//!
//! let git = Git::new()?.with_working_dir(".");
//! let version = match git.tags_points_at()? {
//!     Some(tag) => tag,
//!     None => git.short_commit()?,
//! };
//! println!("version {}", version);
//! # Ok::<(), git_stamp::git::ExecutionError>(())
//! ```

pub mod git;
pub mod stamp;
