// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Read-only access to commit messages in a repository.

use crate::error::{GateError, GitError, Result};
use git2::{Oid, Repository as Git2Repo};
use std::path::Path;

fn revwalk_failed(step: &'static str) -> impl Fn(git2::Error) -> GateError {
    move |e| {
        GateError::Git(GitError::CommandFailed {
            command: step.to_string(),
            message: e.message().to_string(),
        })
    }
}

fn bad_reference(reference: impl std::fmt::Display) -> impl Fn(git2::Error) -> GateError {
    move |e| {
        GateError::Git(GitError::InvalidReference {
            reference: format!("{}: {}", reference, e.message()),
        })
    }
}

/// A discovered git repository.
pub struct Repository {
    inner: Git2Repo,
}

impl Repository {
    /// Open the repository containing the working directory.
    pub fn open_current() -> Result<Self> {
        let cwd = std::env::current_dir().map_err(|e| {
            GateError::Git(GitError::OpenFailed {
                message: format!("Cannot read working directory: {}", e),
            })
        })?;
        Self::open(&cwd)
    }

    /// Open the repository containing `path`, searching upwards.
    pub fn open(path: &Path) -> Result<Self> {
        Git2Repo::discover(path)
            .map(|inner| Self { inner })
            .map_err(|e| match e.code() {
                git2::ErrorCode::NotFound => GateError::Git(GitError::NotARepository),
                _ => GateError::Git(GitError::OpenFailed {
                    message: e.message().to_string(),
                }),
            })
    }

    /// Resolve a revision (SHA, branch, `HEAD~2`, ...) to a commit.
    pub fn get_commit(&self, reference: &str) -> Result<git2::Commit<'_>> {
        self.inner
            .revparse_single(reference)
            .and_then(|obj| obj.peel_to_commit())
            .map_err(bad_reference(reference))
    }

    /// SHA and raw message of one commit.
    pub fn get_commit_message(&self, reference: &str) -> Result<(Oid, String)> {
        let commit = self.get_commit(reference)?;
        let message = commit.message().ok_or_else(|| {
            GateError::Git(GitError::InvalidReference {
                reference: format!("{}: message is not valid UTF-8", reference),
            })
        })?;
        Ok((commit.id(), message.to_string()))
    }

    /// Commits reachable from `b` but not from `a` in an `a..b` range,
    /// newest first. An empty `b` means `HEAD`; a plain revision yields one
    /// commit.
    pub fn get_commits_in_range(&self, range: &str) -> Result<Vec<(Oid, String)>> {
        let Some((from, to)) = range.split_once("..") else {
            return Ok(vec![self.get_commit_message(range)?]);
        };
        let to = if to.is_empty() { "HEAD" } else { to };

        let mut walk = self.inner.revwalk().map_err(revwalk_failed("revwalk"))?;
        walk.push(self.get_commit(to)?.id())
            .map_err(revwalk_failed("revwalk.push"))?;
        if !from.is_empty() {
            walk.hide(self.get_commit(from)?.id())
                .map_err(revwalk_failed("revwalk.hide"))?;
        }

        walk.map(|oid| {
            let oid = oid.map_err(revwalk_failed("revwalk"))?;
            let commit = self.inner.find_commit(oid).map_err(bad_reference(oid))?;
            // Non-UTF-8 history is still checked rather than skipped.
            let message = String::from_utf8_lossy(commit.message_bytes()).into_owned();
            Ok((oid, message))
        })
        .collect()
    }

    /// Path of the `.git` directory.
    pub fn git_dir(&self) -> &Path {
        self.inner.path()
    }
}

/// Open the repository containing the working directory.
pub fn open_repo() -> Result<Repository> {
    Repository::open_current()
}

/// SHA (hex) and message of a revision in the current repository.
pub fn get_commit(reference: &str) -> Result<(String, String)> {
    let (oid, message) = Repository::open_current()?.get_commit_message(reference)?;
    Ok((oid.to_string(), message))
}

/// SHA (hex) and message of every commit in a range of the current repository.
pub fn get_commit_range(range: &str) -> Result<Vec<(String, String)>> {
    let commits = Repository::open_current()?.get_commits_in_range(range)?;
    Ok(commits
        .into_iter()
        .map(|(oid, message)| (oid.to_string(), message))
        .collect())
}
