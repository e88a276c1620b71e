// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Git integration module.
//!
//! Read-only access to commit messages already in history, so they can be
//! put through the validator.

mod repo;

pub use repo::{get_commit, get_commit_range, open_repo, Repository};
