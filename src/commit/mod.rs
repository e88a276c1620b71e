// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Commit message decomposition and formatting.

mod format;
mod message;

pub use format::{format_message, Formatted};
pub use message::{split_message, strip_comments, Body, BodyLine, CommitMessage, Header};
