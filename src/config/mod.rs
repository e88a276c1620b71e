// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration module for commitgate.
//!
//! This module handles loading, parsing, and merging configuration from
//! project and user-wide files, falling back to built-in defaults.

pub mod default;
mod loader;
mod schema;

pub use default::default_config;
pub use loader::{find_config_file, load_config, merge_configs, parse_config};
pub use schema::*;
