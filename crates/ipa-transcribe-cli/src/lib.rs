// Copyright 2026 ipa-transcribe Contributors
// SPDX-License-Identifier: Apache-2.0

//! ipa-transcribe command-line front end: settings and subcommands.

pub mod cli;
pub mod config;

pub use config::{resolve_config_path, Settings};
