// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! CLI module for mutql
//!
//! Decodes mutation fragment files into operation descriptors and lists
//! the action vocabulary.

pub mod commands;
pub mod handlers;
pub mod output;

pub use commands::{Cli, Commands};
pub use handlers::{handle_decode, handle_verbs};
