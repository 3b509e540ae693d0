// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Error types for folding documents into native values

use thiserror::Error;

/// Errors raised while folding an AST into native values
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FoldError {
    #[error("Cannot store {kind} value in a map without a key")]
    MissingKey { kind: String },

    #[error("Variable ${0} has no bound value")]
    UnboundVariable(String),

    #[error("Integer literal {0} does not fit in a 64-bit signed integer")]
    IntegerOutOfRange(String),

    #[error("Float literal {0} is not a valid number")]
    InvalidFloat(String),

    #[error("Fold context stack is unbalanced")]
    UnbalancedStack,
}
