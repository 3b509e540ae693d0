// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Crate-level error type

use thiserror::Error;

use crate::action::DecomposeError;
use crate::ast::parser::ParserError;
use crate::fold::FoldError;

/// Errors returned by the decoding pipeline
///
/// Every error is fatal for the whole call; no partial result is produced.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DecodeError {
    #[error("Syntax error: {0}")]
    Syntax(#[from] ParserError),

    #[error("Fold error: {0}")]
    Fold(#[from] FoldError),

    #[error("Decomposition error: {0}")]
    Decompose(#[from] DecomposeError),

    #[error("Document has no operation named '{0}'")]
    MissingOperation(String),

    #[error("Unexpected folded shape: {0}")]
    UnexpectedShape(String),
}

/// Result alias for decoding operations
pub type DecodeResult<T> = Result<T, DecodeError>;
