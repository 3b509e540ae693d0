// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Folding subsystem: turns parsed documents into native nested values

pub mod error;
pub mod folder;
pub mod value;

pub use error::FoldError;
pub use folder::{fold_document, fold_operation, ArgumentFolder, FoldState, ERROR_FIELD};
pub use value::NativeValue;
