// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! mutql - decode GraphQL mutation fragments into ledger operation descriptors
//!
//! Clients submit mutations as GraphQL field selections such as
//! `addAnimal(id: "X", input: {name: "bangu"}) { error }`. mutql reduces each
//! top-level field to an [`OperationDescriptor`]: the action verb (`add`), the
//! target type (`Animal`) and the arguments folded into native values.
//!
//! # Pipeline
//!
//! - **Assembler**: wraps bare fragments into one `mutation m { ... }` document
//! - **Parser**: nom lexer and token parser producing an AST
//! - **Fold**: enter/leave walk turning the AST into nested maps, lists and scalars
//! - **Actions**: splits each field name into an [`ActionVerb`] and a type name
//!
//! # Usage
//!
//! ```ignore
//! let descriptors = mutql::decode_mutations(&[
//!     r#"addAnimal(id: "X", input: {name: "bangu", type: "dog"}) { error }"#,
//! ])?;
//! assert_eq!(descriptors[0].operation, mutql::ActionVerb::Add);
//! assert_eq!(descriptors[0].typename, "Animal");
//! ```
//!
//! Every call is independent: no state is shared between calls, so
//! documents can be decoded from any number of threads.

pub mod action;
pub mod assembler;
pub mod ast;
pub mod decoder;
pub mod error;
pub mod fold;

pub use action::{decompose_operation_name, ActionVerb, DecomposeError, ACTION_SEPARATOR};
pub use assembler::{assemble_document, WRAPPER_OPERATION, WRAPPER_PREFIX};
pub use ast::parser::{parse_document, ParserError};
pub use decoder::{decode_document, decode_mutations, OperationDescriptor};
pub use error::{DecodeError, DecodeResult};
pub use fold::{fold_document, fold_operation, FoldError, NativeValue};

/// mutql version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// mutql crate name
pub const CRATE_NAME: &str = env!("CARGO_PKG_NAME");
