// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! End-to-end decoding of mutation fragments into operation descriptors
//!
//! fragments → document text → AST → folded native values → descriptors

use indexmap::IndexMap;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::action::{decompose_operation_name, ActionVerb};
use crate::assembler::{assemble_document, WRAPPER_OPERATION};
use crate::ast::parser::parse_document;
use crate::ast::Document;
use crate::error::{DecodeError, DecodeResult};
use crate::fold::{fold_operation, NativeValue};

/// One classified top-level operation of a mutation document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OperationDescriptor {
    pub operation: ActionVerb,
    pub typename: String,
    pub arguments: IndexMap<String, NativeValue>,
}

impl OperationDescriptor {
    /// Field name rebuilt from verb and type name, without any separator
    pub fn field_name(&self) -> String {
        format!("{}{}", self.operation, self.typename)
    }

    /// Look up a top-level argument
    pub fn argument(&self, name: &str) -> Option<&NativeValue> {
        self.arguments.get(name)
    }
}

/// Decode mutation fragments into descriptors, in document order
///
/// Bare fragments are wrapped into `mutation m { ... }` first; see
/// [`assemble_document`]. Fields named `error` produce no descriptor.
pub fn decode_mutations<S: AsRef<str>>(fragments: &[S]) -> DecodeResult<Vec<OperationDescriptor>> {
    let text = assemble_document(fragments);
    debug!("Decoding document:\n{}", text);

    let document = parse_document(&text)?;
    decode_document(&document)
}

/// Decode every wrapper operation of an already parsed document
///
/// Each operation is folded on its own, so several pre-wrapped fragments
/// contribute all of their fields, in document order.
pub fn decode_document(document: &Document) -> DecodeResult<Vec<OperationDescriptor>> {
    let mut descriptors = Vec::new();
    let mut wrapped = 0;

    for operation in &document.definitions {
        let mut root = fold_operation(operation)?;
        if let Some(fields) = root.shift_remove(WRAPPER_OPERATION) {
            wrapped += 1;
            collect_descriptors(fields, &mut descriptors)?;
        }
    }

    if wrapped == 0 {
        return Err(DecodeError::MissingOperation(WRAPPER_OPERATION.to_string()));
    }

    debug!(
        "Decoded {} operation descriptor(s) from {} wrapper operation(s)",
        descriptors.len(),
        wrapped
    );
    Ok(descriptors)
}

/// Turn the folded `[{field name: arguments}, ...]` list into descriptors
fn collect_descriptors(
    fields: NativeValue,
    descriptors: &mut Vec<OperationDescriptor>,
) -> DecodeResult<()> {
    let entries = match fields {
        NativeValue::List(entries) => entries,
        other => {
            return Err(DecodeError::UnexpectedShape(format!(
                "operation '{}' folded to a {}",
                WRAPPER_OPERATION,
                other.type_name()
            )))
        }
    };

    for entry in entries {
        let entry = match entry {
            NativeValue::Map(entry) => entry,
            other => {
                return Err(DecodeError::UnexpectedShape(format!(
                    "field entry folded to a {}",
                    other.type_name()
                )))
            }
        };

        for (field_name, arguments) in entry {
            let arguments = match arguments {
                NativeValue::Map(arguments) => arguments,
                other => {
                    return Err(DecodeError::UnexpectedShape(format!(
                        "arguments of '{}' folded to a {}",
                        field_name,
                        other.type_name()
                    )))
                }
            };

            let (operation, typename) = decompose_operation_name(&field_name)?;
            descriptors.push(OperationDescriptor {
                operation,
                typename: typename.to_string(),
                arguments,
            });
        }
    }

    Ok(())
}
