// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Stack-based fold of operation documents into native values
//!
//! The folder keeps a current accumulator plus a stack of saved ones. Entering
//! an operation's selection set, a field, an object or a list pushes a fresh
//! accumulator; leaving it pops the finished child and stores it into the
//! restored parent under the name of the node's owner. Scalars are stored
//! directly into the current accumulator.
//!
//! Maps keep their keys in source order. Storing into a map needs a key and
//! overwrites an existing entry in place. Storing
//! into a list appends `{key: value}` when a key is given and the bare value
//! otherwise, so list items (which have no owner name) land unwrapped,
//! including lists nested directly in lists.
//!
//! The result for `mutation m { addX(a: 1) { error } addY }` is
//! `{"m": [{"addX": {"a": 1}}, {"addY": {}}]}`. Fields named `error` and
//! every nested response selection set are left out.

use indexmap::IndexMap;
use log::{debug, trace};

use super::error::FoldError;
use super::value::NativeValue;
use crate::ast::visitor::{walk_document, walk_operation, Owner, SelectionParent, Visitor, Walk};
use crate::ast::{Document, Field, OperationDefinition, SelectionSet, Value};

/// Response field that carries no operation data
pub const ERROR_FIELD: &str = "error";

/// Partially built collection receiving folded values
#[derive(Debug)]
enum Accumulator {
    Map(IndexMap<String, NativeValue>),
    List(Vec<NativeValue>),
}

impl Accumulator {
    fn put(&mut self, key: Option<&str>, value: NativeValue) -> Result<(), FoldError> {
        match self {
            Accumulator::Map(map) => match key {
                Some(key) if !key.is_empty() => {
                    if map.insert(key.to_string(), value).is_some() {
                        trace!("Duplicate key '{}' overwritten", key);
                    }
                    Ok(())
                }
                _ => Err(FoldError::MissingKey {
                    kind: value.type_name().to_string(),
                }),
            },
            Accumulator::List(items) => {
                match key {
                    Some(key) => {
                        let mut entry = IndexMap::new();
                        entry.insert(key.to_string(), value);
                        items.push(NativeValue::Map(entry));
                    }
                    None => items.push(value),
                }
                Ok(())
            }
        }
    }

    fn into_value(self) -> NativeValue {
        match self {
            Accumulator::Map(map) => NativeValue::Map(map),
            Accumulator::List(items) => NativeValue::List(items),
        }
    }
}

/// Context stack and current accumulator for one fold
///
/// Created fresh for every document and consumed by [`FoldState::finish`].
#[derive(Debug)]
pub struct FoldState {
    stack: Vec<Accumulator>,
    current: Accumulator,
}

impl Default for FoldState {
    fn default() -> Self {
        Self::new()
    }
}

impl FoldState {
    pub fn new() -> Self {
        Self {
            stack: Vec::new(),
            current: Accumulator::Map(IndexMap::new()),
        }
    }

    /// Number of saved accumulators
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    fn push(&mut self, fresh: Accumulator) {
        let saved = std::mem::replace(&mut self.current, fresh);
        self.stack.push(saved);
    }

    /// Restore the saved accumulator and return the finished child
    fn pop(&mut self) -> Result<NativeValue, FoldError> {
        let saved = self.stack.pop().ok_or(FoldError::UnbalancedStack)?;
        Ok(std::mem::replace(&mut self.current, saved).into_value())
    }

    fn put(&mut self, key: Option<&str>, value: NativeValue) -> Result<(), FoldError> {
        self.current.put(key, value)
    }

    /// Consume the state and return the root map
    pub fn finish(self) -> Result<IndexMap<String, NativeValue>, FoldError> {
        if !self.stack.is_empty() {
            return Err(FoldError::UnbalancedStack);
        }
        match self.current {
            Accumulator::Map(root) => Ok(root),
            Accumulator::List(_) => Err(FoldError::UnbalancedStack),
        }
    }
}

/// Convert a scalar literal to its native value
fn fold_scalar(value: &Value) -> Result<NativeValue, FoldError> {
    match value {
        Value::Int(text) => text
            .parse::<i64>()
            .map(NativeValue::Int)
            .map_err(|_| FoldError::IntegerOutOfRange(text.clone())),
        // Out of range literals become infinities
        Value::Float(text) => text
            .parse::<f64>()
            .map(NativeValue::Float)
            .map_err(|_| FoldError::InvalidFloat(text.clone())),
        Value::String(s) => Ok(NativeValue::String(s.clone())),
        Value::Boolean(b) => Ok(NativeValue::Bool(*b)),
        Value::Null => Ok(NativeValue::Null),
        Value::Enum(name) => Ok(NativeValue::String(name.clone())),
        Value::Variable(name) => Err(FoldError::UnboundVariable(name.clone())),
        Value::List(_) | Value::Object(_) => Err(FoldError::UnbalancedStack),
    }
}

/// Visitor folding field arguments into native values
#[derive(Debug, Default)]
pub struct ArgumentFolder {
    state: FoldState,
}

impl ArgumentFolder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn finish(self) -> Result<IndexMap<String, NativeValue>, FoldError> {
        self.state.finish()
    }
}

impl<'ast> Visitor<'ast> for ArgumentFolder {
    type Error = FoldError;

    fn enter_selection_set(
        &mut self,
        _selection_set: &'ast SelectionSet,
        parent: SelectionParent<'ast>,
    ) -> Result<Walk, FoldError> {
        match parent {
            SelectionParent::Operation(_) => {
                self.state.push(Accumulator::List(Vec::new()));
                Ok(Walk::Continue)
            }
            // Response selections are not operation data
            SelectionParent::Field(_) => Ok(Walk::Skip),
        }
    }

    fn leave_selection_set(
        &mut self,
        _selection_set: &'ast SelectionSet,
        parent: SelectionParent<'ast>,
    ) -> Result<(), FoldError> {
        match parent {
            SelectionParent::Operation(operation) => {
                let fields = self.state.pop()?;
                self.state.put(operation.name.as_deref(), fields)
            }
            SelectionParent::Field(_) => Ok(()),
        }
    }

    fn enter_field(&mut self, field: &'ast Field) -> Result<Walk, FoldError> {
        if field.name == ERROR_FIELD {
            trace!("Skipping '{}' field", ERROR_FIELD);
            return Ok(Walk::Skip);
        }
        self.state.push(Accumulator::Map(IndexMap::new()));
        Ok(Walk::Continue)
    }

    fn leave_field(&mut self, field: &'ast Field) -> Result<(), FoldError> {
        let arguments = self.state.pop()?;
        self.state.put(Some(&field.name), arguments)
    }

    fn enter_value(&mut self, value: &'ast Value, _owner: Owner<'ast>) -> Result<(), FoldError> {
        match value {
            Value::List(_) => self.state.push(Accumulator::List(Vec::new())),
            Value::Object(_) => self.state.push(Accumulator::Map(IndexMap::new())),
            _ => {}
        }
        Ok(())
    }

    fn leave_value(&mut self, value: &'ast Value, owner: Owner<'ast>) -> Result<(), FoldError> {
        let folded = if value.is_scalar() {
            fold_scalar(value)?
        } else {
            self.state.pop()?
        };
        self.state.put(owner.name(), folded)
    }
}

/// Fold a single operation into `{operation name: [{field name: arguments}, ...]}`
pub fn fold_operation(
    operation: &OperationDefinition,
) -> Result<IndexMap<String, NativeValue>, FoldError> {
    let mut folder = ArgumentFolder::new();
    walk_operation(&mut folder, operation)?;
    folder.finish()
}

/// Fold a document into `{operation name: [{field name: arguments}, ...]}`
///
/// Operations sharing a name overwrite each other; use [`fold_operation`]
/// to keep each one.
pub fn fold_document(document: &Document) -> Result<IndexMap<String, NativeValue>, FoldError> {
    let mut folder = ArgumentFolder::new();
    walk_document(&mut folder, document)?;
    let root = folder.finish()?;
    debug!(
        "Folded document into operations: {:?}",
        root.keys().collect::<Vec<_>>()
    );
    Ok(root)
}
