// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Enter/leave visitor over operation documents
//!
//! `walk_document` performs a depth-first walk in document order and calls
//! one `enter_*` hook before a node's children and the matching `leave_*`
//! hook after them. Implement [`Visitor`] and override only the hooks you
//! need; every default does nothing.
//!
//! Returning [`Walk::Skip`] from `enter_field` or `enter_selection_set`
//! prunes the node: its children are not visited and its `leave_*` hook is
//! not called. Any hook error aborts the walk.

use super::ast::*;

/// Whether the walker descends into a node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Walk {
    Continue,
    Skip,
}

/// Structural parent of a selection set
#[derive(Debug, Clone, Copy)]
pub enum SelectionParent<'ast> {
    Operation(&'ast OperationDefinition),
    Field(&'ast Field),
}

/// Immediate syntactic owner of a value node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Owner<'ast> {
    Argument(&'ast str),
    ObjectField(&'ast str),
    ListItem,
}

impl<'ast> Owner<'ast> {
    /// Name of the owner; list items are unnamed
    pub fn name(&self) -> Option<&'ast str> {
        match *self {
            Owner::Argument(name) | Owner::ObjectField(name) => Some(name),
            Owner::ListItem => None,
        }
    }
}

pub trait Visitor<'ast> {
    type Error;

    fn enter_document(&mut self, _document: &'ast Document) -> Result<(), Self::Error> {
        Ok(())
    }

    fn leave_document(&mut self, _document: &'ast Document) -> Result<(), Self::Error> {
        Ok(())
    }

    fn enter_operation(
        &mut self,
        _operation: &'ast OperationDefinition,
    ) -> Result<(), Self::Error> {
        Ok(())
    }

    fn leave_operation(
        &mut self,
        _operation: &'ast OperationDefinition,
    ) -> Result<(), Self::Error> {
        Ok(())
    }

    fn enter_selection_set(
        &mut self,
        _selection_set: &'ast SelectionSet,
        _parent: SelectionParent<'ast>,
    ) -> Result<Walk, Self::Error> {
        Ok(Walk::Continue)
    }

    fn leave_selection_set(
        &mut self,
        _selection_set: &'ast SelectionSet,
        _parent: SelectionParent<'ast>,
    ) -> Result<(), Self::Error> {
        Ok(())
    }

    fn enter_field(&mut self, _field: &'ast Field) -> Result<Walk, Self::Error> {
        Ok(Walk::Continue)
    }

    fn leave_field(&mut self, _field: &'ast Field) -> Result<(), Self::Error> {
        Ok(())
    }

    fn enter_argument(&mut self, _argument: &'ast Argument) -> Result<(), Self::Error> {
        Ok(())
    }

    fn leave_argument(&mut self, _argument: &'ast Argument) -> Result<(), Self::Error> {
        Ok(())
    }

    fn enter_value(&mut self, _value: &'ast Value, _owner: Owner<'ast>) -> Result<(), Self::Error> {
        Ok(())
    }

    fn leave_value(&mut self, _value: &'ast Value, _owner: Owner<'ast>) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// Walk a whole document
pub fn walk_document<'ast, V: Visitor<'ast>>(
    visitor: &mut V,
    document: &'ast Document,
) -> Result<(), V::Error> {
    visitor.enter_document(document)?;
    for operation in &document.definitions {
        walk_operation(visitor, operation)?;
    }
    visitor.leave_document(document)
}

pub fn walk_operation<'ast, V: Visitor<'ast>>(
    visitor: &mut V,
    operation: &'ast OperationDefinition,
) -> Result<(), V::Error> {
    visitor.enter_operation(operation)?;
    walk_selection_set(
        visitor,
        &operation.selection_set,
        SelectionParent::Operation(operation),
    )?;
    visitor.leave_operation(operation)
}

pub fn walk_selection_set<'ast, V: Visitor<'ast>>(
    visitor: &mut V,
    selection_set: &'ast SelectionSet,
    parent: SelectionParent<'ast>,
) -> Result<(), V::Error> {
    if visitor.enter_selection_set(selection_set, parent)? == Walk::Skip {
        return Ok(());
    }
    for field in &selection_set.fields {
        walk_field(visitor, field)?;
    }
    visitor.leave_selection_set(selection_set, parent)
}

pub fn walk_field<'ast, V: Visitor<'ast>>(
    visitor: &mut V,
    field: &'ast Field,
) -> Result<(), V::Error> {
    if visitor.enter_field(field)? == Walk::Skip {
        return Ok(());
    }
    for argument in &field.arguments {
        walk_argument(visitor, argument)?;
    }
    if let Some(selection_set) = &field.selection_set {
        walk_selection_set(visitor, selection_set, SelectionParent::Field(field))?;
    }
    visitor.leave_field(field)
}

pub fn walk_argument<'ast, V: Visitor<'ast>>(
    visitor: &mut V,
    argument: &'ast Argument,
) -> Result<(), V::Error> {
    visitor.enter_argument(argument)?;
    walk_value(visitor, &argument.value, Owner::Argument(&argument.name))?;
    visitor.leave_argument(argument)
}

pub fn walk_value<'ast, V: Visitor<'ast>>(
    visitor: &mut V,
    value: &'ast Value,
    owner: Owner<'ast>,
) -> Result<(), V::Error> {
    visitor.enter_value(value, owner)?;
    match value {
        Value::List(items) => {
            for item in items {
                walk_value(visitor, item, Owner::ListItem)?;
            }
        }
        Value::Object(fields) => {
            for object_field in fields {
                walk_value(
                    visitor,
                    &object_field.value,
                    Owner::ObjectField(&object_field.name),
                )?;
            }
        }
        _ => {}
    }
    visitor.leave_value(value, owner)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::parser::parse_document;

    /// Records every hook call as a line of text
    #[derive(Default)]
    struct Recorder {
        events: Vec<String>,
        skip_field: Option<&'static str>,
    }

    impl<'ast> Visitor<'ast> for Recorder {
        type Error = ();

        fn enter_selection_set(
            &mut self,
            _selection_set: &'ast SelectionSet,
            parent: SelectionParent<'ast>,
        ) -> Result<Walk, ()> {
            let label = match parent {
                SelectionParent::Operation(_) => "operation",
                SelectionParent::Field(field) => field.name.as_str(),
            };
            self.events.push(format!("enter set {}", label));
            Ok(Walk::Continue)
        }

        fn enter_field(&mut self, field: &'ast Field) -> Result<Walk, ()> {
            if self.skip_field == Some(field.name.as_str()) {
                return Ok(Walk::Skip);
            }
            self.events.push(format!("enter field {}", field.name));
            Ok(Walk::Continue)
        }

        fn leave_field(&mut self, field: &'ast Field) -> Result<(), ()> {
            self.events.push(format!("leave field {}", field.name));
            Ok(())
        }

        fn leave_value(&mut self, value: &'ast Value, owner: Owner<'ast>) -> Result<(), ()> {
            let kind = if value.is_scalar() { "scalar" } else { "collection" };
            self.events
                .push(format!("leave {} {:?}", kind, owner.name()));
            Ok(())
        }
    }

    #[test]
    fn test_walk_order_and_owners() {
        let doc = parse_document(r#"mutation m { addX(a: [1, {b: 2}]) { error } }"#).unwrap();
        let mut recorder = Recorder::default();
        walk_document(&mut recorder, &doc).unwrap();

        assert_eq!(
            recorder.events,
            vec![
                "enter set operation",
                "enter field addX",
                "leave scalar None",
                "leave scalar Some(\"b\")",
                "leave collection None",
                "leave collection Some(\"a\")",
                "enter set addX",
                "enter field error",
                "leave field error",
                "leave field addX",
            ]
        );
    }

    #[test]
    fn test_skip_prunes_enter_and_leave() {
        let doc = parse_document(r#"mutation m { addX(a: 1) { error } addY }"#).unwrap();
        let mut recorder = Recorder {
            skip_field: Some("addX"),
            ..Default::default()
        };
        walk_document(&mut recorder, &doc).unwrap();

        assert_eq!(
            recorder.events,
            vec!["enter set operation", "enter field addY", "leave field addY"]
        );
    }

    #[test]
    fn test_hook_error_aborts_walk() {
        struct FailOnScalar;
        impl<'ast> Visitor<'ast> for FailOnScalar {
            type Error = String;
            fn leave_value(&mut self, value: &'ast Value, _owner: Owner<'ast>) -> Result<(), String> {
                Err(format!("stopped at {:?}", value))
            }
        }

        let doc = parse_document("mutation m { addX(a: 1, b: 2) }").unwrap();
        assert_eq!(
            walk_document(&mut FailOnScalar, &doc),
            Err("stopped at Int(\"1\")".to_string())
        );
    }
}
