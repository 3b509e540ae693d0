// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Pretty printer for AST nodes with debug logging

use log::{debug, log_enabled, Level};

use crate::ast::ast::*;

/// Pretty print an AST Document with indented tree structure and debug logging
pub fn pretty_print_ast(document: &Document) {
    if !log_enabled!(Level::Debug) {
        return;
    }

    debug!("Starting AST pretty printing");
    debug!("Document");
    for definition in &document.definitions {
        print_operation(definition, 1);
    }
    debug!("AST pretty printing completed");
}

fn print_operation(operation: &OperationDefinition, indent: usize) {
    debug!(
        "{}Operation: {} {}",
        get_indent(indent),
        operation.kind,
        operation.name.as_deref().unwrap_or("<anonymous>")
    );
    print_selection_set(&operation.selection_set, indent + 1);
}

fn print_selection_set(selection_set: &SelectionSet, indent: usize) {
    debug!("{}Selections: {}", get_indent(indent), selection_set.fields.len());
    for field in &selection_set.fields {
        print_field(field, indent + 1);
    }
}

fn print_field(field: &Field, indent: usize) {
    match &field.alias {
        Some(alias) => debug!("{}Field: {} (alias {})", get_indent(indent), field.name, alias),
        None => debug!("{}Field: {}", get_indent(indent), field.name),
    }

    for argument in &field.arguments {
        debug!("{}Argument: {}", get_indent(indent + 1), argument.name);
        print_value(&argument.value, indent + 2);
    }

    if let Some(selection_set) = &field.selection_set {
        print_selection_set(selection_set, indent + 1);
    }
}

fn print_value(value: &Value, indent: usize) {
    match value {
        Value::Variable(name) => debug!("{}Variable: ${}", get_indent(indent), name),
        Value::Int(text) => debug!("{}Int: {}", get_indent(indent), text),
        Value::Float(text) => debug!("{}Float: {}", get_indent(indent), text),
        Value::String(s) => debug!("{}String: {:?}", get_indent(indent), s),
        Value::Boolean(b) => debug!("{}Boolean: {}", get_indent(indent), b),
        Value::Null => debug!("{}Null", get_indent(indent)),
        Value::Enum(name) => debug!("{}Enum: {}", get_indent(indent), name),
        Value::List(items) => {
            debug!("{}List: {} item(s)", get_indent(indent), items.len());
            for item in items {
                print_value(item, indent + 1);
            }
        }
        Value::Object(fields) => {
            debug!("{}Object: {} field(s)", get_indent(indent), fields.len());
            for object_field in fields {
                debug!("{}{}:", get_indent(indent + 1), object_field.name);
                print_value(&object_field.value, indent + 2);
            }
        }
    }
}

fn get_indent(level: usize) -> String {
    "  ".repeat(level)
}
