// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Descriptor formatting for CLI output

use colored::*;
use comfy_table::{presets::UTF8_FULL, Cell, Color, Table};
use mutql::{ActionVerb, NativeValue, OperationDescriptor};

use super::commands::OutputFormat;

/// Formatter for decoded operation descriptors
pub struct DescriptorFormatter;

impl DescriptorFormatter {
    /// Format descriptors in the specified format
    pub fn format(
        descriptors: &[OperationDescriptor],
        format: OutputFormat,
        pretty: bool,
    ) -> Result<String, serde_json::Error> {
        match format {
            OutputFormat::Json => Self::format_json(descriptors, pretty),
            OutputFormat::Table => Ok(Self::format_table(descriptors)),
        }
    }

    fn format_json(
        descriptors: &[OperationDescriptor],
        pretty: bool,
    ) -> Result<String, serde_json::Error> {
        if pretty {
            serde_json::to_string_pretty(descriptors)
        } else {
            serde_json::to_string(descriptors)
        }
    }

    /// Format descriptors as a table using comfy-table
    fn format_table(descriptors: &[OperationDescriptor]) -> String {
        if descriptors.is_empty() {
            return format!("{}\n", "No operations found".yellow());
        }

        let mut output = String::new();
        output.push_str(&format!("{}\n", "Decoded Operations".bold().green()));
        output.push_str(&format!("Operations: {}\n\n", descriptors.len()));

        let mut table = Table::new();
        table.load_preset(UTF8_FULL);
        table.set_header(
            ["#", "Operation", "Type", "Arguments"]
                .iter()
                .map(|h| Cell::new(h).fg(Color::Green)),
        );

        for (i, descriptor) in descriptors.iter().enumerate() {
            table.add_row(vec![
                (i + 1).to_string(),
                descriptor.operation.to_string(),
                descriptor.typename.clone(),
                NativeValue::Map(descriptor.arguments.clone()).to_string(),
            ]);
        }

        output.push_str(&table.to_string());
        output.push('\n');
        output
    }

    /// Table of the action vocabulary and its classification flags
    pub fn format_verbs() -> String {
        let mut table = Table::new();
        table.load_preset(UTF8_FULL);
        table.set_header(
            ["Verb", "Mutation", "Object mutation", "Update", "Delete", "Subscription"]
                .iter()
                .map(|h| Cell::new(h).fg(Color::Green)),
        );

        let flag = |set: bool| if set { "yes" } else { "" };
        for verb in ActionVerb::ALL {
            table.add_row(vec![
                verb.as_str(),
                flag(verb.is_mutation_operation()),
                flag(verb.is_object_mutation()),
                flag(verb.is_update()),
                flag(verb.is_delete()),
                flag(verb.is_subscription()),
            ]);
        }

        format!("{}\n", table)
    }
}
