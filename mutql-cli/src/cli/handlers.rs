// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! CLI command handlers for mutql

use log::debug;
use std::io::Read;
use std::path::{Path, PathBuf};

use super::commands::OutputFormat;
use super::output::DescriptorFormatter;

/// Read one fragment per file, or a single fragment from stdin
pub fn read_fragments(files: &[PathBuf]) -> Result<Vec<String>, Box<dyn std::error::Error>> {
    if files.is_empty() {
        debug!("Reading fragment from stdin");
        let mut fragment = String::new();
        std::io::stdin().read_to_string(&mut fragment)?;
        return Ok(vec![fragment]);
    }

    files.iter().map(|path| read_fragment(path)).collect()
}

fn read_fragment(path: &Path) -> Result<String, Box<dyn std::error::Error>> {
    let fragment = std::fs::read_to_string(path)
        .map_err(|e| format!("Failed to read fragment file {:?}: {}", path, e))?;
    debug!("Read {} bytes from {:?}", fragment.len(), path);
    Ok(fragment)
}

/// Handle the decode command
pub fn handle_decode(
    files: Vec<PathBuf>,
    format: OutputFormat,
    pretty: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let fragments = read_fragments(&files)?;
    let descriptors = mutql::decode_mutations(&fragments)?;
    let output = DescriptorFormatter::format(&descriptors, format, pretty)?;
    println!("{}", output);
    Ok(())
}

/// Handle the verbs command
pub fn handle_verbs() -> Result<(), Box<dyn std::error::Error>> {
    print!("{}", DescriptorFormatter::format_verbs());
    Ok(())
}
