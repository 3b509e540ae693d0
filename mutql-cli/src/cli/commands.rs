// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Command-line arguments

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "mutql")]
#[command(about = "Decode GraphQL mutation fragments into ledger operations", long_about = None)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true, value_name = "LEVEL")]
    pub log_level: Option<log::Level>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Decode mutation fragments into operation descriptors
    Decode {
        /// Fragment files, one fragment per file; reads stdin when none are given
        files: Vec<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,

        /// Indent JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// List the action verbs and how they are classified
    Verbs,

    /// Show version information
    Version,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_defaults() {
        let cli = Cli::try_parse_from(["mutql", "decode", "a.graphql", "b.graphql"]).unwrap();
        assert!(!cli.verbose);
        match cli.command {
            Commands::Decode {
                files,
                format,
                pretty,
            } => {
                assert_eq!(files, vec![PathBuf::from("a.graphql"), PathBuf::from("b.graphql")]);
                assert_eq!(format, OutputFormat::Json);
                assert!(!pretty);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "mutql",
            "decode",
            "--format",
            "table",
            "--log-level",
            "trace",
            "-v",
        ])
        .unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.log_level, Some(log::Level::Trace));
        assert!(matches!(
            cli.command,
            Commands::Decode {
                format: OutputFormat::Table,
                ..
            }
        ));
    }

    #[test]
    fn test_unknown_format_is_rejected() {
        assert!(Cli::try_parse_from(["mutql", "decode", "--format", "csv"]).is_err());
    }
}
