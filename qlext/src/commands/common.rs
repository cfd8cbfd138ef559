//! Common types and utilities for qlext commands.
//!
//! This module provides the output format switch and the query input
//! gathering shared by every command.

use std::io::BufRead;
use std::path::{Path, PathBuf};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::{QlextError, Result};

// ============================================================================
// Output Format
// ============================================================================

/// Supported output formats for token listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One JSON array holding every query report
    #[default]
    Json,
    /// One JSON object per line, one line per query
    Jsonl,
    /// Aligned human-readable columns
    Table,
}

// ============================================================================
// Query Input
// ============================================================================

/// One query to scan, labelled with where it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryInput {
    /// Origin such as `arg:1`, `queries.txt:4`, or `stdin:2`.
    pub origin: String,
    /// The raw query text.
    pub text: String,
}

impl QueryInput {
    /// Create a new query input.
    pub fn new(origin: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            origin: origin.into(),
            text: text.into(),
        }
    }
}

/// Collect queries from arguments and files, falling back to `stdin`.
///
/// Each argument is one query. Each line of a file or of standard input is
/// one query, with its line terminator removed.
///
/// # Arguments
/// * `queries` - Queries given directly on the command line
/// * `files` - Files holding one query per line
/// * `stdin` - Reader used when neither queries nor files are given
///
/// # Returns
/// * `Result<Vec<QueryInput>>` - The gathered queries or a read error
pub fn gather_queries(
    queries: &[String],
    files: &[PathBuf],
    stdin: impl BufRead,
) -> Result<Vec<QueryInput>> {
    let mut inputs: Vec<QueryInput> = queries
        .iter()
        .enumerate()
        .map(|(i, query)| QueryInput::new(format!("arg:{}", i + 1), query.as_str()))
        .collect();

    for path in files {
        inputs.extend(read_query_file(path)?);
    }

    if queries.is_empty() && files.is_empty() {
        inputs.extend(read_query_lines("stdin", stdin)?);
    }

    Ok(inputs)
}

/// Read one query per line from a file.
fn read_query_file(path: &Path) -> Result<Vec<QueryInput>> {
    let file = std::fs::File::open(path).map_err(|source| QlextError::ReadInput {
        path: path.to_path_buf(),
        source,
    })?;
    read_query_lines(&path.display().to_string(), std::io::BufReader::new(file))
}

/// Read one query per line, labelling each with `name:line`.
fn read_query_lines(name: &str, reader: impl BufRead) -> Result<Vec<QueryInput>> {
    reader
        .lines()
        .enumerate()
        .map(|(i, line)| -> Result<QueryInput> {
            let line = line?;
            let text = line.strip_suffix('\r').unwrap_or(&line);
            Ok(QueryInput::new(format!("{}:{}", name, i + 1), text))
        })
        .collect()
}

// ============================================================================
// Output Messages
// ============================================================================

/// Standard output message templates.
pub mod output_messages {
    /// Header printed above each query in table output.
    pub const QUERY_HEADER: &str = "==>";

    /// Description attached to an unterminated phrase finding.
    pub const UNTERMINATED_PHRASE: &str = "unterminated phrase";

    /// Message when every checked query is clean.
    pub const CHECK_CLEAN: &str = "no unterminated phrases";
}
