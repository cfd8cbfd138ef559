//! Lex command implementation.
//!
//! Scans each query and prints its token sequence in the chosen format.

use std::io::Write;

use qlex_lex::{tokenize, Token, TokenKind};
use serde::Serialize;

use crate::commands::common::{output_messages, OutputFormat, QueryInput};
use crate::commands::traits::Command;
use crate::config::OutputConfig;
use crate::error::Result;

/// Effective listing options after merging flags over configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct LexSettings {
    /// Output format.
    pub format: OutputFormat,
    /// Pretty-print JSON output.
    pub pretty: bool,
    /// Leave whitespace tokens out of listings.
    pub skip_whitespace: bool,
}

impl LexSettings {
    /// Merge command-line overrides onto the configured defaults.
    pub fn resolve(
        config: &OutputConfig,
        format: Option<OutputFormat>,
        compact: bool,
        skip_whitespace: bool,
    ) -> Self {
        Self {
            format: format.unwrap_or(config.format),
            pretty: config.pretty && !compact,
            skip_whitespace: config.skip_whitespace || skip_whitespace,
        }
    }
}

impl Default for LexSettings {
    fn default() -> Self {
        Self::resolve(&OutputConfig::default(), None, false, false)
    }
}

/// Token counts reported after a lex run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LexSummary {
    /// Number of queries scanned.
    pub queries: usize,
    /// Number of tokens listed.
    pub tokens: usize,
}

/// The listing for one query.
#[derive(Debug, Serialize)]
struct QueryReport<'a> {
    origin: &'a str,
    query: &'a str,
    tokens: Vec<Token<'a>>,
}

/// Lex command handler.
pub struct LexCommand {
    inputs: Vec<QueryInput>,
    settings: LexSettings,
}

impl LexCommand {
    /// Create a new LexCommand.
    pub fn new(inputs: Vec<QueryInput>, settings: LexSettings) -> Self {
        Self { inputs, settings }
    }

    /// Scan one query, dropping whitespace tokens when configured to.
    fn report<'a>(&self, input: &'a QueryInput) -> QueryReport<'a> {
        let mut tokens = tokenize(&input.text);
        if self.settings.skip_whitespace {
            tokens.retain(|t| t.kind != TokenKind::Whitespace);
        }
        tracing::debug!(origin = %input.origin, tokens = tokens.len(), "scanned query");
        QueryReport {
            origin: &input.origin,
            query: &input.text,
            tokens,
        }
    }

    fn write_json(&self, reports: &[QueryReport<'_>], out: &mut dyn Write) -> Result<()> {
        if self.settings.pretty {
            serde_json::to_writer_pretty(&mut *out, reports)?;
        } else {
            serde_json::to_writer(&mut *out, reports)?;
        }
        writeln!(out)?;
        Ok(())
    }

    fn write_jsonl(&self, reports: &[QueryReport<'_>], out: &mut dyn Write) -> Result<()> {
        for report in reports {
            serde_json::to_writer(&mut *out, report)?;
            writeln!(out)?;
        }
        Ok(())
    }

    fn write_table(&self, reports: &[QueryReport<'_>], out: &mut dyn Write) -> Result<()> {
        for report in reports {
            writeln!(
                out,
                "{} {} {:?}",
                output_messages::QUERY_HEADER,
                report.origin,
                report.query
            )?;
            for token in &report.tokens {
                writeln!(
                    out,
                    "{:<15} {:<9} {:?}",
                    token.kind.as_str(),
                    token.span().to_string(),
                    token.lexeme
                )?;
            }
        }
        Ok(())
    }
}

impl Command for LexCommand {
    type Output = LexSummary;

    fn name() -> &'static str {
        "lex"
    }

    fn execute(&self, out: &mut dyn Write) -> Result<Self::Output> {
        let reports: Vec<_> = self.inputs.iter().map(|input| self.report(input)).collect();

        match self.settings.format {
            OutputFormat::Json => self.write_json(&reports, out)?,
            OutputFormat::Jsonl => self.write_jsonl(&reports, out)?,
            OutputFormat::Table => self.write_table(&reports, out)?,
        }

        Ok(LexSummary {
            queries: reports.len(),
            tokens: reports.iter().map(|r| r.tokens.len()).sum(),
        })
    }
}
