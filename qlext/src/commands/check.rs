//! Check command implementation.
//!
//! Reports every phrase that runs to end of input without a closing quote.
//! The scanner accepts such phrases; this command is the caller that
//! decides to reject them.

use std::io::Write;

use qlex_lex::{tokenize, Token};
use qlex_util::{LineCol, LineIndex};

use crate::commands::common::{output_messages, QueryInput};
use crate::commands::traits::Command;
use crate::config::CheckConfig;
use crate::error::{QlextError, Result};

/// Effective check options after merging flags over configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckSettings {
    /// Exit with an error when an unterminated phrase is found.
    pub fail_on_unterminated: bool,
}

impl CheckSettings {
    /// Merge command-line overrides onto the configured defaults.
    pub fn resolve(config: &CheckConfig, allow_unterminated: bool) -> Self {
        Self {
            fail_on_unterminated: config.fail_on_unterminated && !allow_unterminated,
        }
    }
}

/// Counts reported after a check run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CheckSummary {
    /// Number of queries checked.
    pub queries: usize,
    /// Number of unterminated phrases found.
    pub unterminated: usize,
}

/// One unterminated phrase and where it opens.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Finding<'a> {
    origin: &'a str,
    position: LineCol,
    /// The query line holding the opening quote.
    context: &'a str,
    token: Token<'a>,
}

/// Check command handler.
pub struct CheckCommand {
    inputs: Vec<QueryInput>,
    settings: CheckSettings,
}

impl CheckCommand {
    /// Create a new CheckCommand.
    pub fn new(inputs: Vec<QueryInput>, settings: CheckSettings) -> Self {
        Self { inputs, settings }
    }

    /// Collect the unterminated phrases of one query.
    fn findings<'a>(&self, input: &'a QueryInput) -> Vec<Finding<'a>> {
        let index = LineIndex::new(&input.text);
        tokenize(&input.text)
            .into_iter()
            .filter(Token::is_unterminated_phrase)
            .map(|token| {
                let position = index.line_col(token.start);
                Finding {
                    origin: &input.origin,
                    position,
                    context: index.line(position.line).unwrap_or_default(),
                    token,
                }
            })
            .collect()
    }
}

impl Command for CheckCommand {
    type Output = CheckSummary;

    fn name() -> &'static str {
        "check"
    }

    fn execute(&self, out: &mut dyn Write) -> Result<Self::Output> {
        let mut unterminated = 0;
        for input in &self.inputs {
            for finding in self.findings(input) {
                tracing::warn!(
                    origin = finding.origin,
                    position = %finding.position,
                    "unterminated phrase"
                );
                writeln!(
                    out,
                    "{}: {}: {} {:?}",
                    finding.origin,
                    finding.position,
                    output_messages::UNTERMINATED_PHRASE,
                    finding.token.lexeme
                )?;
                writeln!(out, "    {}", finding.context)?;
                writeln!(out, "    {:>width$}", "^", width = finding.position.column)?;
                unterminated += 1;
            }
        }

        let summary = CheckSummary {
            queries: self.inputs.len(),
            unterminated,
        };
        tracing::info!(
            queries = summary.queries,
            unterminated = summary.unterminated,
            "check finished"
        );

        if unterminated == 0 {
            writeln!(out, "{}", output_messages::CHECK_CLEAN)?;
        } else if self.settings.fail_on_unterminated {
            return Err(QlextError::Validation(format!(
                "{} unterminated phrase(s)",
                unterminated
            )));
        }

        Ok(summary)
    }
}
