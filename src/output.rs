//! Output and Reporting
//!
//! Renders command outcomes and failures for the terminal, either as text
//! or as a single JSON document.

use serde_json::{Value, json};

use crate::cli::{OutputFormat, VerbosityLevel};
use crate::config::Config;
use crate::error::PersonError;
use crate::person::FormattedPerson;

/// What a successful command produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Validated,
    Formatted(FormattedPerson),
    Saved(FormattedPerson),
    Processed(&'static str),
}

/// Output formatter for command results
pub struct Output {
    format: OutputFormat,
    verbosity: VerbosityLevel,
    show_colors: bool,
}

impl Output {
    pub fn new(format: OutputFormat, verbosity: VerbosityLevel) -> Self {
        Self {
            format,
            verbosity,
            show_colors: atty::is(atty::Stream::Stdout),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.output.format.into(), config.verbosity())
    }

    /// Disable ANSI colors regardless of the terminal
    pub fn without_colors(mut self) -> Self {
        self.show_colors = false;
        self
    }

    fn colorize(&self, text: &str, color: &str) -> String {
        if self.show_colors {
            format!("\x1b[{}m{}\x1b[0m", color, text)
        } else {
            text.to_string()
        }
    }

    /// Render a success. Quiet mode renders nothing.
    pub fn format_outcome(&self, command: &str, outcome: &Outcome) -> Option<String> {
        if self.verbosity == VerbosityLevel::Quiet {
            return None;
        }

        let text = match self.format {
            OutputFormat::Json => outcome_json(command, outcome).to_string(),
            OutputFormat::Human => match outcome {
                Outcome::Validated => self.colorize("valid", "32"),
                Outcome::Formatted(person) => format_person(person),
                Outcome::Saved(person) => {
                    let mut text = self.colorize("saved", "32");
                    if self.verbosity >= VerbosityLevel::Verbose {
                        text.push('\n');
                        text.push_str(&format_person(person));
                    }
                    text
                }
                Outcome::Processed(status) => self.colorize(status, "32"),
            },
        };
        Some(text)
    }

    /// Render a failure. Failures are rendered at every verbosity.
    pub fn format_error(&self, command: &str, error: &PersonError) -> String {
        match self.format {
            OutputFormat::Json => json!({
                "command": command,
                "status": "error",
                "error": error.to_string(),
            })
            .to_string(),
            OutputFormat::Human => {
                let mut text = format!("{} {}", self.colorize("✗", "31"), error);
                if self.verbosity >= VerbosityLevel::Verbose {
                    text.push_str(&format!(" ({} failed: {:?})", command, error));
                }
                text
            }
        }
    }
}

fn outcome_json(command: &str, outcome: &Outcome) -> Value {
    let result = match outcome {
        Outcome::Validated => Value::Null,
        Outcome::Formatted(person) | Outcome::Saved(person) => json!(person),
        Outcome::Processed(status) => json!(status),
    };
    json!({
        "command": command,
        "status": "ok",
        "result": result,
    })
}

fn format_person(person: &FormattedPerson) -> String {
    format!(
        "name: {}\nlastName: {}\ncpf: {}",
        person.name(),
        person.last_name(),
        person.cpf()
    )
}
