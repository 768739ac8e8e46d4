use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::io::Read;
use std::path::PathBuf;

use crate::error::Result;
use crate::output::Outcome;
use crate::person::{FormattedPerson, RawPerson};
use crate::pipeline::{PersonFormatter, PersonPipeline, PersonStore, PersonValidator};

/// Verbosity levels for output
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub enum VerbosityLevel {
    /// Only show failures
    Quiet,
    /// Show standard information
    #[default]
    Normal,
    /// Show the records involved as well
    Verbose,
}

/// Output format for command results
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text
    #[default]
    Human,
    /// One JSON document per invocation
    Json,
}

/// Validate, format and process person records
#[derive(Parser, Debug, Clone)]
#[command(name = "person-pipeline")]
#[command(about = "Validate, format and process person records (name and CPF)")]
#[command(version)]
pub struct Cli {
    /// Configuration file (TOML or JSON)
    #[arg(long = "config", global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(long = "format", value_enum, global = true)]
    pub output_format: Option<OutputFormat>,

    /// Enable verbose output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    /// Enable quiet mode (errors only)
    #[arg(
        short = 'q',
        long = "quiet",
        global = true,
        conflicts_with = "verbose"
    )]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Check that a raw record has a name and a CPF
    Validate(RecordArgs),
    /// Print the canonical form of a raw record
    Format(RecordArgs),
    /// Apply the save gate to an already formatted record
    Save(SaveArgs),
    /// Validate, format and save a raw record
    Process(RecordArgs),
}

/// Where a record comes from: a JSON document or individual flags
#[derive(Args, Debug, Clone, Default)]
pub struct RecordArgs {
    /// JSON file holding the record, `-` for stdin
    #[arg(short = 'i', long = "input", conflicts_with_all = ["name", "cpf"])]
    pub input: Option<PathBuf>,

    /// Person name
    #[arg(long = "name")]
    pub name: Option<String>,

    /// Person CPF
    #[arg(long = "cpf")]
    pub cpf: Option<String>,
}

#[derive(Args, Debug, Clone, Default)]
pub struct SaveArgs {
    #[command(flatten)]
    pub record: RecordArgs,

    /// Last name of the formatted record
    #[arg(long = "last-name", conflicts_with = "input")]
    pub last_name: Option<String>,
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn validate(&self) -> std::result::Result<(), String> {
        let input = match &self.command {
            Command::Validate(args) | Command::Format(args) | Command::Process(args) => {
                args.input.as_ref()
            }
            Command::Save(args) => args.record.input.as_ref(),
        };
        if let Some(path) = input
            && !is_stdin(path)
            && !path.exists()
        {
            return Err(format!("Input file does not exist: {}", path.display()));
        }
        Ok(())
    }
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Command::Validate(_) => "validate",
            Command::Format(_) => "format",
            Command::Save(_) => "save",
            Command::Process(_) => "process",
        }
    }

    /// Run the command against a pipeline.
    pub fn execute<V, F, S>(&self, pipeline: &PersonPipeline<V, F, S>) -> Result<Outcome>
    where
        V: PersonValidator,
        F: PersonFormatter,
        S: PersonStore,
    {
        match self {
            Command::Validate(args) => {
                pipeline.validate(&args.raw_person()?)?;
                Ok(Outcome::Validated)
            }
            Command::Format(args) => Ok(Outcome::Formatted(pipeline.format(&args.raw_person()?))),
            Command::Save(args) => {
                let person = args.formatted_person()?;
                pipeline.save(&person)?;
                Ok(Outcome::Saved(person))
            }
            Command::Process(args) => Ok(Outcome::Processed(pipeline.process(&args.raw_person()?)?)),
        }
    }
}

impl RecordArgs {
    pub fn raw_person(&self) -> Result<RawPerson> {
        match self.read_input()? {
            Some(content) => Ok(serde_json::from_str(&content)?),
            None => Ok(RawPerson {
                name: self.name.clone(),
                cpf: self.cpf.clone(),
            }),
        }
    }

    fn read_input(&self) -> Result<Option<String>> {
        let Some(path) = &self.input else {
            return Ok(None);
        };
        let content = if is_stdin(path) {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        } else {
            std::fs::read_to_string(path)?
        };
        Ok(Some(content))
    }
}

impl SaveArgs {
    pub fn formatted_person(&self) -> Result<FormattedPerson> {
        match self.record.read_input()? {
            Some(content) => Ok(serde_json::from_str(&content)?),
            None => Ok(FormattedPerson {
                name: self.record.name.clone(),
                cpf: self.record.cpf.clone(),
                last_name: self.last_name.clone(),
            }),
        }
    }
}

fn is_stdin(path: &std::path::Path) -> bool {
    path.as_os_str() == "-"
}
