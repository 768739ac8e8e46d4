//! # person-pipeline Library
//!
//! Validates, formats and saves person records (a name and a Brazilian CPF).
//! The steps are plain functions in [`person`]; [`pipeline`] composes them
//! behind traits so any step can be replaced by the caller.

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod output;
pub mod person;
pub mod pipeline;

pub use cli::{Cli, Command, OutputFormat, VerbosityLevel};
pub use config::{Config, ConfigError, ConfigManager, EnvProvider};
pub use error::{PersonError, Result};
pub use output::{Outcome, Output};
pub use person::{FormattedPerson, RawPerson, format, save, validate};
pub use pipeline::{
    DefaultFormatter, DefaultValidator, NoopStore, PersonFormatter, PersonPipeline, PersonStore,
    PersonValidator, STATUS_OK,
};
