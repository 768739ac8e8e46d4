//! Validate → format → save, composed behind injectable steps
//!
//! Each step sits behind a trait so callers (and tests) can swap one
//! implementation without touching the others. [`PersonPipeline::standard`]
//! wires the free functions from [`crate::person`].

use tracing::{debug, warn};

use crate::error::Result;
use crate::person::{self, FormattedPerson, RawPerson};

/// Status returned by [`PersonPipeline::process`] when every step succeeds
pub const STATUS_OK: &str = "ok";

/// Checks a raw record before it is formatted
pub trait PersonValidator {
    fn validate(&self, record: &RawPerson) -> Result<()>;
}

/// Turns a valid raw record into its canonical shape
pub trait PersonFormatter {
    fn format(&self, record: &RawPerson) -> FormattedPerson;
}

/// Receives formatted records
pub trait PersonStore {
    fn save(&self, person: &FormattedPerson) -> Result<()>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultValidator;

impl PersonValidator for DefaultValidator {
    fn validate(&self, record: &RawPerson) -> Result<()> {
        person::validate(record)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultFormatter;

impl PersonFormatter for DefaultFormatter {
    fn format(&self, record: &RawPerson) -> FormattedPerson {
        person::format(record)
    }
}

/// Store that applies the save gate and keeps nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopStore;

impl PersonStore for NoopStore {
    fn save(&self, person: &FormattedPerson) -> Result<()> {
        person::save(person)?;
        debug!(name = person.name(), "record accepted by no-op store");
        Ok(())
    }
}

/// The composed pipeline
#[derive(Debug, Clone)]
pub struct PersonPipeline<V = DefaultValidator, F = DefaultFormatter, S = NoopStore> {
    validator: V,
    formatter: F,
    store: S,
}

impl<V, F, S> PersonPipeline<V, F, S>
where
    V: PersonValidator,
    F: PersonFormatter,
    S: PersonStore,
{
    pub fn new(validator: V, formatter: F, store: S) -> Self {
        Self {
            validator,
            formatter,
            store,
        }
    }

    pub fn validate(&self, record: &RawPerson) -> Result<()> {
        self.validator.validate(record)
    }

    pub fn format(&self, record: &RawPerson) -> FormattedPerson {
        self.formatter.format(record)
    }

    pub fn save(&self, person: &FormattedPerson) -> Result<()> {
        self.store.save(person)
    }

    /// Run validate, format and save in order.
    ///
    /// Returns [`STATUS_OK`] on success. Errors from any step are returned
    /// unchanged and stop the chain.
    pub fn process(&self, record: &RawPerson) -> Result<&'static str> {
        self.validate(record)
            .inspect_err(|e| warn!(error = %e, "record failed validation"))?;
        debug!("record validated");

        let person = self.format(record);
        debug!(
            name = person.name(),
            last_name = person.last_name(),
            "record formatted"
        );

        self.save(&person)
            .inspect_err(|e| warn!(error = %e, "record failed to save"))?;
        debug!("record saved");

        Ok(STATUS_OK)
    }
}

impl PersonPipeline {
    /// Pipeline built from the default steps.
    pub fn standard() -> Self {
        Self::new(DefaultValidator, DefaultFormatter, NoopStore)
    }
}

impl Default for PersonPipeline {
    fn default() -> Self {
        Self::standard()
    }
}

impl<V, F> PersonPipeline<V, F, NoopStore> {
    /// Replace the store, keeping the other steps.
    pub fn with_store<S: PersonStore>(self, store: S) -> PersonPipeline<V, F, S> {
        PersonPipeline {
            validator: self.validator,
            formatter: self.formatter,
            store,
        }
    }
}
