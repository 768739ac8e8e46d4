//! Person records and the pure operations on them
//!
//! A [`RawPerson`] is what callers hand in: both fields optional, free text.
//! [`format`] turns it into the canonical [`FormattedPerson`], and [`save`]
//! gates a formatted record on shape validity before it reaches a store.

use serde::{Deserialize, Serialize};

use crate::error::{PersonError, Result};

/// Characters removed from a CPF by [`format`]
pub const CPF_PUNCTUATION: [char; 2] = ['.', '-'];

/// Unvalidated input record as supplied by a caller
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RawPerson {
    /// Full name, first and last name separated by whitespace
    #[serde(default)]
    pub name: Option<String>,
    /// CPF, possibly punctuated like `123.456.789-00`
    #[serde(default)]
    pub cpf: Option<String>,
}

impl RawPerson {
    pub fn new(name: impl Into<String>, cpf: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            cpf: Some(cpf.into()),
        }
    }

    /// Name, with an absent value read as empty
    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or_default()
    }

    /// CPF, with an absent value read as empty
    pub fn cpf(&self) -> &str {
        self.cpf.as_deref().unwrap_or_default()
    }
}

/// Canonical record produced by [`format`]
///
/// Fields are optional so a record decoded from partial input serializes
/// back to the same keys. An empty string is present but still unsaveable.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FormattedPerson {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cpf: Option<String>,
    #[serde(rename = "lastName", default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
}

impl FormattedPerson {
    pub fn new(
        name: impl Into<String>,
        last_name: impl Into<String>,
        cpf: impl Into<String>,
    ) -> Self {
        Self {
            name: Some(name.into()),
            cpf: Some(cpf.into()),
            last_name: Some(last_name.into()),
        }
    }

    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or_default()
    }

    pub fn cpf(&self) -> &str {
        self.cpf.as_deref().unwrap_or_default()
    }

    pub fn last_name(&self) -> &str {
        self.last_name.as_deref().unwrap_or_default()
    }

    /// Whether the record carries everything a store needs
    pub fn is_saveable(&self) -> bool {
        !self.name().is_empty() && !self.cpf().is_empty()
    }
}

/// Rebuild the raw shape a formatted record came from.
impl From<&FormattedPerson> for RawPerson {
    fn from(person: &FormattedPerson) -> Self {
        let full_name = if person.last_name().is_empty() {
            person.name().to_string()
        } else {
            format!("{} {}", person.name(), person.last_name())
        };
        RawPerson::new(full_name, person.cpf())
    }
}

/// Check that both `name` and `cpf` are present and non-empty.
///
/// `name` is checked first, so a record missing both fields reports the name.
pub fn validate(record: &RawPerson) -> Result<()> {
    if record.name().is_empty() {
        return Err(PersonError::missing("name"));
    }
    if record.cpf().is_empty() {
        return Err(PersonError::missing("cpf"));
    }
    Ok(())
}

/// Split the name into first and last name and strip CPF punctuation.
///
/// The record is assumed to be valid already; absent fields format as empty.
pub fn format(record: &RawPerson) -> FormattedPerson {
    let mut tokens = record.name().split_whitespace();
    let name = tokens.next().unwrap_or_default().to_string();
    let last_name = tokens.collect::<Vec<_>>().join(" ");

    let cpf: String = record
        .cpf()
        .chars()
        .filter(|c| !CPF_PUNCTUATION.contains(c))
        .collect();

    FormattedPerson {
        name: Some(name),
        cpf: Some(cpf),
        last_name: Some(last_name),
    }
}

/// Gate a formatted record on shape validity. `lastName` is optional.
pub fn save(person: &FormattedPerson) -> Result<()> {
    if !person.is_saveable() {
        return Err(PersonError::SaveValidity {
            record: serde_json::to_string(person)?,
        });
    }
    Ok(())
}
