use std::fmt;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("could not read config file `{0}`: {1}")]
    Io(PathBuf, #[source] io::Error),

    #[error("could not parse config: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("could not serialize config: {0}")]
    TomlOutput(#[from] toml::ser::Error),

    #[error("could not serialize to JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("could not write output: {0}")]
    Output(#[from] io::Error),

    #[error(transparent)]
    Invalid(#[from] Diagnostics),
}

/// One malformed value, keyed by its path in the config document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    /// e.g. `socials[2].href`
    pub field: String,
    pub message: String,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.field, self.message)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Diagnostics {
    errors: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn error(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.push(Diagnostic {
            field: field.into(),
            message: message.into(),
        });
    }

    pub fn errors(&self) -> &[Diagnostic] {
        &self.errors
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Whether any diagnostic was reported for `field`.
    pub fn has_field(&self, field: &str) -> bool {
        self.errors.iter().any(|e| e.field == field)
    }

    pub fn into_result(self) -> Result<(), Self> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for Diagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "config validation failed:")?;
        for err in &self.errors {
            write!(f, "\n  {}", err)?;
        }
        if self.errors.len() > 1 {
            write!(f, "\nfound {} errors", self.errors.len())?;
        }
        Ok(())
    }
}

impl std::error::Error for Diagnostics {}
