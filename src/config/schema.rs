use serde::Deserialize;
use thiserror::Error;

/// Name of the global logging object whose statements get removed.
pub const DEFAULT_LOGGING_OBJECT: &str = "console";

/// Options recognized by the console removal engine.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct RemovalOptions {
    /// Base identifier of removed calls (`console` in `console.log(x)`).
    #[serde(alias = "loggingObjectName")]
    pub logging_object_name: String,
}

impl Default for RemovalOptions {
    fn default() -> Self {
        Self {
            logging_object_name: DEFAULT_LOGGING_OBJECT.to_string(),
        }
    }
}

impl RemovalOptions {
    pub fn with_logging_object(name: impl Into<String>) -> Self {
        Self {
            logging_object_name: name.into(),
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        let name = &self.logging_object_name;
        if name.trim().is_empty() {
            return Err(ValidationError::EmptyLoggingObject);
        }
        if !is_identifier(name) {
            return Err(ValidationError::NotAnIdentifier { name: name.clone() });
        }
        Ok(())
    }
}

/// Plain JavaScript identifier: `[A-Za-z_$][A-Za-z0-9_$]*`, plus non-ASCII letters.
fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    let starts = |c: char| c == '_' || c == '$' || c.is_alphabetic();
    starts(first) && chars.all(|c| starts(c) || c.is_alphanumeric())
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("logging_object_name must not be empty")]
    EmptyLoggingObject,

    #[error("logging_object_name '{name}' is not a plain identifier")]
    NotAnIdentifier { name: String },
}
