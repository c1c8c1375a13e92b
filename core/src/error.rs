// roster/src/error.rs
use anyhow::Error as AnyhowError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RosterError {
    /// A core API was called with arguments that break its contract.
    /// The call site has to be fixed; nothing is retried.
    #[error("{message}")]
    Contract { message: String },

    /// Every rule that failed while parsing a plain record, in rule order.
    #[error("Invalid {subject}: {}", errors.join(", "))]
    InvalidRecord { subject: String, errors: Vec<String> },

    #[error("Error in subscriber callback for event '{event}': {source}")]
    Subscriber {
        event: String,
        #[source]
        source: AnyhowError,
    },

    #[error("Internal roster error: {0}")]
    Internal(String),
}

impl RosterError {
    pub fn contract(message: impl Into<String>) -> Self {
        RosterError::Contract { message: message.into() }
    }

    pub fn invalid_record(subject: impl Into<String>, errors: Vec<String>) -> Self {
        RosterError::InvalidRecord {
            subject: subject.into(),
            errors,
        }
    }

    /// The accumulated validation messages, if this is an `InvalidRecord` error.
    pub fn validation_errors(&self) -> Option<&[String]> {
        match self {
            RosterError::InvalidRecord { errors, .. } => Some(errors),
            _ => None,
        }
    }
}

// Subscribers report failures through anyhow; a RosterError raised deeper in a
// chain of subscribers is recovered as-is instead of being wrapped again.
impl From<AnyhowError> for RosterError {
    fn from(err: AnyhowError) -> Self {
        match err.downcast::<RosterError>() {
            Ok(roster_err) => roster_err,
            Err(other) => RosterError::Internal(format!("{:#}", other)),
        }
    }
}

pub type RosterResult<T, E = RosterError> = std::result::Result<T, E>;
