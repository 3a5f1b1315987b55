use std::fmt;

// Domain-level errors for the chat relay.
#[derive(Debug, Clone, PartialEq)]
pub enum RelayError {
    InvalidJsonBody,
    MissingModel,
    InvalidMessages,
    InvalidTemperature,
    MissingApiKey,
    UpstreamUnreachable(String),
}

impl fmt::Display for RelayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RelayError::InvalidJsonBody => write!(f, "Invalid JSON body"),
            RelayError::MissingModel => write!(f, "Missing \"model\""),
            RelayError::InvalidMessages => write!(f, "\"messages\" must be a non-empty array"),
            RelayError::InvalidTemperature => write!(f, "\"temperature\" must be a number"),
            RelayError::MissingApiKey => {
                write!(f, "Server misconfiguration: OPENAI_API_KEY not set")
            }
            RelayError::UpstreamUnreachable(detail) => {
                write!(f, "Upstream request failed: {detail}")
            }
        }
    }
}

impl std::error::Error for RelayError {}
