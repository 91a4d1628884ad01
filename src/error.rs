use thiserror::Error;

/// Result alias used throughout the fleet model.
pub type Result<T> = std::result::Result<T, FleetError>;

/// Coarse category of a [`FleetError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    Range,
    Null,
    State,
    Input,
}

#[derive(Debug, Error)]
pub enum FleetError {
    /// An argument or builder field violates a domain rule.
    #[error("validation failed: {0}")]
    Validation(String),

    /// A geographic coordinate is outside its legal bounds.
    #[error("out of range: {0}")]
    OutOfRange(String),

    /// A required value was never supplied.
    #[error("{0} is required")]
    Missing(&'static str),

    /// The ship has not reported any position yet.
    #[error("no position history available")]
    NoPositionHistory,

    /// No ship of the requested kind is registered under the IMO number.
    #[error("{0} not found")]
    NotFound(String),

    /// An AIS timestamp could not be parsed.
    #[error("invalid timestamp {value:?}: {source}")]
    Timestamp {
        value: String,
        source: chrono::ParseError,
    },
}

impl FleetError {
    pub(crate) fn validation(message: impl Into<String>) -> Self {
        FleetError::Validation(message.into())
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            FleetError::Validation(_) => ErrorKind::Validation,
            FleetError::OutOfRange(_) => ErrorKind::Range,
            FleetError::Missing(_) => ErrorKind::Null,
            FleetError::NoPositionHistory | FleetError::NotFound(_) => ErrorKind::State,
            FleetError::Timestamp { .. } => ErrorKind::Input,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_maps_state_errors() {
        assert_eq!(FleetError::NoPositionHistory.kind(), ErrorKind::State);
        assert_eq!(
            FleetError::NotFound("Tanker ship".into()).kind(),
            ErrorKind::State
        );
    }

    #[test]
    fn test_display_messages() {
        assert_eq!(
            FleetError::NotFound("Tanker ship".into()).to_string(),
            "Tanker ship not found"
        );
        assert_eq!(FleetError::Missing("IMO").to_string(), "IMO is required");
        assert_eq!(
            FleetError::validation("Invalid tank ID").to_string(),
            "validation failed: Invalid tank ID"
        );
    }
}
