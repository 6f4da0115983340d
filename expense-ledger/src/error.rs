//! Error types for the expense ledger

use rust_decimal::Decimal;
use thiserror::Error;

/// Result type for ledger operations
pub type Result<T> = std::result::Result<T, Error>;

/// Ledger errors
#[derive(Error, Debug)]
pub enum Error {
    /// Expense has no participants to split between
    #[error("Invalid input: expense has no participants")]
    EmptyParticipants,

    /// Expense amount is zero or negative
    #[error("Invalid amount: {0} (must be positive)")]
    InvalidAmount(Decimal),

    /// A balance or debt left the representable decimal range
    #[error("Calculation overflow")]
    CalculationOverflow,

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(format!("Failed to parse config: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            Error::EmptyParticipants.to_string(),
            "Invalid input: expense has no participants"
        );
        assert_eq!(
            Error::InvalidAmount(Decimal::new(-500, 2)).to_string(),
            "Invalid amount: -5.00 (must be positive)"
        );
        assert_eq!(Error::CalculationOverflow.to_string(), "Calculation overflow");
    }
}
