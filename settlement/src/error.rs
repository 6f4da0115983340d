//! Error types for settlement

use thiserror::Error;

/// Result type for settlement operations
pub type Result<T> = std::result::Result<T, Error>;

/// Settlement errors
#[derive(Error, Debug)]
pub enum Error {
    /// Ledger error
    #[error("Ledger error: {0}")]
    Ledger(#[from] expense_ledger::Error),

    /// Netting algorithm error
    #[error("Netting error: {0}")]
    Netting(String),
}
