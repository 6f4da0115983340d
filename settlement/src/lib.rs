//! Splitter Settlement
//!
//! Turns a pairwise ledger of "who owes whom" into the smallest practical
//! set of payments that settles everyone up.
//!
//! # Algorithm
//!
//! 1. **Obligations**: one gross obligation per recorded (debtor, creditor) pair
//! 2. **Bilateral netting**: A owes B 100, B owes A 80 → A owes B 20
//! 3. **Positions**: net position per person (receivable − owed)
//! 4. **Transfers**: greedily match the largest payer with the largest receiver
//!
//! # Example
//!
//! ```
//! use expense_ledger::LedgerAccumulator;
//! use expense_settlement::NettingEngine;
//! use rust_decimal::Decimal;
//!
//! # fn main() -> expense_settlement::Result<()> {
//! let mut ledger = LedgerAccumulator::new();
//! ledger.record_expense("Asha", Decimal::from(90), &["Asha", "Ravi", "Meera"], None)?;
//! ledger.record_expense("Ravi", Decimal::from(30), &["Meera"], None)?;
//!
//! let plan = NettingEngine::new(true).compute_plan(&ledger.transactions())?;
//! println!("{} payments settle the group", plan.transfers.len());
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(
    missing_docs,
    rust_2018_idioms,
    missing_debug_implementations,
    clippy::all
)]

pub mod types;
pub mod netting;
pub mod error;

// Re-exports
pub use error::{Error, Result};
pub use types::*;
pub use netting::NettingEngine;
