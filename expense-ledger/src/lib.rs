//! Splitter Expense Ledger
//!
//! In-memory accumulator for expenses shared among a fixed group of people.
//!
//! # Architecture
//!
//! - **Net balances**: one signed running total per person
//! - **Pairwise ledger**: directional amounts owed between two people
//! - **Reports**: balance status lines and netted "who owes whom" debts
//!
//! # Invariants
//!
//! - Entries are created on first reference and never deleted
//! - Reads never create entries
//! - Iteration follows first-seen order, so reports are deterministic
//! - The pairwise ledger total equals the total debited from non-payers
//!
//! # Example
//!
//! ```
//! use expense_ledger::{LedgerAccumulator, PersonId};
//! use rust_decimal::Decimal;
//!
//! let mut ledger = LedgerAccumulator::new();
//! ledger
//!     .record_expense("Asha", Decimal::from(100), &["Asha", "Ravi"], Some("Dinner"))
//!     .unwrap();
//!
//! assert_eq!(ledger.balance_of(&PersonId::new("Ravi")), Decimal::from(-50));
//! for line in ledger.summarize_balances() {
//!     println!("{line}");
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(
    missing_docs,
    rust_2018_idioms,
    missing_debug_implementations,
    clippy::all
)]

pub mod types;
pub mod balances;
pub mod pairwise;
pub mod accumulator;
pub mod report;
pub mod error;
pub mod config;

// Re-exports
pub use error::{Error, Result};
pub use types::{Currency, Expense, PersonId, SplitMode};
pub use balances::NetBalances;
pub use pairwise::PairwiseLedger;
pub use accumulator::LedgerAccumulator;
pub use report::{BalanceLine, BalanceStatus, Debt, TransactionSummary};
pub use config::Config;
