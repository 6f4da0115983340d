//! Balance and transaction reports
//!
//! # Transaction netting
//!
//! ```text
//! Pairwise ledger:
//!   B owes A: 50
//!   A owes B: 30
//!
//! Net debts:
//!   B owes A: 20      (A → B entry is -20 and is not reported)
//! ```
//!
//! The netted debts are computed once and rendered in two formats: a
//! detailed listing and a "total amounts owed" summary.

use crate::{
    pairwise::PairwiseLedger,
    types::{Currency, PersonId},
};
use indexmap::IndexMap;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Render an amount with a fixed number of decimal places
pub fn format_amount(amount: Decimal, precision: u32) -> String {
    let rounded = amount.round_dp_with_strategy(precision, RoundingStrategy::MidpointAwayFromZero);
    format!("{:.*}", precision as usize, rounded)
}

/// Where a person stands overall
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "amount", rename_all = "snake_case")]
pub enum BalanceStatus {
    /// Others owe this person the amount
    IsOwed(Decimal),
    /// This person owes the amount
    Owes(Decimal),
    /// Balance is exactly zero
    Settled,
}

impl BalanceStatus {
    /// Classify a signed balance
    pub fn from_balance(balance: Decimal) -> Self {
        if balance > Decimal::ZERO {
            BalanceStatus::IsOwed(balance)
        } else if balance < Decimal::ZERO {
            BalanceStatus::Owes(-balance)
        } else {
            BalanceStatus::Settled
        }
    }
}

/// One line of the balance summary
#[derive(Debug, Clone, Copy)]
pub struct BalanceLine<'a> {
    /// Person this line describes
    pub person: &'a PersonId,

    /// Classified balance
    pub status: BalanceStatus,

    currency: &'a Currency,
    precision: u32,
}

impl<'a> BalanceLine<'a> {
    pub(crate) fn new(
        person: &'a PersonId,
        balance: Decimal,
        currency: &'a Currency,
        precision: u32,
    ) -> Self {
        Self {
            person,
            status: BalanceStatus::from_balance(balance),
            currency,
            precision,
        }
    }
}

impl fmt::Display for BalanceLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.status {
            BalanceStatus::IsOwed(amount) => write!(
                f,
                "{} is owed {} {}.",
                self.person,
                format_amount(amount, self.precision),
                self.currency
            ),
            BalanceStatus::Owes(amount) => write!(
                f,
                "{} owes {} {}.",
                self.person,
                format_amount(amount, self.precision),
                self.currency
            ),
            BalanceStatus::Settled => write!(f, "{} is settled up.", self.person),
        }
    }
}

/// Net amount one person owes another
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Debt {
    /// Who pays
    pub debtor: PersonId,

    /// Who receives
    pub creditor: PersonId,

    /// Net amount, always positive
    pub amount: Decimal,
}

/// Netted "who owes whom" view of a pairwise ledger
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionSummary {
    /// Positive net debts in first-seen order
    pub debts: Vec<Debt>,

    /// Display unit
    pub currency: Currency,

    /// Decimal places in rendered amounts
    pub precision: u32,
}

impl TransactionSummary {
    /// Net every recorded pair against its reverse
    pub fn from_ledger(ledger: &PairwiseLedger, currency: Currency, precision: u32) -> Self {
        let mut totals: IndexMap<PersonId, IndexMap<PersonId, Decimal>> = IndexMap::new();

        for (debtor, creditor, amount) in ledger.entries() {
            *totals
                .entry(debtor.clone())
                .or_default()
                .entry(creditor.clone())
                .or_insert(Decimal::ZERO) += amount;
            *totals
                .entry(creditor.clone())
                .or_default()
                .entry(debtor.clone())
                .or_insert(Decimal::ZERO) -= amount;
        }

        let debts = totals
            .into_iter()
            .flat_map(|(debtor, owed)| {
                owed.into_iter()
                    .filter(|(_, amount)| *amount > Decimal::ZERO)
                    .map(move |(creditor, amount)| Debt {
                        debtor: debtor.clone(),
                        creditor,
                        amount,
                    })
            })
            .collect();

        Self {
            debts,
            currency,
            precision,
        }
    }

    /// Net amount `debtor` owes `creditor` (zero if none)
    pub fn owed(&self, debtor: &str, creditor: &str) -> Decimal {
        self.debts
            .iter()
            .find(|d| d.debtor.as_str() == debtor && d.creditor.as_str() == creditor)
            .map(|d| d.amount)
            .unwrap_or(Decimal::ZERO)
    }

    /// Sum of all net debts
    pub fn total_owed(&self) -> Decimal {
        self.debts.iter().map(|d| d.amount).sum()
    }

    /// Nobody owes anybody
    pub fn is_settled(&self) -> bool {
        self.debts.is_empty()
    }

    /// `"A owes B 20.00 INR."` lines
    pub fn detailed_lines(&self) -> impl Iterator<Item = String> + '_ {
        self.debts.iter().map(move |d| {
            format!(
                "{} owes {} {} {}.",
                d.debtor,
                d.creditor,
                format_amount(d.amount, self.precision),
                self.currency
            )
        })
    }

    /// `"A owes B a total of 20.00 INR."` lines
    pub fn summary_lines(&self) -> impl Iterator<Item = String> + '_ {
        self.debts.iter().map(move |d| {
            format!(
                "{} owes {} a total of {} {}.",
                d.debtor,
                d.creditor,
                format_amount(d.amount, self.precision),
                self.currency
            )
        })
    }
}

impl fmt::Display for TransactionSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "\nDetailed Transactions:")?;
        for line in self.detailed_lines() {
            writeln!(f, "{}", line)?;
        }

        writeln!(f, "\nSummary of Total Amounts Owed:")?;
        for line in self.summary_lines() {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
