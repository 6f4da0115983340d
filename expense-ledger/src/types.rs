//! Core types for the expense ledger
//!
//! All amounts use `Decimal` so splits are exact base-10 arithmetic.

use crate::{Error, Result};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;
use std::str::FromStr;

/// Person identifier (display name, case-sensitive)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PersonId(String);

impl PersonId {
    /// Create new person ID
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Get as string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PersonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Borrow<str> for PersonId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for PersonId {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for PersonId {
    fn from(name: String) -> Self {
        Self(name)
    }
}

/// Display unit appended to rendered amounts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Currency(String);

impl Currency {
    /// Create new currency unit
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Unit code
    pub fn code(&self) -> &str {
        &self.0
    }
}

impl Default for Currency {
    fn default() -> Self {
        Self::new("INR")
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// How an expense is split between the payer and the participants
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SplitMode {
    /// Payer is credited the full amount, then debited one share per
    /// non-payer participant on top of each participant's own debit.
    ///
    /// Payer balance after one expense: `amount - share * (n - 1)`.
    /// Balances only sum to zero for expenses between exactly two people.
    #[default]
    Legacy,

    /// Payer is credited the full amount and every participant, payer
    /// included, is debited one share. Balances always sum to zero.
    Even,
}

impl SplitMode {
    /// Config/env name
    pub fn as_str(&self) -> &'static str {
        match self {
            SplitMode::Legacy => "legacy",
            SplitMode::Even => "even",
        }
    }
}

impl FromStr for SplitMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "legacy" => Ok(SplitMode::Legacy),
            "even" => Ok(SplitMode::Even),
            other => Err(Error::Config(format!("Unknown split mode: {}", other))),
        }
    }
}

impl fmt::Display for SplitMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single shared expense
///
/// Not stored by the ledger; it only carries the inputs of one
/// [`record`](crate::LedgerAccumulator::record) call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// Who paid
    pub payer: PersonId,

    /// Total amount paid
    pub amount: Decimal,

    /// People sharing the expense (may or may not include the payer)
    pub participants: Vec<PersonId>,

    /// What was paid for
    #[serde(default)]
    pub description: Option<String>,
}

impl Expense {
    /// Create new expense
    pub fn new<I, P>(payer: impl Into<PersonId>, amount: Decimal, participants: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PersonId>,
    {
        Self {
            payer: payer.into(),
            amount,
            participants: participants.into_iter().map(Into::into).collect(),
            description: None,
        }
    }

    /// Attach a description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Check amount and participants
    pub fn validate(&self) -> Result<()> {
        if self.participants.is_empty() {
            return Err(Error::EmptyParticipants);
        }
        if self.amount <= Decimal::ZERO {
            return Err(Error::InvalidAmount(self.amount));
        }
        Ok(())
    }

    /// One participant's share (`amount / participant count`)
    pub fn share(&self) -> Result<Decimal> {
        self.validate()?;
        Ok(self.amount / Decimal::from(self.participants.len()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_person_id_is_case_sensitive() {
        assert_ne!(PersonId::new("geet"), PersonId::new("Geet"));
        assert_eq!(PersonId::from("Geet").as_str(), "Geet");
    }

    #[test]
    fn test_split_mode_parse() {
        assert_eq!("legacy".parse::<SplitMode>().unwrap(), SplitMode::Legacy);
        assert_eq!(" Even ".parse::<SplitMode>().unwrap(), SplitMode::Even);
        assert!("halves".parse::<SplitMode>().is_err());
        assert_eq!(SplitMode::default(), SplitMode::Legacy);
    }

    #[test]
    fn test_expense_share() {
        let expense = Expense::new("A", dec!(3073), ["A", "B", "C", "D", "E"])
            .with_description("Diesel");
        assert_eq!(expense.share().unwrap(), dec!(614.6));
        assert_eq!(expense.description.as_deref(), Some("Diesel"));
    }

    #[test]
    fn test_expense_validation() {
        let empty: [&str; 0] = [];
        assert!(matches!(
            Expense::new("A", dec!(10), empty).validate(),
            Err(Error::EmptyParticipants)
        ));
        assert!(matches!(
            Expense::new("A", dec!(0), ["B"]).validate(),
            Err(Error::InvalidAmount(_))
        ));
        assert!(matches!(
            Expense::new("A", dec!(-1), ["B"]).share(),
            Err(Error::InvalidAmount(_))
        ));
    }
}
