//! Net balance per person
//!
//! Positive balance = is owed money overall, negative = owes money.

use crate::{types::PersonId, Error, Result};
use indexmap::IndexMap;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Net balances keyed by person, in first-seen order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NetBalances {
    entries: IndexMap<PersonId, Decimal>,
}

impl NetBalances {
    /// Create empty balances
    pub fn new() -> Self {
        Self::default()
    }

    /// Get-or-insert-zero access to a person's balance
    pub fn entry_mut(&mut self, person: &PersonId) -> &mut Decimal {
        self.entries.entry(person.clone()).or_insert(Decimal::ZERO)
    }

    /// Add to a person's balance
    pub fn credit(&mut self, person: &PersonId, amount: Decimal) -> Result<()> {
        let balance = self.entry_mut(person);
        *balance = balance
            .checked_add(amount)
            .ok_or(Error::CalculationOverflow)?;
        Ok(())
    }

    /// Subtract from a person's balance
    pub fn debit(&mut self, person: &PersonId, amount: Decimal) -> Result<()> {
        let balance = self.entry_mut(person);
        *balance = balance
            .checked_sub(amount)
            .ok_or(Error::CalculationOverflow)?;
        Ok(())
    }

    /// Overwrite a person's balance, keeping their position if already seen
    pub fn set(&mut self, person: PersonId, balance: Decimal) {
        self.entries.insert(person, balance);
    }

    /// Balance of a person (zero if never seen); does not insert
    pub fn get(&self, person: &str) -> Decimal {
        self.entries.get(person).copied().unwrap_or(Decimal::ZERO)
    }

    /// Whether the person has an entry
    pub fn contains(&self, person: &str) -> bool {
        self.entries.contains_key(person)
    }

    /// Iterate in first-seen order
    pub fn iter(&self) -> impl Iterator<Item = (&PersonId, &Decimal)> + '_ {
        self.entries.iter()
    }

    /// Number of people with an entry
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// No entries yet
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all balances
    pub fn total(&self) -> Decimal {
        self.entries.values().copied().sum()
    }
}

impl<'a> IntoIterator for &'a NetBalances {
    type Item = (&'a PersonId, &'a Decimal);
    type IntoIter = indexmap::map::Iter<'a, PersonId, Decimal>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
