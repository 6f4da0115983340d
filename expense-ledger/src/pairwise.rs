//! Pairwise ledger of directional amounts owed
//!
//! `ledger[A][B]` is the total A owes B across every recorded expense, before
//! cancelling against `ledger[B][A]`. Entries are only created by
//! [`PairwiseLedger::record`]; lookups never insert.

use crate::{types::PersonId, Error, Result};
use indexmap::IndexMap;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Amounts owed, keyed debtor → creditor, in first-seen order at both levels
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PairwiseLedger {
    entries: IndexMap<PersonId, IndexMap<PersonId, Decimal>>,
}

impl PairwiseLedger {
    /// Create empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `amount` to what `debtor` owes `creditor`
    pub fn record(
        &mut self,
        debtor: &PersonId,
        creditor: &PersonId,
        amount: Decimal,
    ) -> Result<()> {
        let owed = self
            .get(debtor.as_str(), creditor.as_str())
            .checked_add(amount)
            .ok_or(Error::CalculationOverflow)?;
        self.set(debtor.clone(), creditor.clone(), owed);
        Ok(())
    }

    /// Overwrite what `debtor` owes `creditor`
    pub fn set(&mut self, debtor: PersonId, creditor: PersonId, amount: Decimal) {
        self.entries
            .entry(debtor)
            .or_default()
            .insert(creditor, amount);
    }

    /// What `debtor` owes `creditor` (zero if never recorded)
    pub fn get(&self, debtor: &str, creditor: &str) -> Decimal {
        self.entries
            .get(debtor)
            .and_then(|owed| owed.get(creditor))
            .copied()
            .unwrap_or(Decimal::ZERO)
    }

    /// Everyone `debtor` owes, with amounts
    pub fn owed_by(&self, debtor: &str) -> Option<&IndexMap<PersonId, Decimal>> {
        self.entries.get(debtor)
    }

    /// Iterate debtors in first-seen order
    pub fn iter(&self) -> impl Iterator<Item = (&PersonId, &IndexMap<PersonId, Decimal>)> + '_ {
        self.entries.iter()
    }

    /// Flat `(debtor, creditor, amount)` view in first-seen order
    pub fn entries(&self) -> impl Iterator<Item = (&PersonId, &PersonId, Decimal)> + '_ {
        self.entries.iter().flat_map(|(debtor, owed)| {
            owed.iter()
                .map(move |(creditor, amount)| (debtor, creditor, *amount))
        })
    }

    /// Number of recorded ordered pairs
    pub fn pair_count(&self) -> usize {
        self.entries.values().map(IndexMap::len).sum()
    }

    /// No pairs recorded yet
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of every recorded amount
    pub fn total(&self) -> Decimal {
        self.entries().map(|(_, _, amount)| amount).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_record_accumulates_per_pair() {
        let mut ledger = PairwiseLedger::new();
        let a = PersonId::new("A");
        let b = PersonId::new("B");

        ledger.record(&b, &a, dec!(50)).unwrap();
        ledger.record(&b, &a, dec!(25.5)).unwrap();
        ledger.record(&a, &b, dec!(10)).unwrap();

        assert_eq!(ledger.get("B", "A"), dec!(75.5));
        assert_eq!(ledger.get("A", "B"), dec!(10));
        assert_eq!(ledger.pair_count(), 2);
        assert_eq!(ledger.total(), dec!(85.5));
    }

    #[test]
    fn test_record_overflow_leaves_entry() {
        let mut ledger = PairwiseLedger::new();
        let (a, b) = (PersonId::new("A"), PersonId::new("B"));
        ledger.record(&b, &a, Decimal::MAX).unwrap();

        assert!(matches!(
            ledger.record(&b, &a, Decimal::ONE),
            Err(Error::CalculationOverflow)
        ));
        assert_eq!(ledger.get("B", "A"), Decimal::MAX);
        assert_eq!(ledger.pair_count(), 1);
    }

    #[test]
    fn test_reads_do_not_insert() {
        let ledger = PairwiseLedger::new();
        assert_eq!(ledger.get("X", "Y"), Decimal::ZERO);
        assert!(ledger.owed_by("X").is_none());
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_entries_in_first_seen_order() {
        let mut ledger = PairwiseLedger::new();
        let (a, b, c) = (PersonId::new("A"), PersonId::new("B"), PersonId::new("C"));

        ledger.record(&c, &a, dec!(1)).unwrap();
        ledger.record(&b, &a, dec!(2)).unwrap();
        ledger.record(&c, &b, dec!(3)).unwrap();

        let flat: Vec<(&str, &str)> = ledger
            .entries()
            .map(|(d, c, _)| (d.as_str(), c.as_str()))
            .collect();
        assert_eq!(flat, vec![("C", "A"), ("C", "B"), ("B", "A")]);
    }
}
