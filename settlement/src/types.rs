//! Core types for settlement

use expense_ledger::report::format_amount;
use expense_ledger::{Currency, PersonId};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Gross amount one person owes another
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BilateralObligation {
    /// Debtor
    pub debtor: PersonId,

    /// Creditor
    pub creditor: PersonId,

    /// Gross amount owed
    pub gross_amount: Decimal,
}

/// Payment that settles part of the group's debts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettlementTransfer {
    /// Who pays
    pub debtor: PersonId,

    /// Who receives
    pub creditor: PersonId,

    /// Amount to pay
    pub amount: Decimal,
}

/// Net position of one person across all obligations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonPosition {
    /// Person
    pub person: PersonId,

    /// Total owed to others
    pub total_owed: Decimal,

    /// Total owed by others
    pub total_receivable: Decimal,

    /// Net position (positive = net receiver, negative = net payer)
    pub net_position: Decimal,
}

impl PersonPosition {
    /// Create new position
    pub fn new(person: PersonId) -> Self {
        Self {
            person,
            total_owed: Decimal::ZERO,
            total_receivable: Decimal::ZERO,
            net_position: Decimal::ZERO,
        }
    }

    /// Update position with obligation
    pub fn add_obligation(&mut self, amount: Decimal, is_debtor: bool) {
        if is_debtor {
            self.total_owed += amount;
        } else {
            self.total_receivable += amount;
        }
        self.net_position = self.total_receivable - self.total_owed;
    }

    /// Check if net payer (owes money)
    pub fn is_net_payer(&self) -> bool {
        self.net_position < Decimal::ZERO
    }

    /// Check if net receiver (receives money)
    pub fn is_net_receiver(&self) -> bool {
        self.net_position > Decimal::ZERO
    }

    /// Get absolute net position
    pub fn abs_net_position(&self) -> Decimal {
        self.net_position.abs()
    }
}

/// Result of netting a pairwise ledger
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SettlementPlan {
    /// Obligations after optional bilateral netting
    pub obligations: Vec<BilateralObligation>,

    /// Net position per person, in first-seen order
    pub positions: Vec<PersonPosition>,

    /// Transfers to execute
    pub transfers: Vec<SettlementTransfer>,

    /// Sum of the pairwise ledger before any netting
    pub total_gross_amount: Decimal,

    /// Sum of the transfers
    pub total_net_amount: Decimal,

    /// Number of recorded (debtor, creditor) pairs before netting
    pub gross_obligation_count: usize,

    /// Display unit
    pub currency: Currency,

    /// Decimal places in rendered amounts
    pub precision: u32,
}

impl SettlementPlan {
    /// Empty plan (nothing owed)
    pub fn empty(currency: Currency, precision: u32) -> Self {
        Self {
            obligations: vec![],
            positions: vec![],
            transfers: vec![],
            total_gross_amount: Decimal::ZERO,
            total_net_amount: Decimal::ZERO,
            gross_obligation_count: 0,
            currency,
            precision,
        }
    }

    /// Calculate netting efficiency
    pub fn calculate_efficiency(&self) -> f64 {
        if self.total_gross_amount == Decimal::ZERO {
            return 0.0;
        }

        let netted = self.total_gross_amount - self.total_net_amount;
        let efficiency = netted / self.total_gross_amount;
        efficiency.to_f64().unwrap_or(0.0)
    }

    /// Calculate savings from netting
    pub fn calculate_savings(&self) -> Decimal {
        self.total_gross_amount - self.total_net_amount
    }

    /// Nobody needs to pay anybody
    pub fn is_settled(&self) -> bool {
        self.transfers.is_empty()
    }

    /// Summary statistics
    pub fn stats(&self) -> NettingStats {
        NettingStats {
            person_count: self.positions.len(),
            gross_obligation_count: self.gross_obligation_count,
            net_transfer_count: self.transfers.len(),
            total_gross: self.total_gross_amount,
            total_net: self.total_net_amount,
            amount_saved: self.calculate_savings(),
            efficiency: self.calculate_efficiency(),
            transfers_eliminated: self
                .gross_obligation_count
                .saturating_sub(self.transfers.len()),
        }
    }
}

impl fmt::Display for SettlementPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "\nSettlement Plan (from pairwise debts):")?;
        if self.is_settled() {
            return writeln!(f, "Everyone is settled up.");
        }
        for transfer in &self.transfers {
            writeln!(
                f,
                "{} pays {} {} {}.",
                transfer.debtor,
                transfer.creditor,
                format_amount(transfer.amount, self.precision),
                self.currency
            )?;
        }
        writeln!(
            f,
            "{} payments instead of {} ({:.1}% netted).",
            self.transfers.len(),
            self.gross_obligation_count,
            self.calculate_efficiency() * 100.0
        )
    }
}

/// Netting statistics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NettingStats {
    /// Number of people with a position
    pub person_count: usize,

    /// Number of gross (debtor, creditor) pairs
    pub gross_obligation_count: usize,

    /// Number of net transfers
    pub net_transfer_count: usize,

    /// Total gross amount
    pub total_gross: Decimal,

    /// Total net amount
    pub total_net: Decimal,

    /// Amount saved
    pub amount_saved: Decimal,

    /// Netting efficiency (0.0 - 1.0)
    pub efficiency: f64,

    /// Number of transfers eliminated
    pub transfers_eliminated: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_person_position() {
        let mut position = PersonPosition::new(PersonId::new("Kartik"));

        // Owes 100
        position.add_obligation(dec!(100), true);
        assert_eq!(position.total_owed, dec!(100));
        assert!(position.is_net_payer());

        // Is owed 150
        position.add_obligation(dec!(150), false);
        assert_eq!(position.total_receivable, dec!(150));
        assert!(position.is_net_receiver());

        // Net position: +50
        assert_eq!(position.net_position, dec!(50));
        assert_eq!(position.abs_net_position(), dec!(50));
    }

    #[test]
    fn test_plan_efficiency() {
        let plan = SettlementPlan {
            total_gross_amount: dec!(1000),
            total_net_amount: dec!(300),
            gross_obligation_count: 6,
            transfers: vec![SettlementTransfer {
                debtor: PersonId::new("A"),
                creditor: PersonId::new("B"),
                amount: dec!(300),
            }],
            ..SettlementPlan::empty(Currency::default(), 2)
        };

        // Efficiency = (1000 - 300) / 1000 = 0.7
        assert_eq!(plan.calculate_efficiency(), 0.7);
        assert_eq!(plan.calculate_savings(), dec!(700));

        let stats = plan.stats();
        assert_eq!(stats.net_transfer_count, 1);
        assert_eq!(stats.transfers_eliminated, 5);
    }

    #[test]
    fn test_empty_plan_rendering() {
        let plan = SettlementPlan::empty(Currency::default(), 2);
        assert!(plan.is_settled());
        assert_eq!(plan.calculate_efficiency(), 0.0);
        assert_eq!(
            plan.to_string(),
            "\nSettlement Plan (from pairwise debts):\nEveryone is settled up.\n"
        );
    }
}
