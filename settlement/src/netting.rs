//! Multilateral netting of a pairwise ledger
//!
//! # Example
//!
//! ```text
//! Gross obligations:
//!   A owes B: 100
//!   B owes C: 80
//!   C owes A: 50
//!
//! Net positions:
//!   A: -50 (net payer)
//!   B: +20 (net receiver)
//!   C: +30 (net receiver)
//!
//! Transfers:
//!   A pays C: 30
//!   A pays B: 20
//!
//! Savings: 230 → 50 (78% reduction)
//! ```

use crate::{types::*, Error, Result};
use expense_ledger::config::SettlementConfig;
use expense_ledger::{Currency, PairwiseLedger, PersonId};
use indexmap::IndexMap;
use rust_decimal::Decimal;

/// Residue below this is division rounding, not money owed
fn dust() -> Decimal {
    Decimal::new(1, 12)
}

/// Netting engine
#[derive(Debug, Clone)]
pub struct NettingEngine {
    /// Enable bilateral optimization
    enable_bilateral: bool,

    /// Display unit for plans
    currency: Currency,

    /// Decimal places in rendered amounts
    precision: u32,
}

impl NettingEngine {
    /// Create new netting engine
    pub fn new(enable_bilateral: bool) -> Self {
        Self {
            enable_bilateral,
            currency: Currency::default(),
            precision: 2,
        }
    }

    /// Create netting engine from ledger configuration
    pub fn from_config(config: &expense_ledger::Config) -> Self {
        Self::from_settlement_config(&config.settlement)
            .with_display(config.currency.clone(), config.precision)
    }

    /// Create netting engine from the settlement section only
    pub fn from_settlement_config(config: &SettlementConfig) -> Self {
        Self::new(config.enable_bilateral)
    }

    /// Set display unit and precision used when rendering plans
    pub fn with_display(mut self, currency: Currency, precision: u32) -> Self {
        self.currency = currency;
        self.precision = precision;
        self
    }

    /// Compute a settlement plan for the ledger
    pub fn compute_plan(&self, ledger: &PairwiseLedger) -> Result<SettlementPlan> {
        let gross = self.build_obligations(ledger);
        if gross.is_empty() {
            return Ok(SettlementPlan::empty(self.currency.clone(), self.precision));
        }

        let total_gross_amount: Decimal = gross.iter().map(|o| o.gross_amount).sum();
        let gross_obligation_count = gross.len();

        // Step 1: Optional bilateral netting
        let obligations = if self.enable_bilateral {
            self.apply_bilateral_netting(gross)
        } else {
            gross
        };

        // Step 2: Net positions
        let positions = self.calculate_net_positions(&obligations);

        // Step 3: Transfers
        let transfers = self.generate_transfers(&positions)?;
        let total_net_amount: Decimal = transfers.iter().map(|t| t.amount).sum();

        let plan = SettlementPlan {
            obligations,
            positions: positions.into_values().collect(),
            transfers,
            total_gross_amount,
            total_net_amount,
            gross_obligation_count,
            currency: self.currency.clone(),
            precision: self.precision,
        };

        tracing::info!(
            people = plan.positions.len(),
            gross_obligations = plan.gross_obligation_count,
            transfers = plan.transfers.len(),
            efficiency = plan.calculate_efficiency(),
            "Computed settlement plan"
        );

        Ok(plan)
    }

    /// One obligation per recorded pair with a positive amount
    fn build_obligations(&self, ledger: &PairwiseLedger) -> Vec<BilateralObligation> {
        ledger
            .entries()
            .filter(|(_, _, amount)| *amount > Decimal::ZERO)
            .map(|(debtor, creditor, amount)| BilateralObligation {
                debtor: debtor.clone(),
                creditor: creditor.clone(),
                gross_amount: amount,
            })
            .collect()
    }

    /// Apply bilateral netting (A owes B 100, B owes A 80 → A owes B 20)
    fn apply_bilateral_netting(
        &self,
        obligations: Vec<BilateralObligation>,
    ) -> Vec<BilateralObligation> {
        let mut by_pair: IndexMap<(PersonId, PersonId), Decimal> = obligations
            .into_iter()
            .map(|o| ((o.debtor, o.creditor), o.gross_amount))
            .collect();

        let mut result = Vec::new();
        while let Some(((debtor, creditor), amount)) = by_pair.shift_remove_index(0) {
            let reverse = by_pair
                .shift_remove(&(creditor.clone(), debtor.clone()))
                .unwrap_or(Decimal::ZERO);
            let net_amount = amount - reverse;

            if net_amount > Decimal::ZERO {
                result.push(BilateralObligation {
                    debtor,
                    creditor,
                    gross_amount: net_amount,
                });
            } else if net_amount < Decimal::ZERO {
                result.push(BilateralObligation {
                    debtor: creditor,
                    creditor: debtor,
                    gross_amount: net_amount.abs(),
                });
            }
            // If exactly equal, both cancel out (no obligation)
        }

        result
    }

    /// Calculate net positions for each person
    fn calculate_net_positions(
        &self,
        obligations: &[BilateralObligation],
    ) -> IndexMap<PersonId, PersonPosition> {
        let mut positions: IndexMap<PersonId, PersonPosition> = IndexMap::new();

        for obl in obligations {
            positions
                .entry(obl.debtor.clone())
                .or_insert_with(|| PersonPosition::new(obl.debtor.clone()))
                .add_obligation(obl.gross_amount, true);

            positions
                .entry(obl.creditor.clone())
                .or_insert_with(|| PersonPosition::new(obl.creditor.clone()))
                .add_obligation(obl.gross_amount, false);
        }

        positions
    }

    /// Generate transfers from positions
    fn generate_transfers(
        &self,
        positions: &IndexMap<PersonId, PersonPosition>,
    ) -> Result<Vec<SettlementTransfer>> {
        // Separate net payers and net receivers
        let mut payers: Vec<(&PersonId, Decimal)> = positions
            .values()
            .filter(|p| p.is_net_payer())
            .map(|p| (&p.person, p.abs_net_position()))
            .collect();

        let mut receivers: Vec<(&PersonId, Decimal)> = positions
            .values()
            .filter(|p| p.is_net_receiver())
            .map(|p| (&p.person, p.abs_net_position()))
            .collect();

        // Largest first; stable sort keeps first-seen order on ties
        payers.sort_by(|a, b| b.1.cmp(&a.1));
        receivers.sort_by(|a, b| b.1.cmp(&a.1));

        let mut transfers = Vec::new();
        let mut next_receiver = 0;

        // Greedy matching: largest payer with largest remaining receiver
        for (payer, mut remaining) in payers {
            while remaining > dust() && next_receiver < receivers.len() {
                let (receiver, receivable) = &mut receivers[next_receiver];
                let receiver: &PersonId = receiver;
                let amount = remaining.min(*receivable);

                transfers.push(SettlementTransfer {
                    debtor: payer.clone(),
                    creditor: receiver.clone(),
                    amount,
                });

                remaining -= amount;
                *receivable -= amount;

                if *receivable <= dust() {
                    next_receiver += 1;
                }
            }

            if remaining > dust() {
                return Err(Error::Netting(format!(
                    "{} still owes {} after all receivers were paid",
                    payer, remaining
                )));
            }
        }

        let unpaid: Decimal = receivers[next_receiver.min(receivers.len())..]
            .iter()
            .map(|(_, receivable)| *receivable)
            .sum();
        if unpaid > dust() {
            return Err(Error::Netting(format!(
                "{} is still owed after all payers paid",
                unpaid
            )));
        }

        Ok(transfers)
    }
}
