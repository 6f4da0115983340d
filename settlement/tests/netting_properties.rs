//! Property-based tests for settlement plans
//!
//! - Transfers reproduce every person's net position
//! - At most (people - 1) transfers
//! - Bilateral netting never changes the transfers' effect

use expense_ledger::{Expense, LedgerAccumulator, PairwiseLedger, SplitMode};
use expense_settlement::{NettingEngine, SettlementPlan};
use indexmap::IndexMap;
use proptest::prelude::*;
use rust_decimal::Decimal;

const GROUP: [&str; 5] = ["Agrim", "Geet", "Ashish", "Kartik", "Lavisha"];

fn expense_strategy() -> impl Strategy<Value = Expense> {
    (
        prop::sample::select(GROUP.to_vec()),
        (1u64..5_000_000u64).prop_map(|paise| Decimal::new(paise as i64, 2)),
        prop::sample::subsequence(GROUP.to_vec(), 1..=GROUP.len()),
    )
        .prop_map(|(payer, amount, participants)| Expense::new(payer, amount, participants))
}

fn ledger_from(expenses: &[Expense], mode: SplitMode) -> PairwiseLedger {
    let mut ledger = LedgerAccumulator::new().with_split_mode(mode);
    for expense in expenses {
        ledger.record(expense).unwrap();
    }
    ledger.transactions()
}

/// Net effect of the transfers per person (received - paid)
fn transfer_effect(plan: &SettlementPlan) -> IndexMap<String, Decimal> {
    let mut effect: IndexMap<String, Decimal> = IndexMap::new();
    for t in &plan.transfers {
        *effect.entry(t.debtor.to_string()).or_default() -= t.amount;
        *effect.entry(t.creditor.to_string()).or_default() += t.amount;
    }
    effect
}

fn tolerance() -> Decimal {
    Decimal::new(1, 10)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Property: paying the plan leaves everyone at their net position
    #[test]
    fn prop_transfers_match_positions(
        expenses in prop::collection::vec(expense_strategy(), 1..30),
        even in any::<bool>(),
    ) {
        let mode = if even { SplitMode::Even } else { SplitMode::Legacy };
        let plan = NettingEngine::new(true).compute_plan(&ledger_from(&expenses, mode)).unwrap();
        let effect = transfer_effect(&plan);

        for position in &plan.positions {
            let received = effect.get(position.person.as_str()).copied().unwrap_or_default();
            prop_assert!((received - position.net_position).abs() < tolerance());
        }
        for transfer in &plan.transfers {
            prop_assert!(transfer.amount > Decimal::ZERO);
            prop_assert_ne!(&transfer.debtor, &transfer.creditor);
        }
    }

    /// Property: greedy matching needs at most (people - 1) transfers
    #[test]
    fn prop_transfer_count_bounded(expenses in prop::collection::vec(expense_strategy(), 1..30)) {
        let plan = NettingEngine::new(true)
            .compute_plan(&ledger_from(&expenses, SplitMode::Legacy))
            .unwrap();

        prop_assert!(plan.transfers.len() < GROUP.len());
        prop_assert!(plan.total_net_amount <= plan.total_gross_amount);
    }

    /// Property: bilateral netting changes obligations, not outcomes
    #[test]
    fn prop_bilateral_netting_preserves_effect(expenses in prop::collection::vec(expense_strategy(), 1..30)) {
        let ledger = ledger_from(&expenses, SplitMode::Even);
        let with = NettingEngine::new(true).compute_plan(&ledger).unwrap();
        let without = NettingEngine::new(false).compute_plan(&ledger).unwrap();

        let with_effect = transfer_effect(&with);
        let without_effect = transfer_effect(&without);
        for person in GROUP {
            let a = with_effect.get(person).copied().unwrap_or_default();
            let b = without_effect.get(person).copied().unwrap_or_default();
            prop_assert!((a - b).abs() < tolerance());
        }
    }
}
