//! Expense accumulator
//!
//! Ingests expenses one at a time and keeps two running views: a net
//! balance per person and a pairwise ledger of who owes whom.
//!
//! # Split arithmetic
//!
//! For an expense of `amount` shared by `n` participants,
//! `share = amount / n`.
//!
//! ```text
//! Legacy (default)                     Even
//!   payer    += amount                   payer += amount
//!   for p in participants, p != payer:   for p in participants:
//!     p      -= share                      p -= share
//!     payer  -= share
//!
//! A pays 100 for [A, B, C, D, E]
//!   A = 20, others = -20                 A = 80, others = -20
//! ```
//!
//! In both modes `ledger[p][payer] += share` for every non-payer
//! participant. Legacy mode keeps the historical trip-splitter arithmetic,
//! where an expense only nets to zero when the payer shares it with exactly
//! one other person. Even mode keeps balances summing to zero.

use crate::{
    balances::NetBalances,
    config::Config,
    pairwise::PairwiseLedger,
    report::{BalanceLine, TransactionSummary},
    types::{Currency, Expense, PersonId, SplitMode},
    Error, Result,
};
use indexmap::IndexMap;
use rust_decimal::Decimal;

/// Running balances and pairwise debts for one group
#[derive(Debug, Clone)]
pub struct LedgerAccumulator {
    /// Net balance per person
    balances: NetBalances,

    /// Directional amounts owed
    transactions: PairwiseLedger,

    /// Split arithmetic
    split_mode: SplitMode,

    /// Display unit
    currency: Currency,

    /// Decimal places in rendered amounts
    precision: u32,
}

impl LedgerAccumulator {
    /// Create accumulator with default configuration
    pub fn new() -> Self {
        Self::from_config(&Config::default())
    }

    /// Create accumulator from configuration
    pub fn from_config(config: &Config) -> Self {
        Self {
            balances: NetBalances::new(),
            transactions: PairwiseLedger::new(),
            split_mode: config.split_mode,
            currency: config.currency.clone(),
            precision: config.precision,
        }
    }

    /// Set split arithmetic
    pub fn with_split_mode(mut self, split_mode: SplitMode) -> Self {
        self.split_mode = split_mode;
        self
    }

    /// Set display unit
    pub fn with_currency(mut self, currency: Currency) -> Self {
        self.currency = currency;
        self
    }

    /// Split arithmetic in use
    pub fn split_mode(&self) -> SplitMode {
        self.split_mode
    }

    /// Display unit in use
    pub fn currency(&self) -> &Currency {
        &self.currency
    }

    /// Record one shared expense
    ///
    /// `description` does not affect the arithmetic. Fails without touching
    /// any state if `participants` is empty, `amount` is not positive, or a
    /// resulting balance would overflow.
    pub fn record_expense<P: AsRef<str>>(
        &mut self,
        payer: &str,
        amount: Decimal,
        participants: &[P],
        description: Option<&str>,
    ) -> Result<()> {
        let names: Vec<&str> = participants.iter().map(|p| p.as_ref()).collect();
        let mut expense = Expense::new(payer, amount, names);
        expense.description = description.map(str::to_string);
        self.record(&expense)
    }

    /// Record an [`Expense`]
    ///
    /// Every new balance and debt is computed before any is written, so an
    /// overflowing expense leaves the accumulator unchanged.
    pub fn record(&mut self, expense: &Expense) -> Result<()> {
        let staged = match expense.share().and_then(|share| self.stage(expense, share)) {
            Ok(staged) => staged,
            Err(err) => {
                tracing::warn!(
                    payer = %expense.payer,
                    amount = %expense.amount,
                    participants = expense.participants.len(),
                    error = %err,
                    "Rejected expense"
                );
                return Err(err);
            }
        };

        for (person, balance) in staged.balances {
            self.balances.set(person, balance);
        }
        for ((debtor, creditor), amount) in staged.debts {
            self.transactions.set(debtor, creditor, amount);
        }

        tracing::debug!(
            payer = %expense.payer,
            amount = %expense.amount,
            share = %staged.share,
            participants = expense.participants.len(),
            description = expense.description.as_deref().unwrap_or("Unknown item"),
            split_mode = %self.split_mode,
            "Recorded expense"
        );

        Ok(())
    }

    fn stage(&self, expense: &Expense, share: Decimal) -> Result<StagedExpense> {
        let payer = &expense.payer;
        let mut staged = StagedExpense::new(share);
        staged.adjust(&self.balances, payer, expense.amount)?;

        for person in &expense.participants {
            if person == payer {
                if self.split_mode == SplitMode::Even {
                    staged.adjust(&self.balances, payer, -share)?;
                }
                continue;
            }

            staged.adjust(&self.balances, person, -share)?;
            if self.split_mode == SplitMode::Legacy {
                staged.adjust(&self.balances, payer, -share)?;
            }
            staged.owe(&self.transactions, person, payer, share)?;
        }

        Ok(staged)
    }

    /// Record several expenses, stopping at the first invalid one
    ///
    /// Expenses before the invalid one stay recorded.
    pub fn record_all<'e>(
        &mut self,
        expenses: impl IntoIterator<Item = &'e Expense>,
    ) -> Result<usize> {
        let mut count = 0;
        for expense in expenses {
            self.record(expense)?;
            count += 1;
        }
        Ok(count)
    }

    /// Snapshot of net balances
    pub fn balances(&self) -> NetBalances {
        self.balances.clone()
    }

    /// Snapshot of the pairwise ledger
    pub fn transactions(&self) -> PairwiseLedger {
        self.transactions.clone()
    }

    /// Balance of one person (zero if never seen)
    pub fn balance_of(&self, person: &PersonId) -> Decimal {
        self.balances.get(person.as_str())
    }

    /// Sum of all balances
    ///
    /// Zero in [`SplitMode::Even`] up to division remainders.
    pub fn net_total(&self) -> Decimal {
        self.balances.total()
    }

    /// Lazily rendered per-person status lines, in first-seen order
    pub fn summarize_balances(&self) -> impl Iterator<Item = BalanceLine<'_>> + '_ {
        self.balances
            .iter()
            .map(move |(person, balance)| {
                BalanceLine::new(person, *balance, &self.currency, self.precision)
            })
    }

    /// Netted "who owes whom" view
    pub fn summarize_transactions(&self) -> TransactionSummary {
        TransactionSummary::from_ledger(&self.transactions, self.currency.clone(), self.precision)
    }
}

/// New values for one expense, in the order they were first touched
#[derive(Debug)]
struct StagedExpense {
    share: Decimal,
    balances: IndexMap<PersonId, Decimal>,
    debts: IndexMap<(PersonId, PersonId), Decimal>,
}

impl StagedExpense {
    fn new(share: Decimal) -> Self {
        Self {
            share,
            balances: IndexMap::new(),
            debts: IndexMap::new(),
        }
    }

    fn adjust(&mut self, current: &NetBalances, person: &PersonId, delta: Decimal) -> Result<()> {
        let balance = match self.balances.get(person) {
            Some(staged) => *staged,
            None => current.get(person.as_str()),
        };
        let balance = balance
            .checked_add(delta)
            .ok_or(Error::CalculationOverflow)?;
        self.balances.insert(person.clone(), balance);
        Ok(())
    }

    fn owe(
        &mut self,
        current: &PairwiseLedger,
        debtor: &PersonId,
        creditor: &PersonId,
        amount: Decimal,
    ) -> Result<()> {
        let key = (debtor.clone(), creditor.clone());
        let owed = match self.debts.get(&key) {
            Some(staged) => *staged,
            None => current.get(debtor.as_str(), creditor.as_str()),
        };
        let owed = owed.checked_add(amount).ok_or(Error::CalculationOverflow)?;
        self.debts.insert(key, owed);
        Ok(())
    }
}

impl Default for LedgerAccumulator {
    fn default() -> Self {
        Self::new()
    }
}

impl Extend<Expense> for LedgerAccumulator {
    /// Records every valid expense; invalid ones are logged and skipped.
    fn extend<T: IntoIterator<Item = Expense>>(&mut self, iter: T) {
        let mut recorded = 0usize;
        let mut rejected = 0usize;
        for expense in iter {
            match self.record(&expense) {
                Ok(()) => recorded += 1,
                Err(_) => rejected += 1,
            }
        }

        if rejected > 0 {
            tracing::warn!(recorded, rejected, "Skipped rejected expenses");
        }
    }
}
