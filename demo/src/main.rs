//! Expense ledger demo
//!
//! Replays a fixed trip through the ledger and prints who owes whom.
//!
//! ```text
//! expense-demo [config.toml]
//! ```
//!
//! Without a config path, settings come from `SPLITTER_*` environment
//! variables. Logs go to stderr; the report goes to stdout.
//!
//! The settlement plan nets the pairwise debts. In legacy split mode the
//! payer's balance is charged twice, so the plan does not match the printed
//! balances; use `split_mode = "even"` for a plan that settles them.

mod trip;

use anyhow::Context;
use expense_ledger::config::OutputFormat;
use expense_ledger::{Config, Debt, LedgerAccumulator, NetBalances, SplitMode};
use expense_settlement::{NettingEngine, NettingStats, SettlementPlan, SettlementTransfer};
use serde::Serialize;

/// JSON report
#[derive(Debug, Serialize)]
struct Report<'a> {
    scenario: &'a str,
    currency: &'a str,
    split_mode: SplitMode,
    expense_count: usize,
    balances: NetBalances,
    debts: &'a [Debt],
    #[serde(skip_serializing_if = "Option::is_none")]
    settlement: Option<&'a [SettlementTransfer]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    stats: Option<NettingStats>,
}

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    // Load configuration
    let config = match std::env::args().nth(1) {
        Some(path) => Config::from_file(&path)
            .with_context(|| format!("Failed to load config from {}", path))?,
        None => Config::from_env().context("Failed to load config from environment")?,
    };

    tracing::info!(
        service = %config.service_name,
        version = %config.service_version,
        split_mode = %config.split_mode,
        currency = %config.currency,
        "Starting expense demo"
    );

    let scenario = trip::coastal_trip();
    let mut ledger = LedgerAccumulator::from_config(&config);
    let recorded = ledger.record_all(&scenario.expenses)?;

    tracing::info!(
        scenario = %scenario.name,
        recorded,
        group = ?scenario.group,
        net_total = %ledger.net_total(),
        "Recorded trip expenses"
    );

    let summary = ledger.summarize_transactions();
    let plan: Option<SettlementPlan> = if config.output.show_settlement {
        Some(NettingEngine::from_config(&config).compute_plan(&ledger.transactions())?)
    } else {
        None
    };

    match config.output.format {
        OutputFormat::Text => {
            for line in ledger.summarize_balances() {
                println!("{}", line);
            }
            print!("{}", summary);
            if let Some(plan) = &plan {
                print!("{}", plan);
            }
        }
        OutputFormat::Json => {
            let report = Report {
                scenario: &scenario.name,
                currency: config.currency.code(),
                split_mode: ledger.split_mode(),
                expense_count: recorded,
                balances: ledger.balances(),
                debts: &summary.debts,
                settlement: plan.as_ref().map(|p| p.transfers.as_slice()),
                stats: plan.as_ref().map(SettlementPlan::stats),
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }

    Ok(())
}
