//! Scripted demo run of the ledger.
//!
//! Registers two customers, moves money between them, accrues interest and
//! prints the closing balances. Any ledger error aborts the run.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use bankledger::{Ledger, LedgerConfig, LedgerEvent};
use bankledger_events::{EventEnvelope, InMemoryEventSink, TracingEventSink};

/// Run the scripted bank demo.
#[derive(Parser, Debug)]
#[command(name = "bankledger", version)]
pub struct Cli {
    /// Interest rate, in percent, applied after the transfer
    #[arg(long, default_value_t = 3.0, allow_negative_numbers = true)]
    pub rate: f64,
    /// JSON file holding a ledger configuration
    #[arg(long, env = "BANKLEDGER_CONFIG")]
    pub config: Option<PathBuf>,
    /// Print the recorded event log as JSON after the balances
    #[arg(long)]
    pub events_json: bool,
}

/// What the scripted run ended with.
#[derive(Debug)]
pub struct Outcome {
    /// `(name, balance)` in registration order.
    pub balances: Vec<(String, f64)>,
    pub events: Vec<EventEnvelope<LedgerEvent>>,
}

pub fn load_config(path: &Path) -> Result<LedgerConfig> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("invalid config {}", path.display()))
}

/// Execute the demo script against a fresh ledger.
pub fn script(config: LedgerConfig, rate: f64) -> Result<Outcome> {
    let recorder = InMemoryEventSink::<LedgerEvent>::new();
    let mut ledger = Ledger::with_config(config, (TracingEventSink::new(), &recorder));

    ledger.add_customer("John Doe", 1000.0)?;
    ledger.add_customer("Jane Smith", 500.0)?;

    ledger.transfer_funds("John Doe", "Jane Smith", 200.0)?;

    let report = ledger.calculate_interest(rate)?;
    info!(
        rate_percent = report.rate_percent,
        total_interest = report.total_interest(),
        "interest accrued"
    );

    let mut balances = Vec::new();
    for name in ["John Doe", "Jane Smith"] {
        let account = ledger.get_customer_by_name(name)?;
        balances.push((account.name().to_string(), account.balance()));
    }

    Ok(Outcome {
        balances,
        events: recorder.envelopes(),
    })
}

pub fn run(cli: &Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => LedgerConfig::default(),
    };

    let outcome = script(config, cli.rate)?;

    for (name, balance) in &outcome.balances {
        println!("{name}'s balance: ${balance}");
    }
    if cli.events_json {
        println!("{}", serde_json::to_string_pretty(&outcome.events)?);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use bankledger::{InterestFailurePolicy, LedgerError};
    use std::io::Write;

    #[test]
    fn default_script_ends_with_known_balances() {
        let outcome = script(LedgerConfig::default(), 3.0).unwrap();

        assert_eq!(
            outcome.balances,
            vec![
                ("John Doe".to_string(), 824.0),
                ("Jane Smith".to_string(), 721.0),
            ]
        );
        assert_eq!(outcome.events.len(), 9);
    }

    #[test]
    fn zero_rate_aborts_the_run() {
        let err = script(LedgerConfig::default(), 0.0).unwrap_err();
        let ledger_err = err.downcast_ref::<LedgerError>().unwrap();
        assert!(ledger_err.is_invalid_amount());
    }

    #[test]
    fn zero_rate_under_skip_policy_keeps_balances() {
        let config = LedgerConfig::default().with_interest_failure(InterestFailurePolicy::Skip);
        let outcome = script(config, 0.0).unwrap();
        assert_eq!(outcome.balances[0].1, 800.0);
        assert_eq!(outcome.balances[1].1, 700.0);
    }

    #[test]
    fn parses_flags() {
        let cli = Cli::try_parse_from(["bankledger", "--rate", "-1", "--events-json"]).unwrap();
        assert_eq!(cli.rate, -1.0);
        assert!(cli.events_json);
    }

    #[test]
    fn loads_config_from_json_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"interest_failure":"skip"}}"#).unwrap();

        let config = load_config(file.path()).unwrap();

        assert_eq!(config.interest_failure, InterestFailurePolicy::Skip);
    }

    #[test]
    fn missing_config_file_is_reported() {
        let err = load_config(Path::new("/nonexistent/bankledger.json")).unwrap_err();
        assert!(err.to_string().starts_with("failed to read config"));
    }
}
