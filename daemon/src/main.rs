//! lumen-txset: inspect and repair transaction sets from the command line.

mod bundle;

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;

use lumen_herder::HerderConfig;
use lumen_ledger::LedgerManager;
use lumen_types::NetworkId;
use lumen_utils::LogFormat;

use crate::bundle::Bundle;

#[derive(Parser)]
#[command(name = "lumen-txset", about = "Lumen transaction-set tool")]
struct Cli {
    /// Path to a TOML configuration file. CLI flags and env vars override it.
    #[arg(long, env = "LUMEN_CONFIG")]
    config: Option<PathBuf>,

    /// Network: "live", "test" or "dev".
    #[arg(long, env = "LUMEN_NETWORK")]
    network: Option<NetworkId>,

    /// Log level: "trace", "debug", "info", "warn", "error".
    #[arg(long, env = "LUMEN_LOG_LEVEL")]
    log_level: Option<String>,

    /// Log format: "human" or "json".
    #[arg(long, env = "LUMEN_LOG_FORMAT")]
    log_format: Option<LogFormat>,

    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand)]
enum Command {
    /// Write a demonstration bundle.
    Sample {
        /// Output file; stdout if omitted.
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Print the set's contents hash and summary.
    Hash { bundle: PathBuf },
    /// Print the transactions in apply order.
    #[command(name = "apply-order")]
    ApplyOrder { bundle: PathBuf },
    /// Check the set as a peer would before applying it.
    Check { bundle: PathBuf },
    /// Apply surge pricing, drop invalid transactions and write the result.
    Trim {
        bundle: PathBuf,
        /// Output file; the input is left untouched. Stdout if omitted.
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

fn load_config(cli: &Cli) -> anyhow::Result<HerderConfig> {
    let mut config = match &cli.config {
        Some(path) => {
            let path = path.to_str().context("config path is not valid UTF-8")?;
            HerderConfig::from_toml_file(path)?
        }
        None => HerderConfig::default(),
    };
    if let Some(network) = cli.network {
        config.network = network;
    }
    if let Some(level) = &cli.log_level {
        config.log_level = level.clone();
    }
    if let Some(format) = cli.log_format {
        config.log_format = format;
    }
    Ok(config)
}

fn write_bundle(bundle: &Bundle, out: Option<&Path>) -> anyhow::Result<()> {
    match out {
        Some(path) => {
            bundle.save(path)?;
            tracing::info!(path = %path.display(), "wrote bundle");
        }
        None => println!("{}", bundle.to_json()?),
    }
    Ok(())
}

/// Install the global subscriber. Returns `false`, after warning through the
/// subscriber already in place, if one was installed earlier.
fn setup_logging(config: &HerderConfig) -> bool {
    let installed = lumen_utils::init_logging(config.log_format, &config.log_level);
    if !installed {
        tracing::warn!(
            format = ?config.log_format,
            level = %config.log_level,
            "logging already initialised, keeping existing subscriber"
        );
    }
    installed
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = load_config(&cli)?;
    setup_logging(&config);

    let network_id = config.network_id();
    let policy = config.whitelist();

    match cli.command {
        Command::Sample { out } => {
            let bundle = Bundle::sample(config.network)?;
            write_bundle(&bundle, out.as_deref())?;
        }
        Command::Hash { bundle } => {
            let bundle = Bundle::load(&bundle)?;
            let mut set = bundle.tx_set(&network_id)?;
            println!("{}", set.contents_hash());
            println!("{}", set.summary());
        }
        Command::ApplyOrder { bundle } => {
            let bundle = Bundle::load(&bundle)?;
            let mut set = bundle.tx_set(&network_id)?;
            for tx in set.apply_order() {
                println!("{} {} {}", tx.full_hash(), tx.source_id(), tx.seq_num());
            }
        }
        Command::Check { bundle } => {
            let bundle = Bundle::load(&bundle)?;
            let mut set = bundle.tx_set(&network_id)?;
            let manager = LedgerManager::new(bundle.ledger);
            set.check_valid(&manager.snapshot(), &policy)
                .context("transaction set rejected")?;
            tracing::info!(summary = %set.summary(), "transaction set is valid");
            println!("valid");
        }
        Command::Trim { bundle, out } => {
            let bundle = Bundle::load(&bundle)?;
            let mut set = bundle.tx_set(&network_id)?;
            let manager = LedgerManager::new(bundle.ledger.clone());
            let snapshot = manager.snapshot();

            let mut removed = set.surge_pricing_filter(&snapshot, &policy);
            removed.extend(set.trim_invalid(&snapshot, &policy)?);
            for tx in &removed {
                tracing::info!(
                    tx = %tx.full_hash().abbrev(),
                    account = %tx.source_id(),
                    seq = tx.seq_num(),
                    "removed transaction"
                );
            }
            tracing::info!(
                removed = removed.len(),
                hash = %set.contents_hash().abbrev(),
                summary = %set.summary(),
                "trimmed transaction set"
            );
            write_bundle(&bundle.with_tx_set(&set), out.as_deref())?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn flags_override_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lumen.toml");
        std::fs::write(&path, "network = \"live\"\nlog_level = \"warn\"\n").unwrap();

        let cli = Cli::parse_from([
            "lumen-txset",
            "--config",
            path.to_str().unwrap(),
            "--log-level",
            "debug",
            "hash",
            "bundle.json",
        ]);
        let config = load_config(&cli).unwrap();
        assert_eq!(config.network, NetworkId::Live);
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.log_format, LogFormat::Human);
    }

    #[test]
    fn parses_network_and_format() {
        let cli = Cli::parse_from([
            "lumen-txset",
            "--network",
            "test",
            "--log-format",
            "json",
            "apply-order",
            "b.json",
        ]);
        let config = load_config(&cli).unwrap();
        assert_eq!(config.network, NetworkId::Test);
        assert_eq!(config.log_format, LogFormat::Json);
        assert!(matches!(cli.command, Command::ApplyOrder { .. }));
    }

    #[test]
    fn second_logging_setup_keeps_first_subscriber() {
        let config = HerderConfig::default();
        let _first = setup_logging(&config);
        assert!(!setup_logging(&config));
    }
}
