use clap::{Parser, ValueEnum};
use commission_engine::application::engine::CommissionEngine;
use commission_engine::config::EngineConfig;
use commission_engine::interfaces::csv::merchant_reader::MerchantReader;
use commission_engine::interfaces::csv::result_writer::{CommissionRecord, ResultWriter};
use commission_engine::interfaces::csv::transaction_reader::TransactionReader;
use miette::{IntoDiagnostic, Result};
use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Clone, Copy, Debug, Default, ValueEnum)]
enum OutputFormat {
    #[default]
    Csv,
    Json,
}

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input transactions CSV file
    #[arg(required_unless_present = "list_rules")]
    transactions: Option<PathBuf>,

    /// Merchants CSV file (id, name, tier, monthly_volume)
    #[arg(long, required_unless_present = "list_rules")]
    merchants: Option<PathBuf>,

    /// JSON file overriding pricing rules and discount factors
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output format for the computed commissions
    #[arg(long, value_enum, default_value_t)]
    format: OutputFormat,

    /// Print the registered pricing rules and exit
    #[arg(long)]
    list_rules: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => EngineConfig::from_path(path).into_diagnostic()?,
        None => EngineConfig::default(),
    };
    let engine = CommissionEngine::from_config(&config).into_diagnostic()?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if cli.list_rules {
        for (channel, rule) in engine.list_registered() {
            writeln!(out, "{channel},{rule}").into_diagnostic()?;
        }
        return Ok(());
    }

    let (Some(transactions_path), Some(merchants_path)) = (cli.transactions, cli.merchants)
    else {
        return Err(miette::miette!("transactions and --merchants are required"));
    };

    let merchants = MerchantReader::new(File::open(merchants_path).into_diagnostic()?)
        .into_map()
        .into_diagnostic()?;
    info!(count = merchants.len(), "merchants loaded");

    let file = File::open(transactions_path).into_diagnostic()?;
    let reader = TransactionReader::new(file);
    let mut records = Vec::new();
    for tx_result in reader.transactions() {
        match tx_result {
            Ok(tx) => {
                match engine.calculate_commission(Some(&tx), merchants.get(&tx.merchant_id)) {
                    Ok(result) => records.push(CommissionRecord::new(&tx, result)),
                    Err(e) => {
                        eprintln!(
                            "Error processing transaction {}: {} ({})",
                            tx.id,
                            e.user_message(),
                            e
                        );
                    }
                }
            }
            Err(e) => {
                eprintln!("Error reading transaction: {}", e);
            }
        }
    }

    match cli.format {
        OutputFormat::Csv => ResultWriter::new(out)
            .write_records(records)
            .into_diagnostic()?,
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut out, &records).into_diagnostic()?;
            writeln!(out).into_diagnostic()?;
        }
    }

    Ok(())
}
