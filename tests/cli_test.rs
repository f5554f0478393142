use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::io::Write;
use std::process::Command;
use tempfile::NamedTempFile;

mod common;

#[test]
fn test_cli_end_to_end() -> Result<(), Box<dyn std::error::Error>> {
    let merchants = common::merchants_csv()?;
    let transactions = common::transactions_csv(&[
        ("T1", "100.00", "credit-card", "M1"),
        ("T2", "200.00", "debit-card", "M2"),
        ("T3", "500.00", "qr-payment", "M3"),
        ("T4", "1000.00", "bank-transfer", "M4"),
    ])?;

    let mut cmd = Command::new(cargo_bin!("commission-engine"));
    cmd.arg(transactions.path())
        .arg("--merchants")
        .arg(merchants.path());

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(
            "transaction,merchant,channel,amount,base_commission,discount_amount,final_commission,calculation_detail",
        ))
        .stdout(predicate::str::contains(",3.10,0.00,3.10,"))
        .stdout(predicate::str::contains(",4.05,0.81,3.24,"))
        .stdout(predicate::str::contains(",4.10,1.31,2.79,"))
        .stdout(predicate::str::contains(",12.15,1.82,10.33,"));

    Ok(())
}

#[test]
fn test_cli_reports_each_failure_and_continues() -> Result<(), Box<dyn std::error::Error>> {
    let merchants = common::merchants_csv()?;
    let transactions = common::transactions_csv(&[
        ("T1", "100.00", "cryptocurrency", "M1"),
        ("T2", "0", "credit-card", "M1"),
        ("T3", "100.00", "credit-card", "M99"),
        ("T4", "not_a_number", "credit-card", "M1"),
        ("T5", "100.00", "credit-card", "M1"),
    ])?;

    let mut cmd = Command::new(cargo_bin!("commission-engine"));
    cmd.arg(transactions.path())
        .arg("--merchants")
        .arg(merchants.path());

    cmd.assert()
        .success()
        .stderr(predicate::str::contains(
            "Error processing transaction T1: payment method not supported",
        ))
        .stderr(predicate::str::contains(
            "Error processing transaction T2: the transaction amount must be greater than zero",
        ))
        .stderr(predicate::str::contains(
            "Error processing transaction T3: merchant not found",
        ))
        .stderr(predicate::str::contains("Error reading transaction"))
        .stdout(predicate::str::contains("T5,M1,credit-card"))
        .stdout(predicate::str::contains("T1,").not());

    Ok(())
}

#[test]
fn test_cli_config_registers_new_channel() -> Result<(), Box<dyn std::error::Error>> {
    let merchants = common::merchants_csv()?;
    let transactions = common::transactions_csv(&[("T1", "100.00", "wallet", "M1")])?;
    let mut config = NamedTempFile::new()?;
    writeln!(
        config,
        r#"{{"rules":{{"wallet":{{"name":"Wallet","rate":"0.015","fixed_fee":"0.20"}}}}}}"#
    )?;

    let mut cmd = Command::new(cargo_bin!("commission-engine"));
    cmd.arg(transactions.path())
        .arg("--merchants")
        .arg(merchants.path())
        .arg("--config")
        .arg(config.path())
        .arg("--format")
        .arg("json");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(r#""channel": "wallet""#))
        .stdout(predicate::str::contains(r#""final_commission": "1.70""#))
        .stdout(predicate::str::contains("Rule: Wallet [amount x 1.5% + $0.20]"));

    Ok(())
}

#[test]
fn test_cli_list_rules() {
    let mut cmd = Command::new(cargo_bin!("commission-engine"));
    cmd.arg("--list-rules");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("credit-card,Credit Card"))
        .stdout(predicate::str::contains("qr-payment,QR Payment"));
}

#[test]
fn test_cli_invalid_config_fails() -> Result<(), Box<dyn std::error::Error>> {
    let mut config = NamedTempFile::new()?;
    writeln!(config, r#"{{"discounts":{{"tier_factor":"1.5"}}}}"#)?;

    let mut cmd = Command::new(cargo_bin!("commission-engine"));
    cmd.arg("--list-rules").arg("--config").arg(config.path());

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("tier_factor must be between 0 and 1"));

    Ok(())
}
