//! Savings Projector CLI
//!
//! Command-line interface for running a compound growth projection and
//! printing the year-by-year breakdown

use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use clap::Parser;

use savings_projector::projection::project;
use savings_projector::schedule::{
    loader, CompoundingFrequency, FlowFrequency, InvestmentSchedule,
};

#[derive(Debug, Parser)]
#[command(
    name = "savings-projector",
    about = "Month-by-month compound growth projections with periodic deposits and withdrawals"
)]
struct Args {
    /// JSON schedule file; overrides the individual input flags
    #[arg(long)]
    schedule: Option<PathBuf>,

    /// Initial amount invested
    #[arg(long, default_value_t = 10_000.0)]
    principal: f64,

    /// Annual interest rate in percent
    #[arg(long, default_value_t = 7.0)]
    rate: f64,

    /// Compounding frequency: daily, weekly, biweekly, monthly, quarterly,
    /// semiannually, annually
    #[arg(long, default_value = "monthly")]
    compounding: String,

    /// Projection horizon in months
    #[arg(long, default_value_t = 120)]
    months: u32,

    /// Periodic deposit amount
    #[arg(long)]
    deposit: Option<f64>,

    /// Deposit frequency: monthly, quarterly, semiannually, annually
    #[arg(long, default_value = "monthly")]
    deposit_every: String,

    /// Periodic withdrawal amount
    #[arg(long)]
    withdrawal: Option<f64>,

    /// Withdrawal frequency: monthly, quarterly, semiannually, annually
    #[arg(long, default_value = "monthly")]
    withdrawal_every: String,

    /// Write the year-by-year table to this CSV file
    #[arg(long)]
    csv: Option<PathBuf>,
}

fn build_schedule(args: &Args) -> Result<InvestmentSchedule> {
    if let Some(path) = &args.schedule {
        return loader::load_schedule_json(path)
            .map_err(|e| anyhow!("failed to load schedule from {}: {e}", path.display()));
    }

    let compounding = CompoundingFrequency::from_name(&args.compounding)
        .ok_or_else(|| anyhow!("unknown compounding frequency: {}", args.compounding))?;

    let mut schedule =
        InvestmentSchedule::new(args.principal, args.rate, compounding, args.months);

    if let Some(amount) = args.deposit {
        let frequency = FlowFrequency::from_name(&args.deposit_every)
            .ok_or_else(|| anyhow!("unknown deposit frequency: {}", args.deposit_every))?;
        schedule = schedule.with_deposits(amount, frequency);
    }

    if let Some(amount) = args.withdrawal {
        let frequency = FlowFrequency::from_name(&args.withdrawal_every)
            .ok_or_else(|| anyhow!("unknown withdrawal frequency: {}", args.withdrawal_every))?;
        schedule = schedule.with_withdrawals(amount, frequency);
    }

    Ok(schedule)
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    let schedule = build_schedule(&args)?;
    let result = project(&schedule)?;

    println!("Savings Projector v0.1.0");
    println!("========================\n");

    println!("Schedule:");
    println!("  Principal: ${:.2}", schedule.principal);
    println!("  Annual Rate: {:.2}%", schedule.annual_rate_percent);
    println!("  Compounding: {}", schedule.compounding.as_str());
    println!("  Horizon: {} months", schedule.total_months);
    if schedule.cash_flow_mode.includes_deposits() {
        println!(
            "  Deposits: ${:.2} {}",
            schedule.deposit_amount,
            schedule.deposit_frequency.as_str()
        );
    }
    if schedule.cash_flow_mode.includes_withdrawals() {
        println!(
            "  Withdrawals: ${:.2} {}",
            schedule.withdrawal_amount,
            schedule.withdrawal_frequency.as_str()
        );
    }
    println!();

    println!("Projection Results ({} years):", result.yearly_records.len());
    println!(
        "{:>4} {:>14} {:>12} {:>12} {:>12} {:>14}",
        "Year", "Start", "Deposits", "Withdrawals", "Interest", "End"
    );
    println!("{}", "-".repeat(74));

    for record in &result.yearly_records {
        println!(
            "{:>4} {:>14.2} {:>12.2} {:>12.2} {:>12.2} {:>14.2}",
            record.year,
            record.start_balance,
            record.deposits,
            record.withdrawals,
            record.interest_earned,
            record.end_balance,
        );
    }

    if let Some(path) = &args.csv {
        let mut file = File::create(path)
            .with_context(|| format!("unable to create {}", path.display()))?;

        writeln!(
            file,
            "Year,StartBalance,Deposits,Withdrawals,Interest,EndBalance,PrincipalBasis"
        )?;
        for record in &result.yearly_records {
            writeln!(
                file,
                "{},{:.2},{:.2},{:.2},{:.2},{:.2},{:.2}",
                record.year,
                record.start_balance,
                record.deposits,
                record.withdrawals,
                record.interest_earned,
                record.end_balance,
                record.principal_basis,
            )?;
        }
        println!("\nYearly table written to: {}", path.display());
    }

    println!("\nSummary:");
    println!("  Final Balance: ${:.2}", result.final_balance);
    println!("  Total Interest: ${:.2}", result.total_interest);
    println!("  Total Deposits: ${:.2}", result.total_deposits);
    println!("  Total Withdrawals: ${:.2}", result.total_withdrawals);

    Ok(())
}
