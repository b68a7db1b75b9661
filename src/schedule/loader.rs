//! Load investment schedules from JSON and scenario CSV files

use std::error::Error;
use std::fs::File;
use std::path::Path;

use csv::Reader;
use log::info;

use super::{CashFlowMode, CompoundingFrequency, FlowFrequency, InvestmentSchedule};

type BoxedError = Box<dyn Error + Send + Sync>;

/// A scenario row: a schedule plus the label it is reported under
#[derive(Debug, Clone)]
pub struct NamedSchedule {
    pub name: String,
    pub schedule: InvestmentSchedule,
}

/// Raw CSV row matching the scenarios file columns
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    #[serde(rename = "Scenario")]
    scenario: String,
    #[serde(rename = "Principal")]
    principal: f64,
    #[serde(rename = "AnnualRatePct")]
    annual_rate_percent: f64,
    #[serde(rename = "Compounding")]
    compounding: String,
    #[serde(rename = "TotalMonths")]
    total_months: u32,
    #[serde(rename = "CashFlowMode")]
    cash_flow_mode: String,
    #[serde(rename = "DepositAmount")]
    deposit_amount: f64,
    #[serde(rename = "DepositFrequency")]
    deposit_frequency: String,
    #[serde(rename = "WithdrawalAmount")]
    withdrawal_amount: f64,
    #[serde(rename = "WithdrawalFrequency")]
    withdrawal_frequency: String,
}

impl CsvRow {
    fn to_scenario(self) -> Result<NamedSchedule, BoxedError> {
        let compounding = CompoundingFrequency::from_name(&self.compounding)
            .ok_or_else(|| format!("Unknown Compounding: {}", self.compounding))?;

        let cash_flow_mode = CashFlowMode::from_name(&self.cash_flow_mode)
            .ok_or_else(|| format!("Unknown CashFlowMode: {}", self.cash_flow_mode))?;

        let deposit_frequency = FlowFrequency::from_name(&self.deposit_frequency)
            .ok_or_else(|| format!("Unknown DepositFrequency: {}", self.deposit_frequency))?;

        let withdrawal_frequency = FlowFrequency::from_name(&self.withdrawal_frequency)
            .ok_or_else(|| format!("Unknown WithdrawalFrequency: {}", self.withdrawal_frequency))?;

        Ok(NamedSchedule {
            name: self.scenario,
            schedule: InvestmentSchedule {
                principal: self.principal,
                annual_rate_percent: self.annual_rate_percent,
                compounding,
                total_months: self.total_months,
                cash_flow_mode,
                deposit_amount: self.deposit_amount,
                deposit_frequency,
                withdrawal_amount: self.withdrawal_amount,
                withdrawal_frequency,
            },
        })
    }
}

/// Load a single schedule from a JSON file
pub fn load_schedule_json<P: AsRef<Path>>(path: P) -> Result<InvestmentSchedule, BoxedError> {
    let file = File::open(path.as_ref())?;
    let schedule: InvestmentSchedule = serde_json::from_reader(file)?;
    Ok(schedule)
}

/// Load all scenarios from a CSV file
pub fn load_schedules<P: AsRef<Path>>(path: P) -> Result<Vec<NamedSchedule>, BoxedError> {
    let reader = Reader::from_path(path.as_ref())?;
    let scenarios = load_from_csv_reader(reader)?;
    info!(
        "loaded {} scenarios from {}",
        scenarios.len(),
        path.as_ref().display()
    );
    Ok(scenarios)
}

/// Load scenarios from any reader (e.g., string buffer, network stream)
pub fn load_schedules_from_reader<R: std::io::Read>(
    reader: R,
) -> Result<Vec<NamedSchedule>, BoxedError> {
    load_from_csv_reader(Reader::from_reader(reader))
}

fn load_from_csv_reader<R: std::io::Read>(
    mut reader: Reader<R>,
) -> Result<Vec<NamedSchedule>, BoxedError> {
    let mut scenarios = Vec::new();

    for result in reader.deserialize() {
        let row: CsvRow = result?;
        scenarios.push(row.to_scenario()?);
    }

    Ok(scenarios)
}
