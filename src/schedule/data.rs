//! Investment schedule data structures and validation

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Longest supported projection horizon (100 years).
pub const MAX_HORIZON_MONTHS: u32 = 1200;

/// How often interest is compounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompoundingFrequency {
    Daily,
    Weekly,
    Biweekly,
    Monthly,
    Quarterly,
    Semiannually,
    Annually,
}

impl CompoundingFrequency {
    /// Number of compounding periods per year
    pub fn periods_per_year(&self) -> u32 {
        match self {
            CompoundingFrequency::Daily => 365,
            CompoundingFrequency::Weekly => 52,
            CompoundingFrequency::Biweekly => 26,
            CompoundingFrequency::Monthly => 12,
            CompoundingFrequency::Quarterly => 4,
            CompoundingFrequency::Semiannually => 2,
            CompoundingFrequency::Annually => 1,
        }
    }

    /// Parse the name used in scenario files and on the command line
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "daily" => Some(CompoundingFrequency::Daily),
            "weekly" => Some(CompoundingFrequency::Weekly),
            "biweekly" => Some(CompoundingFrequency::Biweekly),
            "monthly" => Some(CompoundingFrequency::Monthly),
            "quarterly" => Some(CompoundingFrequency::Quarterly),
            "semiannually" => Some(CompoundingFrequency::Semiannually),
            "annually" => Some(CompoundingFrequency::Annually),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CompoundingFrequency::Daily => "daily",
            CompoundingFrequency::Weekly => "weekly",
            CompoundingFrequency::Biweekly => "biweekly",
            CompoundingFrequency::Monthly => "monthly",
            CompoundingFrequency::Quarterly => "quarterly",
            CompoundingFrequency::Semiannually => "semiannually",
            CompoundingFrequency::Annually => "annually",
        }
    }
}

/// How often a periodic deposit or withdrawal lands.
///
/// All variants divide evenly into 12, so flows always align to whole months.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlowFrequency {
    #[default]
    Monthly,
    Quarterly,
    Semiannually,
    Annually,
}

impl FlowFrequency {
    /// Months between consecutive flows
    pub fn months(&self) -> u32 {
        match self {
            FlowFrequency::Monthly => 1,
            FlowFrequency::Quarterly => 3,
            FlowFrequency::Semiannually => 6,
            FlowFrequency::Annually => 12,
        }
    }

    /// Parse the name used in scenario files and on the command line
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "monthly" => Some(FlowFrequency::Monthly),
            "quarterly" => Some(FlowFrequency::Quarterly),
            "semiannually" => Some(FlowFrequency::Semiannually),
            "annually" => Some(FlowFrequency::Annually),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FlowFrequency::Monthly => "monthly",
            FlowFrequency::Quarterly => "quarterly",
            FlowFrequency::Semiannually => "semiannually",
            FlowFrequency::Annually => "annually",
        }
    }
}

/// Which periodic cash flows the schedule carries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CashFlowMode {
    #[default]
    None,
    Deposits,
    Withdrawals,
    Both,
}

impl CashFlowMode {
    pub fn includes_deposits(&self) -> bool {
        matches!(self, CashFlowMode::Deposits | CashFlowMode::Both)
    }

    pub fn includes_withdrawals(&self) -> bool {
        matches!(self, CashFlowMode::Withdrawals | CashFlowMode::Both)
    }

    /// Parse the name used in scenario files
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "none" => Some(CashFlowMode::None),
            "deposits" => Some(CashFlowMode::Deposits),
            "withdrawals" => Some(CashFlowMode::Withdrawals),
            "both" => Some(CashFlowMode::Both),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CashFlowMode::None => "none",
            CashFlowMode::Deposits => "deposits",
            CashFlowMode::Withdrawals => "withdrawals",
            CashFlowMode::Both => "both",
        }
    }
}

/// A complete investment schedule: one user-triggered calculation's inputs.
///
/// Built fresh per calculation and validated before the engine touches it.
/// Deposit fields apply only when `cash_flow_mode` includes deposits, and
/// likewise for withdrawals; amounts are validated regardless of mode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvestmentSchedule {
    /// Initial amount invested
    pub principal: f64,

    /// Annual interest rate in percent (8 means 8%/year); negative permitted
    pub annual_rate_percent: f64,

    /// Compounding frequency
    pub compounding: CompoundingFrequency,

    /// Projection horizon in months
    pub total_months: u32,

    /// Which periodic cash flows apply
    #[serde(default)]
    pub cash_flow_mode: CashFlowMode,

    /// Amount of each periodic deposit
    #[serde(default)]
    pub deposit_amount: f64,

    /// How often deposits land
    #[serde(default)]
    pub deposit_frequency: FlowFrequency,

    /// Amount of each periodic withdrawal
    #[serde(default)]
    pub withdrawal_amount: f64,

    /// How often withdrawals land
    #[serde(default)]
    pub withdrawal_frequency: FlowFrequency,
}

impl InvestmentSchedule {
    /// Create a schedule with no periodic cash flows
    pub fn new(
        principal: f64,
        annual_rate_percent: f64,
        compounding: CompoundingFrequency,
        total_months: u32,
    ) -> Self {
        Self {
            principal,
            annual_rate_percent,
            compounding,
            total_months,
            cash_flow_mode: CashFlowMode::None,
            deposit_amount: 0.0,
            deposit_frequency: FlowFrequency::Monthly,
            withdrawal_amount: 0.0,
            withdrawal_frequency: FlowFrequency::Monthly,
        }
    }

    /// Add periodic deposits, upgrading the cash flow mode accordingly
    pub fn with_deposits(mut self, amount: f64, frequency: FlowFrequency) -> Self {
        self.deposit_amount = amount;
        self.deposit_frequency = frequency;
        self.cash_flow_mode = match self.cash_flow_mode {
            CashFlowMode::None | CashFlowMode::Deposits => CashFlowMode::Deposits,
            CashFlowMode::Withdrawals | CashFlowMode::Both => CashFlowMode::Both,
        };
        self
    }

    /// Add periodic withdrawals, upgrading the cash flow mode accordingly
    pub fn with_withdrawals(mut self, amount: f64, frequency: FlowFrequency) -> Self {
        self.withdrawal_amount = amount;
        self.withdrawal_frequency = frequency;
        self.cash_flow_mode = match self.cash_flow_mode {
            CashFlowMode::None | CashFlowMode::Withdrawals => CashFlowMode::Withdrawals,
            CashFlowMode::Deposits | CashFlowMode::Both => CashFlowMode::Both,
        };
        self
    }

    /// Check the schedule before simulation.
    ///
    /// Callers get a descriptive error rather than a silent fallback; the
    /// engine refuses to produce partial results from bad inputs.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let amounts = [
            ("principal", self.principal),
            ("annual_rate_percent", self.annual_rate_percent),
            ("deposit_amount", self.deposit_amount),
            ("withdrawal_amount", self.withdrawal_amount),
        ];
        for (field, value) in amounts {
            if !value.is_finite() {
                return Err(ValidationError::NotFinite { field, value });
            }
        }

        let non_negative = [
            ("principal", self.principal),
            ("deposit_amount", self.deposit_amount),
            ("withdrawal_amount", self.withdrawal_amount),
        ];
        for (field, value) in non_negative {
            if value < 0.0 {
                return Err(ValidationError::Negative { field, value });
            }
        }

        if self.total_months == 0 {
            return Err(ValidationError::EmptyHorizon);
        }
        if self.total_months > MAX_HORIZON_MONTHS {
            return Err(ValidationError::HorizonTooLong {
                months: self.total_months,
                max: MAX_HORIZON_MONTHS,
            });
        }

        Ok(())
    }
}
