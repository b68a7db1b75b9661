//! Projection output structures

use serde::{Deserialize, Serialize};

/// One calendar year of projection output.
///
/// Years are counted in elapsed months from the start of the projection, not
/// calendar dates; a horizon that is not a multiple of 12 ends with a
/// partial-year record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearlyRecord {
    /// Projection year (1-indexed)
    pub year: u32,

    /// Balance at the start of the year
    pub start_balance: f64,

    /// Balance at the end of the year
    pub end_balance: f64,

    /// Initial principal plus all deposits made through the end of this year
    pub principal_basis: f64,

    /// Interest credited during the year (negative under a negative rate)
    pub interest_earned: f64,

    /// Deposits made during the year
    pub deposits: f64,

    /// Amounts actually withdrawn during the year (after overdraw clamping)
    pub withdrawals: f64,
}

impl YearlyRecord {
    /// Growth portion of the year-end balance, for the chart's stacked view
    pub fn growth_above_basis(&self) -> f64 {
        self.end_balance - self.principal_basis
    }
}

/// Complete projection result: summary totals plus the year-by-year table.
///
/// A terminal, immutable value; each call to the engine produces a fresh one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionResult {
    /// Balance at the end of the horizon
    pub final_balance: f64,

    /// Interest credited over the whole horizon
    pub total_interest: f64,

    /// Deposits made over the whole horizon
    pub total_deposits: f64,

    /// Amounts actually withdrawn over the whole horizon
    pub total_withdrawals: f64,

    /// One record per projection year, ordered by year ascending
    pub yearly_records: Vec<YearlyRecord>,
}

impl ProjectionResult {
    /// Net external cash flow over the horizon
    pub fn net_flows(&self) -> f64 {
        self.total_deposits - self.total_withdrawals
    }

    /// Number of projection years covered (including a final partial year)
    pub fn years(&self) -> u32 {
        self.yearly_records.len() as u32
    }
}
