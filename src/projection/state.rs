//! Running projection state advanced by the engine

use super::records::{ProjectionResult, YearlyRecord};

/// Balance, running totals, and the open year's accumulators.
///
/// The engine drives this month by month; `finish` closes the last (possibly
/// partial) year and yields the immutable result.
#[derive(Debug, Clone)]
pub struct ProjectionState {
    balance: f64,

    /// Initial principal plus all deposits to date; never reduced
    principal_basis: f64,

    total_interest: f64,
    total_deposits: f64,
    total_withdrawals: f64,

    // Open year accumulators
    year: u32,
    year_start_balance: f64,
    year_interest: f64,
    year_deposits: f64,
    year_withdrawals: f64,

    records: Vec<YearlyRecord>,
}

impl ProjectionState {
    /// Initialize state at the start of the projection
    pub fn new(principal: f64) -> Self {
        Self {
            balance: principal,
            principal_basis: principal,
            total_interest: 0.0,
            total_deposits: 0.0,
            total_withdrawals: 0.0,
            year: 1,
            year_start_balance: principal,
            year_interest: 0.0,
            year_deposits: 0.0,
            year_withdrawals: 0.0,
            records: Vec::new(),
        }
    }

    /// Add a periodic deposit; new money compounds from this month on
    pub fn deposit(&mut self, amount: f64) {
        self.balance += amount;
        self.principal_basis += amount;
        self.total_deposits += amount;
        self.year_deposits += amount;
    }

    /// Take a periodic withdrawal, clamped so the balance never goes
    /// negative. Totals record the amount that actually left the account;
    /// the unmet portion of an overdraw is discarded, not deferred.
    pub fn withdraw(&mut self, amount: f64) {
        let taken = amount.min(self.balance);
        self.balance -= taken;
        self.total_withdrawals += taken;
        self.year_withdrawals += taken;
    }

    /// Credit one compounding period of interest on the current balance
    pub fn credit_interest(&mut self, rate_per_period: f64) {
        let interest = self.balance * rate_per_period;
        self.balance += interest;
        self.total_interest += interest;
        self.year_interest += interest;
    }

    /// Close the current year's record and open the next year
    pub fn roll_year(&mut self) {
        self.close_year();
        self.year += 1;
        self.year_start_balance = self.balance;
        self.year_interest = 0.0;
        self.year_deposits = 0.0;
        self.year_withdrawals = 0.0;
    }

    /// Close the final (possibly partial) year and produce the result
    pub fn finish(mut self) -> ProjectionResult {
        self.close_year();
        ProjectionResult {
            final_balance: self.balance,
            total_interest: self.total_interest,
            total_deposits: self.total_deposits,
            total_withdrawals: self.total_withdrawals,
            yearly_records: self.records,
        }
    }

    fn close_year(&mut self) {
        self.records.push(YearlyRecord {
            year: self.year,
            start_balance: self.year_start_balance,
            end_balance: self.balance,
            principal_basis: self.principal_basis,
            interest_earned: self.year_interest,
            deposits: self.year_deposits,
            withdrawals: self.year_withdrawals,
        });
    }
}
