//! Scenario runner for batch projections
//!
//! Validates a base schedule once, then runs variations of it (or whole
//! batches of independent schedules) in parallel. Safe to parallelize
//! because each projection owns all of its state.

use rayon::prelude::*;

use crate::error::ValidationError;
use crate::projection::{project, ProjectionResult};
use crate::schedule::InvestmentSchedule;

/// Pre-validated runner for projecting a schedule under many variations
///
/// # Example
/// ```
/// use savings_projector::{CompoundingFrequency, InvestmentSchedule, ScenarioRunner};
///
/// let base = InvestmentSchedule::new(10_000.0, 7.0, CompoundingFrequency::Monthly, 120);
/// let runner = ScenarioRunner::new(base).unwrap();
/// let results = runner.run_rate_sweep(&[5.0, 6.0, 7.0]).unwrap();
/// assert_eq!(results.len(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct ScenarioRunner {
    base: InvestmentSchedule,
}

impl ScenarioRunner {
    /// Create a runner, validating the base schedule up front
    pub fn new(base: InvestmentSchedule) -> Result<Self, ValidationError> {
        base.validate()?;
        Ok(Self { base })
    }

    /// Project the base schedule as-is
    pub fn run(&self) -> Result<ProjectionResult, ValidationError> {
        project(&self.base)
    }

    /// Project the base schedule once per candidate annual rate, in parallel
    pub fn run_rate_sweep(
        &self,
        rates_percent: &[f64],
    ) -> Result<Vec<ProjectionResult>, ValidationError> {
        rates_percent
            .par_iter()
            .map(|&rate| {
                let mut schedule = self.base.clone();
                schedule.annual_rate_percent = rate;
                project(&schedule)
            })
            .collect()
    }

    /// Project a batch of independent schedules in parallel
    pub fn run_batch(
        schedules: &[InvestmentSchedule],
    ) -> Result<Vec<ProjectionResult>, ValidationError> {
        schedules.par_iter().map(project).collect()
    }

    /// Get reference to the base schedule for inspection
    pub fn base(&self) -> &InvestmentSchedule {
        &self.base
    }
}
