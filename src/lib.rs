//! Savings Projector - compound growth projection engine for financial calculators
//!
//! This library provides:
//! - A pure month-by-month projection of an investment schedule
//! - Periodic deposits and withdrawals with overdraw clamping
//! - Year-by-year growth records for charts and summary tables
//! - Scenario loading and parallel batch projection helpers

pub mod error;
pub mod projection;
pub mod scenario;
pub mod schedule;

// Re-export commonly used types
pub use error::ValidationError;
pub use projection::{project, ProjectionResult, YearlyRecord};
pub use scenario::ScenarioRunner;
pub use schedule::{CashFlowMode, CompoundingFrequency, FlowFrequency, InvestmentSchedule};
