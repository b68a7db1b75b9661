//! Investment schedule inputs and scenario loading

mod data;
pub mod loader;

pub use data::{
    CashFlowMode, CompoundingFrequency, FlowFrequency, InvestmentSchedule, MAX_HORIZON_MONTHS,
};
pub use loader::NamedSchedule;
