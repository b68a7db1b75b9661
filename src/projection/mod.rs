//! Month-by-month projection of compound growth with periodic cash flows

mod engine;
mod records;
mod state;

pub use engine::project;
pub use records::{ProjectionResult, YearlyRecord};
