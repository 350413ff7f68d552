//! Mutable traversal state shared across a tree instance

mod decisions;
mod factors;

pub use decisions::DecisionTable;
pub use factors::FactorTable;
