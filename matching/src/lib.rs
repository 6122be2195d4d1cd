pub mod availability;
pub mod eligibility;
pub mod engine;
pub mod filter;
pub mod types;
