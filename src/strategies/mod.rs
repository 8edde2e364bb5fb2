pub mod price_optimizer;
pub mod types;
