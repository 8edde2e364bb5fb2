pub mod fetcher;
pub mod types;
