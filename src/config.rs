use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use crate::data::fetcher::{DEFAULT_ENDPOINT, MARKET_API_KEY};
use crate::forecast::revenue::TrainingData;
use crate::strategies::price_optimizer::DEFAULT_PRICE;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub fetcher: FetcherConfig,
    #[serde(default)]
    pub optimizer: OptimizerConfig,
    pub forecast: ForecastConfig,
    #[serde(default)]
    pub monitoring: MonitoringConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FetcherConfig {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Source identifier, `"api"` or `"db"`
    #[serde(default = "default_source")]
    pub source: String,
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            source: default_source(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct OptimizerConfig {
    #[serde(default = "default_price")]
    pub initial_price: f64,
    /// Objective name, `"max_revenue"` or `"profit_max"`
    #[serde(default = "default_objective")]
    pub objective: String,
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        Self {
            initial_price: default_price(),
            objective: default_objective(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ForecastConfig {
    pub prices: Vec<f64>,
    #[serde(default)]
    pub revenue: Option<Vec<f64>>,
    pub price: f64,
    #[serde(default = "default_period")]
    pub period: u32,
}

impl ForecastConfig {
    pub fn training_data(&self) -> TrainingData {
        TrainingData {
            prices: self.prices.clone(),
            revenue: self.revenue.clone(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct MonitoringConfig {
    /// Append logs here instead of stdout
    #[serde(default)]
    pub log_path: Option<String>,
}

fn default_endpoint() -> String { DEFAULT_ENDPOINT.to_string() }
fn default_source() -> String { "db".to_string() }
fn default_price() -> f64 { DEFAULT_PRICE }
fn default_objective() -> String { "max_revenue".to_string() }
fn default_period() -> u32 { 1 }

#[derive(Debug, Clone)]
pub struct EnvConfig {
    pub market_api_key: Option<String>,
}

impl Config {
    pub fn load(path: &str) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;

        Self::parse(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path))
    }

    pub fn parse(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }
}

impl EnvConfig {
    pub fn load() -> Result<Self> {
        dotenv::dotenv().ok();

        Ok(Self {
            market_api_key: std::env::var("MARKET_API_KEY").ok(),
        })
    }

    /// Credential mapping handed to the fetcher
    pub fn api_keys(&self) -> HashMap<String, String> {
        self.market_api_key
            .iter()
            .map(|key| (MARKET_API_KEY.to_string(), key.clone()))
            .collect()
    }
}
