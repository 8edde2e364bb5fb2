mod config;
mod data;
mod error;
mod forecast;
mod monitoring;
mod stats;
mod strategies;

use anyhow::Result;
use config::{Config, EnvConfig};
use data::fetcher::DataFetcher;
use data::types::DataSource;
use forecast::revenue::RevenueForecaster;
use strategies::price_optimizer::PriceOptimizer;
use strategies::types::Objective;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first so logging can honour the log path
    let config = Config::load("config.toml")?;
    let env_config = EnvConfig::load()?;

    monitoring::logger::init_logging(&config.monitoring)?;

    tracing::info!("Pricing engine starting...");

    let source: DataSource = config.fetcher.source.parse()?;
    let objective: Objective = config.optimizer.objective.parse()?;

    tracing::info!("Data source: {}", source);
    tracing::info!("Objective: {}", objective);

    // 1. Fetch
    let mut fetcher = DataFetcher::new(env_config.api_keys())
        .with_endpoint(config.fetcher.endpoint.clone());
    let fetched = fetcher.fetch(source).await?;
    tracing::info!("Fetch result: {}", serde_json::to_string(&fetched)?);

    // 2. Optimize
    let mut optimizer = PriceOptimizer::with_price(config.optimizer.initial_price);
    let optimal_price = optimizer.calculate_optimal_price(Some(&fetched.data), objective)?;
    tracing::info!(
        "Optimal price: ${:.2} (was ${:.2})",
        optimal_price,
        optimizer.current_price()
    );
    optimizer.update_current_price(optimal_price);

    // 3. Forecast
    let mut forecaster = RevenueForecaster::new();
    forecaster.train(&config.forecast.training_data())?;
    let forecast = forecaster.forecast(config.forecast.price, config.forecast.period)?;
    tracing::info!("Revenue forecast: {}", serde_json::to_string(&forecast)?);

    let at_optimal = forecaster.forecast(optimal_price, config.forecast.period)?;
    tracing::info!(
        "Revenue at optimal price ${:.2}: ${:.2}",
        optimal_price,
        at_optimal.predicted_revenue
    );

    tracing::info!("Done");

    Ok(())
}
