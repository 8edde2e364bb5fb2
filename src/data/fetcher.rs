use reqwest::Client;
use std::collections::HashMap;
use tracing::{error, info};
use crate::data::types::{DataSource, FetchResult, FetchStatus, MarketData, MarketSnapshot};
use crate::error::{EngineError, Result};

pub const DEFAULT_ENDPOINT: &str = "https://market-data.example.com";

/// Key in the credential mapping holding the market API key
pub const MARKET_API_KEY: &str = "market_api";

pub struct DataFetcher {
    client: Client,
    endpoint: String,
    api_keys: HashMap<String, String>,
    data_cache: Option<MarketData>,
}

impl DataFetcher {
    pub fn new(api_keys: HashMap<String, String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            api_keys,
            data_cache: None,
        }
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Fetch a single market snapshot from `source`.
    ///
    /// Overwrites the cached data on success.
    pub async fn fetch(&mut self, source: DataSource) -> Result<FetchResult> {
        let snapshot = match source {
            DataSource::Remote => self.fetch_remote().await?,
            DataSource::Local => Self::local_snapshot(),
        };

        info!(
            "Fetched market data from {}: price={:.2}, volume={:.2}",
            source, snapshot.price, snapshot.volume
        );

        let timestamp = snapshot.timestamp;
        let data = MarketData::single(snapshot);
        self.data_cache = Some(data.clone());

        Ok(FetchResult {
            status: FetchStatus::Success,
            data,
            timestamp,
        })
    }

    /// Most recently fetched data, if any
    pub fn cached(&self) -> Option<&MarketData> {
        self.data_cache.as_ref()
    }

    async fn fetch_remote(&self) -> Result<MarketSnapshot> {
        let api_key = self
            .api_keys
            .get(MARKET_API_KEY)
            .ok_or_else(|| EngineError::MissingCredential(MARKET_API_KEY.to_string()))?;

        let response = self.client
            .get(&self.endpoint)
            .query(&[("api_key", api_key)])
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| {
                error!("API request failed: {}", e);
                EngineError::DataUnavailable(e.to_string())
            })?;

        response
            .json::<MarketSnapshot>()
            .await
            .map_err(|e| {
                error!("Failed to parse market data response: {}", e);
                EngineError::DataUnavailable(e.to_string())
            })
    }

    // Stub record standing in for a database lookup
    fn local_snapshot() -> MarketSnapshot {
        MarketSnapshot {
            price: 100.0,
            volume: 500.0,
            timestamp: None,
        }
    }
}
