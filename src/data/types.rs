use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use std::str::FromStr;
use crate::error::EngineError;

/// One market observation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketSnapshot {
    pub price: f64,
    pub volume: f64,
    #[serde(default)]
    pub timestamp: Option<DateTime<Utc>>,
}

/// Tabular market record: one row per snapshot
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MarketData {
    rows: Vec<MarketSnapshot>,
}

impl MarketData {
    pub fn from_rows(rows: Vec<MarketSnapshot>) -> Self {
        Self { rows }
    }

    pub fn single(snapshot: MarketSnapshot) -> Self {
        Self { rows: vec![snapshot] }
    }

    pub fn rows(&self) -> &[MarketSnapshot] {
        &self.rows
    }

    /// Price column
    pub fn prices(&self) -> Vec<f64> {
        self.rows.iter().map(|r| r.price).collect()
    }

    /// Volume column
    pub fn volumes(&self) -> Vec<f64> {
        self.rows.iter().map(|r| r.volume).collect()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FetchStatus {
    Success,
}

/// What a successful fetch hands back to the caller
#[derive(Debug, Clone, Serialize)]
pub struct FetchResult {
    pub status: FetchStatus,
    pub data: MarketData,
    pub timestamp: Option<DateTime<Utc>>,
}

/// Where market data comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataSource {
    /// Remote market data API (`"api"`)
    Remote,
    /// Local stub (`"db"`)
    Local,
}

impl DataSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            DataSource::Remote => "api",
            DataSource::Local => "db",
        }
    }
}

impl FromStr for DataSource {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "api" => Ok(DataSource::Remote),
            "db" => Ok(DataSource::Local),
            other => Err(EngineError::InvalidSource(other.to_string())),
        }
    }
}

impl std::fmt::Display for DataSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
