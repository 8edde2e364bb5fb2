/// Errors raised by the fetcher, optimizer and forecaster.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("Invalid data source: {0}")]
    InvalidSource(String),

    #[error("Failed to fetch market data from source: {0}")]
    DataUnavailable(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Unsupported optimization objective: {0}")]
    UnsupportedObjective(String),

    #[error("Model has not been trained")]
    NotTrained,

    #[error("Missing API key: {0}")]
    MissingCredential(String),
}

pub type Result<T> = std::result::Result<T, EngineError>;
