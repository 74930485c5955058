//! Core error types for ecotrack-core.
//!
//! Every failure in the engine is a returned value, never a panic: the
//! surrounding application renders feedback instead of crashing.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for ecotrack-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Storage-related errors
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Points ledger errors
    #[error("Ledger error: {0}")]
    Ledger(#[from] LedgerError),

    /// Reward redemption errors
    #[error("Redemption error: {0}")]
    Redeem(#[from] RedeemError),

    /// Weather lookup errors
    #[error("Weather error: {0}")]
    Weather(#[from] WeatherError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic errors with context
    #[error("{0}")]
    Custom(String),
}

/// Storage-specific errors.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Failed to open the database
    #[error("Failed to open database at {path}: {source}")]
    OpenFailed {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    /// Query execution failed
    #[error("Query failed: {0}")]
    QueryFailed(String),

    /// Database is locked
    #[error("Database is locked")]
    Locked,

    /// Data directory could not be prepared
    #[error("Failed to prepare data directory: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Unknown configuration key
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),

    /// Failed to parse configuration
    #[error("Failed to parse configuration: {0}")]
    ParseFailed(String),
}

/// Points ledger errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LedgerError {
    /// Debit would drive the balance negative; balance is left unchanged.
    #[error("Insufficient balance: tried to debit {amount} with balance {balance}")]
    InsufficientBalance { amount: u32, balance: u32 },
}

/// Reward redemption errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RedeemError {
    /// No reward with this id exists in the catalog.
    #[error("Unknown reward: {0}")]
    UnknownReward(u32),

    /// The ledger cannot cover the reward cost; balance is left unchanged.
    #[error("Cannot afford reward: cost {cost}, balance {balance}")]
    CannotAfford { cost: u32, balance: u32 },
}

/// Weather lookup errors.
#[derive(Error, Debug)]
pub enum WeatherError {
    /// Request transport or decode failure
    #[error("Weather request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Endpoint answered with a non-success status
    #[error("Weather endpoint returned status {0}")]
    UnexpectedStatus(u16),

    /// Base URL or query could not be assembled
    #[error("Invalid weather URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl From<rusqlite::Error> for StorageError {
    fn from(err: rusqlite::Error) -> Self {
        match &err {
            rusqlite::Error::SqliteFailure(err, _msg) => {
                if err.code == rusqlite::ErrorCode::DatabaseLocked {
                    StorageError::Locked
                } else {
                    StorageError::QueryFailed(err.to_string())
                }
            }
            _ => StorageError::QueryFailed(err.to_string()),
        }
    }
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
