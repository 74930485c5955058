mod config;
pub mod database;
pub mod snapshot;

pub use config::{Config, SessionConfig, WeatherConfig};
pub use database::Database;
pub use snapshot::{SessionSnapshot, SnapshotStore, SNAPSHOT_KEY};

use std::path::PathBuf;

/// Returns `~/.config/ecotrack[-dev]/` based on ECOTRACK_ENV.
///
/// Set ECOTRACK_ENV=dev to use the development data directory.
///
/// # Errors
/// Returns an error if creating the config directory fails.
pub fn data_dir() -> Result<PathBuf, std::io::Error> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("ECOTRACK_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("ecotrack-dev")
    } else {
        base_dir.join("ecotrack")
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
