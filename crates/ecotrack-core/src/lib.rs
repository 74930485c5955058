//! # EcoTrack Core Library
//!
//! This library provides the core business logic for EcoTrack, a personal
//! environmental-impact tracker. It implements a CLI-first philosophy
//! where all operations are available via a standalone CLI binary; any
//! GUI is a thin layer over the same core library.
//!
//! ## Architecture
//!
//! - **Challenge Engine**: a single-threaded state machine over the
//!   weekly challenge set -- progress, completion, points, streak --
//!   where every mutation is followed by one full-state snapshot write
//! - **Storage**: SQLite-backed key-value snapshots and TOML-based
//!   configuration
//! - **External data**: typed clients for the consumed weather endpoint
//!   and the user-profile document
//!
//! ## Key Components
//!
//! - [`Session`]: the engine's mutable state, commands return [`Event`]s
//! - [`ChallengeService`]: mutate-then-persist orchestration over an
//!   injected [`SnapshotStore`]
//! - [`Database`]: durable key-value storage
//! - [`Config`]: application configuration management

pub mod challenge;
pub mod error;
pub mod events;
pub mod leaderboard;
pub mod password;
pub mod points;
pub mod profile;
pub mod rewards;
pub mod service;
pub mod session;
pub mod storage;
pub mod streak;
pub mod weather;

pub use challenge::{weekly_template, Challenge, ChallengeCategory, ChallengeStore, ProgressUpdate};
pub use error::{
    ConfigError, CoreError, LedgerError, RedeemError, StorageError, WeatherError,
};
pub use events::Event;
pub use leaderboard::{Leaderboard, LeaderboardEntry};
pub use password::{PasswordChecks, PasswordStrength};
pub use points::PointsLedger;
pub use profile::{Location, UserProfile};
pub use rewards::{Redemption, Reward, RewardCatalog};
pub use service::ChallengeService;
pub use session::Session;
pub use storage::{Config, Database, SessionSnapshot, SnapshotStore};
pub use streak::StreakTracker;
pub use weather::{AirQuality, WeatherClient, WeatherSnapshot};
