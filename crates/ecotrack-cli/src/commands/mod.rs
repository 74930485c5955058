pub mod challenge;
pub mod config;
pub mod leaderboard;
pub mod profile;
pub mod rewards;
pub mod stats;
pub mod weather;

use ecotrack_core::storage::{Config, Database};
use ecotrack_core::ChallengeService;

/// Open the session service against the on-disk database, seeding from
/// config when no snapshot exists yet.
pub fn open_service() -> Result<ChallengeService<Database>, Box<dyn std::error::Error>> {
    let cfg = Config::load_or_default();
    let db = Database::open()?;
    let service =
        ChallengeService::open_with_seeds(db, cfg.session.seed_points, cfg.session.seed_streak)?;
    Ok(service)
}
