use clap::Subcommand;
use serde::Serialize;

use ecotrack_core::Leaderboard;

use super::open_service;

#[derive(Subcommand)]
pub enum StatsAction {
    /// Print session statistics as JSON
    Show,
}

#[derive(Serialize)]
struct StatsView {
    points: u32,
    streak: u32,
    completed_challenges: usize,
    total_challenges: usize,
    rank: u32,
    progress_to_next_rank: f64,
}

pub fn run(action: StatsAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        StatsAction::Show => {
            let service = open_service()?;
            let session = service.session();
            let board = Leaderboard::with_user(session.points());
            let view = StatsView {
                points: session.points(),
                streak: session.streak(),
                completed_challenges: session.completed_log().len(),
                total_challenges: session.challenges().len(),
                rank: board.user_rank(),
                progress_to_next_rank: board.progress_to_next_rank(),
            };
            println!("{}", serde_json::to_string_pretty(&view)?);
        }
    }
    Ok(())
}
