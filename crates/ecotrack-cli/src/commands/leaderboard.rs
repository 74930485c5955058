use clap::Subcommand;

use ecotrack_core::Leaderboard;

use super::open_service;

#[derive(Subcommand)]
pub enum LeaderboardAction {
    /// Print the standings as JSON
    Show,
}

pub fn run(action: LeaderboardAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        LeaderboardAction::Show => {
            let service = open_service()?;
            let board = Leaderboard::with_user(service.session().points());
            println!("{}", serde_json::to_string_pretty(board.entries())?);
        }
    }
    Ok(())
}
