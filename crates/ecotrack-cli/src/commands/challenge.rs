use clap::Subcommand;

use super::open_service;

#[derive(Subcommand)]
pub enum ChallengeAction {
    /// List challenges with current progress
    List,
    /// Apply one unit of progress to a challenge
    Progress {
        /// Challenge id
        id: u32,
    },
    /// Reset all challenges, the completion log, and the streak
    Reset {
        /// Confirm the reset; progress is lost irreversibly
        #[arg(long)]
        yes: bool,
    },
    /// Print the session summary as JSON
    Status,
}

pub fn run(action: ChallengeAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut service = open_service()?;

    match action {
        ChallengeAction::List => {
            println!(
                "{}",
                serde_json::to_string_pretty(service.session().challenges())?
            );
        }
        ChallengeAction::Progress { id } => {
            let events = service.record_progress(id)?;
            if events.is_empty() {
                // Unknown id or already completed: state is unchanged.
                let snapshot = service.session().snapshot_event();
                println!("{}", serde_json::to_string_pretty(&snapshot)?);
            } else {
                println!("{}", serde_json::to_string_pretty(&events)?);
            }
        }
        ChallengeAction::Reset { yes } => {
            if !yes {
                eprintln!("refusing to reset challenges without --yes (progress would be lost)");
                std::process::exit(1);
            }
            let event = service.reset_challenges()?;
            println!("{}", serde_json::to_string_pretty(&event)?);
        }
        ChallengeAction::Status => {
            let snapshot = service.session().snapshot_event();
            println!("{}", serde_json::to_string_pretty(&snapshot)?);
        }
    }

    Ok(())
}
