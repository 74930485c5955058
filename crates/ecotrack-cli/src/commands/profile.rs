use clap::Subcommand;

use ecotrack_core::storage::Database;
use ecotrack_core::{Location, UserProfile};

#[derive(Subcommand)]
pub enum ProfileAction {
    /// Print the stored profile as JSON
    Show,
    /// Create or replace the profile
    Set {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        /// Location fields; give all three or none
        #[arg(long)]
        city: Option<String>,
        #[arg(long)]
        state: Option<String>,
        #[arg(long)]
        country: Option<String>,
    },
}

pub fn run(action: ProfileAction) -> Result<(), Box<dyn std::error::Error>> {
    let db = Database::open()?;

    match action {
        ProfileAction::Show => match UserProfile::load(&db)? {
            Some(profile) => println!("{}", serde_json::to_string_pretty(&profile)?),
            None => {
                eprintln!("no profile set (use `profile set`)");
                std::process::exit(1);
            }
        },
        ProfileAction::Set {
            name,
            email,
            city,
            state,
            country,
        } => {
            let location = match (city, state, country) {
                (Some(city), Some(state), Some(country)) => Some(Location {
                    city,
                    state,
                    country,
                }),
                (None, None, None) => None,
                _ => {
                    eprintln!("--city, --state, and --country must be given together");
                    std::process::exit(1);
                }
            };
            let profile = UserProfile {
                name,
                email,
                location,
            };
            profile.save(&db)?;
            println!("{}", serde_json::to_string_pretty(&profile)?);
        }
    }

    Ok(())
}
